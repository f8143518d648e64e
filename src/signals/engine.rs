//! Per-symbol signal evaluation: indicator series in, signal row out.

use crate::error::SymbolError;
use crate::indicators::resolver::latest;
use crate::indicators::IndicatorSeries;
use crate::models::indicators::{series, Bar, Cadence, Field};
use crate::models::panel::SymbolPanel;
use crate::models::signal::{SignalColumn, SignalRow};
use crate::signals::retracement::WeeklyRange;
use crate::signals::{bands, crossover, retracement, volume};
use tracing::debug;

pub struct SignalEngine;

impl SignalEngine {
    /// Compute the indicator columns and the signal row for one symbol.
    ///
    /// `daily` must be non-empty for a meaningful row; `weekly` may be empty,
    /// in which case the weekly-derived levels resolve against NaN. Bars of
    /// either cadence must have strictly increasing dates.
    pub fn evaluate_symbol(
        symbol: &str,
        daily: &[Bar],
        weekly: &[Bar],
    ) -> Result<SymbolPanel, SymbolError> {
        ensure_ordered(daily, Cadence::Daily)?;
        ensure_ordered(weekly, Cadence::Weekly)?;

        let indicators = IndicatorSeries::calculate(series(daily, Field::Close));
        let mut row = SignalRow::new(symbol);

        bands::apply(&indicators, &mut row);
        crossover::apply(&indicators, &mut row);

        let weekly_high = series(weekly, Field::High);
        let weekly_low = series(weekly, Field::Low);
        let weekly_close = series(weekly, Field::Close);
        let weekly_volume = series(weekly, Field::Volume);
        let daily_volume = series(daily, Field::Volume);

        let close = latest(&indicators.close);
        let range = WeeklyRange::from_series(Some(&weekly_high), Some(&weekly_low));
        retracement::apply(close, &range, &mut row);

        row.set(
            SignalColumn::DailyDeltaVolume,
            volume::daily_delta(&indicators.close, Some(&daily_volume)),
        );
        row.set(
            SignalColumn::WeeklyDeltaVolume,
            volume::weekly_delta(
                Some(&weekly_high),
                Some(&weekly_low),
                Some(&weekly_close),
                Some(&weekly_volume),
            ),
        );

        debug!(
            symbol = %symbol,
            daily_bars = daily.len(),
            weekly_bars = weekly.len(),
            macd = %row.get(SignalColumn::Macd),
            rsi = %row.get(SignalColumn::Rsi),
            "SignalEngine: evaluated {}",
            symbol
        );

        Ok(SymbolPanel {
            indicators: indicators.into_indicators(symbol),
            row,
        })
    }
}

fn ensure_ordered(bars: &[Bar], cadence: Cadence) -> Result<(), SymbolError> {
    for (i, pair) in bars.windows(2).enumerate() {
        if pair[1].date <= pair[0].date {
            return Err(SymbolError::OutOfOrder {
                cadence,
                index: i + 1,
                previous: pair[0].date,
                current: pair[1].date,
            });
        }
    }
    Ok(())
}
