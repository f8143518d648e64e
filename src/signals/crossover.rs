//! Moving-average crossover detection and close-versus-SMA position.

use crate::indicators::resolver::{self, latest};
use crate::indicators::IndicatorSeries;
use crate::models::signal::{SignalColumn, SignalRow, SignalValue};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossoverType {
    Bullish,
    Bearish,
    None,
}

impl From<CrossoverType> for SignalValue {
    fn from(crossover: CrossoverType) -> Self {
        match crossover {
            CrossoverType::Bullish => SignalValue::BUY,
            CrossoverType::Bearish => SignalValue::SELL,
            CrossoverType::None => SignalValue::NoSignal,
        }
    }
}

/// Classify the crossing of `fast` over `slow` at index `i`.
///
/// Bullish: fast above slow now, at or below one period earlier.
/// Bearish: fast below slow now, at or above one period earlier.
/// Any NaN in the four values, or `i == 0`, yields `None`.
pub fn detect_crossover_at(fast: &[f64], slow: &[f64], i: usize) -> CrossoverType {
    let (Some(&fast_now), Some(&slow_now)) = (fast.get(i), slow.get(i)) else {
        return CrossoverType::None;
    };
    let (fast_prev, slow_prev) = match i.checked_sub(1) {
        Some(p) => (fast[p], slow[p]),
        None => (f64::NAN, f64::NAN),
    };

    if fast_now > slow_now && fast_prev <= slow_prev {
        CrossoverType::Bullish
    } else if fast_now < slow_now && fast_prev >= slow_prev {
        CrossoverType::Bearish
    } else {
        CrossoverType::None
    }
}

/// Classify the crossing at the final index.
pub fn detect_crossover(fast: &[f64], slow: &[f64]) -> CrossoverType {
    match fast.len().min(slow.len()).checked_sub(1) {
        Some(i) => detect_crossover_at(fast, slow, i),
        None => CrossoverType::None,
    }
}

/// BUY when the close is strictly above the average, SELL otherwise.
///
/// Two-way only: an undefined average classifies as SELL.
pub fn classify_above(close: f64, average: f64) -> SignalValue {
    if close > average {
        SignalValue::BUY
    } else {
        SignalValue::SELL
    }
}

const ABOVE_COLUMNS: [(usize, SignalColumn, SignalColumn); 4] = [
    (20, SignalColumn::Sma20, SignalColumn::Above20Sma),
    (50, SignalColumn::Sma50, SignalColumn::Above50Sma),
    (100, SignalColumn::Sma100, SignalColumn::Above100Sma),
    (200, SignalColumn::Sma200, SignalColumn::Above200Sma),
];

/// Write the SMA values, the three crossover columns and the four
/// Above_N_SMA columns for one symbol.
pub fn apply(series: &IndicatorSeries, row: &mut SignalRow) {
    let averages = &series.averages;
    let close = latest(&series.close);

    for (period, value_column, above_column) in ABOVE_COLUMNS {
        let Some(sma) = averages.sma(period) else {
            continue;
        };
        row.set(value_column, resolver::last(Some(sma)).into());
        row.set(above_column, classify_above(close, latest(sma)));
    }

    row.set(
        SignalColumn::SmaCrossover20_50,
        detect_crossover(&averages.sma_20, &averages.sma_50).into(),
    );
    row.set(
        SignalColumn::SmaCrossover100_200,
        detect_crossover(&averages.sma_100, &averages.sma_200).into(),
    );
    row.set(
        SignalColumn::EmaCrossover6_10,
        detect_crossover(&averages.ema_6, &averages.ema_10).into(),
    );
}
