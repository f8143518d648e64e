//! Bollinger position, MACD relationship and RSI reading.

use crate::indicators::resolver::latest;
use crate::indicators::IndicatorSeries;
use crate::models::signal::{SignalColumn, SignalRow, SignalValue};

/// Position of the latest close relative to the latest Bollinger bands.
///
/// The two flags are independent columns; at most one is set and neither is
/// set when the close sits inside the envelope or a band is undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandFlags {
    pub above_upper: SignalValue,
    pub below_lower: SignalValue,
}

pub fn classify_bollinger(close: f64, upper: f64, lower: f64) -> BandFlags {
    let mut flags = BandFlags {
        above_upper: SignalValue::NoSignal,
        below_lower: SignalValue::NoSignal,
    };
    if close > upper {
        flags.above_upper = SignalValue::Flag;
    } else if close < lower {
        flags.below_lower = SignalValue::Flag;
    }
    flags
}

/// BUY when MACD is above its signal line, SELL when below, otherwise no
/// signal (equal lines or an undefined value).
pub fn classify_macd(macd: f64, signal: f64) -> SignalValue {
    if macd > signal {
        SignalValue::BUY
    } else if macd < signal {
        SignalValue::SELL
    } else {
        SignalValue::NoSignal
    }
}

/// Write the band, MACD and RSI columns for one symbol.
pub fn apply(series: &IndicatorSeries, row: &mut SignalRow) {
    let close = latest(&series.close);

    let flags = classify_bollinger(close, latest(&series.bands.upper), latest(&series.bands.lower));
    row.set(SignalColumn::LastAboveUpperBand, flags.above_upper);
    row.set(SignalColumn::LastBelowLowerBand, flags.below_lower);

    row.set(SignalColumn::Rsi, SignalValue::Number(latest(&series.rsi)));

    row.set(
        SignalColumn::Macd,
        classify_macd(latest(&series.macd.macd), latest(&series.macd.signal)),
    );
}
