//! Fibonacci retracement levels from the weekly range.

use crate::indicators::resolver::{self, Resolved};
use crate::models::signal::{SignalColumn, SignalRow, SignalValue};

pub const FIB_LEVELS: [(SignalColumn, f64); 5] = [
    (SignalColumn::Fib23_6, 0.236),
    (SignalColumn::Fib38_2, 0.382),
    (SignalColumn::Fib50_0, 0.5),
    (SignalColumn::Fib61_8, 0.618),
    (SignalColumn::Fib78_6, 0.786),
];

/// Weekly range the retracement levels hang from.
///
/// `high` is the last weekly high, `low` the second-to-last weekly low.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklyRange {
    pub high: Resolved,
    pub low: Resolved,
}

impl WeeklyRange {
    pub fn from_series(weekly_high: Option<&[f64]>, weekly_low: Option<&[f64]>) -> Self {
        Self {
            high: resolver::last(weekly_high),
            low: resolver::second_last(weekly_low),
        }
    }

    /// `high - depth * (high - low)`.
    pub fn threshold(&self, depth: f64) -> Resolved {
        self.high
            .zip_with(self.low, |high, low| high - (high - low) * depth)
    }
}

/// BUY when the close is strictly above the threshold, SELL otherwise.
/// Without a weekly series the level stays at no signal.
pub fn classify_level(close: f64, threshold: Resolved) -> SignalValue {
    match Resolved::Number(close).gt(threshold) {
        Some(true) => SignalValue::BUY,
        Some(false) => SignalValue::SELL,
        None => SignalValue::NoSignal,
    }
}

/// Write the five Fib_* columns for one symbol.
pub fn apply(close: f64, range: &WeeklyRange, row: &mut SignalRow) {
    for (column, depth) in FIB_LEVELS {
        row.set(column, classify_level(close, range.threshold(depth)));
    }
}
