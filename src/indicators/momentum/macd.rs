//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;

/// MACD line and its signal line, index-aligned with the input closes.
#[derive(Debug, Clone)]
pub struct MacdSeries {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
}

/// Calculate MACD indicator
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal_span) of MACD
///
/// All averages are seeded by their first observation, so both lines are
/// defined from the first close on.
pub fn calculate_macd(
    closes: &[f64],
    fast_span: usize,
    slow_span: usize,
    signal_span: usize,
) -> MacdSeries {
    let fast_ema = math::ewm_mean(closes, fast_span);
    let slow_ema = math::ewm_mean(closes, slow_span);
    let macd = math::sub(&fast_ema, &slow_ema);
    let signal = math::ewm_mean(&macd, signal_span);

    MacdSeries { macd, signal }
}

/// Calculate MACD with default spans (12, 26, 9)
pub fn calculate_macd_default(closes: &[f64]) -> MacdSeries {
    calculate_macd(closes, 12, 26, 9)
}
