//! EMA (Exponential Moving Average) indicator

use crate::common::math;

/// Calculate the EMA series for a smoothing span.
///
/// Seeded by the first observation, no bias adjustment:
/// `ema[i] = alpha * close[i] + (1 - alpha) * ema[i - 1]`, `alpha = 2 / (span + 1)`.
pub fn calculate_ema(closes: &[f64], span: usize) -> Vec<f64> {
    math::ewm_mean(closes, span)
}
