//! RSI (Relative Strength Index) indicator

use crate::common::math;

pub const RSI_PERIOD: usize = 14;

/// Calculate the RSI series
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Averages are plain trailing means of the clipped deltas and are emitted
/// from the first available delta on. No adjustment is made when the average
/// loss is zero: a pure gain run gives `100`, a flat run gives NaN.
pub fn calculate_rsi(closes: &[f64], period: usize) -> Vec<f64> {
    let delta = math::diff(closes);
    let gain = math::clip_lower(&delta, 0.0);
    let loss: Vec<f64> = math::clip_upper(&delta, 0.0).iter().map(|v| -v).collect();

    let avg_gain = math::rolling_mean(&gain, period, 1);
    let avg_loss = math::rolling_mean(&loss, period, 1);

    avg_gain
        .iter()
        .zip(&avg_loss)
        .map(|(g, l)| 100.0 - (100.0 / (1.0 + (g / l))))
        .collect()
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(closes: &[f64]) -> Vec<f64> {
    calculate_rsi(closes, RSI_PERIOD)
}
