//! SMA (Simple Moving Average) indicator

use crate::common::math;

/// Calculate the trailing SMA series.
///
/// `min_periods` is the number of non-missing observations a window needs
/// before a value is emitted; pass `period` for a strict average or `1` for
/// an expanding average over short histories.
pub fn calculate_sma(closes: &[f64], period: usize, min_periods: usize) -> Vec<f64> {
    math::rolling_mean(closes, period, min_periods)
}

/// Strict SMA: undefined until `period` observations exist.
pub fn calculate_sma_strict(closes: &[f64], period: usize) -> Vec<f64> {
    calculate_sma(closes, period, period)
}

/// Relaxed SMA: emits a partial average from the first observation on.
pub fn calculate_sma_relaxed(closes: &[f64], period: usize) -> Vec<f64> {
    calculate_sma(closes, period, 1)
}
