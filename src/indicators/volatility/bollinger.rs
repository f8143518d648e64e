//! Bollinger Bands indicator

use crate::common::math;
use crate::indicators::trend::calculate_sma_strict;

pub const BOLLINGER_PERIOD: usize = 20;
pub const BOLLINGER_STD_DEV: f64 = 2.0;

/// Bollinger envelope as full series.
#[derive(Debug, Clone)]
pub struct BollingerBands {
    pub middle: Vec<f64>,
    pub std_dev: Vec<f64>,
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
}

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (num_std * rolling sample std dev)
/// Lower Band = Middle - (num_std * rolling sample std dev)
///
/// Both the average and the deviation need a full window, so every band
/// value is NaN until `period` observations exist.
pub fn calculate_bollinger_bands(closes: &[f64], period: usize, num_std: f64) -> BollingerBands {
    let middle = calculate_sma_strict(closes, period);
    let std_dev = math::rolling_std(closes, period, period);

    let upper = middle
        .iter()
        .zip(&std_dev)
        .map(|(m, s)| m + num_std * s)
        .collect();
    let lower = middle
        .iter()
        .zip(&std_dev)
        .map(|(m, s)| m - num_std * s)
        .collect();

    BollingerBands {
        middle,
        std_dev,
        upper,
        lower,
    }
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(closes: &[f64]) -> BollingerBands {
    calculate_bollinger_bands(closes, BOLLINGER_PERIOD, BOLLINGER_STD_DEV)
}
