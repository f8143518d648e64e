//! Trend indicators: SMA, EMA and the moving-average set used by the panel

pub mod ema;
pub mod sma;

pub use ema::*;
pub use sma::*;

use crate::indicators::volatility::BollingerBands;

pub const SMA_PERIODS: [usize; 4] = [20, 50, 100, 200];
pub const FAST_EMA_SPAN: usize = 6;
pub const SLOW_EMA_SPAN: usize = 10;

/// Moving averages of one close series.
///
/// The 20-period SMA is the Bollinger middle band, so it is strict; the
/// 50/100/200 averages are relaxed and defined from the first observation on.
#[derive(Debug, Clone)]
pub struct MovingAverages {
    pub sma_20: Vec<f64>,
    pub sma_50: Vec<f64>,
    pub sma_100: Vec<f64>,
    pub sma_200: Vec<f64>,
    pub ema_6: Vec<f64>,
    pub ema_10: Vec<f64>,
}

impl MovingAverages {
    pub fn calculate(closes: &[f64], bands: &BollingerBands) -> Self {
        Self {
            sma_20: bands.middle.clone(),
            sma_50: calculate_sma_relaxed(closes, 50),
            sma_100: calculate_sma_relaxed(closes, 100),
            sma_200: calculate_sma_relaxed(closes, 200),
            ema_6: calculate_ema(closes, FAST_EMA_SPAN),
            ema_10: calculate_ema(closes, SLOW_EMA_SPAN),
        }
    }

    /// SMA series for one of [`SMA_PERIODS`].
    pub fn sma(&self, period: usize) -> Option<&[f64]> {
        match period {
            20 => Some(&self.sma_20),
            50 => Some(&self.sma_50),
            100 => Some(&self.sma_100),
            200 => Some(&self.sma_200),
            _ => None,
        }
    }
}
