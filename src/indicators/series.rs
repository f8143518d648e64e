//! Full indicator series for one symbol's close history.

use crate::indicators::momentum::{calculate_macd_default, calculate_rsi_default, MacdSeries};
use crate::indicators::trend::MovingAverages;
use crate::indicators::volatility::{calculate_bollinger_bands_default, BollingerBands};
use crate::models::indicators::{IndicatorName, SymbolIndicators};

/// Every smoothed series the classifiers read, index-aligned with `close`.
#[derive(Debug, Clone)]
pub struct IndicatorSeries {
    pub close: Vec<f64>,
    pub bands: BollingerBands,
    pub macd: MacdSeries,
    pub averages: MovingAverages,
    pub rsi: Vec<f64>,
}

impl IndicatorSeries {
    pub fn calculate(close: Vec<f64>) -> Self {
        let bands = calculate_bollinger_bands_default(&close);
        let macd = calculate_macd_default(&close);
        let averages = MovingAverages::calculate(&close, &bands);
        let rsi = calculate_rsi_default(&close);

        Self {
            close,
            bands,
            macd,
            averages,
            rsi,
        }
    }

    /// Consume into the per-symbol columns of the indicator table.
    pub fn into_indicators(self, symbol: &str) -> SymbolIndicators {
        SymbolIndicators::new(symbol)
            .with(IndicatorName::Close, self.close)
            .with(IndicatorName::Sma20, self.averages.sma_20)
            .with(IndicatorName::Sd, self.bands.std_dev)
            .with(IndicatorName::UpperBand, self.bands.upper)
            .with(IndicatorName::LowerBand, self.bands.lower)
            .with(IndicatorName::Macd, self.macd.macd)
            .with(IndicatorName::SignalLine, self.macd.signal)
            .with(IndicatorName::Sma50, self.averages.sma_50)
            .with(IndicatorName::Sma100, self.averages.sma_100)
            .with(IndicatorName::Sma200, self.averages.sma_200)
            .with(IndicatorName::Ema6, self.averages.ema_6)
            .with(IndicatorName::Ema10, self.averages.ema_10)
            .with(IndicatorName::Rsi, self.rsi)
    }
}
