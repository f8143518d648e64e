//! Data-access boundary: where the universe and price tables come from.

use crate::error::SourceError;
use crate::models::indicators::PriceTable;
use async_trait::async_trait;

#[async_trait]
pub trait SeriesSource: Send + Sync {
    /// Ordered, de-duplicated symbol universe.
    async fn universe(&self) -> Result<Vec<String>, SourceError>;

    /// Daily OHLCV rows for all tickers.
    async fn daily(&self) -> Result<PriceTable, SourceError>;

    /// Weekly OHLCV rows for all tickers.
    async fn weekly(&self) -> Result<PriceTable, SourceError>;
}

/// Source backed by tables already held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    universe: Vec<String>,
    daily: PriceTable,
    weekly: PriceTable,
}

impl InMemorySource {
    pub fn new(universe: Vec<String>, daily: PriceTable, weekly: PriceTable) -> Self {
        Self {
            universe,
            daily,
            weekly,
        }
    }
}

#[async_trait]
impl SeriesSource for InMemorySource {
    async fn universe(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.universe.clone())
    }

    async fn daily(&self) -> Result<PriceTable, SourceError> {
        Ok(self.daily.clone())
    }

    async fn weekly(&self) -> Result<PriceTable, SourceError> {
        Ok(self.weekly.clone())
    }
}
