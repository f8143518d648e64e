//! CSV-file implementation of [`SeriesSource`].
//!
//! Price files carry `Ticker,Date,Open,High,Low,Close,Volume` headers with
//! ISO dates; empty numeric fields load as missing observations. The
//! universe file needs a `Symbol` column.

use crate::error::SourceError;
use crate::models::indicators::{Bar, PriceTable};
use crate::services::market_data::SeriesSource;
use crate::services::universe::clean_symbols;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const UNIVERSE_COLUMN: &str = "Symbol";

#[derive(Debug, Deserialize)]
struct BarRecord {
    #[serde(rename = "Ticker")]
    ticker: String,
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Open")]
    open: Option<f64>,
    #[serde(rename = "High")]
    high: Option<f64>,
    #[serde(rename = "Low")]
    low: Option<f64>,
    #[serde(rename = "Close")]
    close: Option<f64>,
    #[serde(rename = "Volume")]
    volume: Option<f64>,
}

impl From<BarRecord> for Bar {
    fn from(record: BarRecord) -> Self {
        Bar {
            ticker: record.ticker.trim().to_string(),
            date: record.date,
            open: record.open,
            high: record.high,
            low: record.low,
            close: record.close,
            volume: record.volume,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CsvSeriesSource {
    universe_path: PathBuf,
    daily_path: PathBuf,
    weekly_path: PathBuf,
}

impl CsvSeriesSource {
    pub fn new(
        universe_path: impl Into<PathBuf>,
        daily_path: impl Into<PathBuf>,
        weekly_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            universe_path: universe_path.into(),
            daily_path: daily_path.into(),
            weekly_path: weekly_path.into(),
        }
    }
}

async fn read_file(path: &Path) -> Result<Vec<u8>, SourceError> {
    tokio::fs::read(path).await.map_err(|e| SourceError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

fn csv_error(path: &Path) -> impl Fn(csv::Error) -> SourceError + '_ {
    move |e| SourceError::Csv {
        path: path.display().to_string(),
        source: e,
    }
}

/// Parse a price table from CSV bytes.
pub fn parse_price_table(bytes: &[u8], path: &Path) -> Result<PriceTable, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes);
    let bars = reader
        .deserialize::<BarRecord>()
        .map(|record| record.map(Bar::from))
        .collect::<Result<Vec<_>, _>>()
        .map_err(csv_error(path))?;
    Ok(PriceTable::new(bars))
}

/// Parse and clean a universe from CSV bytes.
pub fn parse_universe(bytes: &[u8], path: &Path) -> Result<Vec<String>, SourceError> {
    let mut reader = csv::Reader::from_reader(bytes);
    let column = reader
        .headers()
        .map_err(csv_error(path))?
        .iter()
        .position(|h| h.trim() == UNIVERSE_COLUMN)
        .ok_or_else(|| SourceError::MissingColumn {
            path: path.display().to_string(),
            column: UNIVERSE_COLUMN.to_string(),
        })?;

    let mut raw = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error(path))?;
        if let Some(symbol) = record.get(column) {
            raw.push(symbol.to_string());
        }
    }
    Ok(clean_symbols(raw))
}

#[async_trait]
impl SeriesSource for CsvSeriesSource {
    async fn universe(&self) -> Result<Vec<String>, SourceError> {
        let bytes = read_file(&self.universe_path).await?;
        let universe = parse_universe(&bytes, &self.universe_path)?;
        debug!(
            path = %self.universe_path.display(),
            symbols = universe.len(),
            "CsvSeriesSource: loaded universe"
        );
        Ok(universe)
    }

    async fn daily(&self) -> Result<PriceTable, SourceError> {
        let bytes = read_file(&self.daily_path).await?;
        let table = parse_price_table(&bytes, &self.daily_path)?;
        debug!(
            path = %self.daily_path.display(),
            rows = table.len(),
            "CsvSeriesSource: loaded daily table"
        );
        Ok(table)
    }

    async fn weekly(&self) -> Result<PriceTable, SourceError> {
        let bytes = read_file(&self.weekly_path).await?;
        let table = parse_price_table(&bytes, &self.weekly_path)?;
        debug!(
            path = %self.weekly_path.display(),
            rows = table.len(),
            "CsvSeriesSource: loaded weekly table"
        );
        Ok(table)
    }
}
