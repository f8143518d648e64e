use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Sampling cadence of a price table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Daily,
    Weekly,
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cadence::Daily => f.write_str("daily"),
            Cadence::Weekly => f.write_str("weekly"),
        }
    }
}

/// OHLCV field selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Open,
    High,
    Low,
    Close,
    Volume,
}

/// One trading session for one ticker. Any numeric field may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub ticker: String,
    pub date: NaiveDate,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
}

impl Bar {
    pub fn new(
        ticker: impl Into<String>,
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            date,
            open: Some(open),
            high: Some(high),
            low: Some(low),
            close: Some(close),
            volume: Some(volume),
        }
    }

    pub fn with_missing(mut self, field: Field) -> Self {
        match field {
            Field::Open => self.open = None,
            Field::High => self.high = None,
            Field::Low => self.low = None,
            Field::Close => self.close = None,
            Field::Volume => self.volume = None,
        }
        self
    }

    /// Field value with missing observations mapped to NaN.
    pub fn value(&self, field: Field) -> f64 {
        let value = match field {
            Field::Open => self.open,
            Field::High => self.high,
            Field::Low => self.low,
            Field::Close => self.close,
            Field::Volume => self.volume,
        };
        value.unwrap_or(f64::NAN)
    }
}

/// Extract one field of a bar slice as a NaN-for-missing series.
pub fn series(bars: &[Bar], field: Field) -> Vec<f64> {
    bars.iter().map(|bar| bar.value(field)).collect()
}

/// A loaded daily or weekly price table covering many tickers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceTable {
    pub bars: Vec<Bar>,
}

impl PriceTable {
    pub fn new(bars: Vec<Bar>) -> Self {
        Self { bars }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Split the table into per-ticker slices, keeping table order within each.
    pub fn group_by_ticker(self) -> HashMap<String, Vec<Bar>> {
        let mut groups: HashMap<String, Vec<Bar>> = HashMap::new();
        for bar in self.bars {
            groups.entry(bar.ticker.clone()).or_default().push(bar);
        }
        groups
    }
}

/// Indicator series stored per symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IndicatorName {
    Close,
    Sma20,
    Sd,
    UpperBand,
    LowerBand,
    Macd,
    SignalLine,
    Sma50,
    Sma100,
    Sma200,
    Ema6,
    Ema10,
    Rsi,
}

impl IndicatorName {
    pub const ALL: [IndicatorName; 13] = [
        IndicatorName::Close,
        IndicatorName::Sma20,
        IndicatorName::Sd,
        IndicatorName::UpperBand,
        IndicatorName::LowerBand,
        IndicatorName::Macd,
        IndicatorName::SignalLine,
        IndicatorName::Sma50,
        IndicatorName::Sma100,
        IndicatorName::Sma200,
        IndicatorName::Ema6,
        IndicatorName::Ema10,
        IndicatorName::Rsi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorName::Close => "close",
            IndicatorName::Sma20 => "SMA_20",
            IndicatorName::Sd => "SD",
            IndicatorName::UpperBand => "Upper_Band",
            IndicatorName::LowerBand => "Lower_Band",
            IndicatorName::Macd => "MACD",
            IndicatorName::SignalLine => "Signal_Line",
            IndicatorName::Sma50 => "SMA_50",
            IndicatorName::Sma100 => "SMA_100",
            IndicatorName::Sma200 => "SMA_200",
            IndicatorName::Ema6 => "EMA_6",
            IndicatorName::Ema10 => "EMA_10",
            IndicatorName::Rsi => "RSI",
        }
    }
}

impl fmt::Display for IndicatorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All indicator series computed for one symbol.
#[derive(Debug, Clone, Serialize)]
pub struct SymbolIndicators {
    pub symbol: String,
    pub series: BTreeMap<IndicatorName, Vec<f64>>,
}

impl SymbolIndicators {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            series: BTreeMap::new(),
        }
    }

    pub fn with(mut self, name: IndicatorName, values: Vec<f64>) -> Self {
        self.series.insert(name, values);
        self
    }

    pub fn get(&self, name: IndicatorName) -> Option<&[f64]> {
        self.series.get(&name).map(Vec::as_slice)
    }
}

/// Indicator series for a whole run, keyed by (symbol, indicator).
///
/// Symbols appear in universe order; each symbol's columns are written once.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IndicatorTable {
    symbols: Vec<SymbolIndicators>,
}

impl IndicatorTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, indicators: SymbolIndicators) {
        self.symbols.push(indicators);
    }

    pub fn get(&self, symbol: &str, name: IndicatorName) -> Option<&[f64]> {
        self.symbols
            .iter()
            .find(|s| s.symbol == symbol)
            .and_then(|s| s.get(name))
    }

    pub fn contains_symbol(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|s| s.symbol == symbol)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(|s| s.symbol.as_str())
    }

    /// Flattened `("{symbol}_{indicator}", series)` columns.
    pub fn columns(&self) -> impl Iterator<Item = (String, &[f64])> {
        self.symbols.iter().flat_map(|s| {
            s.series
                .iter()
                .map(move |(name, values)| (format!("{}_{}", s.symbol, name), values.as_slice()))
        })
    }

    pub fn column_count(&self) -> usize {
        self.symbols.iter().map(|s| s.series.len()).sum()
    }

    /// Length of the longest column.
    pub fn row_count(&self) -> usize {
        self.symbols
            .iter()
            .flat_map(|s| s.series.values())
            .map(Vec::len)
            .max()
            .unwrap_or(0)
    }
}
