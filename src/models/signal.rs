use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Direction of a classified signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

/// One cell of the signal table.
///
/// Trade classifications render upper-case (`BUY`/`SELL`) while volume-delta
/// classifications render title-case (`Buy`/`Sell`); downstream consumers
/// match on the persisted text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SignalValue {
    #[default]
    NoSignal,
    NoValue,
    Flag,
    Trade(Side),
    VolumeDelta(Side),
    Number(f64),
}

impl SignalValue {
    pub const BUY: SignalValue = SignalValue::Trade(Side::Buy);
    pub const SELL: SignalValue = SignalValue::Trade(Side::Sell);

    pub fn is_no_signal(&self) -> bool {
        matches!(self, SignalValue::NoSignal)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            SignalValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn side(&self) -> Option<Side> {
        match self {
            SignalValue::Trade(side) | SignalValue::VolumeDelta(side) => Some(*side),
            _ => None,
        }
    }
}

impl fmt::Display for SignalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalValue::NoSignal => f.write_str("No Signal"),
            SignalValue::NoValue => f.write_str("No Value"),
            SignalValue::Flag => f.write_str("True"),
            SignalValue::Trade(Side::Buy) => f.write_str("BUY"),
            SignalValue::Trade(Side::Sell) => f.write_str("SELL"),
            SignalValue::VolumeDelta(Side::Buy) => f.write_str("Buy"),
            SignalValue::VolumeDelta(Side::Sell) => f.write_str("Sell"),
            SignalValue::Number(value) => write!(f, "{}", value),
        }
    }
}

impl Serialize for SignalValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SignalValue::Number(value) => serializer.serialize_f64(*value),
            other => serializer.collect_str(other),
        }
    }
}

/// Columns of the signal table, in persisted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SignalColumn {
    LastAboveUpperBand,
    LastBelowLowerBand,
    Rsi,
    Signal,
    Macd,
    Signal2,
    Sma20,
    Sma50,
    Sma100,
    Sma200,
    SmaCrossover20_50,
    SmaCrossover100_200,
    EmaCrossover6_10,
    Fib23_6,
    Fib38_2,
    Fib50_0,
    Fib61_8,
    Fib78_6,
    DailyDeltaVolume,
    WeeklyDeltaVolume,
    Above20Sma,
    Above50Sma,
    Above100Sma,
    Above200Sma,
}

impl SignalColumn {
    pub const COUNT: usize = 24;

    pub const ALL: [SignalColumn; SignalColumn::COUNT] = [
        SignalColumn::LastAboveUpperBand,
        SignalColumn::LastBelowLowerBand,
        SignalColumn::Rsi,
        SignalColumn::Signal,
        SignalColumn::Macd,
        SignalColumn::Signal2,
        SignalColumn::Sma20,
        SignalColumn::Sma50,
        SignalColumn::Sma100,
        SignalColumn::Sma200,
        SignalColumn::SmaCrossover20_50,
        SignalColumn::SmaCrossover100_200,
        SignalColumn::EmaCrossover6_10,
        SignalColumn::Fib23_6,
        SignalColumn::Fib38_2,
        SignalColumn::Fib50_0,
        SignalColumn::Fib61_8,
        SignalColumn::Fib78_6,
        SignalColumn::DailyDeltaVolume,
        SignalColumn::WeeklyDeltaVolume,
        SignalColumn::Above20Sma,
        SignalColumn::Above50Sma,
        SignalColumn::Above100Sma,
        SignalColumn::Above200Sma,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SignalColumn::LastAboveUpperBand => "Last_Above_Upper_Band",
            SignalColumn::LastBelowLowerBand => "Last_below_Lower_Band",
            SignalColumn::Rsi => "RSI",
            SignalColumn::Signal => "Signal",
            SignalColumn::Macd => "MACD",
            SignalColumn::Signal2 => "Signal_2",
            SignalColumn::Sma20 => "20_SMA",
            SignalColumn::Sma50 => "50_SMA",
            SignalColumn::Sma100 => "100_SMA",
            SignalColumn::Sma200 => "200_SMA",
            SignalColumn::SmaCrossover20_50 => "SMA_Crossover_20_50_Signal",
            SignalColumn::SmaCrossover100_200 => "SMA_Crossover_100_200_Signal",
            SignalColumn::EmaCrossover6_10 => "EMA_6_10_Crossover_Signal",
            SignalColumn::Fib23_6 => "Fib_23_6",
            SignalColumn::Fib38_2 => "Fib_38_2",
            SignalColumn::Fib50_0 => "Fib_50_0",
            SignalColumn::Fib61_8 => "Fib_61_8",
            SignalColumn::Fib78_6 => "Fib_78_6",
            SignalColumn::DailyDeltaVolume => "Daily_Delta_Volume",
            SignalColumn::WeeklyDeltaVolume => "Weekly_Delta_Volume",
            SignalColumn::Above20Sma => "Above_20_SMA",
            SignalColumn::Above50Sma => "Above_50_SMA",
            SignalColumn::Above100Sma => "Above_100_SMA",
            SignalColumn::Above200Sma => "Above_200_SMA",
        }
    }
}

impl fmt::Display for SignalColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signal row for one symbol. Every cell starts as `NoSignal`.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalRow {
    pub symbol: String,
    cells: [SignalValue; SignalColumn::COUNT],
}

impl SignalRow {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            cells: [SignalValue::NoSignal; SignalColumn::COUNT],
        }
    }

    pub fn get(&self, column: SignalColumn) -> SignalValue {
        self.cells[column.index()]
    }

    pub fn set(&mut self, column: SignalColumn, value: SignalValue) {
        self.cells[column.index()] = value;
    }

    pub fn cells(&self) -> impl Iterator<Item = (SignalColumn, SignalValue)> + '_ {
        SignalColumn::ALL.iter().map(move |&c| (c, self.get(c)))
    }

    pub fn is_all_no_signal(&self) -> bool {
        self.cells.iter().all(SignalValue::is_no_signal)
    }
}

impl Serialize for SignalRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(SignalColumn::COUNT + 1))?;
        map.serialize_entry("Symbol", &self.symbol)?;
        for (column, value) in self.cells() {
            map.serialize_entry(column.as_str(), &value)?;
        }
        map.end()
    }
}

/// One row per universe symbol, in universe order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SignalTable {
    rows: Vec<SignalRow>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl SignalTable {
    /// Pre-initialise a `NoSignal` row for every symbol. A repeated symbol
    /// keeps its first position.
    pub fn new(universe: &[String]) -> Self {
        let mut rows = Vec::with_capacity(universe.len());
        let mut index = HashMap::with_capacity(universe.len());
        for symbol in universe {
            if index.contains_key(symbol) {
                continue;
            }
            index.insert(symbol.clone(), rows.len());
            rows.push(SignalRow::new(symbol.clone()));
        }
        Self { rows, index }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, symbol: &str) -> Option<&SignalRow> {
        self.index.get(symbol).map(|&i| &self.rows[i])
    }

    pub fn get(&self, symbol: &str, column: SignalColumn) -> Option<SignalValue> {
        self.row(symbol).map(|row| row.get(column))
    }

    /// Replace the row for `row.symbol`. Returns false when the symbol is not
    /// part of the table.
    pub fn set_row(&mut self, row: SignalRow) -> bool {
        match self.index.get(&row.symbol) {
            Some(&i) => {
                self.rows[i] = row;
                true
            }
            None => false,
        }
    }

    pub fn rows(&self) -> &[SignalRow] {
        &self.rows
    }
}
