//! Per-symbol and per-run outputs of the panel.

use crate::error::SymbolError;
use crate::models::indicators::{IndicatorTable, SymbolIndicators};
use crate::models::signal::{SignalRow, SignalTable};

/// Everything computed for one symbol.
#[derive(Debug, Clone)]
pub struct SymbolPanel {
    pub indicators: SymbolIndicators,
    pub row: SignalRow,
}

/// A symbol whose computation failed. Its signal row stays at the defaults.
#[derive(Debug)]
pub struct SymbolFailure {
    pub symbol: String,
    pub error: SymbolError,
}

/// Result of one panel run, handed to the caller complete.
#[derive(Debug, Default)]
pub struct PanelOutput {
    pub indicators: IndicatorTable,
    pub signals: SignalTable,
    /// Universe symbols with no daily data, in universe order.
    pub missing: Vec<String>,
    /// Symbols whose computation failed, in universe order.
    pub failures: Vec<SymbolFailure>,
}

impl PanelOutput {
    pub fn computed_count(&self) -> usize {
        self.signals
            .len()
            .saturating_sub(self.missing.len() + self.failures.len())
    }
}
