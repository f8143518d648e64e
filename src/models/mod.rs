//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod panel;
pub mod signal;

pub use indicators::{
    series, Bar, Cadence, Field, IndicatorName, IndicatorTable, PriceTable, SymbolIndicators,
};
pub use panel::{PanelOutput, SymbolFailure, SymbolPanel};
pub use signal::{Side, SignalColumn, SignalRow, SignalTable, SignalValue};
