//! Technical-analysis indicator panel and signal classification engine.

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;

pub use error::{ExportError, SourceError, SymbolError};
