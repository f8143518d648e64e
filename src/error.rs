//! Error types for symbol computation and the I/O boundaries.

use crate::models::indicators::Cadence;
use chrono::NaiveDate;
use thiserror::Error;

/// Failure while computing one symbol. Never aborts the run.
#[derive(Debug, Error)]
pub enum SymbolError {
    #[error("{cadence} sessions out of order at row {index}: {previous} followed by {current}")]
    OutOfOrder {
        cadence: Cadence,
        index: usize,
        previous: NaiveDate,
        current: NaiveDate,
    },

    #[error("computation panicked: {0}")]
    Panicked(String),

    #[error("computation task did not complete: {0}")]
    Aborted(String),
}

/// Failure loading the universe or a price table.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("{path} has no '{column}' column")]
    MissingColumn { path: String, column: String },
}

/// Failure writing panel outputs.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),
}
