//! Collaborator boundaries: loading inputs and writing outputs.

pub mod csv_source;
pub mod export;
pub mod market_data;
pub mod universe;

pub use csv_source::CsvSeriesSource;
pub use market_data::{InMemorySource, SeriesSource};
pub use universe::clean_symbols;
