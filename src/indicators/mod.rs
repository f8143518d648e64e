pub mod resolver;
pub mod series;

pub mod momentum;
pub mod trend;
pub mod volatility;

pub use resolver::Resolved;
pub use series::IndicatorSeries;
