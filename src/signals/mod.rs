//! Signal classification over computed indicator series.

pub mod bands;
pub mod crossover;
pub mod engine;
pub mod retracement;
pub mod volume;

pub use crossover::CrossoverType;
pub use engine::SignalEngine;
pub use retracement::WeeklyRange;
pub use volume::VolumeTrend;
