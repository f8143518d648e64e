//! Core application primitives (orchestration)

pub mod runtime;

pub use runtime::*;
