//! Latest-observation lookup and the missing-data policy used by every
//! classifier.
//!
//! Two different "nothing here" outcomes are kept apart:
//! - [`Resolved::NoValue`]: no series was supplied at all. Any comparison
//!   involving it is indeterminate (`None`).
//! - `Resolved::Number(NaN)`: a series was supplied but had too few
//!   non-missing observations. Comparisons follow IEEE rules and are false.

use crate::models::signal::SignalValue;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved {
    NoValue,
    Number(f64),
}

impl Resolved {
    pub fn number(self) -> Option<f64> {
        match self {
            Resolved::Number(value) => Some(value),
            Resolved::NoValue => None,
        }
    }

    pub fn scale(self, factor: f64) -> Resolved {
        self.map(|value| value * factor)
    }

    pub fn map<F: FnOnce(f64) -> f64>(self, f: F) -> Resolved {
        match self {
            Resolved::Number(value) => Resolved::Number(f(value)),
            Resolved::NoValue => Resolved::NoValue,
        }
    }

    pub fn zip_with<F: FnOnce(f64, f64) -> f64>(self, other: Resolved, f: F) -> Resolved {
        match (self, other) {
            (Resolved::Number(a), Resolved::Number(b)) => Resolved::Number(f(a, b)),
            _ => Resolved::NoValue,
        }
    }

    fn compare<F: FnOnce(f64, f64) -> bool>(self, other: Resolved, f: F) -> Option<bool> {
        match (self, other) {
            (Resolved::Number(a), Resolved::Number(b)) => Some(f(a, b)),
            _ => None,
        }
    }

    pub fn gt(self, other: Resolved) -> Option<bool> {
        self.compare(other, |a, b| a > b)
    }

    pub fn ge(self, other: Resolved) -> Option<bool> {
        self.compare(other, |a, b| a >= b)
    }

    pub fn le(self, other: Resolved) -> Option<bool> {
        self.compare(other, |a, b| a <= b)
    }
}

impl From<f64> for Resolved {
    fn from(value: f64) -> Self {
        Resolved::Number(value)
    }
}

impl From<Resolved> for SignalValue {
    fn from(resolved: Resolved) -> Self {
        match resolved {
            Resolved::Number(value) => SignalValue::Number(value),
            Resolved::NoValue => SignalValue::NoValue,
        }
    }
}

/// Last non-missing observation.
pub fn last(series: Option<&[f64]>) -> Resolved {
    nth_from_end(series, 0)
}

/// Second-to-last non-missing observation.
pub fn second_last(series: Option<&[f64]>) -> Resolved {
    nth_from_end(series, 1)
}

fn nth_from_end(series: Option<&[f64]>, offset: usize) -> Resolved {
    let Some(values) = series else {
        return Resolved::NoValue;
    };
    let value = values
        .iter()
        .rev()
        .filter(|v| !v.is_nan())
        .nth(offset)
        .copied()
        .unwrap_or(f64::NAN);
    Resolved::Number(value)
}

/// Value at the final position, missing or not. NaN for an empty series.
pub fn latest(values: &[f64]) -> f64 {
    values.last().copied().unwrap_or(f64::NAN)
}
