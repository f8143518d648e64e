//! Series primitives shared by the indicator modules.
//!
//! Every function works on `&[f64]` where NaN marks a missing observation and
//! returns a series of the same length, so outputs stay index-aligned with
//! the input history.

/// Trailing rolling mean.
///
/// The window covers the last `window` positions (missing ones included).
/// A value is emitted once at least `min_periods` non-missing observations
/// fall inside the window; otherwise the position is NaN.
pub fn rolling_mean(values: &[f64], window: usize, min_periods: usize) -> Vec<f64> {
    rolling(values, window, min_periods, |obs| {
        obs.iter().sum::<f64>() / obs.len() as f64
    })
}

/// Trailing rolling sample standard deviation (ddof = 1).
pub fn rolling_std(values: &[f64], window: usize, min_periods: usize) -> Vec<f64> {
    rolling(values, window, min_periods, |obs| {
        if obs.len() < 2 {
            return f64::NAN;
        }
        let n = obs.len() as f64;
        let mean = obs.iter().sum::<f64>() / n;
        let sum_sq: f64 = obs.iter().map(|x| (x - mean).powi(2)).sum();
        (sum_sq / (n - 1.0)).sqrt()
    })
}

fn rolling<F>(values: &[f64], window: usize, min_periods: usize, reduce: F) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64,
{
    let min_periods = min_periods.max(1);
    let mut out = Vec::with_capacity(values.len());
    let mut obs = Vec::with_capacity(window);

    for i in 0..values.len() {
        let start = (i + 1).saturating_sub(window);
        obs.clear();
        obs.extend(values[start..=i].iter().copied().filter(|v| !v.is_nan()));

        if window == 0 || obs.len() < min_periods {
            out.push(f64::NAN);
        } else {
            out.push(reduce(&obs));
        }
    }

    out
}

/// Smoothing factor for an exponential average of the given span.
pub fn ema_alpha(span: usize) -> f64 {
    2.0 / (span as f64 + 1.0)
}

/// Exponentially weighted mean, seeded by the first observation.
///
/// Missing observations do not restart the average: the decay keeps
/// advancing across a gap and the last average is carried through it.
/// Positions before the first observation are NaN.
pub fn ewm_mean(values: &[f64], span: usize) -> Vec<f64> {
    let alpha = ema_alpha(span);
    let decay = 1.0 - alpha;

    let mut out = Vec::with_capacity(values.len());
    let mut weighted = f64::NAN;
    let mut old_weight = 1.0;

    for &value in values {
        if weighted.is_nan() {
            if !value.is_nan() {
                weighted = value;
                old_weight = 1.0;
            }
        } else {
            old_weight *= decay;
            if !value.is_nan() {
                if weighted != value {
                    weighted = (old_weight * weighted + alpha * value) / (old_weight + alpha);
                }
                old_weight = 1.0;
            }
        }
        out.push(weighted);
    }

    out
}

/// First difference; NaN at index 0 and wherever either neighbour is missing.
pub fn diff(values: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    if values.is_empty() {
        return out;
    }
    out.push(f64::NAN);
    out.extend(values.windows(2).map(|w| w[1] - w[0]));
    out
}

/// Clamp every value to at least `lower`, leaving missing values missing.
pub fn clip_lower(values: &[f64], lower: f64) -> Vec<f64> {
    values
        .iter()
        .map(|&v| if v.is_nan() { v } else { v.max(lower) })
        .collect()
}

/// Clamp every value to at most `upper`, leaving missing values missing.
pub fn clip_upper(values: &[f64], upper: f64) -> Vec<f64> {
    values
        .iter()
        .map(|&v| if v.is_nan() { v } else { v.min(upper) })
        .collect()
}

/// Pointwise `a - b`.
pub fn sub(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b).map(|(x, y)| x - y).collect()
}
