//! Unit tests for series primitives

use panelscan::common::math::{
    clip_lower, clip_upper, diff, ema_alpha, ewm_mean, rolling_mean,
    rolling_std,
};

const NAN: f64 = f64::NAN;

fn assert_series(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "length mismatch: {actual:?}");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        if e.is_nan() {
            assert!(a.is_nan(), "index {i}: expected NaN, got {a}");
        } else {
            assert!((a - e).abs() < 1e-9, "index {i}: expected {e}, got {a}");
        }
    }
}

#[test]
fn test_rolling_mean_strict_window() {
    let out = rolling_mean(&[1.0, 2.0, 3.0, 4.0], 3, 3);
    assert_series(&out, &[NAN, NAN, 2.0, 3.0]);
}

#[test]
fn test_rolling_mean_expanding_start() {
    let out = rolling_mean(&[1.0, 2.0, 3.0, 4.0], 3, 1);
    assert_series(&out, &[1.0, 1.5, 2.0, 3.0]);
}

#[test]
fn test_rolling_mean_skips_missing_observations() {
    let out = rolling_mean(&[1.0, NAN, 3.0], 2, 1);
    assert_series(&out, &[1.0, 1.0, 3.0]);

    let strict = rolling_mean(&[1.0, NAN, 3.0], 2, 2);
    assert_series(&strict, &[NAN, NAN, NAN]);
}

#[test]
fn test_rolling_mean_empty_input() {
    assert!(rolling_mean(&[], 20, 20).is_empty());
}

#[test]
fn test_rolling_std_is_sample_deviation() {
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let out = rolling_std(&values, 8, 8);
    let expected = (32.0_f64 / 7.0).sqrt();
    assert!(out[..7].iter().all(|v| v.is_nan()));
    assert!((out[7] - expected).abs() < 1e-12);
}

#[test]
fn test_rolling_std_single_observation_is_nan() {
    let out = rolling_std(&[5.0, 6.0], 2, 1);
    assert!(out[0].is_nan());
    assert!((out[1] - 0.5_f64.sqrt()).abs() < 1e-12);
}

#[test]
fn test_rolling_std_constant_series_is_zero() {
    let out = rolling_std(&[3.0; 5], 5, 5);
    assert_eq!(out[4], 0.0);
}

#[test]
fn test_ema_alpha() {
    assert!((ema_alpha(3) - 0.5).abs() < 1e-12);
    assert!((ema_alpha(9) - 0.2).abs() < 1e-12);
}

#[test]
fn test_ewm_mean_recursion() {
    let out = ewm_mean(&[1.0, 2.0, 3.0], 3);
    assert_series(&out, &[1.0, 1.5, 2.25]);
}

#[test]
fn test_ewm_mean_decays_across_gap() {
    // The missing observation still ages the previous average.
    let out = ewm_mean(&[1.0, NAN, 3.0], 3);
    assert_series(&out, &[1.0, 1.0, 1.75 / 0.75]);
}

#[test]
fn test_ewm_mean_leading_missing() {
    let out = ewm_mean(&[NAN, 2.0, 4.0], 3);
    assert_series(&out, &[NAN, 2.0, 3.0]);
}

#[test]
fn test_diff() {
    let out = diff(&[1.0, 3.0, NAN, 4.0]);
    assert_series(&out, &[NAN, 2.0, NAN, NAN]);
    assert!(diff(&[]).is_empty());
}

#[test]
fn test_clip_keeps_missing() {
    assert_series(&clip_lower(&[-1.0, NAN, 2.0], 0.0), &[0.0, NAN, 2.0]);
    assert_series(&clip_upper(&[-1.0, NAN, 2.0], 0.0), &[-1.0, NAN, 0.0]);
}
