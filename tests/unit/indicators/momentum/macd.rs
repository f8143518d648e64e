//! Unit tests for MACD indicator

use panelscan::indicators::momentum::{calculate_macd, calculate_macd_default};

#[test]
fn test_macd_defined_from_first_close() {
    let macd = calculate_macd_default(&[10.0, 10.5]);
    assert_eq!(macd.macd[0], 0.0);
    assert_eq!(macd.signal[0], 0.0);
    assert!(macd.macd[1] > 0.0);
}

#[test]
fn test_macd_flat_prices() {
    let macd = calculate_macd_default(&[20.0; 40]);
    assert!(macd.macd.iter().all(|v| *v == 0.0));
    assert!(macd.signal.iter().all(|v| *v == 0.0));
}

#[test]
fn test_macd_above_signal_in_uptrend() {
    let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
    let macd = calculate_macd_default(&closes);
    assert!(macd.macd[59] > 0.0);
    assert!(macd.macd[59] > macd.signal[59]);
}

#[test]
fn test_macd_below_signal_in_downtrend() {
    let closes: Vec<f64> = (0..60).map(|i| 200.0 - i as f64).collect();
    let macd = calculate_macd(&closes, 12, 26, 9);
    assert!(macd.macd[59] < 0.0);
    assert!(macd.macd[59] < macd.signal[59]);
}
