//! Unit tests for EMA indicator

use panelscan::indicators::trend::calculate_ema;

fn create_test_closes(count: usize, base_price: f64) -> Vec<f64> {
    (0..count).map(|i| base_price + i as f64 * 0.1).collect()
}

#[test]
fn test_ema_seeded_by_first_close() {
    let closes = create_test_closes(10, 100.0);
    let ema = calculate_ema(&closes, 6);
    assert_eq!(ema.len(), 10);
    assert_eq!(ema[0], 100.0);
}

#[test]
fn test_ema_follows_recursion() {
    let closes = create_test_closes(50, 100.0);
    let ema = calculate_ema(&closes, 10);
    let alpha = 2.0 / 11.0;
    let mut expected = closes[0];
    for (i, close) in closes.iter().enumerate().skip(1) {
        expected = alpha * close + (1.0 - alpha) * expected;
        assert!((ema[i] - expected).abs() < 1e-9, "index {i}");
    }
}

#[test]
fn test_ema_lags_rising_series() {
    let closes = create_test_closes(50, 100.0);
    let fast = calculate_ema(&closes, 6);
    let slow = calculate_ema(&closes, 10);
    assert!(fast[49] < closes[49]);
    assert!(fast[49] > slow[49]);
}

#[test]
fn test_ema_empty_input() {
    assert!(calculate_ema(&[], 6).is_empty());
}
