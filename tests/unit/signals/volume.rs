//! Unit tests for volume-delta classification

use panelscan::models::{Side, SignalValue};
use panelscan::signals::volume::{daily_delta, volume_trend, weekly_delta, VolumeTrend};

const BUY: SignalValue = SignalValue::VolumeDelta(Side::Buy);
const SELL: SignalValue = SignalValue::VolumeDelta(Side::Sell);

#[test]
fn test_volume_trend() {
    assert_eq!(volume_trend(Some(&vec![100.0, 130.0])), VolumeTrend::Higher);
    assert_eq!(volume_trend(Some(&vec![100.0, 110.0])), VolumeTrend::Lower);
    assert_eq!(volume_trend(None), VolumeTrend::Indeterminate);
}

#[test]
fn test_volume_trend_short_history_reads_lower() {
    assert_eq!(volume_trend(Some(&vec![100.0])), VolumeTrend::Lower);
}

#[test]
fn test_daily_buy_on_rising_close_and_volume() {
    let close = vec![10.0, 10.3];
    let volume = vec![100.0, 130.0];
    assert_eq!(daily_delta(&close, Some(&volume)), BUY);
}

#[test]
fn test_daily_sell_on_falling_close_and_volume() {
    let close = vec![10.0, 9.7];
    let volume = vec![100.0, 90.0];
    assert_eq!(daily_delta(&close, Some(&volume)), SELL);
}

#[test]
fn test_daily_mixed_moves_are_no_signal() {
    // Price falls on rising volume.
    assert_eq!(
        daily_delta(&[10.0, 9.7], Some(&vec![100.0, 130.0])),
        SignalValue::NoSignal
    );
    // Price barely moves.
    assert_eq!(
        daily_delta(&[10.0, 10.1], Some(&vec![100.0, 130.0])),
        SignalValue::NoSignal
    );
}

#[test]
fn test_daily_without_volume_is_no_signal() {
    assert_eq!(daily_delta(&[10.0, 10.3], None), SignalValue::NoSignal);
}

#[test]
fn test_daily_missing_latest_close_is_no_signal() {
    let volume = vec![100.0, 130.0, 200.0];
    assert_eq!(
        daily_delta(&[10.0, 10.3, f64::NAN], Some(&volume)),
        SignalValue::NoSignal
    );
}

#[test]
fn test_volume_delta_renders_title_case() {
    assert_eq!(BUY.to_string(), "Buy");
    assert_eq!(SELL.to_string(), "Sell");
}

#[test]
fn test_weekly_buy_on_high_above_prior_close() {
    let high = vec![11.0, 10.5];
    let low = vec![9.0, 9.5];
    let close = vec![10.0, 10.1];
    let volume = vec![100.0, 150.0];
    assert_eq!(
        weekly_delta(Some(&high), Some(&low), Some(&close), Some(&volume)),
        BUY
    );
}

#[test]
fn test_weekly_sell_on_low_below_prior_close() {
    let high = vec![11.0, 10.0];
    let low = vec![9.0, 9.7];
    let close = vec![10.0, 9.9];
    let volume = vec![100.0, 100.0];
    assert_eq!(
        weekly_delta(Some(&high), Some(&low), Some(&close), Some(&volume)),
        SELL
    );
}

#[test]
fn test_weekly_buy_reads_high_even_when_close_falls() {
    let high = vec![10.5, 10.3];
    let low = vec![9.5, 9.6];
    let close = vec![10.0, 9.9];
    let volume = vec![100.0, 200.0];
    assert_eq!(
        weekly_delta(Some(&high), Some(&low), Some(&close), Some(&volume)),
        BUY
    );
}

#[test]
fn test_weekly_without_series_is_no_signal() {
    assert_eq!(weekly_delta(None, None, None, None), SignalValue::NoSignal);
    let empty: Vec<f64> = Vec::new();
    assert_eq!(
        weekly_delta(Some(&empty), Some(&empty), Some(&empty), Some(&empty)),
        SignalValue::NoSignal
    );
}
