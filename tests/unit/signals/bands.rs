//! Unit tests for Bollinger, MACD and RSI classification

use panelscan::indicators::IndicatorSeries;
use panelscan::models::{SignalColumn, SignalRow, SignalValue};
use panelscan::signals::bands::{apply, classify_bollinger, classify_macd};

#[test]
fn test_close_above_upper_band() {
    let flags = classify_bollinger(11.0, 10.0, 5.0);
    assert_eq!(flags.above_upper, SignalValue::Flag);
    assert_eq!(flags.below_lower, SignalValue::NoSignal);
}

#[test]
fn test_close_below_lower_band() {
    let flags = classify_bollinger(4.0, 10.0, 5.0);
    assert_eq!(flags.above_upper, SignalValue::NoSignal);
    assert_eq!(flags.below_lower, SignalValue::Flag);
}

#[test]
fn test_close_inside_or_on_band() {
    for close in [7.0, 10.0, 5.0] {
        let flags = classify_bollinger(close, 10.0, 5.0);
        assert_eq!(flags.above_upper, SignalValue::NoSignal);
        assert_eq!(flags.below_lower, SignalValue::NoSignal);
    }
}

#[test]
fn test_undefined_bands_set_nothing() {
    let flags = classify_bollinger(7.0, f64::NAN, f64::NAN);
    assert_eq!(flags.above_upper, SignalValue::NoSignal);
    assert_eq!(flags.below_lower, SignalValue::NoSignal);
}

#[test]
fn test_macd_classification() {
    assert_eq!(classify_macd(1.0, 0.5), SignalValue::BUY);
    assert_eq!(classify_macd(0.5, 1.0), SignalValue::SELL);
    assert_eq!(classify_macd(0.5, 0.5), SignalValue::NoSignal);
    assert_eq!(classify_macd(f64::NAN, 0.5), SignalValue::NoSignal);
}

#[test]
fn test_apply_flags_spike_above_band() {
    let mut closes = vec![100.0; 24];
    closes.push(120.0);
    let series = IndicatorSeries::calculate(closes);
    let mut row = SignalRow::new("SPKE");
    apply(&series, &mut row);

    assert_eq!(row.get(SignalColumn::LastAboveUpperBand), SignalValue::Flag);
    assert_eq!(row.get(SignalColumn::LastBelowLowerBand), SignalValue::NoSignal);
    assert_eq!(row.get(SignalColumn::Macd), SignalValue::BUY);
    assert_eq!(row.get(SignalColumn::Rsi), SignalValue::Number(100.0));
}

#[test]
fn test_apply_flags_drop_below_band() {
    let mut closes = vec![100.0; 24];
    closes.push(80.0);
    let series = IndicatorSeries::calculate(closes);
    let mut row = SignalRow::new("DROP");
    apply(&series, &mut row);

    assert_eq!(row.get(SignalColumn::LastAboveUpperBand), SignalValue::NoSignal);
    assert_eq!(row.get(SignalColumn::LastBelowLowerBand), SignalValue::Flag);
    assert_eq!(row.get(SignalColumn::Macd), SignalValue::SELL);
    assert_eq!(row.get(SignalColumn::Rsi), SignalValue::Number(0.0));
}

#[test]
fn test_apply_short_history_leaves_band_flags_unset() {
    let series = IndicatorSeries::calculate(vec![10.0, 10.2, 10.1, 10.5, 11.0]);
    let mut row = SignalRow::new("NEW");
    apply(&series, &mut row);

    assert_eq!(row.get(SignalColumn::LastAboveUpperBand), SignalValue::NoSignal);
    assert_eq!(row.get(SignalColumn::LastBelowLowerBand), SignalValue::NoSignal);
    assert!(row.get(SignalColumn::Rsi).as_number().is_some());
}
