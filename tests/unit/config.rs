//! Unit tests for configuration and logging format selection

use panelscan::config::PanelConfig;
use panelscan::core::runtime::default_concurrency;
use panelscan::logging::LogFormat;
use std::collections::HashMap;
use std::path::PathBuf;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_defaults() {
    let config = PanelConfig::from_lookup(|_| None);
    assert_eq!(config, PanelConfig::default());
    assert_eq!(config.universe_path, PathBuf::from("input/universe.csv"));
    assert_eq!(config.concurrency, default_concurrency());
    assert_eq!(config.signal_output(), PathBuf::from("output/signals.csv"));
    assert_eq!(
        config.indicator_output(),
        PathBuf::from("output/indicator_series.csv")
    );
}

#[test]
fn test_overrides() {
    let config = PanelConfig::from_lookup(lookup_from(&[
        ("PANEL_UNIVERSE_PATH", "/data/sp500.csv"),
        ("PANEL_DAILY_PATH", "/data/daily.csv"),
        ("PANEL_WEEKLY_PATH", "/data/weekly.csv"),
        ("PANEL_OUTPUT_DIR", "/tmp/panel"),
        ("PANEL_CONCURRENCY", "3"),
    ]));
    assert_eq!(config.universe_path, PathBuf::from("/data/sp500.csv"));
    assert_eq!(config.weekly_path, PathBuf::from("/data/weekly.csv"));
    assert_eq!(config.concurrency, 3);
    assert_eq!(config.signal_output(), PathBuf::from("/tmp/panel/signals.csv"));
}

#[test]
fn test_invalid_concurrency_keeps_default() {
    for raw in ["0", "many", ""] {
        let config = PanelConfig::from_lookup(lookup_from(&[("PANEL_CONCURRENCY", raw)]));
        assert_eq!(config.concurrency, default_concurrency(), "{raw:?}");
    }
}

#[test]
fn test_blank_path_keeps_default() {
    let config = PanelConfig::from_lookup(lookup_from(&[("PANEL_DAILY_PATH", "  ")]));
    assert_eq!(config.daily_path, PathBuf::from("input/daily.csv"));
}

#[test]
fn test_log_format_for_environment() {
    assert_eq!(LogFormat::for_environment("production"), LogFormat::Json);
    assert_eq!(LogFormat::for_environment("prod"), LogFormat::Json);
    assert_eq!(LogFormat::for_environment("sandbox"), LogFormat::Pretty);
    assert_eq!(LogFormat::for_environment("staging"), LogFormat::Pretty);
}
