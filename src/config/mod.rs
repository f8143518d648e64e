//! Environment-driven configuration.

use crate::core::runtime::default_concurrency;
use std::env;
use std::path::PathBuf;

/// Deployment environment name (`ENVIRONMENT`, default `sandbox`).
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Inputs, outputs and worker sizing for one panel run.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    pub universe_path: PathBuf,
    pub daily_path: PathBuf,
    pub weekly_path: PathBuf,
    pub output_dir: PathBuf,
    pub concurrency: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            universe_path: PathBuf::from("input/universe.csv"),
            daily_path: PathBuf::from("input/daily.csv"),
            weekly_path: PathBuf::from("input/weekly.csv"),
            output_dir: PathBuf::from("output"),
            concurrency: default_concurrency(),
        }
    }
}

impl PanelConfig {
    /// Read `PANEL_*` variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparsable values keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let path = |key: &str, default: PathBuf| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(default)
        };

        Self {
            universe_path: path("PANEL_UNIVERSE_PATH", defaults.universe_path),
            daily_path: path("PANEL_DAILY_PATH", defaults.daily_path),
            weekly_path: path("PANEL_WEEKLY_PATH", defaults.weekly_path),
            output_dir: path("PANEL_OUTPUT_DIR", defaults.output_dir),
            concurrency: lookup("PANEL_CONCURRENCY")
                .and_then(|c| c.trim().parse().ok())
                .filter(|&c: &usize| c > 0)
                .unwrap_or(defaults.concurrency),
        }
    }

    pub fn indicator_output(&self) -> PathBuf {
        self.output_dir.join("indicator_series.csv")
    }

    pub fn signal_output(&self) -> PathBuf {
        self.output_dir.join("signals.csv")
    }
}
