//! Signal Panel
//!
//! Loads the symbol universe and the daily/weekly price tables, computes the
//! indicator panel and signal table, and writes both as CSV.

use dotenvy::dotenv;
use panelscan::config::{get_environment, PanelConfig};
use panelscan::core::runtime::{PanelRuntime, RuntimeConfig};
use panelscan::logging;
use panelscan::services::export::{write_indicator_csv, write_signal_csv};
use panelscan::services::{CsvSeriesSource, SeriesSource};
use serde_json::json;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = PanelConfig::from_env();
    info!("Starting Signal Panel");
    info!(environment = %get_environment(), "Environment");
    info!(
        universe = %config.universe_path.display(),
        daily = %config.daily_path.display(),
        weekly = %config.weekly_path.display(),
        concurrency = config.concurrency,
        "Panel inputs"
    );

    let source = CsvSeriesSource::new(
        config.universe_path.clone(),
        config.daily_path.clone(),
        config.weekly_path.clone(),
    );
    let universe = source.universe().await?;
    let daily = source.daily().await?;
    let weekly = source.weekly().await?;

    if universe.is_empty() {
        warn!("Universe is empty - the signal table will have no rows");
    }

    let runtime = PanelRuntime::new(RuntimeConfig::default()).with_concurrency(config.concurrency);
    let output = runtime.run(daily, weekly, &universe).await;

    tokio::fs::create_dir_all(&config.output_dir).await?;
    write_indicator_csv(&config.indicator_output(), &output.indicators)?;
    write_signal_csv(&config.signal_output(), &output.signals)?;

    if !output.missing.is_empty() {
        warn!(missing = ?output.missing, "Missing stocks: {}", output.missing.join(", "));
    }
    for failure in &output.failures {
        warn!(symbol = %failure.symbol, error = %failure.error, "Symbol failed");
    }

    let summary = json!({
        "symbols": output.signals.len(),
        "computed": output.computed_count(),
        "missing": output.missing,
        "failed": output
            .failures
            .iter()
            .map(|f| json!({ "symbol": f.symbol, "error": f.error.to_string() }))
            .collect::<Vec<_>>(),
        "indicator_columns": output.indicators.column_count(),
        "indicator_output": config.indicator_output().display().to_string(),
        "signal_output": config.signal_output().display().to_string(),
    });
    info!(summary = %summary, "Signal Panel finished");

    Ok(())
}
