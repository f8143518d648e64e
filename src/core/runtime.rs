//! Panel orchestration across the symbol universe

use crate::error::SymbolError;
use crate::models::indicators::{IndicatorTable, PriceTable};
use crate::models::panel::{PanelOutput, SymbolFailure, SymbolPanel};
use crate::models::signal::SignalTable;
use crate::signals::engine::SignalEngine;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::{Id, JoinError, JoinSet};
use tracing::{debug, error, info, warn};

/// Configuration for the panel runtime
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Maximum number of symbols computed at the same time.
    pub concurrency: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
        }
    }
}

pub fn default_concurrency() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

type SymbolOutcome = Result<SymbolPanel, SymbolError>;

/// Runs the signal engine for every universe symbol on a bounded pool of
/// blocking workers and merges the results in universe order.
pub struct PanelRuntime {
    config: RuntimeConfig,
}

impl PanelRuntime {
    pub fn new(config: RuntimeConfig) -> Self {
        Self { config }
    }

    /// Set custom concurrency (default is available parallelism)
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.config.concurrency = concurrency;
        self
    }

    pub fn concurrency(&self) -> usize {
        self.config.concurrency.max(1)
    }

    /// Compute the indicator table and signal table for `universe`.
    ///
    /// Symbols without daily rows are listed in `missing`; symbols whose
    /// computation fails are listed in `failures`. Both keep their
    /// all-"No Signal" row and contribute no indicator columns.
    pub async fn run(
        &self,
        daily: PriceTable,
        weekly: PriceTable,
        universe: &[String],
    ) -> PanelOutput {
        let start = Instant::now();
        let mut signals = SignalTable::new(universe);
        let mut daily_groups = daily.group_by_ticker();
        let mut weekly_groups = weekly.group_by_ticker();

        info!(
            symbols = signals.len(),
            concurrency = self.concurrency(),
            "PanelRuntime: computing panel for {} symbols",
            signals.len()
        );

        let semaphore = Arc::new(Semaphore::new(self.concurrency()));
        let mut tasks: JoinSet<SymbolOutcome> = JoinSet::new();
        let mut pending: HashMap<Id, (usize, String)> = HashMap::new();
        let mut missing = Vec::new();

        let symbols: Vec<String> = signals.rows().iter().map(|r| r.symbol.clone()).collect();
        for (position, symbol) in symbols.into_iter().enumerate() {
            let daily_bars = match daily_groups.remove(&symbol) {
                Some(bars) if !bars.is_empty() => bars,
                _ => {
                    debug!(symbol = %symbol, "PanelRuntime: no daily data for {}", symbol);
                    missing.push(symbol);
                    continue;
                }
            };
            let weekly_bars = weekly_groups.remove(&symbol).unwrap_or_default();
            let semaphore = semaphore.clone();
            let task_symbol = symbol.clone();

            let handle = tasks.spawn(async move {
                let permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(e) => return Err(SymbolError::Aborted(e.to_string())),
                };
                let outcome = tokio::task::spawn_blocking(move || {
                    SignalEngine::evaluate_symbol(&task_symbol, &daily_bars, &weekly_bars)
                })
                .await
                .unwrap_or_else(|e| Err(symbol_error_from_join(e)));
                drop(permit);
                outcome
            });
            pending.insert(handle.id(), (position, symbol));
        }

        let (mut computed, mut failures) = collect_outcomes(tasks, pending).await;

        computed.sort_by_key(|(position, _)| *position);
        failures.sort_by_key(|(position, _)| *position);

        let mut indicators = IndicatorTable::new();
        for (_, panel) in computed {
            indicators.push(panel.indicators);
            signals.set_row(panel.row);
        }

        let output = PanelOutput {
            indicators,
            signals,
            missing,
            failures: failures.into_iter().map(|(_, failure)| failure).collect(),
        };

        info!(
            computed = output.computed_count(),
            missing = output.missing.len(),
            failed = output.failures.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "PanelRuntime: panel complete"
        );

        output
    }
}

/// Drain `tasks`, attributing every outcome to its symbol through `pending`.
///
/// A task that panics or is cancelled outside the blocking computation is
/// still reported as a failure of the symbol it was spawned for.
async fn collect_outcomes(
    mut tasks: JoinSet<SymbolOutcome>,
    mut pending: HashMap<Id, (usize, String)>,
) -> (Vec<(usize, SymbolPanel)>, Vec<(usize, SymbolFailure)>) {
    let mut computed = Vec::new();
    let mut failures = Vec::new();

    while let Some(joined) = tasks.join_next_with_id().await {
        let (id, outcome) = match joined {
            Ok((id, outcome)) => (id, outcome),
            Err(e) => (e.id(), Err(symbol_error_from_join(e))),
        };
        let Some((position, symbol)) = pending.remove(&id) else {
            error!(task_id = %id, "PanelRuntime: joined a task with no symbol");
            continue;
        };

        match outcome {
            Ok(panel) => computed.push((position, panel)),
            Err(error) => {
                warn!(
                    symbol = %symbol,
                    error = %error,
                    "PanelRuntime: computation failed for {}",
                    symbol
                );
                failures.push((position, SymbolFailure { symbol, error }));
            }
        }
    }

    (computed, failures)
}

fn symbol_error_from_join(error: JoinError) -> SymbolError {
    if error.is_panic() {
        SymbolError::Panicked(panic_message(error.into_panic()))
    } else {
        SymbolError::Aborted(error.to_string())
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
