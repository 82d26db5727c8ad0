//! Refresh orchestrator
//!
//! The orchestrator owns the input source, the output sink and the
//! aggregator, and coordinates:
//! - The initial read -> aggregate -> write run
//! - Polling the input's modification time
//! - Re-running the pipeline when the input changes

use tracing::{error, info, info_span, warn};

use crate::aggregator::EventAggregator;
use crate::error::{SummaryError, SummaryResult};
use crate::file_io::{EventSource, SummarySink};
use crate::live::watcher::{ChangeWatcher, PollOutcome};
use crate::live::LiveConfig;
use crate::logging::new_run_id;
use crate::models::AggregationStats;

/// Drives the aggregation pipeline once or repeatedly
pub struct RefreshOrchestrator<S, K> {
    source: S,
    sink: K,
    config: LiveConfig,
    aggregator: EventAggregator,
    completed_runs: u64,
}

impl<S: EventSource, K: SummarySink> RefreshOrchestrator<S, K> {
    pub fn new(source: S, sink: K, config: LiveConfig) -> Self {
        let aggregator = EventAggregator::with_pretty(config.json_pretty);
        Self {
            source,
            sink,
            config,
            aggregator,
            completed_runs: 0,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Number of runs that wrote output successfully
    pub fn completed_runs(&self) -> u64 {
        self.completed_runs
    }

    /// Run the pipeline once, then keep refreshing if `enable_polling` is set.
    ///
    /// A failed first run is returned without entering the polling loop.
    /// With polling enabled this only returns once a modification-time
    /// query fails.
    pub async fn run(&mut self, enable_polling: bool) -> SummaryResult<()> {
        self.run_once()?;

        if !enable_polling {
            return Ok(());
        }

        println!("Real-time update enabled. Watching for changes...");
        Err(self.poll_for_changes(ChangeWatcher::starting_now()).await)
    }

    /// Read the input, aggregate it and overwrite the output.
    /// On any error the output is left untouched.
    pub fn run_once(&mut self) -> SummaryResult<AggregationStats> {
        let span = info_span!(
            "aggregation_run",
            run_id = %new_run_id(),
            input = %self.source.location(),
            output = %self.sink.location()
        );
        let _enter = span.enter();

        let raw = self
            .source
            .read_bytes()
            .map_err(|e| SummaryError::read(self.source.location(), e))?;

        let (bytes, stats) = self
            .aggregator
            .aggregate(&raw)
            .map_err(|e| e.located(&self.source.location(), &self.sink.location()))?;

        self.sink
            .write_bytes(&bytes)
            .map_err(|e| SummaryError::write(self.sink.location(), e))?;

        self.completed_runs += 1;
        info!(
            events = stats.events,
            summaries = stats.summaries,
            "Summary written"
        );
        Ok(stats)
    }

    /// Poll the input every interval and refresh on change.
    ///
    /// Refresh failures are logged and polling continues; the loop only ends
    /// when the modification time cannot be queried, and that error is
    /// returned.
    pub async fn poll_for_changes(&mut self, mut watcher: ChangeWatcher) -> SummaryError {
        info!(
            input = %self.source.location(),
            interval_ms = self.config.poll_interval.as_millis() as u64,
            "Polling input for changes"
        );

        loop {
            match watcher.poll(&self.source) {
                Ok(PollOutcome::Changed(_)) => {
                    println!("File updated. Updating output...");
                    if let Err(e) = self.run_once() {
                        warn!(error = %e, phase = %e.phase(), "Refresh failed, keeping previous output");
                    }
                }
                Ok(PollOutcome::Unchanged) => {}
                Err(e) => {
                    error!(error = %e, "Stopped watching input");
                    return e;
                }
            }

            tokio::time::sleep(self.config.poll_interval).await;
        }
    }
}
