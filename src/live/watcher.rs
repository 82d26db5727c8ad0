//! Modification-time change detection for the refresh loop

use std::time::SystemTime;
use tracing::debug;

use crate::error::{SummaryError, SummaryResult};
use crate::file_io::EventSource;

/// Result of a single poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Unchanged,
    Changed(SystemTime),
}

/// Tracks the last modification time that triggered a refresh
#[derive(Debug, Clone)]
pub struct ChangeWatcher {
    last_seen: SystemTime,
}

impl ChangeWatcher {
    /// Baseline is the current wall-clock time, not the input's actual
    /// modification time. A write landing after this instant but before
    /// the first poll is still picked up; one stamped earlier is not.
    pub fn starting_now() -> Self {
        Self::with_baseline(SystemTime::now())
    }

    pub fn with_baseline(last_seen: SystemTime) -> Self {
        Self { last_seen }
    }

    pub fn last_seen(&self) -> SystemTime {
        self.last_seen
    }

    /// Query the source once. A modification time strictly after the last
    /// seen one becomes the new baseline and is reported as a change.
    pub fn poll<S: EventSource + ?Sized>(&mut self, source: &S) -> SummaryResult<PollOutcome> {
        let modified = source
            .modified()
            .map_err(|e| SummaryError::poll_query(source.location(), e))?;

        if modified > self.last_seen {
            debug!(input = %source.location(), "Input modification time advanced");
            self.last_seen = modified;
            Ok(PollOutcome::Changed(modified))
        } else {
            Ok(PollOutcome::Unchanged)
        }
    }
}
