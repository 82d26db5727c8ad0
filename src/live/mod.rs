//! Live refresh of the summary output
//!
//! The refresh loop regenerates the output whenever the input's modification
//! time moves forward. It polls on a fixed interval; there is no file-system
//! notification involved.
//!
//! ```text
//! Idle --interval--> CheckTimestamp --changed--> Refreshing --done--> Idle
//!                          |--unchanged--> Idle
//!                          |--query failure--> Terminated
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::Config;

pub mod orchestrator;
pub mod watcher;

pub use orchestrator::RefreshOrchestrator;
pub use watcher::{ChangeWatcher, PollOutcome};

/// Live mode configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveConfig {
    /// Time slept between modification-time checks
    pub poll_interval: Duration,
    /// Pretty-print the output JSON
    pub json_pretty: bool,
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(2),
            json_pretty: true,
        }
    }
}

impl From<&Config> for LiveConfig {
    fn from(config: &Config) -> Self {
        Self {
            poll_interval: config.polling.interval(),
            json_pretty: config.output.json_pretty,
        }
    }
}
