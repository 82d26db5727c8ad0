//! Event Summary Library
//!
//! Aggregates a batch of timestamped user events into per-user, per-day
//! event-type counts and writes them out as a JSON report, optionally
//! regenerating the report whenever the input file changes.
//!
//! ## Architecture Overview
//!
//! - [`models`] - Input events, the count table and output summary records
//! - [`aggregator`] - Pure decode -> count -> flatten -> encode transform
//! - [`timestamp_parser`] - Unix timestamp to UTC calendar day conversion
//! - [`file_io`] - Byte source/sink traits and their file-backed versions
//! - [`live`] - Modification-time polling and the refresh orchestrator
//! - [`commands`] - Command-line glue
//! - [`config`] - Configuration with file and environment variable support
//! - [`logging`] - Structured logging with JSON and pretty-print formats
//! - [`error`] - Error taxonomy of the pipeline
//!
//! ## Main Entry Points
//!
//! ```rust
//! use event_summary::aggregate;
//!
//! let input = br#"[
//!     {"userId":1,"eventType":"click","timestamp":1700000000},
//!     {"userId":1,"eventType":"click","timestamp":1700000050}
//! ]"#;
//! let output = aggregate(input).unwrap();
//! let summaries: serde_json::Value = serde_json::from_slice(&output).unwrap();
//! assert_eq!(summaries[0]["date"], "2023-11-14");
//! assert_eq!(summaries[0]["click"], 2);
//! ```
//!
//! For repeated runs against files, see [`live::RefreshOrchestrator`].

pub mod aggregator;
pub mod commands;
pub mod config;
pub mod error;
pub mod file_io;
pub mod live;
pub mod logging;
pub mod models;
pub mod timestamp_parser;

pub use aggregator::{aggregate, EventAggregator};
pub use error::{Phase, SummaryError, SummaryResult};
pub use models::*;
