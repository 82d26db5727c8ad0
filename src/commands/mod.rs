//! Command module for event-summary
//!
//! Glue between the parsed command line and the library: builds the
//! file-backed collaborators and drives the refresh orchestrator.

pub mod summarize;

pub use summarize::run_summary;
