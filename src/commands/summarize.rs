//! Summarize command implementation

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use crate::config::get_config;
use crate::file_io::{FileSink, FileSource};
use crate::live::{LiveConfig, RefreshOrchestrator};

/// Aggregate `input` into `output`, then keep refreshing if `update` is set.
///
/// In update mode the command runs until the input can no longer be
/// inspected or Ctrl+C is received.
pub async fn run_summary(input: PathBuf, output: PathBuf, update: bool) -> Result<()> {
    info!(
        input = %input.display(),
        output = %output.display(),
        update,
        "Starting summary"
    );

    let mut orchestrator = RefreshOrchestrator::new(
        FileSource::new(input),
        FileSink::new(output),
        LiveConfig::from(get_config()),
    );

    if !update {
        orchestrator.run(false).await?;
        return Ok(());
    }

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    tokio::select! {
        _ = &mut ctrl_c => {
            println!("\nWatching stopped.");
            info!("Interrupted, leaving last output in place");
            Ok(())
        }
        result = orchestrator.run(true) => result.map_err(Into::into),
    }
}
