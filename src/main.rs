use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process;

use event_summary::commands::run_summary;
use event_summary::config::{init_config, Config};
use event_summary::logging::init_logging;

#[derive(Parser)]
#[command(name = "event-summary")]
#[command(about = "Summarize user events into per-user daily counts")]
#[command(version)]
struct Cli {
    /// Input JSON file containing user events
    #[arg(short, long, value_name = "PATH")]
    input: PathBuf,

    /// Output JSON file for daily summary reports
    #[arg(short, long, value_name = "PATH")]
    output: PathBuf,

    /// Keep the output up to date as the input changes
    #[arg(short, long)]
    update: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => init_config(config),
        Err(e) => handle_error(e),
    };
    let log_guard = init_logging(config);
    config.log_loaded();

    let result = run_summary(cli.input, cli.output, cli.update).await;
    drop(log_guard);

    match result {
        Ok(()) => Ok(()),
        Err(e) => handle_error(e),
    }
}

fn handle_error(e: anyhow::Error) -> ! {
    eprintln!("{} {}", "Error:".red().bold(), e);
    process::exit(1);
}
