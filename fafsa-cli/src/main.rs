//! FAFSA Guide CLI - Command-line interface
//!
//! Serves the guide, exports it as static files, or prints the resolved
//! configuration.

mod commands;

use std::path::PathBuf;

use clap::Parser;
use fafsa_core::tracing_setup::{CliLogLevel, init_tracing};

#[derive(Parser)]
#[command(name = "fafsa")]
#[command(about = "A guided walkthrough of the FAFSA")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,

    /// Console log level
    #[arg(long, value_enum, default_value_t = CliLogLevel::default(), global = true)]
    log_level: CliLogLevel,

    /// Directory for the per-run debug log
    #[arg(long, global = true)]
    logs_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_file = init_tracing(cli.log_level.as_tracing_level(), cli.logs_dir.as_deref())?;
    tracing::debug!(log_file = %log_file.display(), "Tracing initialized");

    commands::handle_command(cli.command).await
}
