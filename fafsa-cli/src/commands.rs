//! CLI command implementations

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Subcommand;
use fafsa_core::{FafsaConfig, FafsaError};
use tracing::info;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to, overrides FAFSA_HOST
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to, overrides FAFSA_PORT
        #[arg(short, long)]
        port: Option<u16>,
        /// Directory served at <base>/static
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
    /// Write every page to static HTML files
    Export {
        /// Output directory
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,
    },
    /// Print the resolved configuration as JSON
    Config,
}

/// Handle the CLI command
///
/// # Errors
/// - configuration variables are malformed
/// - the server cannot bind or the export cannot be written
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    let config = load_config()?;

    match command {
        Commands::Serve {
            host,
            port,
            static_dir,
        } => serve(config, host, port, static_dir).await,
        Commands::Export { out } => export(&config, out),
        Commands::Config => print_config(&config),
    }
}

fn load_config() -> anyhow::Result<FafsaConfig> {
    FafsaConfig::from_env().map_err(|e| {
        let error = FafsaError::from(e);
        let message = error.user_message();
        anyhow::Error::new(error).context(message)
    })
}

async fn serve(
    mut config: FafsaConfig,
    host: Option<String>,
    port: Option<u16>,
    static_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    fafsa_web::run_server(Arc::new(config), static_dir)
        .await
        .map_err(FafsaError::from)
        .context("Server stopped with an error")
}

fn export(config: &FafsaConfig, out: PathBuf) -> anyhow::Result<()> {
    if !config.build.mode.is_static_export() {
        info!("GITHUB_PAGES is not set; exporting with standalone links");
    }

    let report = fafsa_web::export_site(config, &out)
        .map_err(FafsaError::from)
        .with_context(|| format!("Failed to export to {}", out.display()))?;

    println!(
        "Exported {} pages ({} files) to {}",
        report.page_count(),
        report.files.len(),
        report.out_dir.display()
    );
    Ok(())
}

fn print_config(config: &FafsaConfig) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    println!("{json}");
    Ok(())
}
