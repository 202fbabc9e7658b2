//! tictactoe_grid - terminal front-end.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tictactoe_grid::{TuiConfig, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => TuiConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => TuiConfig::default(),
    };
    let config = match cli.log_file {
        Some(log_file) => config.with_log_file(log_file),
        None => config,
    };

    // Log to file to avoid interfering with the TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(config = ?config, "Starting tictactoe_grid");

    run_tui(&config)
}
