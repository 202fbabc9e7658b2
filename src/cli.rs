//! Command-line interface for tictactoe_grid.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe on a terminal grid
#[derive(Parser, Debug)]
#[command(name = "tictactoe_grid")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file. Defaults are used when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs here instead of the configured log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
