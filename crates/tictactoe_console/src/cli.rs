//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board height, overriding the config file
    #[arg(long)]
    pub height: Option<usize>,

    /// Board width, overriding the config file
    #[arg(long)]
    pub width: Option<usize>,

    /// Do not clear the terminal between screens
    #[arg(long)]
    pub no_clear: bool,

    /// Tracing filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_filter: String,
}
