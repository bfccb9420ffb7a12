//! Tic-tac-toe in the terminal.
//!
//! Two players share one keyboard and take turns typing slot numbers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::GameConfig;
use std::io;
use terminal::TerminalConsole;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the game screen.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let mut config = GameConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config.apply_overrides(cli.height, cli.width, cli.no_clear);
    config.validate().context("Invalid configuration")?;

    info!(
        height = config.height(),
        width = config.width(),
        first = %config.first(),
        second = %config.second(),
        "Starting tic-tac-toe"
    );

    let mut game = config.build_game();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = TerminalConsole::new(stdin.lock(), stdout.lock(), *config.clear_screen());

    game.run(console).context("Console I/O failed")?;

    Ok(())
}
