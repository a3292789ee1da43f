//! Wordgrid - command-line entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordgrid::{Cli, Command, GameConfig, grid_report, run_tui};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play { puzzle, no_audio } => {
            let config = config.with_overrides(puzzle.seed, puzzle.words)?;
            let config = if no_audio {
                config.without_audio()
            } else {
                config
            };
            run_tui(&config)
        }
        Command::Grid { puzzle } => {
            init_stderr_logging();
            let config = config.with_overrides(puzzle.seed, puzzle.words)?;
            println!("{}", grid_report(&config));
            Ok(())
        }
    }
}

/// Logs to stderr so stdout carries only the grid.
fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
