//! Command-line interface for wordgrid.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Wordgrid - rebuild words from fragments scattered on a grid
#[derive(Parser, Debug)]
#[command(name = "wordgrid")]
#[command(about = "Word-fragment grid puzzle for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (default: wordgrid.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the puzzle in the terminal
    Play {
        /// Puzzle options
        #[command(flatten)]
        puzzle: PuzzleArgs,

        /// Do not start background music
        #[arg(long)]
        no_audio: bool,
    },

    /// Print a generated grid and exit
    Grid {
        /// Puzzle options
        #[command(flatten)]
        puzzle: PuzzleArgs,
    },
}

/// Options shared by every command that builds a puzzle.
#[derive(Args, Debug, Clone, Default)]
pub struct PuzzleArgs {
    /// Shuffle seed for a reproducible grid
    #[arg(long)]
    pub seed: Option<u64>,

    /// Words to play with, replacing the configured list
    #[arg(long, num_args = 1..)]
    pub words: Vec<String>,
}
