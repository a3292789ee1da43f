//! Wordgrid - a word-fragment grid puzzle for the terminal.
//!
//! The puzzle rules live in [`wordgrid_core`]; this crate adds the
//! configuration, command line, background music and terminal front end.
//!
//! # Architecture
//!
//! - **Config**: TOML file with word list, seed and audio settings
//! - **Cli**: `play` and `grid` subcommands
//! - **Audio**: background music through an external player process
//! - **Report**: plain-text grid for the `grid` command
//! - **Tui**: ratatui rendering with mouse and keyboard input
//!
//! # Example
//!
//! ```no_run
//! use wordgrid::{GameConfig, run_tui};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::load(None)?.with_overrides(Some(42), Vec::new())?;
//! run_tui(&config)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod audio;
mod cli;
mod config;
mod report;
mod tui;

// Crate-level exports - Configuration
pub use config::{AudioConfig, ConfigError, DEFAULT_CONFIG_FILE, GameConfig};

// Crate-level exports - Command line
pub use cli::{Cli, Command, PuzzleArgs};

// Crate-level exports - Audio
pub use audio::ProcessAudio;

// Crate-level exports - Plain-text output
pub use report::grid_report;

// Crate-level exports - Terminal front end
pub use tui::{App, rng_for, run_tui};
