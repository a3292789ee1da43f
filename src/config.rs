//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use wordgrid_core::WordList;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "wordgrid.toml";

/// Top-level game configuration.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Canonical words the puzzle is built from.
    #[serde(default)]
    words: WordList,

    /// Shuffle seed for a reproducible grid. Random when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Where the terminal game writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Background music settings.
    #[serde(default)]
    audio: AudioConfig,
}

/// Background music settings.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Start music with the game.
    #[serde(default = "default_enabled")]
    enabled: bool,

    /// Music file, looped while playing.
    #[serde(default = "default_track")]
    track: PathBuf,

    /// Player command; the track path is appended as the last argument.
    #[serde(default = "default_player")]
    player: Vec<String>,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("wordgrid.log")
}

fn default_enabled() -> bool {
    true
}

fn default_track() -> PathBuf {
    PathBuf::from("music.mp3")
}

fn default_player() -> Vec<String> {
    ["mpv", "--no-video", "--really-quiet", "--loop=inf"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            track: default_track(),
            player: default_player(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            words: WordList::default(),
            seed: None,
            log_file: default_log_file(),
            audio: AudioConfig::default(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(words = config.words.len(), seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Loads an explicitly named file, or the default file if it exists,
    /// or falls back to built-in defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    info!("Config file not found at {}, using defaults", default.display());
                    Ok(Self::default())
                }
            }
        }
    }

    /// Applies command-line overrides. Empty `words` keeps the configured
    /// list.
    #[instrument(skip(self, words))]
    pub fn with_overrides(
        mut self,
        seed: Option<u64>,
        words: Vec<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(seed) = seed {
            debug!(seed, "Overriding seed");
            self.seed = Some(seed);
        }
        if !words.is_empty() {
            debug!(count = words.len(), "Overriding word list");
            self.words = WordList::new(words)
                .map_err(|e| ConfigError::new(format!("Invalid --words: {}", e)))?;
        }
        Ok(self)
    }

    /// Turns background music off.
    pub fn without_audio(mut self) -> Self {
        self.audio.enabled = false;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
