//! User-facing messages produced by session operations.

use serde::{Deserialize, Serialize};

/// How a notice should be presented.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    /// A word was found.
    Success,
    /// A submitted word was rejected.
    Failure,
    /// Recoverable problem: empty submission, missing audio asset.
    Warning,
}

/// The last message shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Message text.
    pub text: String,
    /// Presentation severity.
    pub severity: Severity,
}

impl Notice {
    /// Creates a notice.
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }

    /// Notice for a submission with nothing selected.
    pub fn nothing_selected() -> Self {
        Self::new("No cells selected!", Severity::Warning)
    }

    /// Notice for a valid word.
    pub fn valid_word(word: &str) -> Self {
        Self::new(format!("✅ '{}' is a valid word!", word), Severity::Success)
    }

    /// Notice for a rejected word.
    pub fn invalid_word(word: &str) -> Self {
        Self::new(format!("❌ '{}' is not a valid word!", word), Severity::Failure)
    }

    /// Notice for background music that could not start.
    pub fn audio_unavailable(reason: &str) -> Self {
        Self::new(format!("⚠️ {}", reason), Severity::Warning)
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.severity, self.text)
    }
}
