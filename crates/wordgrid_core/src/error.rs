//! Error types for the puzzle core.
//!
//! Most player misuse (repeat clicks, non-adjacent clicks) is not an error
//! at all; see [`SelectOutcome`](crate::SelectOutcome). These types cover
//! malformed input that must fail fast.

use crate::Position;

/// A word list that cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum WordListError {
    /// A word was the empty string.
    #[display("Word at index {} is empty", _0)]
    EmptyWord(usize),
}

impl std::error::Error for WordListError {}

/// Error raised by a [`GameSession`](crate::GameSession) operation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The word list handed to the session was malformed.
    #[display("Invalid word list: {}", _0)]
    WordList(WordListError),

    /// A tile outside the grid was selected.
    #[display("Position {} is outside the {}x{} grid", position, side, side)]
    OutOfBounds {
        /// The requested position.
        position: Position,
        /// Grid side length.
        side: usize,
    },
}

impl From<WordListError> for SessionError {
    fn from(err: WordListError) -> Self {
        SessionError::WordList(err)
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::WordList(e) => Some(e),
            SessionError::OutOfBounds { .. } => None,
        }
    }
}

/// Audio capability failure. Never fatal to gameplay.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Audio error: {} at {}:{}", message, file, line)]
pub struct AudioError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl AudioError {
    /// Creates a new audio error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
