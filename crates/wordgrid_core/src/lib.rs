//! Word-fragment grid puzzle logic.
//!
//! Words are split into two halves, the halves are shuffled onto a square
//! grid, and the player rebuilds words by picking adjacent tiles in order.
//!
//! # Architecture
//!
//! - **Splitter**: even-length words become two fragments
//! - **Grid**: shuffled fragments laid out N×N, padded with placeholders
//! - **Selection**: ordered, unique, adjacent picks for one round
//! - **Validator**: concatenates picks and checks the word list
//! - **Session**: owns grid, score, selection and the last notice
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordgrid_core::{GameSession, Submission};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut game = GameSession::new(["boat", "coat"], &mut rng)?;
//!
//! let bo = game.grid().positions_of("bo").next().unwrap();
//! let at = game.grid().positions_of("at").next().unwrap();
//! game.select_tile(bo)?;
//! game.select_tile(at)?;
//!
//! assert_eq!(game.submit(), Submission::Valid("boat".to_string()));
//! assert_eq!(game.score(), 1);
//! # Ok::<(), wordgrid_core::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod audio;
mod error;
mod grid;
pub mod invariants;
mod notice;
mod position;
mod selection;
mod session;
mod splitter;
mod validator;
mod words;

pub use audio::AudioSwitch;
pub use error::{AudioError, SessionError, WordListError};
pub use grid::{Grid, side_for};
pub use notice::{Notice, Severity};
pub use position::Position;
pub use selection::{SelectOutcome, SelectionState, SelectionTracker};
pub use session::{GameSession, Submission};
pub use splitter::{Fragment, split_word, split_words};
pub use validator::{Verdict, reconstruct, validate};
pub use words::{DEFAULT_WORDS, WordList};
