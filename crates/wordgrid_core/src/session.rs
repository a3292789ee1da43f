//! One playthrough: grid, score, current selection and last notice.
//!
//! All state is owned by an explicit [`GameSession`] value. The
//! presentation layer calls [`select_tile`](GameSession::select_tile),
//! [`submit`](GameSession::submit) and friends, then renders from the
//! read-only accessors.

use crate::audio::AudioSwitch;
use crate::error::SessionError;
use crate::notice::Notice;
use crate::selection::{SelectOutcome, SelectionTracker};
use crate::splitter::split_words;
use crate::{Grid, Position, WordList, validator};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// What a submission did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Submission {
    /// Nothing was selected; no scoring, selection untouched.
    Empty,
    /// The reconstructed word was valid and scored.
    Valid(String),
    /// The reconstructed word was rejected.
    Invalid(String),
}

/// Full mutable game state for one playthrough.
#[derive(Debug)]
pub struct GameSession {
    words: WordList,
    grid: Grid,
    selection: SelectionTracker,
    score: u32,
    notice: Option<Notice>,
    audio: Option<Box<dyn AudioSwitch>>,
}

impl GameSession {
    /// Validates `words` and builds a session with a freshly shuffled grid.
    ///
    /// Fails fast on a malformed word list. A list with no even-length
    /// words is not an error: the grid is empty and nothing can be scored.
    #[instrument(skip(words, rng))]
    pub fn new<I, S, R>(words: I, rng: &mut R) -> Result<Self, SessionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        R: Rng + ?Sized,
    {
        let words = WordList::new(words)?;
        Ok(Self::with_word_list(words, rng))
    }

    /// Builds a session from an already validated word list.
    #[instrument(skip(words, rng), fields(words = words.len()))]
    pub fn with_word_list<R: Rng + ?Sized>(words: WordList, rng: &mut R) -> Self {
        let grid = Grid::shuffled(split_words(&words), rng);
        info!(side = grid.side(), "Created new game session");
        Self {
            words,
            grid,
            selection: SelectionTracker::new(),
            score: 0,
            notice: None,
            audio: None,
        }
    }

    /// Picks the tile at `pos`.
    ///
    /// Out-of-bounds positions are an error. Repeat and non-adjacent
    /// clicks are not: they are ignored and reported in the outcome.
    #[instrument(skip(self), fields(score = self.score))]
    pub fn select_tile(&mut self, pos: Position) -> Result<SelectOutcome, SessionError> {
        if !self.grid.contains(pos) {
            warn!(%pos, side = self.grid.side(), "Tile outside grid");
            return Err(SessionError::OutOfBounds {
                position: pos,
                side: self.grid.side(),
            });
        }
        Ok(self.selection.click(pos))
    }

    /// Checks the current selection.
    ///
    /// An empty selection only sets a warning. Otherwise the word is
    /// validated, the score updated on success, and the selection cleared
    /// either way.
    #[instrument(skip(self), fields(picks = self.selection.len()))]
    pub fn submit(&mut self) -> Submission {
        if self.selection.is_empty() {
            self.notice = Some(Notice::nothing_selected());
            return Submission::Empty;
        }

        let verdict = validator::validate(&self.grid, self.selection.positions(), &self.words);
        let submission = if verdict.valid {
            self.score += 1;
            info!(word = %verdict.word, score = self.score, "Valid word");
            self.notice = Some(Notice::valid_word(&verdict.word));
            Submission::Valid(verdict.word)
        } else {
            info!(word = %verdict.word, "Invalid word");
            self.notice = Some(Notice::invalid_word(&verdict.word));
            Submission::Invalid(verdict.word)
        };

        self.reset_selection();
        submission
    }

    /// Clears the selection and returns the tiles to un-highlight.
    #[instrument(skip(self))]
    pub fn reset_selection(&mut self) -> Vec<Position> {
        self.selection.reset()
    }

    /// Reshuffles the same words into a fresh grid and starts over at
    /// score zero. Attached audio keeps playing.
    #[instrument(skip(self, rng), fields(score = self.score))]
    pub fn new_game<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.grid = Grid::shuffled(split_words(&self.words), rng);
        self.selection.reset();
        self.score = 0;
        self.notice = None;
        info!(side = self.grid.side(), "Started new game");
    }

    /// Attaches background music and starts it.
    ///
    /// A switch that fails to start stays attached so it can be retried
    /// with [`toggle_audio`](Self::toggle_audio); the failure becomes a
    /// warning notice.
    #[instrument(skip(self, audio))]
    pub fn attach_audio(&mut self, mut audio: Box<dyn AudioSwitch>) {
        if let Err(e) = audio.start() {
            warn!(error = %e, "Background music unavailable");
            self.notice = Some(Notice::audio_unavailable(&e.message));
        }
        self.audio = Some(audio);
    }

    /// Flips background music on or off.
    ///
    /// Returns the new playing state, or `None` when no audio is attached.
    #[instrument(skip(self))]
    pub fn toggle_audio(&mut self) -> Option<bool> {
        let audio = self.audio.as_mut()?;
        match audio.toggle() {
            Ok(playing) => {
                info!(playing, "Toggled background music");
                Some(playing)
            }
            Err(e) => {
                warn!(error = %e, "Background music unavailable");
                self.notice = Some(Notice::audio_unavailable(&e.message));
                Some(false)
            }
        }
    }

    /// Picks up playback that ended without a toggle.
    pub fn refresh_audio(&mut self) {
        if let Some(audio) = self.audio.as_mut() {
            audio.refresh();
        }
    }

    /// Returns true while attached music is playing.
    pub fn audio_playing(&self) -> bool {
        self.audio.as_ref().is_some_and(|audio| audio.is_playing())
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Read-only grid for rendering.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current picks in click order.
    pub fn selection(&self) -> &[Position] {
        self.selection.positions()
    }

    /// Returns true if `pos` is part of the current selection.
    pub fn is_selected(&self, pos: Position) -> bool {
        self.selection.contains(pos)
    }

    /// Text the current selection spells so far.
    pub fn pending_word(&self) -> String {
        validator::reconstruct(&self.grid, self.selection.positions())
    }

    /// Last message for the player, if any.
    pub fn last_notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// The canonical word list.
    pub fn words(&self) -> &WordList {
        &self.words
    }
}
