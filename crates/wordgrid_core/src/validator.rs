//! Word reconstruction along a selection path.

use crate::{Grid, Position, WordList};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of checking a selection against the word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Fragments concatenated in selection order.
    pub word: String,
    /// True if `word` is one of the complete words.
    pub valid: bool,
}

/// Concatenates tile text in selection order.
///
/// Positions outside the grid contribute nothing.
pub fn reconstruct(grid: &Grid, selection: &[Position]) -> String {
    selection
        .iter()
        .filter_map(|pos| grid.get(*pos))
        .map(|tile| tile.as_str())
        .collect()
}

/// Reconstructs the word spelled by `selection` and checks membership.
///
/// Pure string equality; no partial credit.
#[instrument(skip(grid, words), fields(picks = selection.len()))]
pub fn validate(grid: &Grid, selection: &[Position], words: &WordList) -> Verdict {
    let word = reconstruct(grid, selection);
    let valid = words.contains(&word);
    debug!(%word, valid, "Checked selection");
    Verdict { word, valid }
}
