//! Splitting words into the two halves that become grid tiles.

use crate::words::WordList;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Text on one grid tile: half of a word, or the empty placeholder.
///
/// Fragments do not remember which word they came from. Validity is
/// re-derived by concatenating fragments and looking the result up.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fragment(String);

impl Fragment {
    /// Creates a fragment from text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The empty placeholder used to pad the grid.
    pub fn placeholder() -> Self {
        Self(String::new())
    }

    /// Returns true for the padding placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.0.is_empty()
    }

    /// Fragment text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Splits one word at its character midpoint.
///
/// Returns `None` for odd-length words, which take no part in play.
pub fn split_word(word: &str) -> Option<(Fragment, Fragment)> {
    let len = word.chars().count();
    if len % 2 != 0 {
        return None;
    }
    let mid = word
        .char_indices()
        .nth(len / 2)
        .map_or(word.len(), |(byte, _)| byte);
    let (head, tail) = word.split_at(mid);
    Some((Fragment::new(head), Fragment::new(tail)))
}

/// Splits every playable word into two fragments, in list order.
///
/// Odd-length words are dropped silently. A list with no even-length
/// words yields an empty vector.
#[instrument(skip(words), fields(words = words.len()))]
pub fn split_words(words: &WordList) -> Vec<Fragment> {
    let fragments: Vec<Fragment> = words
        .playable()
        .filter_map(split_word)
        .flat_map(|(head, tail)| [head, tail])
        .collect();
    debug!(fragments = fragments.len(), "Split word list");
    fragments
}
