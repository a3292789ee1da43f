//! The canonical word list and membership oracle.

use crate::error::WordListError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Words used when no list is configured.
pub const DEFAULT_WORDS: [&str; 13] = [
    "boat", "coat", "tall", "ball", "july", "crow", "five", "gain", "exit", "hide", "rice",
    "lace", "race",
];

/// The validated list of complete words a puzzle is built from.
///
/// Keeps the input order (fragments are emitted in that order before
/// shuffling) and a set for O(1) membership checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct WordList {
    words: Vec<String>,
    set: HashSet<String>,
}

impl WordList {
    /// Validates and builds a word list.
    ///
    /// Fails on an empty word. Any other text is a word, spaces included.
    /// An empty list is accepted; it produces an empty, unwinnable grid.
    #[instrument(skip(words))]
    pub fn new<I, S>(words: I) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        for (index, word) in words.iter().enumerate() {
            if word.is_empty() {
                return Err(WordListError::EmptyWord(index));
            }
        }
        let set = words.iter().cloned().collect();
        debug!(count = words.len(), "Word list validated");
        Ok(Self { words, set })
    }

    /// Returns true if `candidate` is one of the complete words.
    pub fn contains(&self, candidate: &str) -> bool {
        self.set.contains(candidate)
    }

    /// Words in input order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Words that take part in play (even length in characters).
    pub fn playable(&self) -> impl Iterator<Item = &str> {
        self.words
            .iter()
            .map(String::as_str)
            .filter(|word| word.chars().count() % 2 == 0)
    }

    /// Number of words, playable or not.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the list has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for WordList {
    fn default() -> Self {
        let words: Vec<String> = DEFAULT_WORDS.iter().map(|w| w.to_string()).collect();
        let set = words.iter().cloned().collect();
        Self { words, set }
    }
}

impl TryFrom<Vec<String>> for WordList {
    type Error = WordListError;

    fn try_from(words: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(words)
    }
}

impl From<WordList> for Vec<String> {
    fn from(list: WordList) -> Self {
        list.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_word() {
        let err = WordList::new(["boat", ""]).unwrap_err();
        assert_eq!(err, WordListError::EmptyWord(1));
    }

    #[test]
    fn accepts_words_with_spaces() {
        let list = WordList::new(["new york", "boat"]).unwrap();
        assert!(list.contains("new york"));
        assert_eq!(list.playable().collect::<Vec<_>>(), vec!["new york", "boat"]);
    }

    #[test]
    fn empty_list_is_allowed() {
        let list = WordList::new(Vec::<String>::new()).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.playable().count(), 0);
    }

    #[test]
    fn playable_filters_odd_lengths() {
        let list = WordList::new(["boat", "cat", "tall"]).unwrap();
        let playable: Vec<_> = list.playable().collect();
        assert_eq!(playable, vec!["boat", "tall"]);
        assert!(list.contains("cat"));
    }

    #[test]
    fn default_list_is_all_playable() {
        let list = WordList::default();
        assert_eq!(list.len(), DEFAULT_WORDS.len());
        assert_eq!(list.playable().count(), DEFAULT_WORDS.len());
    }
}
