//! Property-based invariant tests for splitting, grid layout and selection.
//!
//! 1. Even words split into two halves that concatenate back to the word.
//! 2. Odd words produce no fragments.
//! 3. Grids are N×N with N = ceil(sqrt(F)) and N² − F placeholders.
//! 4. Every fragment lands in exactly one cell.
//! 5. Selections never repeat a tile and always form an adjacent path.
//! 6. Submissions score by exactly one or not at all, and clear the selection unless it was empty.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordgrid_core::{
    Fragment, GameSession, Grid, Position, SelectionTracker, Submission, WordList, split_word,
    split_words,
};

// ── Helpers ─────────────────────────────────────────────────────────────

fn word_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn words_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..20)
}

fn clicks_strategy() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..5, 0usize..5), 0..40)
}

fn ceil_sqrt(n: usize) -> usize {
    (n as f64).sqrt().ceil() as usize
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Splitting
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn even_words_split_into_halves(word in word_strategy()) {
        match split_word(&word) {
            Some((head, tail)) => {
                prop_assert_eq!(word.len() % 2, 0);
                prop_assert_eq!(head.as_str().len(), tail.as_str().len());
                prop_assert_eq!(format!("{}{}", head, tail), word);
            }
            None => prop_assert_eq!(word.len() % 2, 1),
        }
    }

    #[test]
    fn fragment_count_is_twice_even_words(words in words_strategy()) {
        let list = WordList::new(words.clone()).unwrap();
        let even = words.iter().filter(|w| w.len() % 2 == 0).count();
        prop_assert_eq!(split_words(&list).len(), even * 2);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3-4. Grid layout
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn grid_is_square_and_padded(count in 0usize..150, seed in any::<u64>()) {
        let fragments: Vec<Fragment> = (0..count).map(|i| Fragment::new(format!("f{i}"))).collect();
        let grid = Grid::shuffled(fragments, &mut StdRng::seed_from_u64(seed));
        let side = ceil_sqrt(count);

        prop_assert_eq!(grid.side(), side);
        prop_assert_eq!(grid.rows().len(), side);
        prop_assert!(grid.rows().iter().all(|row| row.len() == side));
        prop_assert_eq!(grid.placeholder_count(), side * side - count);
    }

    #[test]
    fn every_fragment_appears_once(count in 0usize..150, seed in any::<u64>()) {
        let fragments: Vec<Fragment> = (0..count).map(|i| Fragment::new(format!("f{i}"))).collect();
        let grid = Grid::shuffled(fragments.clone(), &mut StdRng::seed_from_u64(seed));

        let mut placed: Vec<Fragment> = grid
            .cells()
            .filter(|(_, tile)| !tile.is_placeholder())
            .map(|(_, tile)| tile.clone())
            .collect();
        placed.sort();
        let mut expected = fragments;
        expected.sort();
        prop_assert_eq!(placed, expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Selection path
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn selection_stays_unique_and_adjacent(clicks in clicks_strategy()) {
        let mut tracker = SelectionTracker::new();
        for (row, col) in clicks {
            let before = tracker.len();
            let accepted = tracker.click(Position::new(row, col)).is_accepted();
            prop_assert_eq!(tracker.len(), before + usize::from(accepted));
        }

        let picks = tracker.positions();
        for (i, pos) in picks.iter().enumerate() {
            prop_assert!(!picks[..i].contains(pos), "duplicate {:?}", pos);
        }
        for pair in picks.windows(2) {
            prop_assert!(pair[0].chebyshev_distance(pair[1]) <= 1, "gap {:?}", pair);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Scoring
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn submit_scores_at_most_one(clicks in clicks_strategy(), seed in any::<u64>()) {
        let words = ["boat", "coat", "tall", "ball", "july", "crow", "five"];
        let mut game = GameSession::new(words, &mut StdRng::seed_from_u64(seed)).unwrap();
        let side = game.grid().side();

        for (row, col) in clicks {
            let pos = Position::new(row, col);
            if pos.within(side) {
                game.select_tile(pos).unwrap();
            } else {
                prop_assert!(game.select_tile(pos).is_err());
            }
        }

        let picks = game.selection().len();
        let score = game.score();
        match game.submit() {
            Submission::Empty => {
                prop_assert_eq!(picks, 0);
                prop_assert_eq!(game.score(), score);
            }
            Submission::Valid(word) => {
                prop_assert!(words.contains(&word.as_str()));
                prop_assert_eq!(game.score(), score + 1);
                prop_assert!(game.selection().is_empty());
            }
            Submission::Invalid(word) => {
                prop_assert!(!words.contains(&word.as_str()));
                prop_assert_eq!(game.score(), score);
                prop_assert!(game.selection().is_empty());
            }
        }
    }
}
