//! Grid coordinates and the adjacency rule.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the grid, 0-indexed as (row, col).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Position {
    /// Creates a new position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Chebyshev distance: the larger of the row and column offsets.
    pub fn chebyshev_distance(self, other: Position) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// Returns true if `other` is in the same or a neighbouring row AND the
    /// same or a neighbouring column (diagonals included).
    #[instrument(level = "trace")]
    pub fn is_adjacent(self, other: Position) -> bool {
        self.chebyshev_distance(other) <= 1
    }

    /// Returns true if the position lies inside a `side`×`side` grid.
    pub fn within(self, side: usize) -> bool {
        self.row < side && self.col < side
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_neighbours_are_adjacent() {
        let center = Position::new(1, 1);
        for row in 0..3 {
            for col in 0..3 {
                assert!(center.is_adjacent(Position::new(row, col)));
            }
        }
    }

    #[test]
    fn distance_two_is_not_adjacent() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.chebyshev_distance(Position::new(2, 2)), 2);
        assert!(!origin.is_adjacent(Position::new(2, 2)));
        assert!(!origin.is_adjacent(Position::new(0, 2)));
        assert!(!origin.is_adjacent(Position::new(2, 1)));
    }

    #[test]
    fn bounds_check() {
        assert!(Position::new(1, 1).within(2));
        assert!(!Position::new(2, 0).within(2));
        assert!(!Position::new(0, 0).within(0));
    }
}
