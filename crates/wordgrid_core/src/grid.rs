//! Square tile grid built from shuffled fragments.

use crate::{Fragment, Position};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Smallest `n` with `n * n >= count`.
pub fn side_for(count: usize) -> usize {
    let mut side = count.isqrt();
    if side * side < count {
        side += 1;
    }
    side
}

/// N×N grid of fragment tiles, row-major, padded with placeholders.
///
/// Immutable once built; selection state lives in the
/// [`SelectionTracker`](crate::SelectionTracker).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    side: usize,
    rows: Vec<Vec<Fragment>>,
}

impl Grid {
    /// Lays fragments out row-major in the order given.
    ///
    /// Pads with placeholders up to the next square. Zero fragments give
    /// a 0×0 grid.
    #[instrument(skip(fragments), fields(fragments = fragments.len()))]
    pub fn build(mut fragments: Vec<Fragment>) -> Self {
        let side = side_for(fragments.len());
        let padding = side * side - fragments.len();
        fragments.extend(std::iter::repeat_with(Fragment::placeholder).take(padding));

        let mut cells = fragments.into_iter();
        let rows: Vec<Vec<Fragment>> = (0..side)
            .map(|_| cells.by_ref().take(side).collect())
            .collect();

        debug!(side, padding, "Built grid");
        Self { side, rows }
    }

    /// Shuffles fragments with a uniform permutation, then builds.
    #[instrument(skip(fragments, rng), fields(fragments = fragments.len()))]
    pub fn shuffled<R: Rng + ?Sized>(mut fragments: Vec<Fragment>, rng: &mut R) -> Self {
        fragments.shuffle(rng);
        Self::build(fragments)
    }

    /// Grid side length N.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Rows of tiles.
    pub fn rows(&self) -> &[Vec<Fragment>] {
        &self.rows
    }

    /// Tile at `pos`, or `None` outside the grid.
    pub fn get(&self, pos: Position) -> Option<&Fragment> {
        self.rows.get(pos.row).and_then(|row| row.get(pos.col))
    }

    /// Returns true if `pos` lies inside the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.within(self.side)
    }

    /// Every position with its tile, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Fragment)> {
        self.rows.iter().enumerate().flat_map(|(row, tiles)| {
            tiles
                .iter()
                .enumerate()
                .map(move |(col, tile)| (Position::new(row, col), tile))
        })
    }

    /// Positions holding the given text.
    pub fn positions_of<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Position> + 'a {
        self.cells()
            .filter(move |(_, tile)| tile.as_str() == text)
            .map(|(pos, _)| pos)
    }

    /// Number of placeholder cells.
    pub fn placeholder_count(&self) -> usize {
        self.cells().filter(|(_, tile)| tile.is_placeholder()).count()
    }

    /// Plain text table of the grid, one line per row.
    pub fn render(&self) -> String {
        let width = self
            .cells()
            .map(|(_, tile)| tile.as_str().chars().count())
            .max()
            .unwrap_or(0)
            .max(1);
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|tile| {
                        let text = if tile.is_placeholder() { "·" } else { tile.as_str() };
                        format!("[{:^width$}]", text, width = width)
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
