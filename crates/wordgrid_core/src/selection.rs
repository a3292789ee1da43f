//! The player's in-progress tile selection.
//!
//! One round is a small state machine: `Empty` until the first click,
//! `Active` while picks accumulate. Clicks that would break the path
//! (a repeat tile, or a tile not adjacent to the last pick) are ignored
//! without error; the returned [`SelectOutcome`] makes that observable.

use crate::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionState {
    /// No tiles picked.
    Empty,
    /// One or more tiles picked.
    Active,
}

/// What happened to a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// The tile was appended to the selection.
    Accepted,
    /// The tile was already picked this round; ignored.
    AlreadySelected,
    /// The tile is not adjacent to the last pick; ignored.
    NotAdjacent,
}

impl SelectOutcome {
    /// Returns true if the click changed the selection.
    pub fn is_accepted(self) -> bool {
        matches!(self, SelectOutcome::Accepted)
    }
}

/// Ordered, unique picks in click order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionTracker {
    picks: Vec<Position>,
}

impl SelectionTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tracker without checking the rules. Test use only.
    #[cfg(test)]
    pub(crate) fn from_positions_unchecked(picks: Vec<Position>) -> Self {
        Self { picks }
    }

    /// Current phase.
    pub fn state(&self) -> SelectionState {
        if self.picks.is_empty() {
            SelectionState::Empty
        } else {
            SelectionState::Active
        }
    }

    /// Picks in click order.
    pub fn positions(&self) -> &[Position] {
        &self.picks
    }

    /// Most recent pick.
    pub fn last(&self) -> Option<Position> {
        self.picks.last().copied()
    }

    /// Returns true if `pos` is already picked.
    pub fn contains(&self, pos: Position) -> bool {
        self.picks.contains(&pos)
    }

    /// Number of picks.
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    /// Returns true if nothing is picked.
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Applies a click.
    ///
    /// Any tile starts a round; after that only tiles adjacent to the last
    /// pick are appended. Repeats and non-adjacent tiles leave the
    /// selection unchanged.
    #[instrument(skip(self), fields(picks = self.picks.len()))]
    pub fn click(&mut self, pos: Position) -> SelectOutcome {
        if self.contains(pos) {
            debug!(%pos, "Ignoring repeat click");
            return SelectOutcome::AlreadySelected;
        }

        if let Some(last) = self.last()
            && !last.is_adjacent(pos)
        {
            debug!(%pos, %last, "Ignoring non-adjacent click");
            return SelectOutcome::NotAdjacent;
        }

        self.picks.push(pos);

        #[cfg(debug_assertions)]
        {
            use crate::invariants::{InvariantSet, SelectionInvariants};
            let checked = SelectionInvariants::check_all(self);
            debug_assert!(checked.is_ok(), "Selection invariants violated: {:?}", checked);
        }

        debug!(%pos, picks = self.picks.len(), "Tile selected");
        SelectOutcome::Accepted
    }

    /// Clears the selection and returns the picks that were cleared, so the
    /// caller can un-highlight them.
    #[instrument(skip(self), fields(picks = self.picks.len()))]
    pub fn reset(&mut self) -> Vec<Position> {
        std::mem::take(&mut self.picks)
    }
}
