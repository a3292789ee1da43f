//! First-class invariants for the tile selection.
//!
//! Invariants are logical properties that must hold after every accepted
//! click. They are checked in debug builds and can be tested independently.

use crate::SelectionTracker;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// No position appears twice in the selection.
pub struct UniquePositionsInvariant;

impl Invariant<SelectionTracker> for UniquePositionsInvariant {
    fn holds(state: &SelectionTracker) -> bool {
        let picks = state.positions();
        picks
            .iter()
            .enumerate()
            .all(|(i, pos)| !picks[..i].contains(pos))
    }

    fn description() -> &'static str {
        "Selection never contains the same tile twice"
    }
}

/// Every consecutive pair of picks is adjacent.
pub struct ContiguousPathInvariant;

impl Invariant<SelectionTracker> for ContiguousPathInvariant {
    fn holds(state: &SelectionTracker) -> bool {
        state
            .positions()
            .windows(2)
            .all(|pair| pair[0].is_adjacent(pair[1]))
    }

    fn description() -> &'static str {
        "Consecutive picks are within Chebyshev distance 1"
    }
}

/// All selection invariants as a composable set.
pub type SelectionInvariants = (UniquePositionsInvariant, ContiguousPathInvariant);
