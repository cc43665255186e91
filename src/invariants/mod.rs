//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are testable independently and serve as
//! documentation of system guarantees.

/// A logical property that must hold for a given state.
///
/// Invariants express system guarantees that should never be violated.
/// They are checked in debug builds and can be tested independently.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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
///
/// This trait enables composition of multiple invariants into a single
/// verification step. Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
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

pub mod alternating_turn;
pub mod bounded_marks;
pub mod disjoint_marks;

pub use alternating_turn::AlternatingTurnInvariant;
pub use bounded_marks::BoundedMarksInvariant;
pub use disjoint_marks::DisjointMarksInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    DisjointMarksInvariant,
    BoundedMarksInvariant,
    AlternatingTurnInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Placement;
    use crate::game::{GameInProgress, GameResult, GameSetup};
    use crate::types::{Coordinate, Player};

    #[test]
    fn test_invariant_set_holds_for_fresh_game() {
        let game = GameSetup::new().start(3).unwrap();
        assert!(EngineInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_placements() {
        let actions = vec![
            Placement::new(Player::X, Coordinate::new(0, 0)),
            Placement::new(Player::O, Coordinate::new(1, 1)),
            Placement::new(Player::X, Coordinate::new(0, 2)),
        ];

        if let Ok(GameResult::InProgress(game)) = GameInProgress::replay(3, &actions) {
            assert!(EngineInvariants::check_all(&game).is_ok());
        } else {
            panic!("Expected in-progress game");
        }
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let game = GameSetup::new().start(3).unwrap();
        let action = Placement::new(Player::X, Coordinate::new(1, 1));

        if let Ok(GameResult::InProgress(mut game)) = game.place(action) {
            // Claim X's cell for O behind the engine's back
            game.o_marks.insert(Coordinate::new(1, 1));

            let result = EngineInvariants::check_all(&game);
            assert!(result.is_err());

            let violations = result.unwrap_err();
            assert!(!violations.is_empty());
        }
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = GameSetup::new().start(3).unwrap();

        type TwoInvariants = (DisjointMarksInvariant, BoundedMarksInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
