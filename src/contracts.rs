//! Contract-based validation for placements.
//!
//! Contracts define correctness through preconditions and
//! postconditions. They formalize the Hoare-style reasoning:
//! {P} action {Q}

use crate::action::Placement;
use crate::error::GameError;
use crate::game::GameInProgress;
use crate::invariants::{EngineInvariants, InvariantSet};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state
/// transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying the
///   action
/// - Postcondition: {Q(before, after)} - must hold after applying the
///   action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    ///
    /// This verifies that the transition maintained system invariants.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

// ─────────────────────────────────────────────────────────────
//  Placement Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The coordinate must lie on the board.
pub struct InBounds;

impl InBounds {
    /// Checks the coordinate against the board size.
    #[instrument(skip(game))]
    pub fn check(action: &Placement, game: &GameInProgress) -> Result<(), GameError> {
        if action.coord.in_bounds(game.size()) {
            Ok(())
        } else {
            Err(GameError::OutOfBounds(action.coord, game.size()))
        }
    }
}

/// Precondition: The cell must be claimed by neither player.
///
/// Both players' marks are checked; a cell held by the opponent is as
/// occupied as one's own.
pub struct CellIsFree;

impl CellIsFree {
    /// Checks that the cell is unclaimed.
    #[instrument(skip(game))]
    pub fn check(action: &Placement, game: &GameInProgress) -> Result<(), GameError> {
        if game.mark_at(action.coord).is_some() {
            Err(GameError::CellOccupied(action.coord))
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Checks the placement's player against the turn.
    #[instrument(skip(game))]
    pub fn check(action: &Placement, game: &GameInProgress) -> Result<(), GameError> {
        if action.player != game.to_move() {
            Err(GameError::WrongPlayer(action.player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a placement is legal if the coordinate is
/// in bounds, the cell is free, and it's the player's turn.
pub struct LegalPlacement;

impl LegalPlacement {
    /// Validates all preconditions for a placement.
    #[instrument(skip(game))]
    pub fn check(action: &Placement, game: &GameInProgress) -> Result<(), GameError> {
        InBounds::check(action, game)?;
        CellIsFree::check(action, game)?;
        PlayersTurn::check(action, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Placement Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placement actions.
///
/// Preconditions:
/// - Coordinate in bounds
/// - Cell free for both players
/// - Player's turn
///
/// Postconditions:
/// - Marks stay disjoint and in bounds
/// - Turns still alternate and the history agrees with the marks
pub struct PlacementContract;

impl Contract<GameInProgress, Placement> for PlacementContract {
    fn pre(game: &GameInProgress, action: &Placement) -> Result<(), GameError> {
        LegalPlacement::check(action, game)
    }

    fn post(_before: &GameInProgress, after: &GameInProgress) -> Result<(), GameError> {
        EngineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
