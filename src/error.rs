//! Error taxonomy for the game engine.
//!
//! Every error is recoverable: the offending event is rejected and the
//! state it was applied to is unchanged.

use crate::types::{Coordinate, Player};

/// Error that can occur when validating or applying a game event.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The requested board size is below the minimum of 1.
    #[display("Board size must be at least 1, got {}", _0)]
    InvalidSize(usize),

    /// The coordinate lies outside the board.
    #[display("Coordinate {} is outside the {}x{} board", _0, _1, _1)]
    OutOfBounds(Coordinate, usize),

    /// The cell is already claimed by either player.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coordinate),

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// A start event arrived while a game was already running or over.
    #[display("Game has already started")]
    AlreadyStarted,

    /// A placement arrived before any game was started.
    #[display("Game hasn't started yet")]
    NotStarted,

    /// A placement arrived after the game ended.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}
