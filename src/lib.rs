//! N-by-N tic-tac-toe rules engine.
//!
//! Given a board size, the engine generates every winning line (rows,
//! columns, both diagonals), tracks two players' marks as coordinate
//! sets, and decides after each placement whether the game continues,
//! is won, or is drawn.
//!
//! # Architecture
//!
//! - **Lines**: [`WinningLines::generate`] - pure win-set generation
//! - **Rules**: superset win detection and draw detection over marks
//! - **Game**: typestate engine ([`GameSetup`] -> [`GameInProgress`] ->
//!   [`GameFinished`])
//! - **Wrapper**: [`AnyGame`], a serializable single-value state for
//!   callers driving the game by events
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{AnyGame, Coordinate, GameError};
//!
//! # fn main() -> Result<(), GameError> {
//! let game = AnyGame::new().start_game(1)?;
//! assert_eq!(game.status_text(), "X plays");
//!
//! // On a 1x1 board every winning line is the single cell.
//! let game = game.place_mark(Coordinate::new(0, 0))?;
//! assert_eq!(game.status_text(), "game over");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod error;
mod game;
mod invariants;
mod lines;
mod phases;
mod rules;
mod types;
mod wrapper;

pub use action::Placement;
pub use contracts::{
    CellIsFree, Contract, InBounds, LegalPlacement, PlacementContract, PlayersTurn,
};
pub use error::GameError;
pub use game::{GameFinished, GameInProgress, GameResult, GameSetup};
pub use invariants::{
    AlternatingTurnInvariant, BoundedMarksInvariant, DisjointMarksInvariant, EngineInvariants,
    Invariant, InvariantSet, InvariantViolation,
};
pub use lines::{LineKind, WinningLine, WinningLines};
pub use phases::Outcome;
pub use rules::{check_winner, is_draw, is_full, is_winning};
pub use types::{Coordinate, Marks, Player};
pub use wrapper::AnyGame;
