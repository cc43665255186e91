//! Serializable game wrapper over the typestate phases.
//!
//! Callers that drive the game by events (a UI or input layer) hold a
//! single `AnyGame` value and get a fresh one back from every accepted
//! event. A rejected event returns an error and leaves the caller's
//! value untouched.

use crate::action::Placement;
use crate::error::GameError;
use crate::game::{GameFinished, GameInProgress, GameResult, GameSetup};
use crate::phases::Outcome;
use crate::types::{Coordinate, Marks, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Snapshot of a game in any phase.
///
/// Typestate phases can't be directly serialized, so this enum wraps
/// all possible phases. The winning lines are derived from the size
/// and regenerated on replay rather than stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnyGame {
    /// Waiting for a board size.
    NotStarted,
    /// Game in progress.
    InProgress {
        /// The board size.
        size: usize,
        /// Current player to move.
        to_move: Player,
        /// Cells claimed by X.
        x_marks: Marks,
        /// Cells claimed by O.
        o_marks: Marks,
        /// Placement history.
        history: Vec<Placement>,
    },
    /// Game over.
    Ended {
        /// The board size.
        size: usize,
        /// The outcome.
        outcome: Outcome,
        /// Cells claimed by X.
        x_marks: Marks,
        /// Cells claimed by O.
        o_marks: Marks,
        /// Placement history.
        history: Vec<Placement>,
    },
}

impl Default for AnyGame {
    fn default() -> Self {
        AnyGame::NotStarted
    }
}

// ─────────────────────────────────────────────────────────────
//  Typestate conversions
// ─────────────────────────────────────────────────────────────

impl From<GameSetup> for AnyGame {
    fn from(_game: GameSetup) -> Self {
        AnyGame::NotStarted
    }
}

impl From<GameInProgress> for AnyGame {
    fn from(game: GameInProgress) -> Self {
        AnyGame::InProgress {
            size: game.size(),
            to_move: game.to_move(),
            x_marks: game.marks(Player::X).clone(),
            o_marks: game.marks(Player::O).clone(),
            history: game.history().to_vec(),
        }
    }
}

impl From<GameFinished> for AnyGame {
    fn from(game: GameFinished) -> Self {
        AnyGame::Ended {
            size: game.size(),
            outcome: *game.outcome(),
            x_marks: game.marks(Player::X).clone(),
            o_marks: game.marks(Player::O).clone(),
            history: game.history().to_vec(),
        }
    }
}

impl From<GameResult> for AnyGame {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::InProgress(g) => g.into(),
            GameResult::Finished(g) => g.into(),
        }
    }
}

impl AnyGame {
    /// Creates a game in the not-started phase.
    pub fn new() -> Self {
        AnyGame::NotStarted
    }

    // ─────────────────────────────────────────────────────────
    //  Events
    // ─────────────────────────────────────────────────────────

    /// Starts a game on a `size` x `size` board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSize`] for `size` zero and
    /// [`GameError::AlreadyStarted`] outside the not-started phase.
    /// `self` is unchanged on error.
    #[instrument(skip(self))]
    pub fn start_game(&self, size: usize) -> Result<AnyGame, GameError> {
        match self {
            AnyGame::NotStarted => GameSetup::new().start(size).map(AnyGame::from),
            AnyGame::InProgress { .. } | AnyGame::Ended { .. } => Err(GameError::AlreadyStarted),
        }
    }

    /// Places the current player's mark at a cell.
    ///
    /// The acting player is inferred from the turn. Validation runs by
    /// replaying the full history plus the new placement through the
    /// typestate engine.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotStarted`] before a game starts,
    /// [`GameError::GameOver`] after it ends, and the placement errors
    /// from [`GameInProgress::place`] in between. `self` is unchanged
    /// on error; a rejected placement leaves the turn with the same
    /// player.
    #[instrument(skip(self))]
    pub fn place_mark(&self, coord: Coordinate) -> Result<AnyGame, GameError> {
        match self {
            AnyGame::NotStarted => Err(GameError::NotStarted),
            AnyGame::Ended { .. } => Err(GameError::GameOver),
            AnyGame::InProgress {
                size,
                to_move,
                history,
                ..
            } => {
                let mut actions = history.clone();
                actions.push(Placement::new(*to_move, coord));

                debug!(count = actions.len(), "replaying placements");
                match GameInProgress::replay(*size, &actions) {
                    Ok(result) => Ok(result.into()),
                    Err(e) => {
                        warn!(error = %e, "placement rejected");
                        Err(e)
                    }
                }
            }
        }
    }

    /// Restarts: back to the not-started phase, discarding all marks.
    #[instrument(skip(self))]
    pub fn restart(&self) -> AnyGame {
        AnyGame::NotStarted
    }

    // ─────────────────────────────────────────────────────────
    //  Projections
    // ─────────────────────────────────────────────────────────

    /// Returns the display status for the current phase.
    pub fn status_text(&self) -> &'static str {
        match self {
            AnyGame::NotStarted => "enter size",
            AnyGame::InProgress {
                to_move: Player::X, ..
            } => "X plays",
            AnyGame::InProgress {
                to_move: Player::O, ..
            } => "O plays",
            AnyGame::Ended { .. } => "game over",
        }
    }

    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        matches!(self, AnyGame::Ended { .. })
    }

    /// Returns the board size, once a game has started.
    pub fn size(&self) -> Option<usize> {
        match self {
            AnyGame::NotStarted => None,
            AnyGame::InProgress { size, .. } | AnyGame::Ended { size, .. } => Some(*size),
        }
    }

    /// Returns the current player to move, if the game is in progress.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            AnyGame::InProgress { to_move, .. } => Some(*to_move),
            _ => None,
        }
    }

    /// Returns the outcome, if the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            AnyGame::Ended { outcome, .. } => Some(*outcome),
            _ => None,
        }
    }

    /// Returns the winner, if the game was won.
    pub fn winner(&self) -> Option<Player> {
        self.outcome().and_then(|outcome| outcome.winner())
    }

    /// Returns one player's marks, once a game has started.
    pub fn marks(&self, player: Player) -> Option<&Marks> {
        match self {
            AnyGame::NotStarted => None,
            AnyGame::InProgress {
                x_marks, o_marks, ..
            }
            | AnyGame::Ended {
                x_marks, o_marks, ..
            } => Some(match player {
                Player::X => x_marks,
                Player::O => o_marks,
            }),
        }
    }

    /// Returns the player occupying a cell, if any.
    ///
    /// A presentation layer renders cells from this projection instead
    /// of touching the raw mark sets.
    pub fn mark_at(&self, coord: Coordinate) -> Option<Player> {
        if self.marks(Player::X)?.contains(coord) {
            Some(Player::X)
        } else if self.marks(Player::O)?.contains(coord) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Returns the placement history for any phase.
    pub fn history(&self) -> &[Placement] {
        match self {
            AnyGame::NotStarted => &[],
            AnyGame::InProgress { history, .. } | AnyGame::Ended { history, .. } => history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text_projection() {
        let game = AnyGame::new();
        assert_eq!(game.status_text(), "enter size");

        let game = game.start_game(3).unwrap();
        assert_eq!(game.status_text(), "X plays");

        let game = game.place_mark(Coordinate::new(0, 0)).unwrap();
        assert_eq!(game.status_text(), "O plays");

        let game = game.restart();
        assert_eq!(game.status_text(), "enter size");
    }

    #[test]
    fn test_mark_at_projection() {
        let game = AnyGame::new()
            .start_game(3)
            .unwrap()
            .place_mark(Coordinate::new(0, 0))
            .unwrap()
            .place_mark(Coordinate::new(1, 1))
            .unwrap();

        assert_eq!(game.mark_at(Coordinate::new(0, 0)), Some(Player::X));
        assert_eq!(game.mark_at(Coordinate::new(1, 1)), Some(Player::O));
        assert_eq!(game.mark_at(Coordinate::new(2, 2)), None);
    }

    #[test]
    fn test_start_twice_rejected() {
        let game = AnyGame::new().start_game(3).unwrap();
        assert_eq!(game.start_game(4), Err(GameError::AlreadyStarted));
    }

    #[test]
    fn test_place_before_start_rejected() {
        let game = AnyGame::new();
        assert_eq!(
            game.place_mark(Coordinate::new(0, 0)),
            Err(GameError::NotStarted)
        );
    }
}
