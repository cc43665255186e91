//! Typestate game engine.
//!
//! Each phase is its own distinct type with phase-specific fields, and
//! transitions consume the current phase and return the next. This
//! encodes invariants at compile time - a finished game ALWAYS has an
//! outcome, and has no placement operation.

use crate::action::Placement;
use crate::contracts::{Contract, PlacementContract};
use crate::error::GameError;
use crate::lines::WinningLines;
use crate::phases::Outcome;
use crate::rules;
use crate::types::{Coordinate, Marks, Player};
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game before a board size has been chosen.
///
/// No marks, no winning lines. The only transition is `start`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameSetup;

impl GameSetup {
    /// Creates a new game in the setup phase.
    pub fn new() -> Self {
        Self
    }

    /// Starts a game on a `size` x `size` board with X to move.
    ///
    /// Generates the winning lines for `size`; they stay fixed for the
    /// lifetime of the game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSize`] if `size` is zero. The setup
    /// phase is `Copy`, so a rejected start leaves the caller where it
    /// was.
    #[instrument(skip(self))]
    pub fn start(self, size: usize) -> Result<GameInProgress, GameError> {
        if size == 0 {
            return Err(GameError::InvalidSize(size));
        }

        debug!(size, "starting game");
        Ok(GameInProgress {
            size,
            lines: WinningLines::generate(size),
            x_marks: Marks::new(),
            o_marks: Marks::new(),
            to_move: Player::X,
            history: Vec::new(),
        })
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - accepts placements.
///
/// Invariants enforced by the placement rules:
/// - the two players' marks are disjoint and in bounds
/// - `to_move` alternates, X first
/// - no outcome yet (the outcome lives in `GameFinished`)
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(crate) size: usize,
    pub(crate) lines: WinningLines,
    pub(crate) x_marks: Marks,
    pub(crate) o_marks: Marks,
    pub(crate) to_move: Player,
    pub(crate) history: Vec<Placement>,
}

impl GameInProgress {
    /// Places a mark, consuming self and transitioning to the next
    /// state.
    ///
    /// Returns either a new in-progress game or a finished one. The
    /// terminal check runs after every accepted placement with fixed
    /// precedence: X wins, else O wins, else draw on a full board,
    /// else the opponent moves next.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always (in bounds, cell free, player's
    ///   turn)
    /// - Postconditions checked in debug builds only
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`], [`GameError::CellOccupied`],
    /// or [`GameError::WrongPlayer`] when the placement is illegal. A
    /// cell claimed by either player rejects the placement; the turn
    /// does not pass.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn place(self, action: Placement) -> Result<GameResult, GameError> {
        PlacementContract::pre(&self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        match action.player {
            Player::X => game.x_marks.insert(action.coord),
            Player::O => game.o_marks.insert(action.coord),
        };
        game.history.push(action);

        if let Some(winner) = rules::check_winner(&game.lines, &game.x_marks, &game.o_marks) {
            debug!(%winner, "game won");
            return Ok(GameResult::Finished(game.finish(Outcome::Winner(winner))));
        }

        if rules::is_full(game.size, &game.x_marks, &game.o_marks) {
            debug!("board full with no winner");
            return Ok(GameResult::Finished(game.finish(Outcome::Draw)));
        }

        game.to_move = game.to_move.opponent();

        #[cfg(debug_assertions)]
        PlacementContract::post(&before, &game)?;

        Ok(GameResult::InProgress(game))
    }

    fn finish(self, outcome: Outcome) -> GameFinished {
        GameFinished {
            size: self.size,
            lines: self.lines,
            x_marks: self.x_marks,
            o_marks: self.o_marks,
            outcome,
            history: self.history,
        }
    }

    /// Returns the board size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the winning lines for this game.
    pub fn lines(&self) -> &WinningLines {
        &self.lines
    }

    /// Returns one player's marks.
    pub fn marks(&self, player: Player) -> &Marks {
        match player {
            Player::X => &self.x_marks,
            Player::O => &self.o_marks,
        }
    }

    /// Returns the placement history.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// Returns the player occupying a cell, if any.
    pub fn mark_at(&self, coord: Coordinate) -> Option<Player> {
        if self.x_marks.contains(coord) {
            Some(Player::X)
        } else if self.o_marks.contains(coord) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Returns the unclaimed cells in row-major order.
    #[instrument(skip(self))]
    pub fn open_cells(&self) -> Vec<Coordinate> {
        (0..self.size)
            .flat_map(|row| (0..self.size).map(move |col| Coordinate::new(row, col)))
            .filter(|&coord| self.mark_at(coord).is_none())
            .collect()
    }

    /// Replays placements from a fresh board, validating each one.
    ///
    /// # Errors
    ///
    /// Propagates the first rejected placement, and returns
    /// [`GameError::GameOver`] if placements remain after the game
    /// finished.
    #[instrument]
    pub fn replay(size: usize, actions: &[Placement]) -> Result<GameResult, GameError> {
        let mut game = GameSetup::new().start(size)?;
        let mut actions = actions.iter();

        for action in actions.by_ref() {
            match game.place(*action)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => {
                    return if actions.next().is_some() {
                        Err(GameError::GameOver)
                    } else {
                        Ok(GameResult::Finished(g))
                    };
                }
            }
        }

        Ok(GameResult::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - outcome determined.
///
/// The outcome is always present, never `Option`. There is no
/// placement operation on this type; marks are frozen.
#[derive(Debug, Clone)]
pub struct GameFinished {
    size: usize,
    lines: WinningLines,
    x_marks: Marks,
    o_marks: Marks,
    outcome: Outcome,
    history: Vec<Placement>,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the winner, if the game wasn't a draw.
    pub fn winner(&self) -> Option<Player> {
        self.outcome.winner()
    }

    /// Returns the board size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the winning lines the game was played against.
    pub fn lines(&self) -> &WinningLines {
        &self.lines
    }

    /// Returns one player's marks.
    pub fn marks(&self, player: Player) -> &Marks {
        match player {
            Player::X => &self.x_marks,
            Player::O => &self.o_marks,
        }
    }

    /// Returns the player occupying a cell, if any.
    pub fn mark_at(&self, coord: Coordinate) -> Option<Player> {
        if self.x_marks.contains(coord) {
            Some(Player::X)
        } else if self.o_marks.contains(coord) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Returns the placement history.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// Restarts: discards marks and lines, back to the setup phase.
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        GameSetup::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of an accepted placement.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}
