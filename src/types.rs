//! Core domain types for the N-by-N tic-tac-toe engine.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A cell on the board, addressed by zero-based row and column.
///
/// Identity is structural: two coordinates are equal iff their rows and
/// columns are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index.
    pub col: usize,
}

impl Coordinate {
    /// Creates a coordinate from row and column indices.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Checks whether the coordinate lies on a `size` x `size` board.
    pub fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The set of cells one player has claimed.
///
/// Append-only with O(1) membership tests. Disjointness between the two
/// players' marks is enforced by the placement rules, not by this
/// collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marks {
    cells: HashSet<Coordinate>,
}

impl Marks {
    /// Creates an empty set of marks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims a cell. Returns `false` if it was already claimed here.
    pub fn insert(&mut self, coord: Coordinate) -> bool {
        self.cells.insert(coord)
    }

    /// Checks whether a cell is claimed in this set.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells.contains(&coord)
    }

    /// Number of claimed cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Checks whether no cell is claimed.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over the claimed cells in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.iter().copied()
    }
}
