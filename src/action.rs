//! First-class placement events.
//!
//! Placements are domain events, not side effects. They represent the
//! player's intent and can be validated independently of execution.

use crate::types::{Coordinate, Player};
use serde::{Deserialize, Serialize};

/// A placement: a player claiming a cell.
///
/// Placements are first-class domain events that can be:
/// - Validated before application
/// - Serialized for replay
/// - Logged for debugging
/// - Reasoned about by contracts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// The player making the placement.
    pub player: Player,
    /// The cell being claimed.
    pub coord: Coordinate,
}

impl Placement {
    /// Creates a new placement.
    pub fn new(player: Player, coord: Coordinate) -> Self {
        Self { player, coord }
    }

    /// Returns the player making this placement.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the cell being claimed.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coord)
    }
}
