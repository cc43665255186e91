//! Disjoint marks invariant: no cell is claimed by both players.

use super::Invariant;
use crate::game::GameInProgress;
use crate::types::Player;
use tracing::warn;

/// Invariant: The two players' marks are disjoint.
///
/// A cell claimed by X is never also claimed by O. The placement rules
/// guarantee this by rejecting any occupied cell.
pub struct DisjointMarksInvariant;

impl Invariant<GameInProgress> for DisjointMarksInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let o_marks = game.marks(Player::O);
        let valid = game
            .marks(Player::X)
            .iter()
            .all(|coord| !o_marks.contains(coord));

        if !valid {
            warn!("mark disjointness violated");
        }
        valid
    }

    fn description() -> &'static str {
        "No cell is claimed by both players"
    }
}
