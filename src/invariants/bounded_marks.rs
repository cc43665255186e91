//! Bounded marks invariant: marks stay on the board and fit it.

use super::Invariant;
use crate::game::GameInProgress;
use crate::types::Player;
use tracing::warn;

/// Invariant: Every mark is in bounds and the board never overfills.
///
/// All claimed cells satisfy `0 <= row, col < size`, and the total
/// number of claimed cells is at most `size * size`.
pub struct BoundedMarksInvariant;

impl Invariant<GameInProgress> for BoundedMarksInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let size = game.size();
        let x_marks = game.marks(Player::X);
        let o_marks = game.marks(Player::O);

        let in_bounds = x_marks
            .iter()
            .chain(o_marks.iter())
            .all(|coord| coord.in_bounds(size));
        let within_capacity = x_marks.len() + o_marks.len() <= size * size;

        if !in_bounds {
            warn!(size, "out-of-bounds mark present");
        }
        if !within_capacity {
            warn!(
                size,
                total = x_marks.len() + o_marks.len(),
                "mark count exceeds board capacity"
            );
        }
        in_bounds && within_capacity
    }

    fn description() -> &'static str {
        "All marks are in bounds and the mark count fits the board"
    }
}
