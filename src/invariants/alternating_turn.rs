//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::game::GameInProgress;
use crate::types::Player;
use tracing::warn;

/// Invariant: Players alternate turns and the history agrees with the
/// marks.
///
/// The history shows an X, O, X, O, ... pattern starting with X, its
/// length equals the number of claimed cells, every recorded placement
/// is present in the mover's marks, and `to_move` matches the parity
/// of the history.
pub struct AlternatingTurnInvariant;

impl Invariant<GameInProgress> for AlternatingTurnInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let history = game.history();

        if let Some(first) = history.first() {
            if first.player != Player::X {
                warn!("first placement was not X");
                return false;
            }
        }

        for window in history.windows(2) {
            if window[0].player == window[1].player {
                warn!(player = %window[0].player, "same player placed twice in a row");
                return false;
            }
        }

        let recorded = history
            .iter()
            .all(|placement| game.marks(placement.player).contains(placement.coord));
        if !recorded {
            warn!("history placement missing from marks");
            return false;
        }

        let claimed = game.marks(Player::X).len() + game.marks(Player::O).len();
        if history.len() != claimed {
            warn!(
                history_len = history.len(),
                claimed, "history length disagrees with mark count"
            );
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...) and the history agrees with the marks"
    }
}
