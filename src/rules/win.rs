//! Win detection: superset tests against the winning lines.

use crate::lines::{WinningLine, WinningLines};
use crate::types::{Marks, Player};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks whether one player's marks cover an entire line.
///
/// True iff every cell of the line is present in the marks. Membership
/// is O(1), so one line costs O(size).
pub fn is_winning(marks: &Marks, line: &WinningLine) -> bool {
    line.cells().iter().all(|&cell| marks.contains(cell))
}

/// Checks for a winner.
///
/// X is evaluated before O, so the result is deterministic even on a
/// corrupted state where both players hold a full line; under
/// alternating play at most one can.
#[instrument(skip_all)]
pub fn check_winner(lines: &WinningLines, x_marks: &Marks, o_marks: &Marks) -> Option<Player> {
    Player::iter().find(|player| {
        let marks = match player {
            Player::X => x_marks,
            Player::O => o_marks,
        };
        lines.iter().any(|line| is_winning(marks, line))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coordinate;

    #[test]
    fn test_is_winning_is_a_superset_test() {
        let lines = WinningLines::generate(3);
        let row0 = lines.iter().next().unwrap();

        let mut marks = Marks::new();
        marks.insert(Coordinate::new(0, 0));
        marks.insert(Coordinate::new(0, 1));
        assert!(!is_winning(&marks, row0));

        // extra off-line marks don't matter, only coverage does
        marks.insert(Coordinate::new(2, 2));
        marks.insert(Coordinate::new(0, 2));
        assert!(is_winning(&marks, row0));
    }

    #[test]
    fn test_no_winner_empty_marks() {
        let lines = WinningLines::generate(3);
        assert_eq!(check_winner(&lines, &Marks::new(), &Marks::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let lines = WinningLines::generate(3);
        let mut x = Marks::new();
        x.insert(Coordinate::new(0, 0));
        x.insert(Coordinate::new(0, 1));
        x.insert(Coordinate::new(0, 2));
        assert_eq!(check_winner(&lines, &x, &Marks::new()), Some(Player::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let lines = WinningLines::generate(3);
        let mut o = Marks::new();
        o.insert(Coordinate::new(2, 0));
        o.insert(Coordinate::new(1, 1));
        o.insert(Coordinate::new(0, 2));
        assert_eq!(check_winner(&lines, &Marks::new(), &o), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let lines = WinningLines::generate(3);
        let mut x = Marks::new();
        x.insert(Coordinate::new(0, 0));
        x.insert(Coordinate::new(0, 1));
        assert_eq!(check_winner(&lines, &x, &Marks::new()), None);
    }

    #[test]
    fn test_winner_column_on_larger_board() {
        let lines = WinningLines::generate(4);
        let mut x = Marks::new();
        for row in 0..4 {
            x.insert(Coordinate::new(row, 2));
        }
        assert_eq!(check_winner(&lines, &x, &Marks::new()), Some(Player::X));
    }

    #[test]
    fn test_x_checked_before_o() {
        // Not reachable through legal play; the precedence is fixed
        // regardless.
        let lines = WinningLines::generate(3);
        let mut x = Marks::new();
        let mut o = Marks::new();
        for i in 0..3 {
            x.insert(Coordinate::new(0, i));
            o.insert(Coordinate::new(2, i));
        }
        assert_eq!(check_winner(&lines, &x, &o), Some(Player::X));
    }

    #[test]
    fn test_win_is_monotonic_under_extra_marks() {
        let lines = WinningLines::generate(3);
        let mut x = Marks::new();
        x.insert(Coordinate::new(0, 0));
        x.insert(Coordinate::new(1, 1));
        x.insert(Coordinate::new(2, 2));
        assert_eq!(check_winner(&lines, &x, &Marks::new()), Some(Player::X));

        x.insert(Coordinate::new(1, 0));
        x.insert(Coordinate::new(2, 1));
        assert_eq!(check_winner(&lines, &x, &Marks::new()), Some(Player::X));
    }
}
