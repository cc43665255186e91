//! Draw detection: a full board with no winner.

use crate::lines::WinningLines;
use crate::types::Marks;
use tracing::instrument;

/// Checks if every cell of a `size` x `size` board is claimed.
///
/// Relies on the marks being disjoint and in bounds, which the
/// placement rules guarantee.
pub fn is_full(size: usize, x_marks: &Marks, o_marks: &Marks) -> bool {
    x_marks.len() + o_marks.len() == size * size
}

/// Checks for a draw: board full and neither player holds a line.
#[instrument(skip_all)]
pub fn is_draw(lines: &WinningLines, size: usize, x_marks: &Marks, o_marks: &Marks) -> bool {
    is_full(size, x_marks, o_marks) && super::check_winner(lines, x_marks, o_marks).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coordinate;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(3, &Marks::new(), &Marks::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut x = Marks::new();
        x.insert(Coordinate::new(1, 1));
        assert!(!is_full(3, &x, &Marks::new()));
    }

    #[test]
    fn test_draw_scenario() {
        // X O X / O X X / O X O - full, no line for either player
        let mut x = Marks::new();
        let mut o = Marks::new();
        for coord in [(0, 0), (0, 2), (1, 1), (1, 2), (2, 1)] {
            x.insert(coord.into());
        }
        for coord in [(0, 1), (1, 0), (2, 0), (2, 2)] {
            o.insert(coord.into());
        }

        let lines = WinningLines::generate(3);
        assert!(is_full(3, &x, &o));
        assert!(is_draw(&lines, 3, &x, &o));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        // X X X / O O X / O X O - full, X holds the top row
        let mut x = Marks::new();
        let mut o = Marks::new();
        for coord in [(0, 0), (0, 1), (0, 2), (1, 2), (2, 1)] {
            x.insert(coord.into());
        }
        for coord in [(1, 0), (1, 1), (2, 0), (2, 2)] {
            o.insert(coord.into());
        }

        let lines = WinningLines::generate(3);
        assert!(is_full(3, &x, &o));
        assert!(!is_draw(&lines, 3, &x, &o));
    }

    #[test]
    fn test_draw_never_premature() {
        let lines = WinningLines::generate(3);
        let mut x = Marks::new();
        let mut o = Marks::new();
        x.insert(Coordinate::new(0, 0));
        x.insert(Coordinate::new(2, 1));
        o.insert(Coordinate::new(1, 1));
        // no winner, but 6 cells still open
        assert!(!is_draw(&lines, 3, &x, &o));
    }
}
