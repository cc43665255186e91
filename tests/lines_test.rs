//! Tests for winning-line generation.

use tictactoe_engine::{Coordinate, LineKind, WinningLines};

#[test]
fn test_count_and_length_for_small_sizes() {
    for size in 1..=8 {
        let lines = WinningLines::generate(size);
        assert_eq!(lines.len(), 2 * size + 2, "size {}", size);
        assert!(lines.iter().all(|line| line.len() == size));
        assert_eq!(lines.size(), size);
    }
}

#[test]
fn test_every_cell_covered_by_one_row_and_one_column() {
    for size in 1..=6 {
        let lines = WinningLines::generate(size);

        for row in 0..size {
            for col in 0..size {
                let cell = Coordinate::new(row, col);

                let row_lines = lines
                    .iter()
                    .filter(|l| matches!(l.kind(), LineKind::Row(_)) && l.contains(cell))
                    .count();
                let col_lines = lines
                    .iter()
                    .filter(|l| matches!(l.kind(), LineKind::Column(_)) && l.contains(cell))
                    .count();

                assert_eq!(row_lines, 1, "cell {} size {}", cell, size);
                assert_eq!(col_lines, 1, "cell {} size {}", cell, size);
            }
        }
    }
}

#[test]
fn test_diagonal_coverage() {
    for size in 2..=6 {
        let lines = WinningLines::generate(size);

        for row in 0..size {
            for col in 0..size {
                let cell = Coordinate::new(row, col);
                let diag_lines = lines
                    .iter()
                    .filter(|l| {
                        matches!(l.kind(), LineKind::MainDiagonal | LineKind::AntiDiagonal)
                            && l.contains(cell)
                    })
                    .count();

                // Only the center of an odd board sits on both diagonals.
                let expected = if size % 2 == 1 && row == size / 2 && col == size / 2 {
                    2
                } else if row == col || row + col == size - 1 {
                    1
                } else {
                    0
                };

                assert_eq!(diag_lines, expected, "cell {} size {}", cell, size);
            }
        }
    }
}

#[test]
fn test_all_cells_in_bounds() {
    for size in 1..=6 {
        let lines = WinningLines::generate(size);
        for line in &lines {
            assert!(line.cells().iter().all(|cell| cell.in_bounds(size)));
        }
    }
}

#[test]
fn test_single_cell_board_has_four_identical_lines() {
    let lines = WinningLines::generate(1);
    assert_eq!(lines.len(), 4);
    assert!(
        lines
            .iter()
            .all(|line| line.cells() == [Coordinate::new(0, 0)])
    );
}

#[test]
fn test_generation_is_deterministic() {
    assert_eq!(WinningLines::generate(5), WinningLines::generate(5));
}
