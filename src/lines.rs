//! Winning-line generation for arbitrary board sizes.
//!
//! A game on a `size` x `size` board has `2 * size + 2` ways to win:
//! every row, every column, and the two diagonals. The full collection
//! is generated once when a game starts and consulted read-only after
//! every placement.

use crate::types::Coordinate;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which line of the board a winning line covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Horizontal line through the given row.
    Row(usize),
    /// Vertical line through the given column.
    Column(usize),
    /// Top-left to bottom-right diagonal.
    MainDiagonal,
    /// Bottom-left to top-right diagonal.
    AntiDiagonal,
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineKind::Row(row) => write!(f, "row {}", row),
            LineKind::Column(col) => write!(f, "column {}", col),
            LineKind::MainDiagonal => write!(f, "main diagonal"),
            LineKind::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// One way to win: a full row, column, or diagonal.
///
/// Holds exactly `size` distinct coordinates. The kind tag records
/// which line of the board the cells cover, for display and debugging;
/// rule evaluation depends only on membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    kind: LineKind,
    cells: Vec<Coordinate>,
}

impl WinningLine {
    /// Returns which line of the board this is.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Returns the cells of the line.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Number of cells in the line (the board size).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Checks whether the line has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Checks whether the line passes through a cell.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells.contains(&coord)
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

/// The complete set of winning lines for one board size.
///
/// Immutable once generated; a new game with a different size generates
/// a fresh collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLines {
    size: usize,
    lines: Vec<WinningLine>,
}

impl WinningLines {
    /// Generates all winning lines for a `size` x `size` board.
    ///
    /// Emits rows first, then columns, then the main and anti
    /// diagonals. Consumers must rely on membership only, not on the
    /// emission order.
    ///
    /// Callers validate `size >= 1` before starting a game; see
    /// [`GameSetup::start`](crate::GameSetup::start). A 1x1 board is a
    /// legitimate boundary: four one-cell lines, so a single mark wins.
    #[instrument]
    pub fn generate(size: usize) -> Self {
        let mut lines = Vec::with_capacity(2 * size + 2);

        for row in 0..size {
            let cells = (0..size).map(|col| Coordinate::new(row, col)).collect();
            lines.push(WinningLine {
                kind: LineKind::Row(row),
                cells,
            });
        }

        for col in 0..size {
            let cells = (0..size).map(|row| Coordinate::new(row, col)).collect();
            lines.push(WinningLine {
                kind: LineKind::Column(col),
                cells,
            });
        }

        lines.push(WinningLine {
            kind: LineKind::MainDiagonal,
            cells: (0..size).map(|i| Coordinate::new(i, i)).collect(),
        });
        lines.push(WinningLine {
            kind: LineKind::AntiDiagonal,
            cells: (0..size).map(|i| Coordinate::new(size - 1 - i, i)).collect(),
        });

        Self { size, lines }
    }

    /// The board size the lines were generated for.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of winning lines (`2 * size + 2`).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Checks whether there are no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterates over the winning lines.
    pub fn iter(&self) -> std::slice::Iter<'_, WinningLine> {
        self.lines.iter()
    }
}

impl<'a> IntoIterator for &'a WinningLines {
    type Item = &'a WinningLine;
    type IntoIter = std::slice::Iter<'a, WinningLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
