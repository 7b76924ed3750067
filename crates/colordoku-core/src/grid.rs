use serde::{Deserialize, Serialize};

/// A cell holds 0 (empty) or one of the nine color values 1-9.
pub type CellValue = u8;

/// 9x9 matrix of cell values. A solution grid has no zeros and satisfies
/// the row/column/box uniqueness invariant; a puzzle grid is a solution
/// with some cells zeroed out.
pub type Grid = [[CellValue; 9]; 9];

/// Number of color values (and of rows, columns, and boxes).
pub const GRID_SIZE: usize = 9;

/// Side length of one of the nine non-overlapping sub-boxes.
pub const BOX_SIZE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Index of the 3x3 box containing this position: `box_row * 3 + box_col`.
    pub fn box_index(&self) -> usize {
        (self.row / BOX_SIZE) * BOX_SIZE + self.col / BOX_SIZE
    }
}

/// An all-zero grid, the starting point for generation.
pub fn empty_grid() -> Grid {
    [[0; GRID_SIZE]; GRID_SIZE]
}

/// True if every cell is nonzero. Says nothing about correctness.
pub fn is_filled(grid: &Grid) -> bool {
    grid.iter().all(|row| row.iter().all(|&v| v != 0))
}
