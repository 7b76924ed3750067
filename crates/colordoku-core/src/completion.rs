use crate::grid::{BOX_SIZE, GRID_SIZE, Grid};

/// Fill-progress report for a grid. "Complete" means every cell of the
/// unit is nonzero, regardless of whether the values are correct; this
/// drives completion toasts and animations, not win detection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompletionScan {
    pub complete_rows: Vec<usize>,
    pub complete_cols: Vec<usize>,
    /// Box index is `box_row * 3 + box_col`.
    pub complete_boxes: Vec<usize>,
    /// `color_counts[v - 1]` is how many cells currently hold value `v`.
    pub color_counts: [u8; 9],
}

impl CompletionScan {
    /// True once all nine instances of `value` are on the board.
    pub fn is_color_exhausted(&self, value: u8) -> bool {
        self.color_counts[value as usize - 1] >= GRID_SIZE as u8
    }
}

/// Scan the grid for filled rows, columns, and boxes, and tally how many
/// cells hold each color.
pub fn scan_completion(grid: &Grid) -> CompletionScan {
    let mut scan = CompletionScan::default();

    for i in 0..GRID_SIZE {
        if (0..GRID_SIZE).all(|c| grid[i][c] != 0) {
            scan.complete_rows.push(i);
        }
        if (0..GRID_SIZE).all(|r| grid[r][i] != 0) {
            scan.complete_cols.push(i);
        }
    }

    for box_r in 0..BOX_SIZE {
        for box_c in 0..BOX_SIZE {
            let full = (0..GRID_SIZE).all(|i| {
                grid[box_r * BOX_SIZE + i / BOX_SIZE][box_c * BOX_SIZE + i % BOX_SIZE] != 0
            });
            if full {
                scan.complete_boxes.push(box_r * BOX_SIZE + box_c);
            }
        }
    }

    for row in grid {
        for &v in row {
            if v != 0 {
                scan.color_counts[v as usize - 1] += 1;
            }
        }
    }

    scan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::empty_grid;

    #[test]
    fn empty_grid_reports_nothing_complete() {
        let scan = scan_completion(&empty_grid());
        assert!(scan.complete_rows.is_empty());
        assert!(scan.complete_cols.is_empty());
        assert!(scan.complete_boxes.is_empty());
        assert_eq!(scan.color_counts, [0; 9]);
    }

    #[test]
    fn full_row_with_duplicates_still_counts() {
        let mut grid = empty_grid();
        // Row 3 is filled but wrong: two 5s, no 6.
        grid[3] = [1, 2, 3, 4, 5, 5, 7, 8, 9];
        let scan = scan_completion(&grid);
        assert_eq!(scan.complete_rows, vec![3]);
        assert!(scan.complete_cols.is_empty());
        assert_eq!(scan.color_counts[4], 2);
        assert_eq!(scan.color_counts[5], 0);
    }

    #[test]
    fn full_box_is_reported_by_index() {
        let mut grid = empty_grid();
        for r in 3..6 {
            for c in 6..9 {
                grid[r][c] = 1;
            }
        }
        let scan = scan_completion(&grid);
        assert_eq!(scan.complete_boxes, vec![5]);
        assert_eq!(scan.color_counts[0], 9);
        assert!(scan.is_color_exhausted(1));
        assert!(!scan.is_color_exhausted(2));
    }

    #[test]
    fn full_column_is_reported() {
        let mut grid = empty_grid();
        for r in 0..9 {
            grid[r][0] = (r + 1) as u8;
        }
        let scan = scan_completion(&grid);
        assert_eq!(scan.complete_cols, vec![0]);
        assert!(scan.complete_rows.is_empty());
    }
}
