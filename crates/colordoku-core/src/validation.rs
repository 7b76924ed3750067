use crate::grid::{BOX_SIZE, GRID_SIZE, Grid, Position};

/// Outcome of comparing a user grid against the stored solution.
///
/// Empty cells make the board incorrect but are not listed; only cells
/// holding a wrong nonzero value appear in `incorrect_cells`. UI feedback
/// depends on that distinction (missing vs. wrong).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckResult {
    pub is_correct: bool,
    pub incorrect_cells: Vec<Position>,
}

/// Find every cell that clashes with the value at (row, col): same nonzero
/// value in the same row, column, or 3x3 box. If any clash exists, the
/// changed cell itself is appended last so callers can highlight it along
/// with the offending neighbors. Empty cell or no clashes: empty vec.
pub fn find_conflicts(grid: &Grid, row: usize, col: usize) -> Vec<Position> {
    let value = grid[row][col];
    if value == 0 {
        return Vec::new();
    }

    let mut conflicts = Vec::new();

    for c in 0..GRID_SIZE {
        if c != col && grid[row][c] == value {
            conflicts.push(Position::new(row, c));
        }
    }
    for r in 0..GRID_SIZE {
        if r != row && grid[r][col] == value {
            conflicts.push(Position::new(r, col));
        }
    }
    let box_r = (row / BOX_SIZE) * BOX_SIZE;
    let box_c = (col / BOX_SIZE) * BOX_SIZE;
    for r in box_r..box_r + BOX_SIZE {
        for c in box_c..box_c + BOX_SIZE {
            if r != row && c != col && grid[r][c] == value {
                conflicts.push(Position::new(r, c));
            }
        }
    }

    if !conflicts.is_empty() {
        conflicts.push(Position::new(row, col));
    }
    conflicts
}

/// Compare `user_grid` cell by cell against `solution`. Safe to call on
/// partial grids (the explicit "check" action) as well as full ones (the
/// win check).
pub fn check_solution(user_grid: &Grid, solution: &Grid) -> CheckResult {
    let mut is_correct = true;
    let mut incorrect_cells = Vec::new();

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let v = user_grid[row][col];
            if v == 0 || v != solution[row][col] {
                is_correct = false;
                if v != 0 {
                    incorrect_cells.push(Position::new(row, col));
                }
            }
        }
    }

    CheckResult {
        is_correct,
        incorrect_cells,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::generate::fill_grid;
    use crate::grid::empty_grid;

    fn solved_grid(seed: u64) -> Grid {
        let mut grid = empty_grid();
        fill_grid(&mut grid, &mut StdRng::seed_from_u64(seed));
        grid
    }

    #[test]
    fn empty_cell_has_no_conflicts() {
        let grid = empty_grid();
        assert!(find_conflicts(&grid, 4, 4).is_empty());
    }

    #[test]
    fn solved_grid_has_no_conflicts() {
        let grid = solved_grid(10);
        for r in 0..9 {
            for c in 0..9 {
                assert!(find_conflicts(&grid, r, c).is_empty());
            }
        }
    }

    #[test]
    fn row_conflict_lists_neighbor_then_self() {
        let mut grid = empty_grid();
        grid[2][1] = 7;
        grid[2][6] = 7;
        let conflicts = find_conflicts(&grid, 2, 6);
        assert_eq!(
            conflicts,
            vec![Position::new(2, 1), Position::new(2, 6)]
        );
    }

    #[test]
    fn box_conflict_detected_across_rows() {
        let mut grid = empty_grid();
        grid[0][0] = 3;
        grid[1][1] = 3;
        let conflicts = find_conflicts(&grid, 1, 1);
        assert_eq!(
            conflicts,
            vec![Position::new(0, 0), Position::new(1, 1)]
        );
    }

    #[test]
    fn conflicts_are_symmetric() {
        let mut grid = empty_grid();
        grid[5][2] = 9;
        grid[8][2] = 9;
        let from_a = find_conflicts(&grid, 5, 2);
        let from_b = find_conflicts(&grid, 8, 2);
        assert!(from_a.contains(&Position::new(8, 2)));
        assert!(from_b.contains(&Position::new(5, 2)));
    }

    #[test]
    fn check_solution_against_itself_is_correct() {
        let solution = solved_grid(11);
        let result = check_solution(&solution, &solution);
        assert!(result.is_correct);
        assert!(result.incorrect_cells.is_empty());
    }

    #[test]
    fn single_wrong_cell_is_listed() {
        let solution = solved_grid(12);
        let mut user = solution;
        let wrong = if solution[3][4] == 1 { 2 } else { 1 };
        user[3][4] = wrong;
        let result = check_solution(&user, &solution);
        assert!(!result.is_correct);
        assert_eq!(result.incorrect_cells, vec![Position::new(3, 4)]);
    }

    #[test]
    fn single_missing_cell_is_not_listed() {
        let solution = solved_grid(13);
        let mut user = solution;
        user[6][0] = 0;
        let result = check_solution(&user, &solution);
        assert!(!result.is_correct);
        assert!(result.incorrect_cells.is_empty());
    }
}
