use rand::RngExt;
use rand::rng;
use rand::seq::SliceRandom;

use crate::difficulty::Difficulty;
use crate::grid::{BOX_SIZE, GRID_SIZE, Grid, empty_grid};

/// A freshly generated game: the full solution and the carved puzzle.
/// Every nonzero puzzle cell equals the corresponding solution cell.
#[derive(Clone, Copy, Debug)]
pub struct GeneratedPuzzle {
    pub solution: Grid,
    pub puzzle: Grid,
}

/// Check if placing `val` at (row, col) would collide with the same value
/// in the row, column, or 3x3 box.
fn is_safe(grid: &Grid, row: usize, col: usize, val: u8) -> bool {
    for x in 0..GRID_SIZE {
        if grid[row][x] == val || grid[x][col] == val {
            return false;
        }
    }
    let box_r = (row / BOX_SIZE) * BOX_SIZE;
    let box_c = (col / BOX_SIZE) * BOX_SIZE;
    for r in box_r..box_r + BOX_SIZE {
        for c in box_c..box_c + BOX_SIZE {
            if grid[r][c] == val {
                return false;
            }
        }
    }
    true
}

/// Fill the grid in place by randomized backtracking. Returns true on
/// success. Candidates are tried in shuffled order so repeated calls
/// produce structurally different solutions.
///
/// Starting from an empty grid this always succeeds; a false return at the
/// top level means the grid was seeded with a conflicting value.
pub fn fill_grid<R: RngExt + ?Sized>(grid: &mut Grid, rng: &mut R) -> bool {
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            if grid[row][col] == 0 {
                let mut vals: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
                vals.shuffle(rng);
                for val in vals {
                    if is_safe(grid, row, col, val) {
                        grid[row][col] = val;
                        if fill_grid(grid, rng) {
                            return true;
                        }
                        grid[row][col] = 0;
                    }
                }
                return false;
            }
        }
    }
    true
}

/// Carve a puzzle out of `solution` by zeroing random cells until exactly
/// `clue_count` nonzero cells remain. Does not mutate `solution`.
///
/// No uniqueness check is performed: low clue counts may admit alternate
/// completions distinct from the stored solution.
pub fn carve<R: RngExt + ?Sized>(solution: &Grid, clue_count: usize, rng: &mut R) -> Grid {
    let mut puzzle = *solution;
    let mut to_remove = GRID_SIZE * GRID_SIZE - clue_count;

    while to_remove > 0 {
        let row = rng.random_range(0..GRID_SIZE);
        let col = rng.random_range(0..GRID_SIZE);
        if puzzle[row][col] != 0 {
            puzzle[row][col] = 0;
            to_remove -= 1;
        }
    }
    puzzle
}

/// Generate a solution/puzzle pair with an explicit random source, so
/// seeded generation is reproducible.
pub fn generate_with_rng<R: RngExt + ?Sized>(
    difficulty: Difficulty,
    rng: &mut R,
) -> GeneratedPuzzle {
    let mut solution = empty_grid();
    let filled = fill_grid(&mut solution, rng);
    assert!(filled, "an empty grid is always fillable");

    let puzzle = carve(&solution, difficulty.clue_count(), rng);
    GeneratedPuzzle { solution, puzzle }
}

/// Generate a solution/puzzle pair using the thread-local RNG.
pub fn generate(difficulty: Difficulty) -> GeneratedPuzzle {
    generate_with_rng(difficulty, &mut rng())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn assert_valid_solution(grid: &Grid) {
        for i in 0..9 {
            let mut row_seen = [false; 10];
            let mut col_seen = [false; 10];
            let mut box_seen = [false; 10];
            let box_r = (i / 3) * 3;
            let box_c = (i % 3) * 3;
            for j in 0..9 {
                let rv = grid[i][j] as usize;
                let cv = grid[j][i] as usize;
                let bv = grid[box_r + j / 3][box_c + j % 3] as usize;
                assert!((1..=9).contains(&rv), "row {i} holds {rv}");
                assert!(!row_seen[rv], "duplicate {rv} in row {i}");
                assert!(!col_seen[cv], "duplicate {cv} in col {i}");
                assert!(!box_seen[bv], "duplicate {bv} in box {i}");
                row_seen[rv] = true;
                col_seen[cv] = true;
                box_seen[bv] = true;
            }
        }
    }

    #[test]
    fn fill_produces_valid_solution() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = empty_grid();
        assert!(fill_grid(&mut grid, &mut rng));
        assert_valid_solution(&grid);
    }

    #[test]
    fn fill_fails_on_conflicting_seed() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut grid = empty_grid();
        // Two 5s in row 0 make the grid unsolvable from the start.
        grid[0][0] = 5;
        grid[0][1] = 5;
        assert!(!fill_grid(&mut grid, &mut rng));
    }

    #[test]
    fn carve_retains_exact_clue_count() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut solution = empty_grid();
        fill_grid(&mut solution, &mut rng);

        let puzzle = carve(&solution, 35, &mut rng);
        let nonzero = puzzle.iter().flatten().filter(|&&v| v != 0).count();
        let zero = puzzle.iter().flatten().filter(|&&v| v == 0).count();
        assert_eq!(nonzero, 35);
        assert_eq!(zero, 46);

        for r in 0..9 {
            for c in 0..9 {
                if puzzle[r][c] != 0 {
                    assert_eq!(puzzle[r][c], solution[r][c]);
                }
            }
        }
    }

    #[test]
    fn carve_easy_from_known_grid() {
        // Shifted-pattern solution; row 0 is 1..=9 in order.
        let mut solution = empty_grid();
        for r in 0..9 {
            for c in 0..9 {
                solution[r][c] = ((r * 3 + r / 3 + c) % 9 + 1) as u8;
            }
        }
        assert_eq!(solution[0], [1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_valid_solution(&solution);

        let mut rng = StdRng::seed_from_u64(6);
        let puzzle = carve(&solution, 35, &mut rng);
        assert_eq!(puzzle.iter().flatten().filter(|&&v| v == 0).count(), 46);
        assert_eq!(puzzle.iter().flatten().filter(|&&v| v != 0).count(), 35);
        for r in 0..9 {
            for c in 0..9 {
                assert!(puzzle[r][c] == 0 || puzzle[r][c] == solution[r][c]);
            }
        }
    }

    #[test]
    fn carve_does_not_mutate_solution() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut solution = empty_grid();
        fill_grid(&mut solution, &mut rng);
        let before = solution;
        let _ = carve(&solution, 22, &mut rng);
        assert_eq!(solution, before);
    }

    #[test]
    fn generate_honors_difficulty_clue_counts() {
        for &difficulty in Difficulty::all() {
            let mut rng = StdRng::seed_from_u64(5);
            let generated = generate_with_rng(difficulty, &mut rng);
            assert_valid_solution(&generated.solution);
            let clues = generated
                .puzzle
                .iter()
                .flatten()
                .filter(|&&v| v != 0)
                .count();
            assert_eq!(clues, difficulty.clue_count());
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = generate_with_rng(Difficulty::Medium, &mut StdRng::seed_from_u64(42));
        let b = generate_with_rng(Difficulty::Medium, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.solution, b.solution);
        assert_eq!(a.puzzle, b.puzzle);
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate_with_rng(Difficulty::Easy, &mut StdRng::seed_from_u64(7));
        let b = generate_with_rng(Difficulty::Easy, &mut StdRng::seed_from_u64(8));
        assert_ne!(a.solution, b.solution);
    }
}
