use crate::grid::{Grid, Position};

/// Reveal the solution's value at the selected cell. Callers route the
/// returned value through the ordinary placement path; since it comes
/// straight from the solution, placing it never registers a conflict.
pub fn hint_value(position: Position, solution: &Grid) -> u8 {
    solution[position.row][position.col]
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::generate::{carve, fill_grid};
    use crate::grid::empty_grid;
    use crate::validation::find_conflicts;

    #[test]
    fn hint_placement_never_conflicts() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut solution = empty_grid();
        fill_grid(&mut solution, &mut rng);
        let mut puzzle = carve(&solution, 22, &mut rng);

        for row in 0..9 {
            for col in 0..9 {
                if puzzle[row][col] != 0 {
                    continue;
                }
                let pos = Position::new(row, col);
                puzzle[row][col] = hint_value(pos, &solution);
                assert!(
                    find_conflicts(&puzzle, row, col).is_empty(),
                    "hint at ({row}, {col}) registered a conflict"
                );
            }
        }
    }
}
