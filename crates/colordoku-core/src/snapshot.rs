use serde::{Deserialize, Serialize};

use crate::difficulty::Difficulty;
use crate::grid::Grid;

/// Opaque snapshot exchanged with the persistence layer. The core performs
/// no storage I/O itself; key naming and corrupt-snapshot handling belong
/// to the collaborator, with the contract that an unparsable or missing
/// snapshot triggers a fresh game at the default difficulty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGame {
    pub difficulty: Difficulty,
    pub solution: Grid,
    /// The carved puzzle as handed to the player; nonzero cells are clues.
    pub initial_grid: Grid,
    /// The player's current board, clues included.
    pub user_grid: Grid,
    pub hints_remaining: u32,
    pub elapsed_seconds: u64,
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::generate::generate_with_rng;

    #[test]
    fn snapshot_uses_camel_case_keys() {
        let generated = generate_with_rng(Difficulty::Easy, &mut StdRng::seed_from_u64(30));
        let saved = SavedGame {
            difficulty: Difficulty::Easy,
            solution: generated.solution,
            initial_grid: generated.puzzle,
            user_grid: generated.puzzle,
            hints_remaining: 5,
            elapsed_seconds: 90,
        };
        let json = serde_json::to_string(&saved).unwrap();
        assert!(json.contains("\"initialGrid\""));
        assert!(json.contains("\"userGrid\""));
        assert!(json.contains("\"hintsRemaining\""));
        assert!(json.contains("\"elapsedSeconds\""));
        assert!(json.contains("\"difficulty\":\"easy\""));

        let restored: SavedGame = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, saved);
    }
}
