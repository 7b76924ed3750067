pub mod completion;
pub mod difficulty;
pub mod generate;
pub mod grid;
pub mod hint;
pub mod snapshot;
pub mod validation;

pub use completion::{CompletionScan, scan_completion};
pub use difficulty::Difficulty;
pub use generate::{GeneratedPuzzle, generate, generate_with_rng};
pub use grid::{CellValue, Grid, Position};
pub use hint::hint_value;
pub use snapshot::SavedGame;
pub use validation::{CheckResult, check_solution, find_conflicts};
