use std::time::Instant;

use colordoku_core::completion::scan_completion;
use colordoku_core::validation::{check_solution, find_conflicts};
use colordoku_core::{CompletionScan, Difficulty, GeneratedPuzzle, Grid, Position, SavedGame, hint_value};

use crate::palette;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Generating,
    Playing,
    Paused,
    Won,
}

/// Transient feedback line shown above the board.
#[derive(Clone, Debug)]
pub struct Toast {
    pub title: String,
    pub body: String,
    pub is_error: bool,
    pub shown_at: Instant,
}

impl Toast {
    fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            is_error: false,
            shown_at: Instant::now(),
        }
    }

    fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            is_error: true,
            shown_at: Instant::now(),
        }
    }
}

pub struct Game {
    pub state: GameState,
    pub difficulty: Difficulty,
    pub solution: Grid,
    pub initial_grid: Grid,
    pub user_grid: Grid,
    pub selected_row: usize,
    pub selected_col: usize,
    /// Cells highlighted after the most recent placement clashed.
    pub conflicts: Vec<Position>,
    /// Wrong cells from the last explicit check action.
    pub incorrect: Vec<Position>,
    pub completion: CompletionScan,
    pub hints_remaining: u32,
    pub timer_start: Option<Instant>,
    pub paused_elapsed: u64,
    /// Frozen total at the moment of winning.
    pub elapsed_secs: u64,
    pub toast: Option<Toast>,
    pub show_quit_confirm: bool,
    /// Sequence number of the generation request currently awaited.
    /// Results stamped with an older number are dropped.
    pub generation_seq: u64,
    /// Set after any board mutation; the event loop autosaves and clears it.
    pub dirty: bool,
}

impl Game {
    pub fn new() -> Self {
        Self {
            state: GameState::Menu,
            difficulty: Difficulty::Easy,
            solution: [[0; 9]; 9],
            initial_grid: [[0; 9]; 9],
            user_grid: [[0; 9]; 9],
            selected_row: 4,
            selected_col: 4,
            conflicts: Vec::new(),
            incorrect: Vec::new(),
            completion: CompletionScan::default(),
            hints_remaining: 0,
            timer_start: None,
            paused_elapsed: 0,
            elapsed_secs: 0,
            toast: None,
            show_quit_confirm: false,
            generation_seq: 0,
            dirty: false,
        }
    }

    /// Enter the generating state and claim a new request number.
    /// Cancel-and-replace: a second request while one is in flight bumps
    /// the number again, and the first result is ignored when it lands.
    pub fn begin_generation(&mut self, difficulty: Difficulty) -> u64 {
        self.difficulty = difficulty;
        self.state = GameState::Generating;
        self.generation_seq += 1;
        self.generation_seq
    }

    /// Install a generated puzzle and start play. `seq` must match the
    /// latest request; stale results are dropped.
    pub fn install_puzzle(&mut self, generated: GeneratedPuzzle, seq: u64) {
        if seq != self.generation_seq || self.state != GameState::Generating {
            return;
        }
        self.solution = generated.solution;
        self.initial_grid = generated.puzzle;
        self.user_grid = generated.puzzle;
        self.selected_row = 4;
        self.selected_col = 4;
        self.conflicts.clear();
        self.incorrect.clear();
        self.completion = scan_completion(&self.user_grid);
        self.hints_remaining = self.difficulty.hint_allowance();
        self.timer_start = Some(Instant::now());
        self.paused_elapsed = 0;
        self.elapsed_secs = 0;
        self.toast = None;
        self.show_quit_confirm = false;
        self.state = GameState::Playing;
        self.dirty = true;
    }

    /// Resume from a persisted snapshot.
    pub fn restore(&mut self, saved: SavedGame) {
        self.difficulty = saved.difficulty;
        self.solution = saved.solution;
        self.initial_grid = saved.initial_grid;
        self.user_grid = saved.user_grid;
        self.selected_row = 4;
        self.selected_col = 4;
        self.conflicts.clear();
        self.incorrect.clear();
        self.completion = scan_completion(&self.user_grid);
        self.hints_remaining = saved.hints_remaining;
        self.timer_start = Some(Instant::now());
        self.paused_elapsed = saved.elapsed_seconds;
        self.elapsed_secs = 0;
        self.toast = None;
        self.state = GameState::Playing;
        self.dirty = false;
    }

    pub fn to_snapshot(&self) -> SavedGame {
        SavedGame {
            difficulty: self.difficulty,
            solution: self.solution,
            initial_grid: self.initial_grid,
            user_grid: self.user_grid,
            hints_remaining: self.hints_remaining,
            elapsed_seconds: self.elapsed_secs(),
        }
    }

    pub fn move_cursor(&mut self, dr: i32, dc: i32) {
        self.selected_row = (self.selected_row as i32 + dr).rem_euclid(9) as usize;
        self.selected_col = (self.selected_col as i32 + dc).rem_euclid(9) as usize;
    }

    fn is_editable(&self, row: usize, col: usize) -> bool {
        self.initial_grid[row][col] == 0
    }

    /// Place a color at the cursor, then re-run conflict detection and the
    /// completion scan. Clue cells are immutable.
    pub fn place_color(&mut self, value: u8) {
        self.apply_color(value, true);
    }

    fn apply_color(&mut self, value: u8, enforce_cap: bool) {
        if self.state != GameState::Playing {
            return;
        }
        let (r, c) = (self.selected_row, self.selected_col);
        if !self.is_editable(r, c) {
            return;
        }

        // All nine instances placed elsewhere: nothing left of this color.
        // Hints skip the cap: a misplaced duplicate can make a color read
        // as exhausted while its real cell is still empty, and the revealed
        // value must always land.
        if enforce_cap
            && self.completion.is_color_exhausted(value)
            && self.user_grid[r][c] != value
        {
            self.toast = Some(Toast::error(
                "None left",
                format!("All nine {} cells are already placed.", palette::name(value)),
            ));
            return;
        }

        self.user_grid[r][c] = value;
        self.incorrect.clear();
        self.dirty = true;

        self.conflicts = find_conflicts(&self.user_grid, r, c);
        if !self.conflicts.is_empty() {
            // No completion toasts for a clashing move, but the counts
            // must still include the cell it occupies.
            self.completion = scan_completion(&self.user_grid);
            self.toast = Some(Toast::error(
                "Conflict!",
                format!(
                    "{} clashes with another in the same row, column, or box.",
                    palette::name(value)
                ),
            ));
            return;
        }

        self.refresh_completion(r, c, value);

        if self.user_grid.iter().all(|row| row.iter().all(|&v| v != 0)) {
            let result = check_solution(&self.user_grid, &self.solution);
            if result.is_correct {
                self.win();
            }
        }
    }

    /// Diff the completion scan against the previous one and toast newly
    /// completed rows, columns, boxes, and exhausted colors.
    fn refresh_completion(&mut self, row: usize, col: usize, value: u8) {
        let previous = std::mem::take(&mut self.completion);
        self.completion = scan_completion(&self.user_grid);

        if self.completion.complete_rows.contains(&row) && !previous.complete_rows.contains(&row) {
            self.toast = Some(Toast::info(
                "Row complete!",
                format!("You've filled row {}.", row + 1),
            ));
        } else if self.completion.complete_cols.contains(&col)
            && !previous.complete_cols.contains(&col)
        {
            self.toast = Some(Toast::info(
                "Column complete!",
                format!("You've filled column {}.", col + 1),
            ));
        } else {
            let box_idx = Position::new(row, col).box_index();
            if self.completion.complete_boxes.contains(&box_idx)
                && !previous.complete_boxes.contains(&box_idx)
            {
                self.toast = Some(Toast::info(
                    "Box complete!",
                    format!("You've filled box {}.", box_idx + 1),
                ));
            } else if self.completion.is_color_exhausted(value)
                && !previous.is_color_exhausted(value)
            {
                self.toast = Some(Toast::info(
                    "Color done!",
                    format!("All nine {} cells are placed.", palette::name(value)),
                ));
            }
        }
    }

    pub fn erase(&mut self) {
        if self.state != GameState::Playing {
            return;
        }
        let (r, c) = (self.selected_row, self.selected_col);
        if !self.is_editable(r, c) || self.user_grid[r][c] == 0 {
            return;
        }
        self.user_grid[r][c] = 0;
        self.conflicts.clear();
        self.incorrect.clear();
        self.completion = scan_completion(&self.user_grid);
        self.dirty = true;
    }

    /// Explicit check action: compare against the solution and highlight
    /// wrong cells. Empty cells block a win but are not highlighted.
    pub fn check_board(&mut self) {
        if self.state != GameState::Playing {
            return;
        }
        let result = check_solution(&self.user_grid, &self.solution);
        if result.is_correct {
            self.win();
        } else {
            self.incorrect = result.incorrect_cells;
            let body = if self.incorrect.is_empty() {
                "No mistakes so far, but the board is not finished."
            } else {
                "There are some mistakes on the board. Keep trying!"
            };
            self.toast = Some(Toast::error("Not quite...", body));
        }
    }

    /// Reveal the solution's color at the cursor, routed through the
    /// ordinary placement path.
    pub fn use_hint(&mut self) {
        if self.state != GameState::Playing {
            return;
        }
        let (r, c) = (self.selected_row, self.selected_col);
        if !self.is_editable(r, c) || self.user_grid[r][c] != 0 {
            self.toast = Some(Toast::error("Hint", "Select an empty cell first."));
            return;
        }
        if self.hints_remaining == 0 {
            self.toast = Some(Toast::error("Hint", "No hints remaining."));
            return;
        }
        self.hints_remaining -= 1;
        let value = hint_value(Position::new(r, c), &self.solution);
        self.apply_color(value, false);
    }

    fn win(&mut self) {
        self.elapsed_secs = self.elapsed_secs();
        self.timer_start = None;
        self.state = GameState::Won;
        self.conflicts.clear();
        self.incorrect.clear();
        self.toast = None;
        self.dirty = true;
    }

    pub fn toggle_pause(&mut self) {
        match self.state {
            GameState::Playing => {
                if let Some(start) = self.timer_start {
                    self.paused_elapsed += start.elapsed().as_secs();
                }
                self.timer_start = None;
                self.state = GameState::Paused;
            }
            GameState::Paused => {
                self.timer_start = Some(Instant::now());
                self.state = GameState::Playing;
            }
            _ => {}
        }
    }

    pub fn elapsed_secs(&self) -> u64 {
        match self.state {
            GameState::Won => self.elapsed_secs,
            GameState::Paused => self.paused_elapsed,
            GameState::Playing => {
                self.paused_elapsed
                    + self
                        .timer_start
                        .map(|s| s.elapsed().as_secs())
                        .unwrap_or(0)
            }
            GameState::Menu | GameState::Generating => 0,
        }
    }

    pub fn format_time(&self) -> String {
        let secs = self.elapsed_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    /// How many cells of `value` the player may still place.
    pub fn remaining_of(&self, value: u8) -> u8 {
        9u8.saturating_sub(self.completion.color_counts[value as usize - 1])
    }

    pub fn selected_value(&self) -> u8 {
        self.user_grid[self.selected_row][self.selected_col]
    }

    pub fn is_clue(&self, row: usize, col: usize) -> bool {
        self.initial_grid[row][col] != 0
    }
}
