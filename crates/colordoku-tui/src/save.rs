use std::path::PathBuf;

use colordoku_core::SavedGame;

fn save_file_path() -> PathBuf {
    let data_dir = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("colordoku");
    data_dir.join("save.json")
}

/// Persist the snapshot. Failures are the caller's to ignore; losing an
/// autosave is not fatal.
pub fn save(snapshot: &SavedGame) -> std::io::Result<()> {
    let path = save_file_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string(snapshot).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

/// Load the saved snapshot, if any. A missing or unparsable file yields
/// None, which sends the caller to a fresh game at the default difficulty.
pub fn load() -> Option<SavedGame> {
    let data = std::fs::read_to_string(save_file_path()).ok()?;
    serde_json::from_str(&data).ok()
}

/// Remove the snapshot (after a win or when starting a new game).
pub fn clear() {
    let _ = std::fs::remove_file(save_file_path());
}

#[cfg(test)]
mod tests {
    use colordoku_core::SavedGame;

    #[test]
    fn corrupt_snapshot_is_rejected() {
        assert!(serde_json::from_str::<SavedGame>("{not json").is_err());
        assert!(serde_json::from_str::<SavedGame>("{\"difficulty\":\"easy\"}").is_err());
    }

    #[test]
    fn wrong_grid_dimensions_are_rejected() {
        // 8x9 grid: wrong dimensions must not deserialize.
        let rows: Vec<Vec<u8>> = vec![vec![0; 9]; 8];
        let json = format!(
            "{{\"difficulty\":\"easy\",\"solution\":{rows},\"initialGrid\":{rows},\"userGrid\":{rows},\"hintsRemaining\":3,\"elapsedSeconds\":0}}",
            rows = serde_json::to_string(&rows).unwrap()
        );
        assert!(serde_json::from_str::<SavedGame>(&json).is_err());
    }
}
