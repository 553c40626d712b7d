/// Best-score persistence — a single integer in a dot-file.
///
/// Reads fall back to 0 and writes are best-effort: storage trouble must
/// never interrupt gameplay.

use std::path::{Path, PathBuf};

/// Default store location: `$HOME/.cyber_shooter_score`.
pub fn default_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".cyber_shooter_score")
}

/// Load the stored best score; 0 if the file is missing or malformed.
pub fn load(path: &Path) -> u32 {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}

/// Persist a new best score, ignoring write failures.
pub fn save(path: &Path, score: u32) {
    let _ = std::fs::write(path, score.to_string());
}
