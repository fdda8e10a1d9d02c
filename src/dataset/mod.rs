pub mod csvio;
pub mod sample;
pub mod shard;

use std::path::{Path, PathBuf};

pub const SHARD_DIR: &str = "kaggle_sudokus";
pub const SOURCE_CSV: &str = "sudoku.csv";
pub const SHARD_COUNT: usize = 20;
pub const PUZZLES_PER_DIFFICULTY: usize = 10;
pub const COMBINED_FILE: &str = "boards.json";

pub const EMPTY_COUNT_COLUMN: &str = "empty cell count";
pub const DIFFICULTY_COLUMN: &str = "Difficulty";

pub fn shard_dir() -> PathBuf {
    PathBuf::from(SHARD_DIR)
}

pub fn source_path() -> PathBuf {
    shard_dir().join(SOURCE_CSV)
}

pub fn shard_path(file_num: usize) -> PathBuf {
    shard_dir().join(format!("sudoku_{}.csv", file_num))
}

pub fn boards_dir() -> PathBuf {
    Path::new("data").join("boards")
}

pub fn board_path(board_num: usize) -> PathBuf {
    boards_dir().join(format!("board{}.json", board_num))
}

/// Lists boardN.json files in a directory, sorted by N. Files whose name
/// doesn't carry a numeric suffix (boards.json in particular) are skipped.
pub fn board_files(dir: &Path) -> Result<Vec<PathBuf>, String> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| format!("Failed to read {}: {}", dir.display(), e))?;

    let mut numbered = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| format!("Failed to read {}: {}", dir.display(), e))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        let Some(num) = name
            .strip_prefix("board")
            .and_then(|rest| rest.strip_suffix(".json"))
            .and_then(|n| n.parse::<u32>().ok())
        else {
            continue;
        };
        numbered.push((num, entry.path()));
    }

    numbered.sort_by_key(|(num, _)| *num);
    Ok(numbered.into_iter().map(|(_, path)| path).collect())
}

pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Formats a count with thousands separators, the way the progress
/// output reports row counts.
pub fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(450000), "450,000");
        assert_eq!(thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_board_files_numeric_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["board2.json", "board10.json", "board1.json", "boards.json", "notes.txt"] {
            fs::write(dir.path().join(name), "{}").unwrap();
        }

        let files = board_files(dir.path()).unwrap();
        let names: Vec<String> = files.iter().map(|p| file_name(p)).collect();
        assert_eq!(names, ["board1.json", "board2.json", "board10.json"]);
    }
}
