use std::fs;
use std::path::Path;

use crate::dataset::{self, board_files};
use crate::models::{board, Board};

pub fn run() {
    let dir = dataset::boards_dir();
    if !dir.exists() {
        eprintln!("Error: {} not found!", dir.display());
        std::process::exit(1);
    }

    println!("Reformatting board JSON files in {}...", dir.display());

    let files = match board_files(&dir) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    println!("Found {} board files\n", files.len());

    for path in &files {
        println!("Reformatting {}...", dataset::file_name(path));
        if let Err(e) = reformat_file(path) {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    println!("\nSuccessfully reformatted {} board files", files.len());
}

fn reformat_file(path: &Path) -> Result<(), String> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let parsed: Board = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;

    fs::write(path, board::render_compact(&parsed))
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{string_to_grid, Difficulty};

    #[test]
    fn test_reformat_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board1.json");
        let puzzle =
            "003020600900305001001806400008102900700000008006708200002609500800203009005010300";
        let board = Board {
            puzzle: string_to_grid(puzzle),
            solution: string_to_grid(puzzle),
            difficulty: Difficulty::Easy,
        };
        fs::write(&path, serde_json::to_string_pretty(&board).unwrap()).unwrap();

        reformat_file(&path).unwrap();
        let first = fs::read_to_string(&path).unwrap();
        assert!(first.contains("    [0, 0, 3, 0, 2, 0, 6, 0, 0],\n"));

        reformat_file(&path).unwrap();
        let second = fs::read_to_string(&path).unwrap();
        assert_eq!(first, second);
    }
}
