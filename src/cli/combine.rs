use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::dataset::{self, board_files};
use crate::models::{Board, NumberedBoard};

pub fn run() {
    if let Ok(cwd) = env::current_dir() {
        println!("Working directory: {}", cwd.display());
    }

    let dir = dataset::boards_dir();
    println!("Boards directory: {}", dir.display());
    println!("Boards directory exists: {}", dir.exists());
    if !dir.exists() {
        eprintln!("Error: {} not found!", dir.display());
        std::process::exit(1);
    }

    let boards = match combine_dir(&dir) {
        Ok(boards) => boards,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let output = dir.join(dataset::COMBINED_FILE);
    println!("Writing to: {}", output.display());
    if let Err(e) = write_combined(&output, &boards) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let size = fs::metadata(&output).map(|m| m.len()).unwrap_or(0);
    println!("File written. Exists: {}, Size: {} bytes", output.exists(), size);
    println!("Created {} with {} boards", output.display(), boards.len());
}

/// Reads every boardN.json in ascending numeric order and assigns Ids
/// 1..N in that order.
fn combine_dir(dir: &Path) -> Result<Vec<NumberedBoard>, String> {
    let files: Vec<PathBuf> = board_files(dir)?;
    println!("Found {} board files", files.len());

    let mut boards = Vec::with_capacity(files.len());
    for (idx, path) in files.iter().enumerate() {
        let raw = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let board: Board = serde_json::from_str(&raw)
            .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;
        boards.push(NumberedBoard::new(idx as u32 + 1, board));
    }
    Ok(boards)
}

fn write_combined(path: &Path, boards: &[NumberedBoard]) -> Result<(), String> {
    let json = serde_json::to_string_pretty(boards)
        .map_err(|e| format!("Failed to serialize boards: {}", e))?;
    fs::write(path, json).map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}
