use std::fs;
use std::path::Path;

use crate::dataset;
use crate::models::{board, Difficulty, NumberedBoard};

pub fn run() {
    let dir = dataset::boards_dir();
    let input = dir.join(dataset::COMBINED_FILE);
    if !input.exists() {
        eprintln!("Error: {} not found!", input.display());
        std::process::exit(1);
    }

    if let Err(e) = split_combined(&input, &dir) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn split_combined(input: &Path, out_dir: &Path) -> Result<(), String> {
    let raw = fs::read_to_string(input)
        .map_err(|e| format!("Failed to read {}: {}", input.display(), e))?;
    let boards: Vec<NumberedBoard> = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse {}: {}", input.display(), e))?;

    for (difficulty, group) in group_by_difficulty(boards) {
        let file_name = format!("boards{}.json", difficulty.label());
        let path = out_dir.join(&file_name);
        fs::write(&path, board::render_collection(&group))
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
        println!("Wrote {} with {} boards", file_name, group.len());
    }

    fs::remove_file(input)
        .map_err(|e| format!("Failed to remove {}: {}", input.display(), e))?;
    println!("Removed {}", dataset::file_name(input));
    Ok(())
}

/// Groups boards by difficulty, groups ordered by first appearance and
/// boards keeping their order within each group.
fn group_by_difficulty(boards: Vec<NumberedBoard>) -> Vec<(Difficulty, Vec<NumberedBoard>)> {
    let mut groups: Vec<(Difficulty, Vec<NumberedBoard>)> = Vec::new();
    for board in boards {
        match groups.iter_mut().find(|(d, _)| *d == board.difficulty) {
            Some((_, group)) => group.push(board),
            None => groups.push((board.difficulty, vec![board])),
        }
    }
    groups
}
