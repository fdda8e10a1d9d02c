use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rand::Rng;

use crate::dataset::sample::{sample_group, PuzzleRow};
use crate::dataset::{self, csvio};
use crate::models::{string_to_grid, Board, Difficulty};

pub fn run() {
    let dir = dataset::shard_dir();
    if !dir.exists() {
        eprintln!("Error: {} not found!", dir.display());
        std::process::exit(1);
    }

    let pool = collect_puzzles();

    let out_dir = dataset::boards_dir();
    if let Err(e) = fs::create_dir_all(&out_dir) {
        eprintln!("Failed to create {}: {}", out_dir.display(), e);
        std::process::exit(1);
    }

    let mut rng = rand::rng();
    match extract_and_save(&pool, &out_dir, &mut rng) {
        Ok(count) => {
            println!("\nSuccessfully created {} board files", count);
            println!("Output directory: {}", out_dir.display());
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Reads every shard and groups its rows by difficulty label. Unknown
/// rows are never collected.
fn collect_puzzles() -> HashMap<Difficulty, Vec<PuzzleRow>> {
    let mut pool: HashMap<Difficulty, Vec<PuzzleRow>> = Difficulty::SAMPLED
        .iter()
        .map(|&d| (d, Vec::new()))
        .collect();

    println!("Collecting puzzles from CSV files...");

    for file_num in 1..=dataset::SHARD_COUNT {
        let path = dataset::shard_path(file_num);
        let name = dataset::file_name(&path);
        if !path.exists() {
            println!("Warning: {} not found, skipping...", name);
            continue;
        }

        println!("Reading {}...", name);
        let (header, rows) = match csvio::read_rows(&path) {
            Ok(parsed) => parsed,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        let columns = (
            csvio::find_column(&header, "puzzle"),
            csvio::find_column(&header, "solution"),
            csvio::find_column(&header, dataset::DIFFICULTY_COLUMN),
        );
        let (Some(puzzle_idx), Some(solution_idx), Some(difficulty_idx)) = columns else {
            eprintln!("  Error: Required column not found in {}", name);
            continue;
        };

        let needed = puzzle_idx.max(solution_idx).max(difficulty_idx);
        let mut count = 0;
        for row in rows {
            if row.len() <= needed {
                continue;
            }
            let Some(difficulty) = Difficulty::from_label(&row[difficulty_idx]) else {
                continue;
            };
            if let Some(group) = pool.get_mut(&difficulty) {
                group.push(PuzzleRow {
                    puzzle: row[puzzle_idx].clone(),
                    solution: row[solution_idx].clone(),
                    difficulty,
                });
                count += 1;
            }
        }
        println!("  Collected {} puzzles", dataset::thousands(count));
    }

    println!("\nCollected puzzles by difficulty:");
    for d in Difficulty::SAMPLED {
        println!("  {}: {}", d.label(), dataset::thousands(pool[&d].len()));
    }

    pool
}

/// Samples each difficulty group and writes the picks as board1.json,
/// board2.json, ... numbering sequentially across groups. Returns the
/// number of boards written.
fn extract_and_save<R: Rng + ?Sized>(
    pool: &HashMap<Difficulty, Vec<PuzzleRow>>,
    out_dir: &Path,
    rng: &mut R,
) -> Result<usize, String> {
    println!(
        "\nExtracting {} puzzles per difficulty...",
        dataset::PUZZLES_PER_DIFFICULTY
    );

    let mut board_num = 0;
    for difficulty in Difficulty::SAMPLED {
        let available = &pool[&difficulty];
        if available.len() < dataset::PUZZLES_PER_DIFFICULTY {
            println!(
                "Warning: Only {} {} puzzles available, using all of them",
                available.len(),
                difficulty.label()
            );
        }

        let selected = sample_group(available, dataset::PUZZLES_PER_DIFFICULTY, rng);
        println!("  {}: Selected {} puzzles", difficulty.label(), selected.len());

        for row in selected {
            board_num += 1;
            let board = Board {
                puzzle: string_to_grid(&row.puzzle),
                solution: string_to_grid(&row.solution),
                difficulty: row.difficulty,
            };
            let path = out_dir.join(format!("board{}.json", board_num));
            let json = serde_json::to_string_pretty(&board)
                .map_err(|e| format!("Failed to serialize board: {}", e))?;
            fs::write(&path, json)
                .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
        }
    }

    Ok(board_num)
}
