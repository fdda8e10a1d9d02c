use std::path::Path;

use crate::dataset::{self, csvio};
use crate::models::empty_cell_count;

pub fn run() {
    let dir = dataset::shard_dir();
    if !dir.exists() {
        eprintln!("Error: {} not found!", dir.display());
        std::process::exit(1);
    }

    println!(
        "Adding '{}' column to {} CSV files...",
        dataset::EMPTY_COUNT_COLUMN,
        dataset::SHARD_COUNT
    );
    println!("Directory: {}\n", dir.display());

    for file_num in 1..=dataset::SHARD_COUNT {
        let path = dataset::shard_path(file_num);
        if !path.exists() {
            println!(
                "Warning: {} not found, skipping...",
                dataset::file_name(&path)
            );
            continue;
        }
        if let Err(e) = process_file(&path) {
            eprintln!("{}", e);
        }
    }

    println!("\nSuccessfully processed all files");
    println!("Output directory: {}", dir.display());
}

fn process_file(path: &Path) -> Result<(), String> {
    let name = dataset::file_name(path);
    println!("Processing {}...", name);

    let (mut header, rows) = csvio::read_rows(path)?;
    header.push(dataset::EMPTY_COUNT_COLUMN.to_string());

    // Rows without both puzzle and solution fields are dropped.
    let mut out = Vec::with_capacity(rows.len());
    for mut row in rows {
        if row.len() >= 2 {
            let count = empty_cell_count(&row[0]);
            row.push(count.to_string());
            out.push(row);
        }
    }

    let processed = out.len();
    csvio::write_rows(path, &header, &out)?;

    println!("  Processed {} rows", dataset::thousands(processed));
    println!("  Completed {}", name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_process_file_appends_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sudoku_1.csv");
        let puzzle = "003020600".repeat(9);
        fs::write(
            &path,
            format!("puzzle,solution\n{},{}\nshort\n", puzzle, "4".repeat(81)),
        )
        .unwrap();

        process_file(&path).unwrap();

        let (header, rows) = csvio::read_rows(&path).unwrap();
        assert_eq!(
            header,
            vec!["puzzle", "solution", "empty cell count"]
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>()
        );
        // the single-field row is dropped
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][2], "54");
    }
}
