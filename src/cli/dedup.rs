use std::path::Path;

use crate::dataset::{self, csvio};

pub fn run() {
    let dir = dataset::shard_dir();
    if !dir.exists() {
        eprintln!("Error: {} not found!", dir.display());
        std::process::exit(1);
    }

    println!(
        "Removing duplicate '{}' columns from {} CSV files...",
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

    let (header, rows) = csvio::read_rows(path)?;
    let occurrences = header
        .iter()
        .filter(|col| col.as_str() == dataset::EMPTY_COUNT_COLUMN)
        .count();

    if occurrences <= 1 {
        println!("  No duplicates found, skipping...");
        return Ok(());
    }

    println!(
        "  Found {} '{}' columns, removing {} duplicate(s)...",
        occurrences,
        dataset::EMPTY_COUNT_COLUMN,
        occurrences - 1
    );

    let (header, rows) =
        csvio::remove_duplicate_columns(header, rows, dataset::EMPTY_COUNT_COLUMN);
    csvio::write_rows(path, &header, &rows)?;

    println!("  Completed {}", name);
    Ok(())
}
