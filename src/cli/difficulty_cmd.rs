use std::path::Path;

use crate::dataset::{self, csvio};
use crate::models::Difficulty;

pub fn run() {
    let dir = dataset::shard_dir();
    if !dir.exists() {
        eprintln!("Error: {} not found!", dir.display());
        std::process::exit(1);
    }

    println!(
        "Adding '{}' column to {} CSV files...",
        dataset::DIFFICULTY_COLUMN,
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
        // A bad file reports its error and the batch moves on.
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
    let count_idx = csvio::find_column(&header, dataset::EMPTY_COUNT_COLUMN).ok_or_else(|| {
        format!(
            "  Error: '{}' column not found in {}",
            dataset::EMPTY_COUNT_COLUMN,
            name
        )
    })?;

    header.push(dataset::DIFFICULTY_COLUMN.to_string());

    let mut out = Vec::with_capacity(rows.len());
    for mut row in rows {
        if row.len() > count_idx {
            let label = Difficulty::classify(&row[count_idx]).label();
            row.push(label.to_string());
            out.push(row);
        }
    }

    let processed = out.len();
    csvio::write_rows(path, &header, &out)?;

    println!("  Processed {} rows", dataset::thousands(processed));
    println!("  Completed {}", name);
    Ok(())
}
