use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::{file_name, thousands};

/// Splits `data_rows` rows across `shard_count` shards: base size by
/// integer division, one extra row for each of the first `remainder`
/// shards. Sizes sum to `data_rows` and differ by at most one.
pub fn shard_sizes(data_rows: usize, shard_count: usize) -> Vec<usize> {
    let base = data_rows / shard_count;
    let remainder = data_rows % shard_count;
    (0..shard_count)
        .map(|i| base + usize::from(i < remainder))
        .collect()
}

fn count_lines(path: &Path) -> Result<usize, String> {
    let file =
        File::open(path).map_err(|e| format!("Failed to open {}: {}", path.display(), e))?;
    let mut count = 0;
    for line in BufReader::new(file).lines() {
        line.map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        count += 1;
    }
    Ok(count)
}

/// Splits the source CSV into sudoku_1.csv .. sudoku_N.csv under
/// `out_dir`, repeating the header in every shard and preserving row
/// order across shard boundaries.
pub fn split_source(input: &Path, out_dir: &Path, shard_count: usize) -> Result<(), String> {
    println!(
        "Splitting {} into {} files...",
        input.display(),
        shard_count
    );

    println!("Counting lines in CSV file...");
    let total_lines = count_lines(input)?;
    println!("Total lines: {}", thousands(total_lines));

    let data_rows = total_lines.saturating_sub(1);
    let sizes = shard_sizes(data_rows, shard_count);
    println!("Lines per file: ~{}", thousands(data_rows / shard_count));

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(input)
        .map_err(|e| format!("Failed to open {}: {}", input.display(), e))?;
    let mut records = reader.records();

    let header = match records.next() {
        Some(Ok(record)) => record,
        Some(Err(e)) => return Err(format!("Failed to read {}: {}", input.display(), e)),
        None => return Err(format!("{} is empty", input.display())),
    };

    for (i, &size) in sizes.iter().enumerate() {
        let out_path = out_dir.join(format!("sudoku_{}.csv", i + 1));
        println!("Creating {}...", file_name(&out_path));

        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(&out_path)
            .map_err(|e| format!("Failed to write {}: {}", out_path.display(), e))?;
        writer
            .write_record(&header)
            .map_err(|e| format!("Failed to write {}: {}", out_path.display(), e))?;

        let mut written = 0;
        while written < size {
            match records.next() {
                Some(Ok(record)) => {
                    writer
                        .write_record(&record)
                        .map_err(|e| format!("Failed to write {}: {}", out_path.display(), e))?;
                    written += 1;
                }
                Some(Err(e)) => return Err(format!("Failed to read {}: {}", input.display(), e)),
                None => break,
            }
        }
        writer
            .flush()
            .map_err(|e| format!("Failed to write {}: {}", out_path.display(), e))?;
        println!(
            "  Wrote {} lines to {}",
            thousands(written),
            file_name(&out_path)
        );
    }

    println!();
    println!("Successfully split CSV into {} files", shard_count);
    println!("Output directory: {}", out_dir.display());
    Ok(())
}
