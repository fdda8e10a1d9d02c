use std::collections::HashSet;
use std::path::Path;

/// Reads a CSV file into its header and data rows. Records are read
/// flexibly so rows shorter than the header are kept for the caller to
/// filter, matching how the shard files are processed.
pub fn read_rows(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>), String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| format!("Failed to open {}: {}", path.display(), e))?;

    let mut records = reader.records();
    let header = match records.next() {
        Some(Ok(record)) => record.iter().map(str::to_string).collect(),
        Some(Err(e)) => return Err(format!("Failed to read {}: {}", path.display(), e)),
        None => return Err(format!("{} is empty", path.display())),
    };

    let mut rows = Vec::new();
    for record in records {
        let record = record.map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok((header, rows))
}

pub fn write_rows(path: &Path, header: &[String], rows: &[Vec<String>]) -> Result<(), String> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;

    writer
        .write_record(header)
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
    }
    writer
        .flush()
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}

pub fn find_column(header: &[String], name: &str) -> Option<usize> {
    header.iter().position(|col| col == name)
}

/// Keeps the first column named `column` and drops the rest, removing the
/// same indices from every data row. Returns the input unchanged when the
/// column appears at most once.
pub fn remove_duplicate_columns(
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    column: &str,
) -> (Vec<String>, Vec<Vec<String>>) {
    let targets: Vec<usize> = header
        .iter()
        .enumerate()
        .filter(|(_, col)| *col == column)
        .map(|(i, _)| i)
        .collect();

    if targets.len() <= 1 {
        return (header, rows);
    }

    let remove: HashSet<usize> = targets[1..].iter().copied().collect();
    let keep = |cells: Vec<String>| -> Vec<String> {
        cells
            .into_iter()
            .enumerate()
            .filter(|(i, _)| !remove.contains(i))
            .map(|(_, cell)| cell)
            .collect()
    };

    let new_header = keep(header);
    let new_rows = rows.into_iter().map(keep).collect();
    (new_header, new_rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_remove_duplicate_columns() {
        let header = strings(&["puzzle", "solution", "empty cell count", "empty cell count"]);
        let rows = vec![
            strings(&["003", "483", "49", "49"]),
            strings(&["900", "967", "51", "51"]),
        ];

        let (header, rows) = remove_duplicate_columns(header, rows, "empty cell count");
        assert_eq!(header, strings(&["puzzle", "solution", "empty cell count"]));
        assert_eq!(rows[0], strings(&["003", "483", "49"]));
        assert_eq!(rows[1], strings(&["900", "967", "51"]));
    }

    #[test]
    fn test_remove_duplicate_columns_no_duplicates() {
        let header = strings(&["puzzle", "solution", "empty cell count"]);
        let rows = vec![strings(&["003", "483", "49"])];

        let (new_header, new_rows) =
            remove_duplicate_columns(header.clone(), rows.clone(), "empty cell count");
        assert_eq!(new_header, header);
        assert_eq!(new_rows, rows);
    }

    #[test]
    fn test_remove_keeps_first_occurrence_only() {
        let header = strings(&["a", "x", "b", "x", "x"]);
        let rows = vec![strings(&["1", "first", "2", "second", "third"])];

        let (header, rows) = remove_duplicate_columns(header, rows, "x");
        assert_eq!(header, strings(&["a", "x", "b"]));
        assert_eq!(rows[0], strings(&["1", "first", "2"]));
    }

    #[test]
    fn test_read_write_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.csv");
        let header = strings(&["puzzle", "solution"]);
        let rows = vec![strings(&["003", "483"]), strings(&["900", "967"])];

        write_rows(&path, &header, &rows).unwrap();
        let (read_header, read_rows) = read_rows(&path).unwrap();
        assert_eq!(read_header, header);
        assert_eq!(read_rows, rows);
    }

    #[test]
    fn test_find_column() {
        let header = strings(&["puzzle", "solution", "Difficulty"]);
        assert_eq!(find_column(&header, "Difficulty"), Some(2));
        assert_eq!(find_column(&header, "difficulty"), None);
    }
}
