use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;

pub type Grid = Vec<Vec<u8>>;

/// One puzzle/solution pair as stored in a boardN.json file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub puzzle: Grid,
    pub solution: Grid,
    pub difficulty: Difficulty,
}

/// A board with its position in the combined boards.json collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberedBoard {
    #[serde(rename = "Id")]
    pub id: u32,
    pub puzzle: Grid,
    pub solution: Grid,
    pub difficulty: Difficulty,
}

impl NumberedBoard {
    pub fn new(id: u32, board: Board) -> Self {
        Self {
            id,
            puzzle: board.puzzle,
            solution: board.solution,
            difficulty: board.difficulty,
        }
    }
}

/// Number of unsolved ('0') positions in an 81-character puzzle string.
pub fn empty_cell_count(puzzle: &str) -> usize {
    puzzle.chars().filter(|&c| c == '0').count()
}

/// Decodes an 81-character digit string into a row-major 9x9 grid.
/// Non-digit characters decode to 0 (empty cell).
pub fn string_to_grid(s: &str) -> Grid {
    let cells: Vec<u8> = s
        .chars()
        .map(|c| c.to_digit(10).unwrap_or(0) as u8)
        .collect();
    cells.chunks(9).take(9).map(|row| row.to_vec()).collect()
}

fn render_row(row: &[u8]) -> String {
    let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
    format!("[{}]", cells.join(", "))
}

/// Renders a single board with each grid row on one line:
///
/// ```text
/// {
///   "puzzle": [
///     [0, 0, 3, 0, 2, 0, 6, 0, 0],
///     ...
///   ],
///   "solution": [
///     ...
///   ],
///   "difficulty": "easy"
/// }
/// ```
pub fn render_compact(board: &Board) -> String {
    let mut out = String::new();
    out.push_str("{\n");
    render_grid_field(&mut out, "puzzle", &board.puzzle);
    out.push_str(",\n");
    render_grid_field(&mut out, "solution", &board.solution);
    out.push_str(",\n");
    out.push_str(&format!(
        "  \"difficulty\": \"{}\"\n",
        board.difficulty.as_str()
    ));
    out.push('}');
    out
}

fn render_grid_field(out: &mut String, name: &str, grid: &Grid) {
    out.push_str(&format!("  \"{}\": [\n", name));
    for (i, row) in grid.iter().enumerate() {
        let sep = if i + 1 < grid.len() { "," } else { "" };
        out.push_str(&format!("    {}{}\n", render_row(row), sep));
    }
    out.push_str("  ]");
}

/// Renders a list of numbered boards in the per-difficulty file layout,
/// grid rows one per line, trailing newline at the end of the file.
pub fn render_collection(boards: &[NumberedBoard]) -> String {
    let entries: Vec<String> = boards
        .iter()
        .map(|board| {
            format!(
                "  {{\n    \"Id\": {},\n    \"puzzle\": {},\n    \"solution\": {},\n    \"difficulty\": \"{}\"\n  }}",
                board.id,
                render_nested_grid(&board.puzzle),
                render_nested_grid(&board.solution),
                board.difficulty.as_str()
            )
        })
        .collect();
    format!("[\n{}\n]\n", entries.join(",\n"))
}

fn render_nested_grid(grid: &Grid) -> String {
    let rows: Vec<String> = grid
        .iter()
        .map(|row| format!("      {}", render_row(row)))
        .collect();
    format!("[\n{}\n    ]", rows.join(",\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "003020600900305001001806400008102900700000008006708200002609500800203009005010300";
    const SOLUTION: &str =
        "483921657967345821251876493548132976729564138136798245372689514814253769695417382";

    #[test]
    fn test_empty_cell_count() {
        assert_eq!(empty_cell_count(PUZZLE), 49);
        assert_eq!(empty_cell_count(SOLUTION), 0);
        assert_eq!(empty_cell_count(&"0".repeat(81)), 81);
    }

    #[test]
    fn test_string_to_grid() {
        let grid = string_to_grid(PUZZLE);
        assert_eq!(grid.len(), 9);
        assert!(grid.iter().all(|row| row.len() == 9));
        assert_eq!(grid[0], vec![0, 0, 3, 0, 2, 0, 6, 0, 0]);
        assert_eq!(grid[1], vec![9, 0, 0, 3, 0, 5, 0, 0, 1]);
        assert_eq!(grid[8], vec![0, 0, 5, 0, 1, 0, 3, 0, 0]);
    }

    #[test]
    fn test_string_to_grid_non_digits() {
        let grid = string_to_grid(&".".repeat(81));
        assert!(grid.iter().all(|row| row.iter().all(|&c| c == 0)));
    }

    #[test]
    fn test_render_compact_layout() {
        let board = Board {
            puzzle: string_to_grid(PUZZLE),
            solution: string_to_grid(SOLUTION),
            difficulty: Difficulty::Hard,
        };
        let text = render_compact(&board);

        assert!(text.starts_with("{\n  \"puzzle\": [\n    [0, 0, 3, 0, 2, 0, 6, 0, 0],\n"));
        assert!(text.contains("  \"solution\": [\n    [4, 8, 3, 9, 2, 1, 6, 5, 7],\n"));
        assert!(text.contains("  \"difficulty\": \"hard\"\n"));
        assert!(text.ends_with('}'));
        // 9 rows per grid plus the braces, brackets, and difficulty line
        assert_eq!(text.lines().count(), 25);
    }

    #[test]
    fn test_render_compact_parses_back() {
        let board = Board {
            puzzle: string_to_grid(PUZZLE),
            solution: string_to_grid(SOLUTION),
            difficulty: Difficulty::Medium,
        };
        let parsed: Board = serde_json::from_str(&render_compact(&board)).unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn test_render_collection_parses_back() {
        let board = NumberedBoard::new(
            1,
            Board {
                puzzle: string_to_grid(PUZZLE),
                solution: string_to_grid(SOLUTION),
                difficulty: Difficulty::Easy,
            },
        );
        let boards = vec![board.clone(), NumberedBoard { id: 2, ..board }];
        let text = render_collection(&boards);

        assert!(text.starts_with("[\n  {\n    \"Id\": 1,\n    \"puzzle\": [\n"));
        assert!(text.contains("      [0, 0, 3, 0, 2, 0, 6, 0, 0],\n"));
        assert!(text.ends_with("]\n"));

        let parsed: Vec<NumberedBoard> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, boards);
    }
}
