pub mod board;
pub mod difficulty;

pub use board::{empty_cell_count, string_to_grid, Board, Grid, NumberedBoard};
pub use difficulty::Difficulty;
