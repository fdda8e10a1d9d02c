use rand::seq::index;
use rand::Rng;

use crate::models::Difficulty;

/// A puzzle/solution pair collected from the shard CSVs.
#[derive(Debug, Clone)]
pub struct PuzzleRow {
    pub puzzle: String,
    pub solution: String,
    pub difficulty: Difficulty,
}

/// Draws `count` rows uniformly without replacement, or every row in
/// its original order when fewer than `count` are available.
pub fn sample_group<'a, R: Rng + ?Sized>(
    rows: &'a [PuzzleRow],
    count: usize,
    rng: &mut R,
) -> Vec<&'a PuzzleRow> {
    if rows.len() <= count {
        return rows.iter().collect();
    }
    index::sample(rng, rows.len(), count)
        .iter()
        .map(|i| &rows[i])
        .collect()
}
