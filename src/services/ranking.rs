use crate::data::SimilarityIndex;

/// Default number of neighbors returned for a query
pub const DEFAULT_LIMIT: usize = 20;

/// A neighbor of the queried row and its cosine similarity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredRow {
    pub row_index: usize,
    pub score: f64,
}

/// Ranks every row by similarity to `row` and returns the top `k` others
///
/// Scores are sorted descending with a stable sort, so equal scores keep
/// ascending row order. The queried row is never part of the result, which
/// holds `min(k, N - 1)` distinct rows.
///
/// Panics if `row` is not a row of `index`; callers resolve it first.
pub fn rank(index: &SimilarityIndex, row: usize, k: usize) -> Vec<ScoredRow> {
    let mut scored: Vec<ScoredRow> = index
        .cosine_scores(row)
        .into_iter()
        .enumerate()
        .map(|(row_index, score)| ScoredRow { row_index, score })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    scored
        .into_iter()
        .filter(|scored| scored.row_index != row)
        .take(k)
        .collect()
}
