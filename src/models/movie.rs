use serde::{Deserialize, Serialize};

/// One row of the movie catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieRecord {
    /// Dense 0-based position shared by the catalog, feature matrix and title index
    pub row_index: usize,
    pub title: String,
    pub overview: String,
    pub vote_average: f64,
    pub popularity: f64,
}

/// A similar movie returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    /// Row index of the movie; stable for the lifetime of the loaded dataset only
    pub id: usize,
    pub title: String,
    pub overview: String,
    pub vote_average: f64,
    pub popularity: f64,
    /// Cosine similarity to the queried movie
    pub score: f64,
}

impl Recommendation {
    pub fn from_record(movie: &MovieRecord, score: f64) -> Self {
        Self {
            id: movie.row_index,
            title: movie.title.clone(),
            overview: movie.overview.clone(),
            vote_average: movie.vote_average,
            popularity: movie.popularity,
            score,
        }
    }
}
