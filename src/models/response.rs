use serde::{Deserialize, Serialize};

use super::Recommendation;

pub const NOT_FOUND_MESSAGE: &str = "Movie not found";
pub const NOT_FOUND_HINT: &str = "Check spelling or try another movie";

/// Query string of the recommend endpoint
#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    pub movie: Option<String>,
    pub limit: Option<usize>,
}

/// Body of the recommend endpoint
///
/// An unresolved title is a normal outcome, so it is reported in the body
/// rather than through the status code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RecommendResponse {
    Found {
        movie: String,
        recommendations: Vec<Recommendation>,
    },
    NotFound {
        error: String,
        hint: String,
    },
}

impl RecommendResponse {
    pub fn not_found() -> Self {
        RecommendResponse::NotFound {
            error: NOT_FOUND_MESSAGE.to_string(),
            hint: NOT_FOUND_HINT.to_string(),
        }
    }

    /// Builds the response for `movie`, treating no recommendations as not found
    pub fn from_recommendations(movie: String, recommendations: Vec<Recommendation>) -> Self {
        if recommendations.is_empty() {
            Self::not_found()
        } else {
            RecommendResponse::Found {
                movie,
                recommendations,
            }
        }
    }
}
