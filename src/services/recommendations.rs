use std::sync::Arc;

use crate::{
    data::MovieContext,
    models::Recommendation,
    services::ranking::{self, DEFAULT_LIMIT},
};

/// Content-based movie recommendations
///
/// An empty result means the title could not be resolved. Implementations
/// are pure reads and safe to share across request handlers.
#[cfg_attr(test, mockall::automock)]
pub trait Recommender: Send + Sync {
    /// Recommends movies similar to `title`, using the default limit
    fn recommend(&self, title: &str) -> Vec<Recommendation>;

    /// Recommends at most `limit` movies similar to `title`
    fn recommend_with_limit(&self, title: &str, limit: usize) -> Vec<Recommendation>;

    /// Number of movies available for recommendation
    fn catalog_size(&self) -> usize;
}

/// Recommender backed by the loaded artifacts
#[derive(Debug, Clone)]
pub struct MovieRecommender {
    context: Arc<MovieContext>,
    limit: usize,
}

impl MovieRecommender {
    pub fn new(context: Arc<MovieContext>) -> Self {
        Self {
            context,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Overrides the default number of recommendations
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

impl Recommender for MovieRecommender {
    fn recommend(&self, title: &str) -> Vec<Recommendation> {
        self.recommend_with_limit(title, self.limit)
    }

    fn recommend_with_limit(&self, title: &str, limit: usize) -> Vec<Recommendation> {
        let Some(row) = self.context.titles.resolve(title) else {
            tracing::debug!(title = %title, "No movie matches title");
            return Vec::new();
        };

        let recommendations: Vec<Recommendation> =
            ranking::rank(&self.context.features, row, limit)
                .into_iter()
                .filter_map(|scored| {
                    self.context
                        .catalog
                        .get(scored.row_index)
                        .map(|movie| Recommendation::from_record(movie, scored.score))
                })
                .collect();

        tracing::debug!(
            title = %title,
            row,
            count = recommendations.len(),
            "Computed recommendations"
        );

        recommendations
    }

    fn catalog_size(&self) -> usize {
        self.context.catalog.len()
    }
}
