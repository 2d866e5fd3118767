use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::cache::Cache;
use crate::services::Recommender;

/// Shared application state
///
/// Everything here is read-only after startup, so handlers share it without locks.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<dyn Recommender>,
    pub cache: Option<Cache>,
    pub cache_ttl_secs: u64,
    pub loaded_at: DateTime<Utc>,
}

impl AppState {
    /// Creates state serving `recommender` without a response cache
    pub fn new(recommender: Arc<dyn Recommender>, loaded_at: DateTime<Utc>) -> Self {
        Self {
            recommender,
            cache: None,
            cache_ttl_secs: 0,
            loaded_at,
        }
    }

    /// Enables the Redis response cache
    pub fn with_cache(mut self, cache: Cache, ttl_secs: u64) -> Self {
        self.cache = Some(cache);
        self.cache_ttl_secs = ttl_secs;
        self
    }
}
