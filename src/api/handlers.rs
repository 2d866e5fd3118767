use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde_json::{json, Value};

use crate::{
    cache::CacheKey,
    cached,
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{RecommendQuery, RecommendResponse, Recommendation},
};

use super::AppState;

/// Upper bound for the `limit` query parameter
pub const MAX_LIMIT: usize = 100;

/// Service banner
pub async fn root() -> Json<Value> {
    Json(json!({ "status": "Movie Recommendation API is running" }))
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "movies": state.recommender.catalog_size(),
        "loaded_at": state.loaded_at.to_rfc3339(),
    }))
}

/// Recommends movies similar to the `movie` query parameter
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<RecommendQuery>,
) -> AppResult<Json<RecommendResponse>> {
    let movie = params
        .movie
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| AppError::InvalidInput("Movie parameter is required".to_string()))?;

    let limit = match params.limit {
        Some(0) => {
            return Err(AppError::InvalidInput(format!(
                "limit must be between 1 and {}",
                MAX_LIMIT
            )))
        }
        limit => limit.map(|l| l.min(MAX_LIMIT)),
    };

    tracing::info!(
        request_id = %request_id,
        movie = %movie,
        limit = ?limit,
        "Processing recommendation request"
    );

    let compute = || match limit {
        Some(limit) => state.recommender.recommend_with_limit(&movie, limit),
        None => state.recommender.recommend(&movie),
    };

    // Only the list is cached; the echoed title always comes from this request
    let recommendations: Vec<Recommendation> = match &state.cache {
        Some(cache) => cached!(
            cache,
            CacheKey::Recommend {
                title: movie.clone(),
                limit,
            },
            state.cache_ttl_secs,
            async { compute() }
        ),
        None => compute(),
    };

    let response = RecommendResponse::from_recommendations(movie.clone(), recommendations);

    match &response {
        RecommendResponse::Found {
            recommendations, ..
        } => tracing::info!(
            request_id = %request_id,
            count = recommendations.len(),
            "Recommendations served"
        ),
        RecommendResponse::NotFound { .. } => tracing::info!(
            request_id = %request_id,
            movie = %movie,
            "Movie not found"
        ),
    }

    Ok(Json(response))
}
