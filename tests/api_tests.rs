use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::Value;

use moviemind_api::api::{create_router, AppState};
use moviemind_api::data::{Catalog, MovieContext, SimilarityIndex, TitleIndex};
use moviemind_api::models::MovieRecord;
use moviemind_api::services::MovieRecommender;

fn movie(title: &str, overview: &str, vote_average: f64, popularity: f64) -> MovieRecord {
    MovieRecord {
        row_index: 0,
        title: title.to_string(),
        overview: overview.to_string(),
        vote_average,
        popularity,
    }
}

/// Avatar and Avatar 2 are near-identical; Titanic is unrelated
fn context() -> MovieContext {
    let catalog = Catalog::new(vec![
        movie("Avatar", "A marine on the alien moon Pandora", 7.2, 150.4),
        movie("Avatar 2", "A family on the alien moon Pandora", 7.7, 120.0),
        movie("Titanic", "A romance aboard a doomed ship", 7.5, 100.0),
    ]);
    let features = SimilarityIndex::from_dense(&[
        vec![0.7, 0.7, 0.1, 0.0],
        vec![0.7, 0.6, 0.0, 0.1],
        vec![0.0, 0.1, 0.2, 0.9],
    ])
    .unwrap();
    let titles = TitleIndex::from_pairs([("Avatar", 0), ("Avatar 2", 1), ("Titanic", 2)]);

    MovieContext::new(catalog, features, titles).unwrap()
}

fn create_test_server(limit: usize) -> TestServer {
    let context = context();
    let loaded_at = context.loaded_at;
    let recommender = MovieRecommender::new(Arc::new(context)).with_limit(limit);
    let state = AppState::new(Arc::new(recommender), loaded_at);
    TestServer::new(create_router(state)).unwrap()
}

fn titles(body: &Value) -> Vec<String> {
    body["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_root_banner() {
    let server = create_test_server(20);
    let response = server.get("/").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "Movie Recommendation API is running");
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(20);
    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["movies"], 3);
}

#[tokio::test]
async fn test_recommend_most_similar_first() {
    let server = create_test_server(2);
    let response = server
        .get("/recommend")
        .add_query_param("movie", "avatar")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["movie"], "avatar");
    assert_eq!(titles(&body), vec!["Avatar 2", "Titanic"]);

    let first = &body["recommendations"][0];
    assert_eq!(first["id"], 1);
    assert_eq!(first["overview"], "A family on the alien moon Pandora");
    assert_eq!(first["vote_average"], 7.7);
    assert_eq!(first["popularity"], 120.0);
}

#[tokio::test]
async fn test_recommend_limit_param() {
    let server = create_test_server(20);
    let response = server
        .get("/api/recommend")
        .add_query_param("movie", "  TITANIC ")
        .add_query_param("limit", "1")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(titles(&body).len(), 1);
}

#[tokio::test]
async fn test_recommend_substring_match() {
    let server = create_test_server(20);
    let response = server
        .get("/recommend")
        .add_query_param("movie", "tani")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let titles = titles(&body);
    assert_eq!(titles.len(), 2);
    assert!(!titles.contains(&"Titanic".to_string()));
}

#[tokio::test]
async fn test_recommend_unknown_movie() {
    let server = create_test_server(20);
    let response = server
        .get("/recommend")
        .add_query_param("movie", "Casablanca")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["error"], "Movie not found");
    assert_eq!(body["hint"], "Check spelling or try another movie");
}

#[tokio::test]
async fn test_recommend_missing_movie_param() {
    let server = create_test_server(20);
    let response = server.get("/recommend").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Movie parameter is required");
}

#[tokio::test]
async fn test_recommend_is_idempotent() {
    let server = create_test_server(20);
    let first: Value = server
        .get("/recommend")
        .add_query_param("movie", "Avatar")
        .await
        .json();
    let second: Value = server
        .get("/recommend")
        .add_query_param("movie", "Avatar")
        .await
        .json();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_request_id_header() {
    let server = create_test_server(20);

    let response = server.get("/health").await;
    assert!(response.headers().contains_key("x-request-id"));

    let id = "67e55044-10b1-426f-9247-bb680e5fe0c8";
    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static(id),
        )
        .await;
    assert_eq!(response.headers().get("x-request-id").unwrap(), id);
}
