use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use moviemind_api::{
    api::{create_router, AppState},
    cache::Cache,
    config::Config,
    data::MovieContext,
    services::MovieRecommender,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    // Requests are only served once every artifact has loaded
    let context = MovieContext::load(&config.data_dir).with_context(|| {
        format!(
            "Failed to load recommendation artifacts from {}",
            config.data_dir.display()
        )
    })?;
    let loaded_at = context.loaded_at;

    let recommender =
        MovieRecommender::new(Arc::new(context)).with_limit(config.recommend_limit);
    let mut state = AppState::new(Arc::new(recommender), loaded_at);

    let mut cache_handle = None;
    if let Some(redis_url) = &config.redis_url {
        match Cache::connect(redis_url).await {
            Ok((cache, handle)) => {
                tracing::info!("Redis connected, caching enabled");
                state = state.with_cache(cache, config.cache_ttl_secs);
                cache_handle = Some(handle);
            }
            Err(e) => tracing::warn!(error = %e, "Redis unavailable, caching disabled"),
        }
    }

    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!(address = %address, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(handle) = cache_handle {
        handle.shutdown().await;
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
