//! Smile Vinyl Backend
//!
//! Serves the product catalog page and records purchase claims. The catalog is
//! a CSV file in object storage; claims are markers in a key-value store.

mod api;
mod catalog;
mod config;
mod errors;
mod kv;
mod models;
mod render;
mod storage;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use kv::{KvStore, RedisStore};
use storage::{FileStore, ObjectStore, S3Store};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub kv: Arc<dyn KvStore>,
    pub objects: Arc<dyn ObjectStore>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Smile Vinyl Backend");
    tracing::info!("Catalog bucket: {}", config.catalog_bucket);
    tracing::info!("Catalog key: {}", config.catalog_key);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Connect to the purchase-marker store
    let kv: Arc<dyn KvStore> =
        Arc::new(RedisStore::connect(&config.redis_endpoint, config.redis_port).await?);

    // Construct the catalog source
    let objects: Arc<dyn ObjectStore> = match &config.catalog_dir {
        Some(dir) => {
            tracing::info!("Serving catalog from local directory {:?}", dir);
            Arc::new(FileStore::open(dir)?)
        }
        None => {
            let aws_config =
                aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            Arc::new(S3Store::new(
                aws_sdk_s3::Client::new(&aws_config),
                config.catalog_bucket.clone(),
            ))
        }
    };

    // Create application state
    let state = AppState {
        kv,
        objects,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router.
///
/// `/purchase` records a claim; every other path serves the catalog page.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/purchase", get(api::record_purchase))
        .fallback(api::catalog_page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
