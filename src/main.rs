//! courtside server entry point.
//!
//! Starts the Axum HTTP server over the queue and match result endpoints.

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use courtside::api;
use courtside::app_state::AppState;
use courtside::config::ServiceConfig;
use courtside::persistence::{DynamoStore, Store};
use courtside::service::{MatchService, QueueService};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = ServiceConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting courtside");

    // Build the DynamoDB-backed store
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
    if let Some(region) = config.aws_region.clone() {
        loader = loader.region(aws_config::Region::new(region));
    }
    let sdk_config = loader.load().await;
    let client = aws_sdk_dynamodb::Client::new(&sdk_config);
    let store: Arc<dyn Store> = Arc::new(DynamoStore::new(
        client,
        config.queue_table.clone(),
        config.match_table.clone(),
    ));

    // Build service layer; the queue is loaded once from the persisted
    // record and never reloaded afterward.
    let queue_service = Arc::new(QueueService::new(Arc::clone(&store), config.write_policy));
    queue_service.load_initial(&config.default_place).await;
    let match_service = Arc::new(MatchService::new(store));

    // Build application state
    let app_state = AppState {
        queue_service,
        match_service,
        default_place: config.default_place.clone(),
    };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
