//! Application initialization: storage, state, routes.

pub mod routes;
pub mod server;

use crate::state::AppState;
use assetgate_core::{Config, UploadPolicy};
use assetgate_storage::create_storage;
use axum::Router;
use std::sync::Arc;

/// Build application state and router from configuration.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, Router), anyhow::Error> {
    let storage = create_storage(&config)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize storage: {}", e))?;

    tracing::info!(backend = %storage.backend_type(), "Storage backend initialized");

    let state = Arc::new(AppState {
        config: config.clone(),
        policy: UploadPolicy::default(),
        storage,
    });

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
