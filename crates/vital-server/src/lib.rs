//! # vital-server
//!
//! A read-only JSON API over the published artifacts.
//!
//! Every route reads through one shared [`SnapshotCache`]; nothing here
//! touches the warehouse. Collection routes accept an optional `?q=` filter.

use std::sync::Arc;

use axum::Router;
use vital_cache::{ConfiguredSource, SnapshotCache};

pub mod api;
pub mod error;

pub use error::ApiError;

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<SnapshotCache<ConfiguredSource>>,
}

impl AppState {
    #[must_use]
    pub fn new(source: ConfiguredSource) -> Self {
        Self {
            cache: Arc::new(SnapshotCache::new(source)),
        }
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::record_routes())
        .merge(api::health_routes())
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(state: AppState, addr: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "serving vital API");
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
