//! Health check endpoint.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::{Json, Router, routing::get};
use serde::Serialize;
use vital_cache::SlotState;
use vital_core::CollectionKind;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
    /// Load state of each cached collection, keyed by collection name.
    pub collections: BTreeMap<String, SlotState>,
}

/// GET /health
///
/// Reports the cache state without loading anything.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let mut collections = BTreeMap::new();
    for kind in CollectionKind::ALL {
        collections.insert(kind.to_string(), state.cache.state(kind).await);
    }
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "vital".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        collections,
    })
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
