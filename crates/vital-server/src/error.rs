//! API error responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use vital_cache::CacheError;

/// Errors surfaced to API clients as `{"error": "..."}`. Fetch failures also
/// carry `"retryable"`, telling the client whether a later request may succeed.
#[derive(Debug)]
pub enum ApiError {
    /// No record with the requested id. Holds the record label, e.g. `Symptom`.
    NotFound(&'static str),
    /// The artifact could not be loaded. `what` names the resource,
    /// e.g. `biomarkers`.
    Fetch {
        what: &'static str,
        source: CacheError,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(label) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("{label} not found") })),
            )
                .into_response(),
            Self::Fetch { what, source } => {
                let retryable = source.is_retryable();
                tracing::error!(what, error = %source, retryable, "failed to load artifact");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": format!("Failed to fetch {what}"),
                        "retryable": retryable,
                    })),
                )
                    .into_response()
            }
        }
    }
}
