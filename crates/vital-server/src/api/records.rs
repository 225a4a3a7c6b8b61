//! Collection and single-record endpoints.
//!
//! Response shapes:
//! - lists: `{"biomarkers": [...]}`, `{"symptoms": [...]}`, `{"remedies": [...]}`
//! - single: `{"biomarker": {...}}` etc., 404 when the id is unknown
//! - relationships: `{"relationships": []}`

use axum::extract::{Path, Query, State};
use axum::{Json, Router, routing::get};
use serde::Deserialize;
use serde_json::{Value, json};
use vital_core::CollectionKind;

use crate::{ApiError, AppState};

/// Optional case-insensitive filter on name and description.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub q: Option<String>,
}

async fn list(
    state: &AppState,
    kind: CollectionKind,
    params: &ListParams,
) -> Result<Json<Value>, ApiError> {
    let term = params.q.as_deref().unwrap_or_default();
    let records = state
        .cache
        .search(kind, term)
        .await
        .map_err(|source| ApiError::Fetch {
            what: kind.as_str(),
            source,
        })?;
    Ok(Json(json!({ kind.as_str(): records })))
}

/// GET /api/biomarkers
pub async fn list_biomarkers(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Value>, ApiError> {
    list(&state, CollectionKind::Biomarkers, &params).await
}

/// GET /api/health/symptoms
pub async fn list_symptoms(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Value>, ApiError> {
    list(&state, CollectionKind::Symptoms, &params).await
}

/// GET /api/health/remedies
pub async fn list_remedies(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Value>, ApiError> {
    list(&state, CollectionKind::Remedies, &params).await
}

/// GET /api/biomarkers/:id
pub async fn get_biomarker(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let biomarker = state
        .cache
        .biomarker(&id)
        .await
        .map_err(|source| ApiError::Fetch {
            what: "biomarker",
            source,
        })?
        .ok_or(ApiError::NotFound("Biomarker"))?;
    Ok(Json(json!({ "biomarker": biomarker })))
}

/// GET /api/health/symptoms/:id
pub async fn get_symptom(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let symptom = state
        .cache
        .symptom(&id)
        .await
        .map_err(|source| ApiError::Fetch {
            what: "symptom",
            source,
        })?
        .ok_or(ApiError::NotFound("Symptom"))?;
    Ok(Json(json!({ "symptom": symptom })))
}

/// GET /api/health/remedies/:id
pub async fn get_remedy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let remedy = state
        .cache
        .remedy(&id)
        .await
        .map_err(|source| ApiError::Fetch {
            what: "remedy",
            source,
        })?
        .ok_or(ApiError::NotFound("Remedy"))?;
    Ok(Json(json!({ "remedy": remedy })))
}

/// GET /api/health/symptom-remedies
///
/// No artifact carries these links, so the list is always empty.
pub async fn list_symptom_remedies(State(state): State<AppState>) -> Json<Value> {
    let relationships = state.cache.symptom_remedies();
    Json(json!({ "relationships": relationships }))
}

pub fn record_routes() -> Router<AppState> {
    Router::new()
        .route("/api/biomarkers", get(list_biomarkers))
        .route("/api/biomarkers/:id", get(get_biomarker))
        .route("/api/health/symptoms", get(list_symptoms))
        .route("/api/health/symptoms/:id", get(get_symptom))
        .route("/api/health/remedies", get(list_remedies))
        .route("/api/health/remedies/:id", get(get_remedy))
        .route("/api/health/symptom-remedies", get(list_symptom_remedies))
}
