//! HTTP handlers.

mod health;
mod records;

pub use health::{HealthResponse, health_check, health_routes};
pub use records::{
    ListParams, get_biomarker, get_remedy, get_symptom, list_biomarkers, list_remedies,
    list_symptom_remedies, list_symptoms, record_routes,
};
