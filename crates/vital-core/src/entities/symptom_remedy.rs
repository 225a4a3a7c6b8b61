use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Association between a symptom and a remedy with per-pair metadata.
///
/// Declared for the page layer but never populated: the source only records
/// the relationship as free text in [`super::Symptom::remedies`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SymptomRemedy {
    pub symptom_id: String,
    pub remedy_id: String,
    #[serde(default)]
    pub effectiveness: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}
