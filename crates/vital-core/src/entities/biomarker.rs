use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::collection::{CollectionKind, Record};

/// A lab biomarker, keyed by an id derived from its row ordinal and name.
///
/// See [`crate::ids::biomarker_id`] for the id format.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Biomarker {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default, rename = "use")]
    pub usage: Option<String>,
}

impl Record for Biomarker {
    const KIND: CollectionKind = CollectionKind::Biomarkers;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        None
    }
}
