use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::collection::{CollectionKind, Record};

/// A remedy page. The id is the display name.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Remedy {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub alternate_names: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Record for Remedy {
    const KIND: CollectionKind = CollectionKind::Remedies;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
