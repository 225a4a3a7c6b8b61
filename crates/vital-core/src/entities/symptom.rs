use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::collection::{CollectionKind, Record};

/// A symptom page. The id is the display name.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Symptom {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub causes: Option<String>,
    /// Free text; may enumerate remedies by name.
    #[serde(default)]
    pub remedies: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl Symptom {
    /// Split the free-text remedies field into displayable phrases.
    ///
    /// Splits on `,`, `;` and `.`, trims, and keeps phrases longer than 5 and
    /// shorter than 100 characters. This is presentation only; it does not
    /// populate [`super::SymptomRemedy`].
    #[must_use]
    pub fn remedy_mentions(&self) -> Vec<&str> {
        self.remedies
            .as_deref()
            .unwrap_or_default()
            .split([',', ';', '.'])
            .map(str::trim)
            .filter(|phrase| {
                let len = phrase.chars().count();
                len > 5 && len < 100
            })
            .collect()
    }
}

impl Record for Symptom {
    const KIND: CollectionKind = CollectionKind::Symptoms;

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
