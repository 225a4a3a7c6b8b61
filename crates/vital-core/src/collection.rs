//! Collection kinds and the [`Record`] trait implemented by every entity.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::entities::{Biomarker, Remedy, Symptom};
use crate::errors::CoreError;

/// One of the independently published record collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    Biomarkers,
    Symptoms,
    Remedies,
}

impl CollectionKind {
    /// Every collection, in publish order.
    pub const ALL: [Self; 3] = [Self::Biomarkers, Self::Symptoms, Self::Remedies];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Biomarkers => "biomarkers",
            Self::Symptoms => "symptoms",
            Self::Remedies => "remedies",
        }
    }

    /// Artifact file name relative to the artifact directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Biomarkers => "biomarkers.json",
            Self::Symptoms => "symptoms.json",
            Self::Remedies => "remedies.json",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "biomarkers" | "biomarker" => Ok(Self::Biomarkers),
            "symptoms" | "symptom" => Ok(Self::Symptoms),
            "remedies" | "remedy" => Ok(Self::Remedies),
            other => Err(CoreError::UnknownCollection(other.to_string())),
        }
    }
}

/// A record that lives in one of the published collections.
///
/// Lookups and filtering are written once against this trait instead of
/// once per collection.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The collection this record type is published in.
    const KIND: CollectionKind;

    fn id(&self) -> &str;

    fn name(&self) -> &str;

    /// Free-text description searched by [`crate::filter::filter`], if any.
    fn description(&self) -> Option<&str>;
}

/// A record from any collection, returned by kind-erased lookups.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum AnyRecord {
    Biomarker(Biomarker),
    Symptom(Symptom),
    Remedy(Remedy),
}

impl AnyRecord {
    #[must_use]
    pub const fn kind(&self) -> CollectionKind {
        match self {
            Self::Biomarker(_) => CollectionKind::Biomarkers,
            Self::Symptom(_) => CollectionKind::Symptoms,
            Self::Remedy(_) => CollectionKind::Remedies,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Biomarker(b) => b.id(),
            Self::Symptom(s) => s.id(),
            Self::Remedy(r) => r.id(),
        }
    }
}

impl From<Biomarker> for AnyRecord {
    fn from(value: Biomarker) -> Self {
        Self::Biomarker(value)
    }
}

impl From<Symptom> for AnyRecord {
    fn from(value: Symptom) -> Self {
        Self::Symptom(value)
    }
}

impl From<Remedy> for AnyRecord {
    fn from(value: Remedy) -> Self {
        Self::Remedy(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plural_and_singular_names() {
        assert_eq!(
            "Biomarkers".parse::<CollectionKind>().unwrap(),
            CollectionKind::Biomarkers
        );
        assert_eq!(
            "symptom".parse::<CollectionKind>().unwrap(),
            CollectionKind::Symptoms
        );
        assert_eq!(
            " remedy ".parse::<CollectionKind>().unwrap(),
            CollectionKind::Remedies
        );
    }

    #[test]
    fn rejects_unknown_collection() {
        let err = "posts".parse::<CollectionKind>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownCollection(name) if name == "posts"));
    }

    #[test]
    fn file_names_are_fixed() {
        let names: Vec<_> = CollectionKind::ALL.iter().map(|k| k.file_name()).collect();
        assert_eq!(names, ["biomarkers.json", "symptoms.json", "remedies.json"]);
    }
}
