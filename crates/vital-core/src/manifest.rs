//! Snapshot manifest written alongside the collection artifacts.
//!
//! The artifact files themselves stay flat JSON arrays. The manifest carries
//! the schema version tag and a per-collection summary of the last publish.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::collection::CollectionKind;

/// Version of the artifact record shapes. Bump on any field change.
pub const SCHEMA_VERSION: u32 = 1;

/// File name of the manifest inside the artifact directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// How a collection's artifact came to be in its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CollectionStatus {
    /// Extracted from the warehouse on the last run.
    Extracted,
    /// Extraction failed; an empty collection was published.
    Failed,
    /// Written as an empty placeholder in degraded mode.
    Placeholder,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSummary {
    pub kind: CollectionKind,
    pub count: usize,
    pub status: CollectionStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotManifest {
    pub schema_version: u32,
    pub generated_at: DateTime<Utc>,
    pub collections: Vec<CollectionSummary>,
}

impl SnapshotManifest {
    /// Manifest stamped with the current schema version and time.
    #[must_use]
    pub fn new(collections: Vec<CollectionSummary>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            collections,
        }
    }

    #[must_use]
    pub fn summary(&self, kind: CollectionKind) -> Option<&CollectionSummary> {
        self.collections.iter().find(|c| c.kind == kind)
    }

    /// Whether this manifest was written by a compatible schema version.
    #[must_use]
    pub const fn is_current(&self) -> bool {
        self.schema_version == SCHEMA_VERSION
    }
}
