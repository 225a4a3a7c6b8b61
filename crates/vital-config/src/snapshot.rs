//! Snapshot builder policy configuration.

use serde::{Deserialize, Serialize};

/// What to do when two source rows produce the same record id.
///
/// Symptom and remedy ids are their display names, so duplicated names in
/// the source collide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateIdPolicy {
    /// Keep every row and log the collision. Id-keyed readers see the first
    /// match on scan.
    #[default]
    Keep,
    /// Fail the affected collection.
    Reject,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SnapshotConfig {
    #[serde(default)]
    pub duplicate_ids: DuplicateIdPolicy,
}
