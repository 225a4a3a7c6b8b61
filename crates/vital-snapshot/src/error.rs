//! Snapshot builder error types.

use vital_core::CollectionKind;

/// Errors that can stop a snapshot build or publish.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Warehouse connection or query failure.
    #[error(transparent)]
    Warehouse(#[from] vital_warehouse::WarehouseError),

    /// Artifact write failure.
    #[error(transparent)]
    Store(#[from] vital_store::StoreError),

    /// Configuration could not be used (e.g. unreadable credential file).
    #[error(transparent)]
    Config(#[from] vital_config::ConfigError),

    /// The configured dataset name is not a plain identifier.
    #[error("Invalid dataset name '{0}': use letters, digits, '_' and '.'")]
    InvalidDataset(String),

    /// Two or more records share an id and the policy is to reject.
    #[error("Duplicate {kind} ids: {}", .ids.join(", "))]
    DuplicateIds {
        kind: CollectionKind,
        ids: Vec<String>,
    },

    /// Every collection failed to extract; nothing was published.
    #[error("Warehouse unavailable: all collections failed to extract; previous artifacts left in place")]
    SourceUnavailable,
}

impl SnapshotError {
    /// Whether the failure came from reaching the warehouse.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        match self {
            Self::Warehouse(error) => error.is_transport(),
            Self::SourceUnavailable => true,
            _ => false,
        }
    }
}
