//! Artifact store error types.

use std::path::PathBuf;

use vital_core::CollectionKind;

/// Errors that can occur reading or writing artifacts.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Filesystem operation failed.
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A collection could not be serialized.
    #[error("Failed to serialize {kind}: {source}")]
    Serialize {
        kind: CollectionKind,
        #[source]
        source: serde_json::Error,
    },

    /// An artifact exists but is not a valid collection.
    #[error("Artifact {} is not a valid {kind} collection: {source}", .path.display())]
    Parse {
        kind: CollectionKind,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The manifest exists but could not be parsed.
    #[error("Manifest {} is invalid: {source}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
