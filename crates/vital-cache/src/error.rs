//! Cache error types.

use std::path::PathBuf;

use thiserror::Error;
use vital_core::CollectionKind;

/// Errors from loading an artifact into the cache.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The artifact has not been generated yet.
    #[error("No {kind} artifact has been published")]
    Missing { kind: CollectionKind },

    /// The artifact exists but is not a valid collection.
    #[error("Failed to parse {kind} artifact: {source}")]
    Parse {
        kind: CollectionKind,
        #[source]
        source: serde_json::Error,
    },

    /// Local read failure.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The artifact server returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the server.
        status: u16,
        /// Response body.
        message: String,
    },
}

impl CacheError {
    /// Whether trying the same load again could succeed.
    ///
    /// Failed loads are never memoized, so a missing or unparsable artifact
    /// is picked up on the next call once a build republishes it. Only
    /// client-side HTTP rejections are final.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(error) => error.is_timeout() || error.is_connect() || error.is_request(),
            Self::Api { status, .. } => *status == 429 || *status >= 500,
            Self::Missing { .. } | Self::Parse { .. } | Self::Io { .. } => true,
        }
    }
}
