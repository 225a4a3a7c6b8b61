//! Errors raised by core type conversions.
//!
//! Crate-specific errors (`WarehouseError`, `StoreError`, `CacheError`, ...)
//! live in their own crates and converge in `vital-cli` through `anyhow`.

use thiserror::Error;

/// Errors from parsing core types, such as a [`crate::CollectionKind`] name.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A collection name did not match any published collection.
    #[error("Unknown collection: {0} (expected biomarkers, symptoms, or remedies)")]
    UnknownCollection(String),
}
