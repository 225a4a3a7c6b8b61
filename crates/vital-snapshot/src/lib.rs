//! # vital-snapshot
//!
//! Turns the warehouse source tables into published artifacts.
//!
//! Each collection is extracted with its own query, mapped row by row into
//! records (malformed rows are skipped with a warning), and written to the
//! [`vital_store::ArtifactStore`]. The three extractions run concurrently and
//! fail independently: a failed collection is published empty and marked
//! `failed` in the manifest. If all three fail nothing is written.
//!
//! [`generate`] is the build-time entry point. Without warehouse
//! configuration it runs in degraded mode and only fills in missing
//! artifacts with empty placeholders.

mod builder;
pub mod error;
mod generate;
mod live;
pub mod queries;
pub mod rows;

pub use builder::SnapshotBuilder;
pub use error::SnapshotError;
pub use generate::{GenerateOutcome, connect, generate, open_builder};
pub use queries::Dataset;
