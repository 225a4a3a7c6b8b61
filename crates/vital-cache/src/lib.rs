//! # vital-cache
//!
//! Read-through access to published artifacts.
//!
//! A [`SnapshotCache`] is created by its caller and passed around by
//! reference; it is not a process global. Each collection is fetched whole
//! from an [`ArtifactSource`] on first use, parsed, and kept for the life of
//! the cache. Lookups by id scan the cached collection.

mod cache;
pub mod error;
mod slot;
pub mod source;

pub use cache::SnapshotCache;
pub use error::CacheError;
pub use slot::SlotState;
pub use source::{ArtifactSource, ConfiguredSource, FsSource, HttpSource};
