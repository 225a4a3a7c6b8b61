//! # vital-core
//!
//! Core types shared by every Vital crate.
//!
//! - Record structs for the three published collections (biomarkers,
//!   symptoms, remedies) plus the declared symptom/remedy relationship
//! - [`CollectionKind`] naming each collection and its artifact file
//! - Deterministic biomarker id derivation
//! - The case-insensitive filter used by listing pages
//! - The snapshot manifest written next to the artifacts
//! - Cross-cutting error types

pub mod collection;
pub mod entities;
pub mod errors;
pub mod filter;
pub mod ids;
pub mod manifest;

pub use collection::{AnyRecord, CollectionKind, Record};
pub use errors::CoreError;
