//! Record structs for the published collections.
//!
//! Field names serialize in camelCase to match the artifact file format.
//! Optional fields serialize as `null` and accept either `null` or a missing
//! key on the way back in.

mod biomarker;
mod remedy;
mod symptom;
mod symptom_remedy;

pub use biomarker::Biomarker;
pub use remedy::Remedy;
pub use symptom::Symptom;
pub use symptom_remedy::SymptomRemedy;
