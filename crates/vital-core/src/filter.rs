//! Case-insensitive substring filtering over in-memory collections.
//!
//! Filtering is a caller-side operation: it never touches the cache and never
//! reorders its input.

use crate::collection::Record;

/// Whether `record` matches `term` by name or description.
///
/// Matching is a case-insensitive substring test. An empty term matches
/// every record.
#[must_use]
pub fn matches<T: Record>(record: &T, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    record.name().to_lowercase().contains(&needle)
        || record
            .description()
            .is_some_and(|d| d.to_lowercase().contains(&needle))
}

/// All records in `collection` whose name or description contains `term`.
///
/// Input order is preserved. `filter(c, "")` returns every record of `c`.
#[must_use]
pub fn filter<'a, T: Record>(collection: &'a [T], term: &str) -> Vec<&'a T> {
    collection
        .iter()
        .filter(|record| matches(*record, term))
        .collect()
}
