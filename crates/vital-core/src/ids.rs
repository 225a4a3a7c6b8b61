//! Deterministic identifier derivation.

/// Separator substituted for every character outside `[a-z0-9-]`.
pub const ID_SEPARATOR: char = '-';

/// Build a biomarker id from its row ordinal and display name.
///
/// The raw form is `"{ordinal}-{name}"`, lowercased, with every character
/// outside `[a-z0-9-]` replaced by `-`. Each offending character becomes one
/// separator, so `"Vitamin D (25-OH)"` keeps its run of dashes.
///
/// Uniqueness within a snapshot comes from the ordinal, not the name.
#[must_use]
pub fn biomarker_id(ordinal: i64, name: &str) -> String {
    slugify(&format!("{ordinal}-{name}"))
}

/// Lowercase `raw` and replace every character outside `[a-z0-9-]` with `-`.
#[must_use]
pub fn slugify(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                c
            } else {
                ID_SEPARATOR
            }
        })
        .collect()
}

/// Recover the name portion of a biomarker id as a search phrase.
///
/// Drops the leading ordinal segment and joins the rest with spaces:
/// `"12-vitamin-d"` → `"vitamin d"`. Returns an empty string for ids without
/// a name segment.
#[must_use]
pub fn biomarker_name_hint(id: &str) -> String {
    id.split(ID_SEPARATOR).skip(1).collect::<Vec<_>>().join(" ")
}
