//! Extraction queries over the source tables.
//!
//! Column aliases here are the keys the row mappers in [`crate::rows`] read.

use vital_warehouse::Query;

use crate::SnapshotError;

/// Category tag that marks symptom rows in `remedies_symptoms`.
pub const SYMPTOM_CATEGORY: &str = "Symptom";

/// A validated schema name that is safe to splice into SQL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset(String);

impl Dataset {
    /// Accepts ASCII letters, digits, `_` and `.` (for `database.schema`).
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::InvalidDataset`] for anything else, including
    /// an empty name.
    pub fn new(name: &str) -> Result<Self, SnapshotError> {
        let valid = !name.is_empty()
            && !name.starts_with('.')
            && !name.ends_with('.')
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
        if valid {
            Ok(Self(name.to_string()))
        } else {
            Err(SnapshotError::InvalidDataset(name.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn table(&self, table: &str) -> String {
        format!("{}.{table}", self.0)
    }
}

pub const BIOMARKER_COLUMNS: &[&str] = &["row_id", "name", "category", "type", "use"];
pub const SYMPTOM_COLUMNS: &[&str] = &["name", "description", "causes", "remedies", "category"];
pub const REMEDY_COLUMNS: &[&str] = &["name", "description", "alternate_names", "image_url"];
pub const BIOMARKER_LOOKUP_COLUMNS: &[&str] = &["name", "category", "type", "use"];

/// All biomarkers with an ordinal computed by the same ordering as the result.
#[must_use]
pub fn biomarkers(dataset: &Dataset) -> Query {
    Query::new(
        format!(
            "SELECT
                ROW_NUMBER() OVER (ORDER BY name, category) AS row_id,
                name,
                category,
                \"type\",
                \"use\"
            FROM {}
            ORDER BY name, category",
            dataset.table("biomarkers")
        ),
        BIOMARKER_COLUMNS,
    )
}

/// Distinct symptom rows from the combined symptom/category table.
#[must_use]
pub fn symptoms(dataset: &Dataset) -> Query {
    Query::new(
        format!(
            "SELECT DISTINCT
                Name AS name,
                Overview AS description,
                Cause AS causes,
                Remedies AS remedies,
                Category AS category
            FROM {}
            WHERE Category = @category
            ORDER BY name",
            dataset.table("remedies_symptoms")
        ),
        SYMPTOM_COLUMNS,
    )
    .param("category", SYMPTOM_CATEGORY)
}

/// Remedies with a non-null name, from the positional-column remedies table.
#[must_use]
pub fn remedies(dataset: &Dataset) -> Query {
    Query::new(
        format!(
            "SELECT
                string_field_1 AS name,
                string_field_3 AS description,
                string_field_2 AS alternate_names,
                string_field_7 AS image_url
            FROM {}
            WHERE string_field_1 IS NOT NULL
            ORDER BY string_field_1",
            dataset.table("remedies")
        ),
        REMEDY_COLUMNS,
    )
}

/// First biomarker whose dashed, lowercased name contains `pattern`.
///
/// `pattern` is a `LIKE` pattern, typically `%vitamin-d%`.
#[must_use]
pub fn biomarker_by_slug(dataset: &Dataset, pattern: &str) -> Query {
    Query::new(
        format!(
            "SELECT name, category, \"type\", \"use\"
            FROM {}
            WHERE LOWER(REPLACE(name, ' ', '-')) LIKE @pattern
            LIMIT 1",
            dataset.table("biomarkers")
        ),
        BIOMARKER_LOOKUP_COLUMNS,
    )
    .param("pattern", pattern)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("health")]
    #[case("tetra.health")]
    #[case("health_v2")]
    fn accepts_plain_datasets(#[case] name: &str) {
        assert_eq!(Dataset::new(name).unwrap().as_str(), name);
    }

    #[rstest]
    #[case("")]
    #[case("health; DROP TABLE x")]
    #[case("\"quoted\"")]
    #[case(".health")]
    #[case("health.")]
    fn rejects_unsafe_datasets(#[case] name: &str) {
        assert!(matches!(
            Dataset::new(name),
            Err(SnapshotError::InvalidDataset(_))
        ));
    }

    #[test]
    fn symptom_query_binds_category() {
        let dataset = Dataset::new("health").unwrap();
        let (sql, values) = symptoms(&dataset).bind().unwrap();
        assert!(sql.contains("FROM health.remedies_symptoms"));
        assert!(sql.contains("Category = ?"));
        assert_eq!(values, vec![SYMPTOM_CATEGORY]);
    }

    #[test]
    fn biomarker_query_orders_ordinal_and_result_identically() {
        let dataset = Dataset::new("health").unwrap();
        let query = biomarkers(&dataset);
        assert!(query.sql.contains("OVER (ORDER BY name, category)"));
        assert!(query.sql.trim_end().ends_with("ORDER BY name, category"));
        assert_eq!(query.columns, BIOMARKER_COLUMNS);
    }
}
