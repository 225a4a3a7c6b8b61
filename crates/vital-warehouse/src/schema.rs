//! Field-level validation of warehouse rows.
//!
//! Rows arrive as untyped JSON maps. These helpers are the single place
//! where a row's shape is checked: scalars are coerced to the expected type,
//! structured values are rejected.

use serde_json::Value;

use crate::RawRow;

/// A row field held a value of an unusable type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// A required field was null or absent.
    #[error("field '{field}' is required but was null")]
    Missing { field: String },

    /// A field held a value that cannot be coerced to the expected type.
    #[error("field '{field}' expected {expected}, found {found}")]
    WrongType {
        field: String,
        expected: &'static str,
        found: String,
    },
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Read an optional text field.
///
/// Absent and null map to `None`. Numbers and booleans are rendered as text.
///
/// # Errors
///
/// Returns [`SchemaError::WrongType`] for arrays and objects.
pub fn text(row: &RawRow, field: &str) -> Result<Option<String>, SchemaError> {
    match row.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(SchemaError::WrongType {
            field: field.to_string(),
            expected: "text",
            found: type_name(other).to_string(),
        }),
    }
}

/// Read a required integer field.
///
/// Accepts integer numbers and strings holding an integer.
///
/// # Errors
///
/// Returns [`SchemaError::Missing`] when absent or null, and
/// [`SchemaError::WrongType`] for anything else that is not integral.
pub fn integer(row: &RawRow, field: &str) -> Result<i64, SchemaError> {
    let wrong = |found: &Value| SchemaError::WrongType {
        field: field.to_string(),
        expected: "integer",
        found: type_name(found).to_string(),
    };

    match row.get(field) {
        None | Some(Value::Null) => Err(SchemaError::Missing {
            field: field.to_string(),
        }),
        Some(value @ Value::Number(n)) => n.as_i64().ok_or_else(|| wrong(value)),
        Some(value @ Value::String(s)) => s.trim().parse::<i64>().map_err(|_| wrong(value)),
        Some(other) => Err(wrong(other)),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn row(value: &Value) -> RawRow {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn text_handles_null_and_absent() {
        let r = row(&json!({ "a": null }));
        assert_eq!(text(&r, "a").unwrap(), None);
        assert_eq!(text(&r, "b").unwrap(), None);
    }

    #[test]
    fn text_coerces_scalars() {
        let r = row(&json!({ "n": 42, "b": true, "s": "x" }));
        assert_eq!(text(&r, "n").unwrap().as_deref(), Some("42"));
        assert_eq!(text(&r, "b").unwrap().as_deref(), Some("true"));
        assert_eq!(text(&r, "s").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn text_rejects_structures() {
        let r = row(&json!({ "a": [1, 2] }));
        let err = text(&r, "a").unwrap_err();
        assert_eq!(
            err,
            SchemaError::WrongType {
                field: "a".into(),
                expected: "text",
                found: "array".into(),
            }
        );
    }

    #[test]
    fn integer_accepts_numbers_and_numeric_strings() {
        let r = row(&json!({ "a": 7, "b": "12" }));
        assert_eq!(integer(&r, "a").unwrap(), 7);
        assert_eq!(integer(&r, "b").unwrap(), 12);
    }

    #[test]
    fn integer_rejects_fractions_and_text() {
        let r = row(&json!({ "a": 1.5, "b": "one" }));
        assert!(matches!(integer(&r, "a"), Err(SchemaError::WrongType { .. })));
        assert!(matches!(integer(&r, "b"), Err(SchemaError::WrongType { .. })));
        assert!(matches!(integer(&r, "c"), Err(SchemaError::Missing { .. })));
    }
}
