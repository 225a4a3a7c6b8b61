//! Query description and named-parameter binding.
//!
//! Queries are written with `@name` placeholders. [`Query::bind`] rewrites
//! them into positional `?` markers for `DuckDB` and returns the values in
//! placeholder order. Placeholders inside quoted literals or identifiers are
//! left alone.

use crate::WarehouseError;

/// A read query against the warehouse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// SQL text with `@name` placeholders.
    pub sql: String,
    /// Projected column names, in select-list order. Each returned row is
    /// keyed by these names.
    pub columns: Vec<&'static str>,
    /// Named string parameters.
    pub params: Vec<(String, String)>,
}

impl Query {
    #[must_use]
    pub fn new(sql: impl Into<String>, columns: &[&'static str]) -> Self {
        Self {
            sql: sql.into(),
            columns: columns.to_vec(),
            params: Vec::new(),
        }
    }

    /// Attach a named parameter, replacing any earlier value for `name`.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.params.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.params.push((name, value));
        }
        self
    }

    /// Rewrite named placeholders into positional ones.
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::UnknownParameter`] if the SQL names a
    /// parameter that was not attached.
    pub fn bind(&self) -> Result<(String, Vec<String>), WarehouseError> {
        bind_named(&self.sql, &self.params)
    }
}

/// Rewrite `@name` placeholders in `sql` into `?` and collect their values.
///
/// A name used twice is bound twice. Parameters that the SQL never uses are
/// ignored.
///
/// # Errors
///
/// Returns [`WarehouseError::UnknownParameter`] for a placeholder with no
/// matching entry in `params`.
pub fn bind_named(
    sql: &str,
    params: &[(String, String)],
) -> Result<(String, Vec<String>), WarehouseError> {
    let mut out = String::with_capacity(sql.len());
    let mut values = Vec::new();
    let mut quote: Option<char> = None;
    let mut chars = sql.chars().peekable();

    while let Some(c) = chars.next() {
        if let Some(open) = quote {
            out.push(c);
            if c == open {
                quote = None;
            }
            continue;
        }

        match c {
            '\'' | '"' | '`' => {
                quote = Some(c);
                out.push(c);
            }
            '@' if chars.peek().is_some_and(|n| n.is_ascii_alphabetic() || *n == '_') => {
                let mut name = String::new();
                while let Some(&n) = chars.peek() {
                    if n.is_ascii_alphanumeric() || n == '_' {
                        name.push(n);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let value = params
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| value.clone())
                    .ok_or(WarehouseError::UnknownParameter(name))?;
                values.push(value);
                out.push('?');
            }
            _ => out.push(c),
        }
    }

    Ok((out, values))
}
