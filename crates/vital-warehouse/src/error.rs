//! Warehouse error types.

/// Errors that can occur while querying the warehouse.
#[derive(Debug, thiserror::Error)]
pub enum WarehouseError {
    /// `DuckDB` operation failed.
    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),

    /// The warehouse could not be opened or authenticated against.
    #[error("Cannot connect to warehouse: {0}")]
    Connect(String),

    /// The SQL referenced a named parameter that was not supplied.
    #[error("Query references unknown parameter @{0}")]
    UnknownParameter(String),

    /// The blocking query task panicked or was cancelled.
    #[error("Query task failed: {0}")]
    Task(String),

    /// A returned row did not match the expected shape.
    #[error(transparent)]
    Schema(#[from] crate::schema::SchemaError),
}

impl WarehouseError {
    /// Whether the failure came from reaching the warehouse rather than from
    /// the shape of a query or row.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::DuckDb(_) | Self::Connect(_) | Self::Task(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaError;

    #[test]
    fn connection_failures_are_transport() {
        assert!(WarehouseError::Connect("refused".into()).is_transport());
    }

    #[test]
    fn shape_failures_are_not_transport() {
        let err = WarehouseError::Schema(SchemaError::Missing {
            field: "name".into(),
        });
        assert!(!err.is_transport());
        assert!(!WarehouseError::UnknownParameter("x".into()).is_transport());
    }
}
