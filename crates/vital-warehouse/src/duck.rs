//! `DuckDB` / `MotherDuck` implementation of [`Warehouse`].
//!
//! `DuckDB` is synchronous. Each query clones the shared connection and runs
//! on tokio's blocking pool, so the three snapshot extractions can proceed in
//! parallel without stalling the runtime.

use std::future::Future;
use std::sync::{Arc, Mutex};

use duckdb::Connection;
use duckdb::types::Value as DuckValue;
use serde_json::Value;

use crate::{Query, RawRow, Warehouse, WarehouseError};

/// Warehouse client over a `DuckDB` connection.
#[derive(Clone)]
pub struct DuckWarehouse {
    conn: Arc<Mutex<Connection>>,
}

impl DuckWarehouse {
    /// Connect to `MotherDuck` with a full `md:` connection string.
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::Connect`] if the connection or token is rejected.
    pub fn open_motherduck(connection_string: &str) -> Result<Self, WarehouseError> {
        let conn = Connection::open(connection_string)
            .map_err(|error| WarehouseError::Connect(redact(&error.to_string())))?;
        Ok(Self::from_connection(conn))
    }

    /// Open a local `DuckDB` file.
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::Connect`] if the file cannot be opened.
    pub fn open_local(path: &str) -> Result<Self, WarehouseError> {
        let conn =
            Connection::open(path).map_err(|error| WarehouseError::Connect(error.to_string()))?;
        Ok(Self::from_connection(conn))
    }

    /// Open an in-memory warehouse (for testing).
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::Connect`] if `DuckDB` fails to start.
    pub fn open_in_memory() -> Result<Self, WarehouseError> {
        let conn = Connection::open_in_memory()
            .map_err(|error| WarehouseError::Connect(error.to_string()))?;
        Ok(Self::from_connection(conn))
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Run one or more statements without returning rows.
    ///
    /// Used to seed fixtures and create views; snapshot extraction never
    /// writes.
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::DuckDb`] if any statement fails.
    pub fn execute_batch(&self, sql: &str) -> Result<(), WarehouseError> {
        let conn = self.cloned_connection()?;
        conn.execute_batch(sql)?;
        Ok(())
    }

    fn cloned_connection(&self) -> Result<Connection, WarehouseError> {
        let guard = self
            .conn
            .lock()
            .map_err(|_| WarehouseError::Task("warehouse connection lock poisoned".into()))?;
        Ok(guard.try_clone()?)
    }
}

impl Warehouse for DuckWarehouse {
    fn query(
        &self,
        query: Query,
    ) -> impl Future<Output = Result<Vec<RawRow>, WarehouseError>> + Send {
        let this = self.clone();
        async move {
            let (sql, values) = query.bind()?;
            let columns = query.columns;
            tracing::debug!(columns = columns.len(), params = values.len(), "warehouse query");

            tokio::task::spawn_blocking(move || {
                let conn = this.cloned_connection()?;
                run_query(&conn, &sql, &values, &columns)
            })
            .await
            .map_err(|error| WarehouseError::Task(error.to_string()))?
        }
    }
}

fn run_query(
    conn: &Connection,
    sql: &str,
    values: &[String],
    columns: &[&'static str],
) -> Result<Vec<RawRow>, WarehouseError> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(duckdb::params_from_iter(values.iter()))?;

    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
        let mut map = RawRow::new();
        for (index, column) in columns.iter().enumerate() {
            let value: DuckValue = row.get(index)?;
            map.insert((*column).to_string(), to_json(value));
        }
        out.push(map);
    }
    Ok(out)
}

/// Convert a `DuckDB` value into the untyped row representation.
///
/// Scalar types map directly; anything else is rendered as text so the
/// schema step can decide whether it is acceptable.
fn to_json(value: DuckValue) -> Value {
    match value {
        DuckValue::Null => Value::Null,
        DuckValue::Boolean(b) => Value::Bool(b),
        DuckValue::TinyInt(n) => Value::from(n),
        DuckValue::SmallInt(n) => Value::from(n),
        DuckValue::Int(n) => Value::from(n),
        DuckValue::BigInt(n) => Value::from(n),
        DuckValue::HugeInt(n) => {
            i64::try_from(n).map_or_else(|_| Value::String(n.to_string()), Value::from)
        }
        DuckValue::UTinyInt(n) => Value::from(n),
        DuckValue::USmallInt(n) => Value::from(n),
        DuckValue::UInt(n) => Value::from(n),
        DuckValue::UBigInt(n) => Value::from(n),
        DuckValue::Float(f) => Value::from(f64::from(f)),
        DuckValue::Double(f) => Value::from(f),
        DuckValue::Text(s) | DuckValue::Enum(s) => Value::String(s),
        other => Value::String(format!("{other:?}")),
    }
}

/// Strip the token out of connection error messages.
fn redact(message: &str) -> String {
    message.find("motherduck_token=").map_or_else(
        || message.to_string(),
        |start| {
            let rest = &message[start..];
            let end = rest
                .find(|c: char| c == '&' || c.is_whitespace())
                .map_or(message.len(), |offset| start + offset);
            format!("{}motherduck_token=***{}", &message[..start], &message[end..])
        },
    )
}
