//! # vital-warehouse
//!
//! Read-only query access to the analytical warehouse holding the source
//! tables (`biomarkers`, `remedies_symptoms`, `remedies`).
//!
//! The snapshot builder depends only on the [`Warehouse`] trait: it sends a
//! [`Query`] with named parameters and gets back untyped rows. Rows are then
//! checked field by field through [`schema`] before they become records.
//!
//! [`DuckWarehouse`] is the production implementation. It talks to
//! `MotherDuck` through an `md:` connection string, or to a local `DuckDB`
//! file during development.

pub mod duck;
pub mod error;
pub mod query;
pub mod schema;

use std::future::Future;

pub use duck::DuckWarehouse;
pub use error::WarehouseError;
pub use query::{Query, bind_named};
pub use schema::SchemaError;

/// One result row keyed by column name.
pub type RawRow = serde_json::Map<String, serde_json::Value>;

/// A source of rows for the snapshot builder.
pub trait Warehouse: Send + Sync {
    /// Run `query` and return every row in result order.
    fn query(
        &self,
        query: Query,
    ) -> impl Future<Output = Result<Vec<RawRow>, WarehouseError>> + Send;
}
