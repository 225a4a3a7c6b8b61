//! Live biomarker lookup straight from the warehouse.

use vital_core::entities::Biomarker;
use vital_core::ids::{biomarker_name_hint, slugify};
use vital_warehouse::Warehouse;

use crate::{SnapshotBuilder, SnapshotError, queries, rows};

impl<W: Warehouse> SnapshotBuilder<W> {
    /// Find a biomarker by id without going through published artifacts.
    ///
    /// Tries an exact id match over a fresh extraction first. Failing that,
    /// falls back to a substring match on the name part of the id, returning
    /// the first hit under the requested id.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Warehouse`] if either query fails.
    pub async fn find_biomarker(&self, id: &str) -> Result<Option<Biomarker>, SnapshotError> {
        let all = self.build_biomarker_snapshot().await?;
        if let Some(found) = all.into_iter().find(|b| b.id == id) {
            return Ok(Some(found));
        }

        let hint = biomarker_name_hint(id);
        if hint.trim().is_empty() {
            return Ok(None);
        }
        let pattern = format!("%{}%", slugify(&hint));
        tracing::debug!(id, %pattern, "no exact biomarker match, trying name pattern");

        let rows = self
            .warehouse
            .query(queries::biomarker_by_slug(&self.dataset, &pattern))
            .await?;
        let Some(row) = rows.first() else {
            return Ok(None);
        };
        rows::biomarker_with_id(row, id).map_err(|error| {
            SnapshotError::Warehouse(vital_warehouse::WarehouseError::Schema(error))
        })
    }
}
