//! Extraction of the three collections and their publication.

use std::collections::HashMap;

use vital_config::DuplicateIdPolicy;
use vital_core::entities::{Biomarker, Remedy, Symptom};
use vital_core::manifest::SnapshotManifest;
use vital_core::{CollectionKind, Record};
use vital_store::{ArtifactStore, CollectionSnapshot, SnapshotSet};
use vital_warehouse::schema::SchemaError;
use vital_warehouse::{Query, RawRow, Warehouse};

use crate::queries::{self, Dataset};
use crate::{SnapshotError, rows};

/// Builds snapshots from a [`Warehouse`].
pub struct SnapshotBuilder<W> {
    pub(crate) warehouse: W,
    pub(crate) dataset: Dataset,
    duplicate_ids: DuplicateIdPolicy,
}

impl<W: Warehouse> SnapshotBuilder<W> {
    #[must_use]
    pub fn new(warehouse: W, dataset: Dataset) -> Self {
        Self {
            warehouse,
            dataset,
            duplicate_ids: DuplicateIdPolicy::default(),
        }
    }

    #[must_use]
    pub const fn with_duplicate_policy(mut self, policy: DuplicateIdPolicy) -> Self {
        self.duplicate_ids = policy;
        self
    }

    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Every biomarker, ordered by name then category.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Warehouse`] if the query fails and
    /// [`SnapshotError::DuplicateIds`] under the reject policy.
    pub async fn build_biomarker_snapshot(&self) -> Result<Vec<Biomarker>, SnapshotError> {
        self.collect(queries::biomarkers(&self.dataset), rows::biomarker)
            .await
    }

    /// Every distinct symptom, ordered by name.
    ///
    /// # Errors
    ///
    /// As for [`Self::build_biomarker_snapshot`].
    pub async fn build_symptom_snapshot(&self) -> Result<Vec<Symptom>, SnapshotError> {
        self.collect(queries::symptoms(&self.dataset), rows::symptom)
            .await
    }

    /// Every named remedy, ordered by name.
    ///
    /// # Errors
    ///
    /// As for [`Self::build_biomarker_snapshot`].
    pub async fn build_remedy_snapshot(&self) -> Result<Vec<Remedy>, SnapshotError> {
        self.collect(queries::remedies(&self.dataset), rows::remedy)
            .await
    }

    /// Extract all three collections concurrently.
    ///
    /// A failing collection is logged and comes back empty with status
    /// `failed`; the others are unaffected.
    pub async fn extract(&self) -> SnapshotSet {
        let (biomarkers, symptoms, remedies) = tokio::join!(
            self.build_biomarker_snapshot(),
            self.build_symptom_snapshot(),
            self.build_remedy_snapshot(),
        );
        SnapshotSet {
            biomarkers: settle(CollectionKind::Biomarkers, biomarkers),
            symptoms: settle(CollectionKind::Symptoms, symptoms),
            remedies: settle(CollectionKind::Remedies, remedies),
        }
    }

    /// Extract and publish a full snapshot into `store`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::SourceUnavailable`] without touching the
    /// store when every collection failed, and [`SnapshotError::Store`] if
    /// an artifact cannot be written.
    pub async fn publish(&self, store: &ArtifactStore) -> Result<SnapshotManifest, SnapshotError> {
        let set = self.extract().await;
        if set.all_failed() {
            return Err(SnapshotError::SourceUnavailable);
        }
        Ok(store.write_snapshots(&set)?)
    }

    async fn collect<T: Record>(
        &self,
        query: Query,
        map: fn(&RawRow) -> Result<Option<T>, SchemaError>,
    ) -> Result<Vec<T>, SnapshotError> {
        let raw = self.warehouse.query(query).await?;
        let total = raw.len();
        let mut records = Vec::with_capacity(total);
        for (index, row) in raw.iter().enumerate() {
            match map(row) {
                Ok(Some(record)) => records.push(record),
                Ok(None) => {
                    tracing::warn!(kind = %T::KIND, row = index, "skipping row with a null name or another category");
                }
                Err(error) => {
                    tracing::warn!(kind = %T::KIND, row = index, %error, "skipping malformed row");
                }
            }
        }
        self.check_duplicates(&records)?;
        tracing::debug!(kind = %T::KIND, rows = total, records = records.len(), "extracted collection");
        Ok(records)
    }

    fn check_duplicates<T: Record>(&self, records: &[T]) -> Result<(), SnapshotError> {
        let ids = duplicate_ids(records);
        if ids.is_empty() {
            return Ok(());
        }
        match self.duplicate_ids {
            DuplicateIdPolicy::Keep => {
                tracing::warn!(
                    kind = %T::KIND,
                    ids = %ids.join(", "),
                    "duplicate ids kept; id lookups return the first match"
                );
                Ok(())
            }
            DuplicateIdPolicy::Reject => Err(SnapshotError::DuplicateIds { kind: T::KIND, ids }),
        }
    }
}

fn settle<T>(
    kind: CollectionKind,
    result: Result<Vec<T>, SnapshotError>,
) -> CollectionSnapshot<T> {
    match result {
        Ok(records) => CollectionSnapshot::extracted(records),
        Err(error) => {
            tracing::warn!(
                %kind,
                %error,
                transport = error.is_transport(),
                "collection extraction failed; publishing empty"
            );
            CollectionSnapshot::failed()
        }
    }
}

/// Ids that occur more than once, in first-seen order.
fn duplicate_ids<T: Record>(records: &[T]) -> Vec<String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut dupes = Vec::new();
    for record in records {
        let count = seen.entry(record.id()).or_insert(0);
        *count += 1;
        if *count == 2 {
            dupes.push(record.id().to_string());
        }
    }
    dupes
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn remedy(name: &str) -> Remedy {
        Remedy {
            id: name.into(),
            name: name.into(),
            description: None,
            alternate_names: None,
            image_url: None,
        }
    }

    #[test]
    fn finds_each_duplicate_once() {
        let records = vec![remedy("A"), remedy("B"), remedy("A"), remedy("A")];
        assert_eq!(duplicate_ids(&records), vec!["A".to_string()]);
    }

    #[test]
    fn unique_ids_have_no_duplicates() {
        assert!(duplicate_ids(&[remedy("A"), remedy("B")]).is_empty());
    }

    #[test]
    fn failure_settles_to_empty_failed_collection() {
        let settled = settle::<Remedy>(CollectionKind::Remedies, Err(SnapshotError::SourceUnavailable));
        assert!(settled.is_failed());
        assert!(settled.records.is_empty());
    }
}
