use std::sync::Arc;

use vital_core::entities::{Biomarker, Remedy, Symptom, SymptomRemedy};
use vital_core::{AnyRecord, CollectionKind, Record, filter};

use crate::slot::{Slot, SlotState};
use crate::{ArtifactSource, CacheError};

/// Session-scoped read-through cache of the three collections.
///
/// Each collection is fetched once on first use and shared afterwards.
/// Failed loads are returned to the caller and not remembered, so the next
/// call fetches again.
pub struct SnapshotCache<S> {
    source: S,
    biomarkers: Slot<Biomarker>,
    symptoms: Slot<Symptom>,
    remedies: Slot<Remedy>,
}

impl<S: ArtifactSource> SnapshotCache<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            biomarkers: Slot::new(),
            symptoms: Slot::new(),
            remedies: Slot::new(),
        }
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// All biomarkers in artifact order.
    ///
    /// # Errors
    ///
    /// Returns the [`CacheError`] from fetching or parsing the artifact.
    pub async fn biomarkers(&self) -> Result<Arc<[Biomarker]>, CacheError> {
        self.load(&self.biomarkers).await
    }

    /// All symptoms in artifact order.
    ///
    /// # Errors
    ///
    /// As for [`Self::biomarkers`].
    pub async fn symptoms(&self) -> Result<Arc<[Symptom]>, CacheError> {
        self.load(&self.symptoms).await
    }

    /// All remedies in artifact order.
    ///
    /// # Errors
    ///
    /// As for [`Self::biomarkers`].
    pub async fn remedies(&self) -> Result<Arc<[Remedy]>, CacheError> {
        self.load(&self.remedies).await
    }

    /// # Errors
    ///
    /// As for [`Self::biomarkers`].
    pub async fn biomarker(&self, id: &str) -> Result<Option<Biomarker>, CacheError> {
        Ok(first_with_id(&self.biomarkers().await?, id))
    }

    /// # Errors
    ///
    /// As for [`Self::biomarkers`].
    pub async fn symptom(&self, id: &str) -> Result<Option<Symptom>, CacheError> {
        Ok(first_with_id(&self.symptoms().await?, id))
    }

    /// # Errors
    ///
    /// As for [`Self::biomarkers`].
    pub async fn remedy(&self, id: &str) -> Result<Option<Remedy>, CacheError> {
        Ok(first_with_id(&self.remedies().await?, id))
    }

    /// Look up one record of any kind.
    ///
    /// # Errors
    ///
    /// As for [`Self::biomarkers`].
    pub async fn lookup(
        &self,
        kind: CollectionKind,
        id: &str,
    ) -> Result<Option<AnyRecord>, CacheError> {
        Ok(match kind {
            CollectionKind::Biomarkers => self.biomarker(id).await?.map(AnyRecord::from),
            CollectionKind::Symptoms => self.symptom(id).await?.map(AnyRecord::from),
            CollectionKind::Remedies => self.remedy(id).await?.map(AnyRecord::from),
        })
    }

    /// Records of `kind` whose name or description contains `term`,
    /// case-insensitively. An empty term returns the whole collection.
    ///
    /// # Errors
    ///
    /// As for [`Self::biomarkers`].
    pub async fn search(
        &self,
        kind: CollectionKind,
        term: &str,
    ) -> Result<Vec<AnyRecord>, CacheError> {
        Ok(match kind {
            CollectionKind::Biomarkers => matching(&self.biomarkers().await?, term),
            CollectionKind::Symptoms => matching(&self.symptoms().await?, term),
            CollectionKind::Remedies => matching(&self.remedies().await?, term),
        })
    }

    pub async fn state(&self, kind: CollectionKind) -> SlotState {
        match kind {
            CollectionKind::Biomarkers => self.biomarkers.state().await,
            CollectionKind::Symptoms => self.symptoms.state().await,
            CollectionKind::Remedies => self.remedies.state().await,
        }
    }

    /// Remedies linked to a symptom.
    ///
    /// No artifact carries this relationship yet, so the result is always
    /// empty. Callers should fall back to [`Symptom::remedy_mentions`].
    #[must_use]
    pub fn remedies_for_symptom(&self, symptom_id: &str) -> Vec<SymptomRemedy> {
        tracing::debug!(symptom_id, "symptom-remedy links are not published");
        Vec::new()
    }

    /// Every declared symptom/remedy link. Always empty, as above.
    #[must_use]
    pub fn symptom_remedies(&self) -> Vec<SymptomRemedy> {
        Vec::new()
    }

    async fn load<T: Record>(&self, slot: &Slot<T>) -> Result<Arc<[T]>, CacheError> {
        if let Some(hit) = slot.get().await {
            return Ok(hit);
        }

        let _loading = slot.begin();
        let bytes = self.source.fetch(T::KIND).await?;
        let records: Vec<T> = serde_json::from_slice(&bytes)
            .map_err(|source| CacheError::Parse { kind: T::KIND, source })?;
        let shared: Arc<[T]> = records.into();
        slot.set(Arc::clone(&shared)).await;

        tracing::debug!(kind = %T::KIND, count = shared.len(), "loaded collection");
        Ok(shared)
    }
}

fn first_with_id<T: Record>(records: &[T], id: &str) -> Option<T> {
    records.iter().find(|record| record.id() == id).cloned()
}

fn matching<T>(records: &[T], term: &str) -> Vec<AnyRecord>
where
    T: Record,
    AnyRecord: From<T>,
{
    filter::filter(records, term)
        .into_iter()
        .cloned()
        .map(AnyRecord::from)
        .collect()
}
