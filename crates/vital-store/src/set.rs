use vital_core::CollectionKind;
use vital_core::entities::{Biomarker, Remedy, Symptom};
use vital_core::manifest::{CollectionStatus, CollectionSummary, SnapshotManifest};

/// One collection's records and how they were obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionSnapshot<T> {
    pub records: Vec<T>,
    pub status: CollectionStatus,
}

impl<T> CollectionSnapshot<T> {
    #[must_use]
    pub const fn extracted(records: Vec<T>) -> Self {
        Self {
            records,
            status: CollectionStatus::Extracted,
        }
    }

    /// An empty collection standing in for a failed extraction.
    #[must_use]
    pub const fn failed() -> Self {
        Self {
            records: Vec::new(),
            status: CollectionStatus::Failed,
        }
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.status == CollectionStatus::Failed
    }

    fn summary(&self, kind: CollectionKind) -> CollectionSummary {
        CollectionSummary {
            kind,
            count: self.records.len(),
            status: self.status,
        }
    }
}

/// A point-in-time extraction of all three collections.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotSet {
    pub biomarkers: CollectionSnapshot<Biomarker>,
    pub symptoms: CollectionSnapshot<Symptom>,
    pub remedies: CollectionSnapshot<Remedy>,
}

impl SnapshotSet {
    /// Whether every collection failed to extract.
    #[must_use]
    pub fn all_failed(&self) -> bool {
        self.biomarkers.is_failed() && self.symptoms.is_failed() && self.remedies.is_failed()
    }

    #[must_use]
    pub fn summaries(&self) -> Vec<CollectionSummary> {
        vec![
            self.biomarkers.summary(CollectionKind::Biomarkers),
            self.symptoms.summary(CollectionKind::Symptoms),
            self.remedies.summary(CollectionKind::Remedies),
        ]
    }

    #[must_use]
    pub fn manifest(&self) -> SnapshotManifest {
        SnapshotManifest::new(self.summaries())
    }
}
