//! # vital-store
//!
//! The artifact store: a directory holding one JSON file per collection plus
//! a manifest.
//!
//! It is the hand-off point between the snapshot builder (the only writer)
//! and the read-through cache (a whole-file reader). Contract:
//! - an artifact may be absent before the first build;
//! - a present artifact is always a complete JSON array of valid records;
//! - artifacts are only ever replaced whole, through a temp file renamed
//!   over the target, so a reader sees the old file or the new one.

pub mod error;
mod set;

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use vital_core::CollectionKind;
use vital_core::manifest::{
    CollectionStatus, CollectionSummary, MANIFEST_FILE, SnapshotManifest,
};

pub use error::StoreError;
pub use set::{CollectionSnapshot, SnapshotSet};

/// Presence and size of one artifact on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactInfo {
    pub kind: CollectionKind,
    pub path: PathBuf,
    pub exists: bool,
    pub bytes: u64,
}

/// A directory of published artifacts.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the artifact for `kind`.
    #[must_use]
    pub fn path(&self, kind: CollectionKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }

    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.dir.join(MANIFEST_FILE)
    }

    #[must_use]
    pub fn exists(&self, kind: CollectionKind) -> bool {
        self.path(kind).is_file()
    }

    /// Publish every collection in `set`, then the manifest.
    ///
    /// Each file is replaced atomically. Returns the manifest that was written.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] or [`StoreError::Serialize`] on the first
    /// artifact that cannot be written. Artifacts written before the failure
    /// stay published.
    pub fn write_snapshots(&self, set: &SnapshotSet) -> Result<SnapshotManifest, StoreError> {
        self.write_collection(CollectionKind::Biomarkers, &set.biomarkers.records)?;
        self.write_collection(CollectionKind::Symptoms, &set.symptoms.records)?;
        self.write_collection(CollectionKind::Remedies, &set.remedies.records)?;

        let manifest = set.manifest();
        self.write_manifest(&manifest)?;

        tracing::info!(
            dir = %self.dir.display(),
            biomarkers = set.biomarkers.records.len(),
            symptoms = set.symptoms.records.len(),
            remedies = set.remedies.records.len(),
            "published snapshot"
        );
        Ok(manifest)
    }

    /// Serialize `records` as pretty-printed JSON and replace the artifact.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialize`] or [`StoreError::Io`].
    pub fn write_collection<T: Serialize>(
        &self,
        kind: CollectionKind,
        records: &[T],
    ) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(records)
            .map_err(|source| StoreError::Serialize { kind, source })?;
        self.replace(&self.path(kind), &bytes)
    }

    /// Write the manifest.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be replaced.
    pub fn write_manifest(&self, manifest: &SnapshotManifest) -> Result<(), StoreError> {
        let path = self.manifest_path();
        let bytes = serde_json::to_vec_pretty(manifest)
            .map_err(|source| StoreError::Manifest {
                path: path.clone(),
                source,
            })?;
        self.replace(&path, &bytes)
    }

    /// Make sure every artifact exists without disturbing existing ones.
    ///
    /// Missing artifacts are created as empty arrays. When all three had to
    /// be created and there is no manifest, a placeholder manifest is written
    /// too. Returns the kinds that were created.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory or a placeholder cannot be
    /// written.
    pub fn ensure_placeholders(&self) -> Result<Vec<CollectionKind>, StoreError> {
        let mut created = Vec::new();
        for kind in CollectionKind::ALL {
            if self.exists(kind) {
                continue;
            }
            self.replace(&self.path(kind), b"[]")?;
            created.push(kind);
        }

        if created.len() == CollectionKind::ALL.len() && !self.manifest_path().is_file() {
            let summaries = CollectionKind::ALL
                .iter()
                .map(|&kind| CollectionSummary {
                    kind,
                    count: 0,
                    status: CollectionStatus::Placeholder,
                })
                .collect();
            self.write_manifest(&SnapshotManifest::new(summaries))?;
        }

        Ok(created)
    }

    /// Read the raw bytes of an artifact.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file is missing or unreadable.
    pub fn read_raw(&self, kind: CollectionKind) -> Result<Vec<u8>, StoreError> {
        let path = self.path(kind);
        std::fs::read(&path).map_err(|source| StoreError::io(path, source))
    }

    /// Read and parse an artifact.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if unreadable and [`StoreError::Parse`] if
    /// the contents are not a valid collection.
    pub fn read_collection<T: DeserializeOwned>(
        &self,
        kind: CollectionKind,
    ) -> Result<Vec<T>, StoreError> {
        let bytes = self.read_raw(kind)?;
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
            kind,
            path: self.path(kind),
            source,
        })
    }

    /// Read the manifest, if one has been published.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if it exists but cannot be read and
    /// [`StoreError::Manifest`] if it cannot be parsed.
    pub fn read_manifest(&self) -> Result<Option<SnapshotManifest>, StoreError> {
        let path = self.manifest_path();
        if !path.is_file() {
            return Ok(None);
        }
        let bytes = std::fs::read(&path).map_err(|source| StoreError::io(&path, source))?;
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| StoreError::Manifest { path, source })
    }

    /// Presence and size of every artifact.
    #[must_use]
    pub fn inspect(&self) -> Vec<ArtifactInfo> {
        CollectionKind::ALL
            .iter()
            .map(|&kind| {
                let path = self.path(kind);
                let meta = std::fs::metadata(&path).ok().filter(std::fs::Metadata::is_file);
                ArtifactInfo {
                    kind,
                    exists: meta.is_some(),
                    bytes: meta.map_or(0, |m| m.len()),
                    path,
                }
            })
            .collect()
    }

    /// Write `bytes` to a temp file beside `target` and rename it over the target.
    fn replace(&self, target: &Path, bytes: &[u8]) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| StoreError::io(&self.dir, source))?;

        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)
            .map_err(|source| StoreError::io(&self.dir, source))?;
        tmp.write_all(bytes)
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|source| StoreError::io(tmp.path(), source))?;
        tmp.persist(target)
            .map_err(|error| StoreError::io(target, error.error))?;
        Ok(())
    }
}
