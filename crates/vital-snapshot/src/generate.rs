//! The `generate` entry point: configuration in, published artifacts out.

use vital_config::{VitalConfig, WarehouseConfig};
use vital_core::CollectionKind;
use vital_core::manifest::SnapshotManifest;
use vital_store::ArtifactStore;
use vital_warehouse::DuckWarehouse;

use crate::{Dataset, SnapshotBuilder, SnapshotError};

/// What a generate run did.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateOutcome {
    /// A fresh snapshot was extracted and published.
    Published(SnapshotManifest),
    /// No warehouse was configured. Lists the placeholder artifacts created;
    /// empty when every artifact already existed.
    Degraded { created: Vec<CollectionKind> },
}

/// Open the configured warehouse.
///
/// Credentials select `MotherDuck`; otherwise the local file is used.
///
/// # Errors
///
/// Returns [`SnapshotError::Config`] if the token cannot be resolved and
/// [`SnapshotError::Warehouse`] if the connection is refused.
pub fn connect(config: &WarehouseConfig) -> Result<DuckWarehouse, SnapshotError> {
    if config.has_credentials() {
        let token = config.resolve_token()?;
        tracing::info!(database = %config.database, "connecting to MotherDuck");
        Ok(DuckWarehouse::open_motherduck(&config.connection_string(&token))?)
    } else {
        tracing::info!(path = %config.local_path, "opening local warehouse");
        Ok(DuckWarehouse::open_local(&config.local_path)?)
    }
}

/// Build a [`SnapshotBuilder`] over the configured warehouse.
///
/// # Errors
///
/// As for [`connect`], plus [`SnapshotError::InvalidDataset`].
pub fn open_builder(config: &VitalConfig) -> Result<SnapshotBuilder<DuckWarehouse>, SnapshotError> {
    let dataset = Dataset::new(&config.warehouse.dataset)?;
    let warehouse = connect(&config.warehouse)?;
    Ok(SnapshotBuilder::new(warehouse, dataset)
        .with_duplicate_policy(config.snapshot.duplicate_ids))
}

/// Produce the artifacts for a build.
///
/// Without a configured warehouse this never fails the build: missing
/// artifacts become empty placeholders and existing ones are left alone.
///
/// # Errors
///
/// Returns an error when a configured warehouse cannot be reached, when
/// every collection fails, or when artifacts cannot be written. Nothing is
/// published in the first two cases.
pub async fn generate(
    config: &VitalConfig,
    store: &ArtifactStore,
) -> Result<GenerateOutcome, SnapshotError> {
    if !config.warehouse.is_configured() {
        tracing::warn!("no warehouse credentials found; skipping snapshot generation");
        let created = store.ensure_placeholders()?;
        if created.is_empty() {
            tracing::info!(dir = %store.dir().display(), "using existing artifacts");
        } else {
            tracing::info!(
                dir = %store.dir().display(),
                created = created.len(),
                "wrote empty placeholder artifacts"
            );
        }
        return Ok(GenerateOutcome::Degraded { created });
    }

    let manifest = open_builder(config)?.publish(store).await?;
    Ok(GenerateOutcome::Published(manifest))
}
