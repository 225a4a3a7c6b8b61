//! The build-time entry point in degraded and configured modes.

mod common;

use pretty_assertions::assert_eq;
use vital_config::VitalConfig;
use vital_core::CollectionKind;
use vital_core::entities::Biomarker;
use vital_core::manifest::CollectionStatus;
use vital_snapshot::{GenerateOutcome, SnapshotError, generate};
use vital_store::ArtifactStore;
use vital_warehouse::DuckWarehouse;

#[tokio::test]
async fn degraded_mode_creates_placeholders() {
    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path().join("data"));

    let outcome = generate(&VitalConfig::default(), &store).await.unwrap();

    assert_eq!(
        outcome,
        GenerateOutcome::Degraded {
            created: CollectionKind::ALL.to_vec()
        }
    );
    for kind in CollectionKind::ALL {
        assert_eq!(std::fs::read_to_string(store.path(kind)).unwrap(), "[]");
    }
}

#[tokio::test]
async fn degraded_mode_keeps_existing_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path());
    for kind in CollectionKind::ALL {
        std::fs::write(store.path(kind), format!("[{{\"marker\":\"{kind}\"}}]")).unwrap();
    }
    let before: Vec<_> = CollectionKind::ALL
        .iter()
        .map(|&k| std::fs::read(store.path(k)).unwrap())
        .collect();

    let outcome = generate(&VitalConfig::default(), &store).await.unwrap();

    assert_eq!(outcome, GenerateOutcome::Degraded { created: vec![] });
    let after: Vec<_> = CollectionKind::ALL
        .iter()
        .map(|&k| std::fs::read(store.path(k)).unwrap())
        .collect();
    assert_eq!(before, after);
}

#[tokio::test]
async fn local_warehouse_file_is_extracted() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("warehouse.duckdb");
    {
        let warehouse = DuckWarehouse::open_local(db_path.to_str().unwrap()).unwrap();
        warehouse.execute_batch(common::SCHEMA).unwrap();
        warehouse.execute_batch(common::ROWS).unwrap();
    }
    let mut config = VitalConfig::default();
    config.warehouse.local_path = db_path.to_string_lossy().into_owned();
    let store = ArtifactStore::new(dir.path().join("data"));

    let outcome = generate(&config, &store).await.unwrap();

    let GenerateOutcome::Published(manifest) = outcome else {
        panic!("expected a published snapshot, got {outcome:?}");
    };
    assert!(
        manifest
            .collections
            .iter()
            .all(|c| c.status == CollectionStatus::Extracted)
    );
    let biomarkers: Vec<Biomarker> = store.read_collection(CollectionKind::Biomarkers).unwrap();
    assert_eq!(biomarkers[0].id, "1-alt");
}

#[tokio::test]
async fn unreachable_warehouse_is_fatal_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = VitalConfig::default();
    config.warehouse.local_path = dir
        .path()
        .join("missing")
        .join("nested")
        .join("warehouse.duckdb")
        .to_string_lossy()
        .into_owned();
    let store = ArtifactStore::new(dir.path().join("data"));

    let err = generate(&config, &store).await.unwrap_err();

    assert!(matches!(err, SnapshotError::Warehouse(_)));
    assert!(!store.dir().exists());
}

#[tokio::test]
async fn unreadable_token_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = VitalConfig::default();
    config.warehouse.token_file = dir.path().join("absent-token").to_string_lossy().into_owned();
    let store = ArtifactStore::new(dir.path().join("data"));

    let err = generate(&config, &store).await.unwrap_err();

    assert!(matches!(err, SnapshotError::Config(_)));
}

#[tokio::test]
async fn invalid_dataset_is_rejected_before_connecting() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = VitalConfig::default();
    config.warehouse.local_path = dir.path().join("w.duckdb").to_string_lossy().into_owned();
    config.warehouse.dataset = "health; DROP".into();
    let store = ArtifactStore::new(dir.path().join("data"));

    let err = generate(&config, &store).await.unwrap_err();

    assert!(matches!(err, SnapshotError::InvalidDataset(_)));
}
