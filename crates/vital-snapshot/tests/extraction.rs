//! Extraction and publication against an in-memory warehouse.

mod common;

use pretty_assertions::assert_eq;
use vital_config::DuplicateIdPolicy;
use vital_core::CollectionKind;
use vital_core::entities::{Biomarker, Remedy, Symptom};
use vital_core::manifest::CollectionStatus;
use vital_snapshot::SnapshotError;
use vital_store::ArtifactStore;
use vital_warehouse::DuckWarehouse;

#[tokio::test]
async fn biomarker_ids_follow_name_order() {
    let builder = common::builder(common::seeded());

    let biomarkers = builder.build_biomarker_snapshot().await.unwrap();

    let ids: Vec<_> = biomarkers.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["1-alt", "2-vitamin-d"]);
    assert_eq!(biomarkers[1].name, "Vitamin D");
    assert_eq!(biomarkers[1].usage.as_deref(), Some("Bone health"));
}

#[tokio::test]
async fn symptoms_exclude_other_categories_and_duplicates() {
    let builder = common::builder(common::seeded());

    let symptoms = builder.build_symptom_snapshot().await.unwrap();

    let names: Vec<_> = symptoms.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Fatigue", "Headache"]);
    assert!(symptoms.iter().all(|s| s.id == s.name));
    assert!(symptoms.iter().all(|s| s.category.as_deref() == Some("Symptom")));
    assert_eq!(symptoms[1].remedy_mentions(), vec!["Ginger", "Willow bark"]);
}

#[tokio::test]
async fn remedies_map_positional_columns() {
    let builder = common::builder(common::seeded());

    let remedies = builder.build_remedy_snapshot().await.unwrap();

    assert_eq!(remedies.len(), 2);
    assert_eq!(remedies[0].name, "Arnica");
    assert_eq!(remedies[1].id, "Ginger");
    assert_eq!(remedies[1].alternate_names.as_deref(), Some("Zingiber"));
    assert_eq!(remedies[1].description.as_deref(), Some("Root used for nausea"));
    assert_eq!(
        remedies[1].image_url.as_deref(),
        Some("https://img.example/ginger.png")
    );
}

#[tokio::test]
async fn biomarker_count_matches_named_rows() {
    let warehouse = common::seeded();
    warehouse
        .execute_batch(
            "INSERT INTO health.biomarkers VALUES
                (NULL, 'Orphan', NULL, NULL),
                ('Vitamin D', 'Supplements', 'Blood', NULL),
                ('Vitamin D (25-OH)', 'Vitamins', NULL, NULL);",
        )
        .unwrap();
    let builder = common::builder(warehouse);

    let biomarkers = builder.build_biomarker_snapshot().await.unwrap();

    assert_eq!(biomarkers.len(), 4);
    let mut ids: Vec<_> = biomarkers.iter().map(|b| b.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4, "ids must be unique: {ids:?}");
    assert!(
        biomarkers
            .iter()
            .any(|b| b.id.ends_with("-vitamin-d--25-oh-"))
    );
}

#[tokio::test]
async fn empty_and_blank_biomarker_names_are_kept() {
    let warehouse = common::seeded();
    warehouse
        .execute_batch(
            "INSERT INTO health.biomarkers VALUES
                ('', 'Misc', NULL, NULL),
                ('  ', 'Misc', NULL, NULL);",
        )
        .unwrap();
    let builder = common::builder(warehouse);

    let biomarkers = builder.build_biomarker_snapshot().await.unwrap();

    let ids: Vec<_> = biomarkers.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["1-", "2---", "3-alt", "4-vitamin-d"]);
    assert_eq!(biomarkers[1].name, "  ");
}

#[tokio::test]
async fn publish_writes_every_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path());
    let builder = common::builder(common::seeded());

    let manifest = builder.publish(&store).await.unwrap();

    let biomarkers: Vec<Biomarker> = store.read_collection(CollectionKind::Biomarkers).unwrap();
    let symptoms: Vec<Symptom> = store.read_collection(CollectionKind::Symptoms).unwrap();
    let remedies: Vec<Remedy> = store.read_collection(CollectionKind::Remedies).unwrap();
    assert_eq!(biomarkers.len(), 2);
    assert_eq!(symptoms.len(), 2);
    assert_eq!(remedies.len(), 2);
    assert!(
        manifest
            .collections
            .iter()
            .all(|c| c.status == CollectionStatus::Extracted)
    );
}

#[tokio::test]
async fn publishing_twice_yields_identical_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path());
    let builder = common::builder(common::seeded());

    builder.publish(&store).await.unwrap();
    let first: Vec<_> = CollectionKind::ALL
        .iter()
        .map(|&k| store.read_raw(k).unwrap())
        .collect();
    builder.publish(&store).await.unwrap();
    let second: Vec<_> = CollectionKind::ALL
        .iter()
        .map(|&k| store.read_raw(k).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[tokio::test]
async fn failed_collection_is_published_empty() {
    let warehouse = common::seeded();
    warehouse.execute_batch("DROP TABLE health.remedies;").unwrap();
    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path());

    let manifest = common::builder(warehouse).publish(&store).await.unwrap();

    let remedies: Vec<Remedy> = store.read_collection(CollectionKind::Remedies).unwrap();
    assert!(remedies.is_empty());
    let summary = manifest.summary(CollectionKind::Remedies).unwrap();
    assert_eq!(summary.status, CollectionStatus::Failed);
    assert_eq!(
        manifest.summary(CollectionKind::Biomarkers).unwrap().count,
        2
    );
}

#[tokio::test]
async fn all_collections_failing_publishes_nothing() {
    let warehouse = DuckWarehouse::open_in_memory().unwrap();
    warehouse.execute_batch("CREATE SCHEMA health;").unwrap();
    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path());
    store
        .write_collection(
            CollectionKind::Remedies,
            &[Remedy {
                id: "Old".into(),
                name: "Old".into(),
                description: None,
                alternate_names: None,
                image_url: None,
            }],
        )
        .unwrap();
    let before = store.read_raw(CollectionKind::Remedies).unwrap();

    let err = common::builder(warehouse).publish(&store).await.unwrap_err();

    assert!(matches!(err, SnapshotError::SourceUnavailable));
    assert_eq!(store.read_raw(CollectionKind::Remedies).unwrap(), before);
    assert!(!store.exists(CollectionKind::Biomarkers));
    assert!(store.read_manifest().unwrap().is_none());
}

#[tokio::test]
async fn duplicate_names_are_kept_by_default() {
    let warehouse = common::seeded();
    warehouse
        .execute_batch(
            "INSERT INTO health.remedies VALUES
                ('Ginger', 'Ginger root', 'Second entry', NULL, NULL, NULL, NULL);",
        )
        .unwrap();

    let remedies = common::builder(warehouse)
        .build_remedy_snapshot()
        .await
        .unwrap();

    assert_eq!(remedies.iter().filter(|r| r.id == "Ginger").count(), 2);
}

#[tokio::test]
async fn duplicate_names_fail_the_collection_when_rejected() {
    let warehouse = common::seeded();
    warehouse
        .execute_batch(
            "INSERT INTO health.remedies VALUES
                ('Ginger', 'Ginger root', 'Second entry', NULL, NULL, NULL, NULL);",
        )
        .unwrap();
    let builder = common::builder(warehouse).with_duplicate_policy(DuplicateIdPolicy::Reject);

    let err = builder.build_remedy_snapshot().await.unwrap_err();
    assert!(matches!(
        err,
        SnapshotError::DuplicateIds { kind: CollectionKind::Remedies, ref ids } if ids == &["Ginger"]
    ));

    let set = builder.extract().await;
    assert!(set.remedies.is_failed());
    assert!(!set.biomarkers.is_failed());
}

#[tokio::test]
async fn find_biomarker_matches_exact_id() {
    let builder = common::builder(common::seeded());

    let found = builder.find_biomarker("2-vitamin-d").await.unwrap().unwrap();

    assert_eq!(found.name, "Vitamin D");
    assert_eq!(found.category.as_deref(), Some("Vitamins"));
}

#[tokio::test]
async fn find_biomarker_falls_back_to_name_pattern() {
    let builder = common::builder(common::seeded());

    let found = builder.find_biomarker("99-vitamin-d").await.unwrap().unwrap();

    assert_eq!(found.id, "99-vitamin-d");
    assert_eq!(found.name, "Vitamin D");
}

#[tokio::test]
async fn find_biomarker_misses() {
    let builder = common::builder(common::seeded());

    assert!(builder.find_biomarker("5-ferritin").await.unwrap().is_none());
    assert!(builder.find_biomarker("7").await.unwrap().is_none());
}
