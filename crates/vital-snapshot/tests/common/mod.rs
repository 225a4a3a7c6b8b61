//! Shared warehouse fixtures.

#![allow(dead_code)]

use vital_snapshot::{Dataset, SnapshotBuilder};
use vital_warehouse::DuckWarehouse;

pub const SCHEMA: &str = "
    CREATE SCHEMA health;
    CREATE TABLE health.biomarkers (name VARCHAR, category VARCHAR, \"type\" VARCHAR, \"use\" VARCHAR);
    CREATE TABLE health.remedies_symptoms (
        \"Name\" VARCHAR, \"Overview\" VARCHAR, \"Cause\" VARCHAR, \"Remedies\" VARCHAR, \"Category\" VARCHAR
    );
    CREATE TABLE health.remedies (
        string_field_1 VARCHAR, string_field_2 VARCHAR, string_field_3 VARCHAR,
        string_field_4 VARCHAR, string_field_5 VARCHAR, string_field_6 VARCHAR,
        string_field_7 VARCHAR
    );
";

pub const ROWS: &str = "
    INSERT INTO health.biomarkers VALUES
        ('Vitamin D', 'Vitamins', 'Blood', 'Bone health'),
        ('ALT', 'Liver', 'Blood', 'Liver function');
    INSERT INTO health.remedies_symptoms VALUES
        ('Headache', 'Pain in the head', 'Stress; dehydration', 'Ginger, Willow bark', 'Symptom'),
        ('Headache', 'Pain in the head', 'Stress; dehydration', 'Ginger, Willow bark', 'Symptom'),
        ('Fatigue', 'Persistent tiredness', NULL, 'Ginseng', 'Symptom'),
        ('Influenza', 'Viral infection', 'Virus', NULL, 'Disease');
    INSERT INTO health.remedies VALUES
        ('Ginger', 'Zingiber', 'Root used for nausea', NULL, NULL, NULL, 'https://img.example/ginger.png'),
        ('Arnica', NULL, 'Topical bruise remedy', NULL, NULL, NULL, NULL),
        (NULL, NULL, 'Unnamed row', NULL, NULL, NULL, NULL);
";

/// An in-memory warehouse with the source tables and sample rows.
pub fn seeded() -> DuckWarehouse {
    let warehouse = DuckWarehouse::open_in_memory().unwrap();
    warehouse.execute_batch(SCHEMA).unwrap();
    warehouse.execute_batch(ROWS).unwrap();
    warehouse
}

pub fn builder(warehouse: DuckWarehouse) -> SnapshotBuilder<DuckWarehouse> {
    SnapshotBuilder::new(warehouse, Dataset::new("health").unwrap())
}
