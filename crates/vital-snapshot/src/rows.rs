//! Row to record mapping.
//!
//! Each mapper returns `Ok(None)` for rows whose name is null, and `Err` for
//! rows whose fields have the wrong shape. The builder skips both, logging a
//! warning. Names are taken as stored: an empty or padded name still yields a
//! record, and symptom and remedy ids are the untrimmed name.

use vital_core::entities::{Biomarker, Remedy, Symptom};
use vital_core::ids::biomarker_id;
use vital_warehouse::RawRow;
use vital_warehouse::schema::{self, SchemaError};

use crate::queries::SYMPTOM_CATEGORY;

/// Map a biomarker row. The id comes from the row ordinal and the raw name.
///
/// # Errors
///
/// Returns [`SchemaError`] when `row_id` is missing or a field is structured.
pub fn biomarker(row: &RawRow) -> Result<Option<Biomarker>, SchemaError> {
    let Some(raw_name) = schema::text(row, "name")? else {
        return Ok(None);
    };
    let ordinal = schema::integer(row, "row_id")?;
    Ok(Some(Biomarker {
        id: biomarker_id(ordinal, &raw_name),
        name: raw_name,
        category: schema::text(row, "category")?,
        kind: schema::text(row, "type")?,
        usage: schema::text(row, "use")?,
    }))
}

/// Map a biomarker lookup row, keeping the id the caller asked for.
///
/// # Errors
///
/// Returns [`SchemaError`] when a field is structured.
pub fn biomarker_with_id(row: &RawRow, id: &str) -> Result<Option<Biomarker>, SchemaError> {
    let Some(raw_name) = schema::text(row, "name")? else {
        return Ok(None);
    };
    Ok(Some(Biomarker {
        id: id.to_string(),
        name: raw_name,
        category: schema::text(row, "category")?,
        kind: schema::text(row, "type")?,
        usage: schema::text(row, "use")?,
    }))
}

/// Map a symptom row. The id is the display name.
///
/// Rows whose category is anything other than the symptom tag are dropped,
/// even though the query already filters on it.
///
/// # Errors
///
/// Returns [`SchemaError`] when a field is structured.
pub fn symptom(row: &RawRow) -> Result<Option<Symptom>, SchemaError> {
    let category = schema::text(row, "category")?;
    if category.as_deref() != Some(SYMPTOM_CATEGORY) {
        return Ok(None);
    }
    let Some(display) = schema::text(row, "name")? else {
        return Ok(None);
    };
    Ok(Some(Symptom {
        id: display.clone(),
        name: display,
        description: schema::text(row, "description")?,
        causes: schema::text(row, "causes")?,
        remedies: schema::text(row, "remedies")?,
        category,
    }))
}

/// Map a remedy row. The id is the display name.
///
/// # Errors
///
/// Returns [`SchemaError`] when a field is structured.
pub fn remedy(row: &RawRow) -> Result<Option<Remedy>, SchemaError> {
    let Some(display) = schema::text(row, "name")? else {
        return Ok(None);
    };
    Ok(Some(Remedy {
        id: display.clone(),
        name: display,
        description: schema::text(row, "description")?,
        alternate_names: schema::text(row, "alternate_names")?,
        image_url: schema::text(row, "image_url")?,
    }))
}
