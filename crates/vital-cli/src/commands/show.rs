use serde::Serialize;
use vital_core::{AnyRecord, CollectionKind};
use vital_core::entities::SymptomRemedy;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShowArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ShowResponse {
    record: AnyRecord,
    /// Remedy names parsed from a symptom's free-text `remedies` field.
    #[serde(skip_serializing_if = "Option::is_none")]
    remedy_mentions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    linked_remedies: Option<Vec<SymptomRemedy>>,
}

#[derive(Debug, Serialize)]
struct NotFoundResponse<'a> {
    found: bool,
    kind: CollectionKind,
    id: &'a str,
}

/// Handle `vital show`.
///
/// An unknown id is reported, not treated as a failure.
pub async fn handle(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(record) = ctx.cache.lookup(args.kind, &args.id).await? else {
        return output(
            &NotFoundResponse {
                found: false,
                kind: args.kind,
                id: &args.id,
            },
            flags.format,
        );
    };

    let (remedy_mentions, linked_remedies) = match &record {
        AnyRecord::Symptom(symptom) => (
            Some(symptom.remedy_mentions().into_iter().map(String::from).collect()),
            Some(ctx.cache.remedies_for_symptom(&symptom.id)),
        ),
        _ => (None, None),
    };

    output(
        &ShowResponse {
            record,
            remedy_mentions,
            linked_remedies,
        },
        flags.format,
    )
}
