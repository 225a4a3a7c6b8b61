use serde::Serialize;
use vital_core::{AnyRecord, CollectionKind};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ListResponse {
    kind: CollectionKind,
    /// Matches before the limit was applied.
    total: usize,
    records: Vec<AnyRecord>,
}

/// Handle `vital list`.
pub async fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let term = args.search.as_deref().unwrap_or_default();
    let mut records = ctx.cache.search(args.kind, term).await?;
    let total = records.len();
    if let Some(limit) = effective_limit(flags.limit, ctx.config.general.default_limit) {
        records.truncate(limit);
    }

    output(
        &ListResponse {
            kind: args.kind,
            total,
            records,
        },
        flags.format,
    )
}
