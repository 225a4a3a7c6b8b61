use anyhow::{anyhow, bail};
use serde::Serialize;
use vital_core::entities::Biomarker;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FindBiomarkerArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct FindBiomarkerResponse {
    biomarker: Biomarker,
}

/// Handle `vital find-biomarker`.
pub async fn handle(
    args: &FindBiomarkerArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if !ctx.config.warehouse.is_configured() {
        bail!("find-biomarker queries the warehouse directly; no warehouse is configured");
    }

    let builder = vital_snapshot::open_builder(&ctx.config)?;
    let biomarker = builder
        .find_biomarker(&args.id)
        .await?
        .ok_or_else(|| anyhow!("Biomarker not found: {}", args.id))?;

    output(&FindBiomarkerResponse { biomarker }, flags.format)
}
