use anyhow::bail;
use serde::Serialize;
use vital_core::CollectionKind;
use vital_core::manifest::CollectionSummary;
use vital_snapshot::GenerateOutcome;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GenerateArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    mode: &'static str,
    dir: String,
    /// Placeholders written in degraded mode.
    created: Vec<CollectionKind>,
    collections: Vec<CollectionSummary>,
}

/// Handle `vital generate`.
pub async fn handle(
    args: &GenerateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if args.require_warehouse && !ctx.config.warehouse.is_configured() {
        bail!(
            "no warehouse configured; set VITAL_WAREHOUSE__ACCESS_TOKEN, VITAL_WAREHOUSE__TOKEN_FILE or VITAL_WAREHOUSE__LOCAL_PATH"
        );
    }

    let outcome = vital_snapshot::generate(&ctx.config, &ctx.store).await?;
    let dir = ctx.store.dir().display().to_string();
    let response = match outcome {
        GenerateOutcome::Published(manifest) => GenerateResponse {
            mode: "published",
            dir,
            created: Vec::new(),
            collections: manifest.collections,
        },
        GenerateOutcome::Degraded { created } => GenerateResponse {
            mode: "degraded",
            dir,
            created,
            collections: Vec::new(),
        },
    };
    output(&response, flags.format)
}
