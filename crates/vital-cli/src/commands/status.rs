use serde::Serialize;
use vital_core::manifest::SnapshotManifest;
use vital_store::ArtifactInfo;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusResponse {
    artifacts_dir: String,
    warehouse_configured: bool,
    remote_base_url: Option<String>,
    manifest_current: Option<bool>,
    artifacts: Vec<ArtifactInfo>,
    manifest: Option<SnapshotManifest>,
}

/// Handle `vital status`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let manifest = match ctx.store.read_manifest() {
        Ok(manifest) => manifest,
        Err(error) => {
            tracing::warn!(%error, "ignoring unreadable manifest");
            None
        }
    };

    let response = StatusResponse {
        artifacts_dir: ctx.store.dir().display().to_string(),
        warehouse_configured: ctx.config.warehouse.is_configured(),
        remote_base_url: ctx
            .config
            .artifacts
            .is_remote()
            .then(|| ctx.config.artifacts.base_url.clone()),
        manifest_current: manifest.as_ref().map(SnapshotManifest::is_current),
        artifacts: ctx.store.inspect(),
        manifest,
    };
    output(&response, flags.format)
}
