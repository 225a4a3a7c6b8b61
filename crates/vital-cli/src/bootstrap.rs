use anyhow::Context;
use vital_config::VitalConfig;

use crate::cli::GlobalFlags;

/// Load the layered configuration (including `./.env`), then apply CLI overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<VitalConfig> {
    let mut config =
        VitalConfig::load_with_dotenv().context("failed to load vital configuration")?;
    if let Some(dir) = &flags.artifacts_dir {
        config.artifacts.dir.clone_from(dir);
    }
    Ok(config)
}
