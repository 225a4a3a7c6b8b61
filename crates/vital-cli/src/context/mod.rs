mod config_warnings;

use vital_cache::{ConfiguredSource, SnapshotCache};
use vital_config::VitalConfig;
use vital_store::ArtifactStore;

pub use config_warnings::warn_unconfigured;

/// Everything a command needs, built once per invocation.
pub struct AppContext {
    pub config: VitalConfig,
    /// The local artifact directory (the snapshot builder's output).
    pub store: ArtifactStore,
    /// Read-through view of the artifacts, local or remote per config.
    pub cache: SnapshotCache<ConfiguredSource>,
}

impl AppContext {
    /// Build the context. Nothing is read until a command asks for it.
    pub fn init(config: VitalConfig) -> anyhow::Result<Self> {
        let store = ArtifactStore::new(&config.artifacts.dir);
        let cache = SnapshotCache::new(ConfiguredSource::from_config(&config.artifacts)?);
        Ok(Self {
            config,
            store,
            cache,
        })
    }
}
