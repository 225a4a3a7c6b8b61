//! Artifact location configuration.

use serde::{Deserialize, Serialize};

fn default_dir() -> String {
    String::from("public/data")
}

const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtifactsConfig {
    /// Directory holding the published JSON artifacts.
    #[serde(default = "default_dir")]
    pub dir: String,

    /// Base URL the artifacts are served from. When set, readers fetch over
    /// HTTP instead of the local directory.
    #[serde(default)]
    pub base_url: String,

    /// HTTP request timeout for remote artifact reads.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            base_url: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ArtifactsConfig {
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        !self.base_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_local() {
        let config = ArtifactsConfig::default();
        assert_eq!(config.dir, "public/data");
        assert!(!config.is_remote());
        assert_eq!(config.timeout_secs, 30);
    }
}
