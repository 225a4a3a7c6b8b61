//! # vital-config
//!
//! Layered configuration loading for Vital using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VITAL_*` prefix, `__` as separator)
//! 2. External overrides passed to [`VitalConfig::load_with_env_overrides`];
//!    [`VitalConfig::load_with_dotenv`] passes the entries of `./.env` here
//! 3. Project-level `.vital/config.toml`
//! 4. User-level `~/.config/vital/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VITAL_WAREHOUSE__ACCESS_TOKEN` -> `warehouse.access_token`,
//! `VITAL_ARTIFACTS__DIR` -> `artifacts.dir`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use vital_config::VitalConfig;
//!
//! let config = VitalConfig::load_with_dotenv().expect("config");
//!
//! if config.warehouse.is_configured() {
//!     println!("Extracting from dataset {}", config.warehouse.dataset);
//! }
//! ```

mod artifacts;
mod error;
mod general;
mod server;
mod snapshot;
mod warehouse;

pub use artifacts::ArtifactsConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use server::ServerConfig;
pub use snapshot::{DuplicateIdPolicy, SnapshotConfig};
pub use warehouse::WarehouseConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
    value::Value,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix for every config key.
pub const ENV_PREFIX: &str = "VITAL_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VitalConfig {
    #[serde(default)]
    pub warehouse: WarehouseConfig,
    #[serde(default)]
    pub artifacts: ArtifactsConfig,
    #[serde(default)]
    pub snapshot: SnapshotConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl VitalConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if any layer fails to parse or extract.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `./.env` entries layered beneath the process
    /// environment.
    ///
    /// The file is read, not exported: process variables are left untouched
    /// and a variable already set in the environment wins over the file.
    /// A missing `.env` is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Dotenv`] if `.env` exists but cannot be parsed,
    /// and [`ConfigError::Figment`] if any layer fails to parse or extract.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let entries = read_dotenv(&PathBuf::from(".env"))?;
        Self::load_with_env_overrides(&entries)
    }

    /// Load configuration with extra `VITAL_*` key/value pairs layered
    /// beneath the process environment.
    ///
    /// Keys that do not carry the `VITAL_` prefix are ignored. A variable set
    /// in the process environment always beats the same key in `overrides`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if any layer fails to parse or extract.
    pub fn load_with_env_overrides(overrides: &[(String, String)]) -> Result<Self, ConfigError> {
        let mut figment = Self::file_figment();
        for (key, value) in overrides {
            let Some(path) = env_key_to_path(key) else {
                continue;
            };
            let parsed = value
                .parse::<Value>()
                .unwrap_or_else(|_| Value::from(value.as_str()));
            figment = figment.merge(Serialized::default(&path, parsed));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::file_figment().merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Defaults plus the user-global and project-local TOML layers.
    fn file_figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".vital/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vital").join("config.toml"))
    }
}

/// Key/value pairs from a dotenv file, or none when the file is absent.
fn read_dotenv(path: &Path) -> Result<Vec<(String, String)>, ConfigError> {
    if !path.is_file() {
        return Ok(Vec::new());
    }
    let dotenv_error = |source| ConfigError::Dotenv {
        path: path.to_path_buf(),
        source,
    };
    dotenvy::from_path_iter(path)
        .map_err(dotenv_error)?
        .map(|entry| entry.map_err(dotenv_error))
        .collect()
}

/// Map `VITAL_WAREHOUSE__ACCESS_TOKEN` to `warehouse.access_token`.
fn env_key_to_path(key: &str) -> Option<String> {
    let rest = key.strip_prefix(ENV_PREFIX)?;
    if rest.is_empty() {
        return None;
    }
    Some(rest.to_ascii_lowercase().split("__").collect::<Vec<_>>().join("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = VitalConfig::default();
        assert!(!config.warehouse.is_configured());
        assert!(!config.artifacts.is_remote());
        assert_eq!(config.snapshot.duplicate_ids, DuplicateIdPolicy::Keep);
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = VitalConfig::figment();
        let config: VitalConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.general.default_limit, 20);
        assert_eq!(config.artifacts.dir, "public/data");
    }

    #[test]
    fn env_keys_map_to_dotted_paths() {
        assert_eq!(
            env_key_to_path("VITAL_WAREHOUSE__ACCESS_TOKEN").as_deref(),
            Some("warehouse.access_token")
        );
        assert_eq!(env_key_to_path("OTHER_KEY"), None);
        assert_eq!(env_key_to_path("VITAL_"), None);
    }
}
