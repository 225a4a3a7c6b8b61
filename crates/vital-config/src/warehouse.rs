//! Warehouse (`MotherDuck` / `DuckDB`) configuration.
//!
//! Credentials come in one of two forms: an inline access token, or the path
//! of a file holding the token. Their absence switches the snapshot builder
//! into degraded mode.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default `MotherDuck` database name.
fn default_database() -> String {
    String::from("health")
}

/// Default schema holding the source tables.
fn default_dataset() -> String {
    String::from("health")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WarehouseConfig {
    /// Inline `MotherDuck` access token.
    #[serde(default)]
    pub access_token: String,

    /// Path to a file containing the access token.
    #[serde(default)]
    pub token_file: String,

    /// Database name in `MotherDuck`.
    #[serde(default = "default_database")]
    pub database: String,

    /// Schema holding `biomarkers`, `remedies`, and `remedies_symptoms`.
    #[serde(default = "default_dataset")]
    pub dataset: String,

    /// Local `DuckDB` file used instead of `MotherDuck` (development).
    #[serde(default)]
    pub local_path: String,
}

impl Default for WarehouseConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            token_file: String::new(),
            database: default_database(),
            dataset: default_dataset(),
            local_path: String::new(),
        }
    }
}

impl WarehouseConfig {
    /// Whether either credential form is present.
    #[must_use]
    pub const fn has_credentials(&self) -> bool {
        !self.access_token.is_empty() || !self.token_file.is_empty()
    }

    /// Whether a local `DuckDB` file is configured.
    #[must_use]
    pub const fn has_local_path(&self) -> bool {
        !self.local_path.is_empty()
    }

    /// Check if there is any warehouse to extract from.
    ///
    /// A local file needs no credentials, so it counts as configured.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.has_credentials() || self.has_local_path()
    }

    /// Resolve the access token, preferring the inline form.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when neither form is set, and
    /// [`ConfigError::CredentialFile`] when the token file cannot be read or
    /// holds only whitespace.
    pub fn resolve_token(&self) -> Result<String, ConfigError> {
        if !self.access_token.is_empty() {
            return Ok(self.access_token.clone());
        }
        if self.token_file.is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "warehouse".into(),
            });
        }

        let path = PathBuf::from(&self.token_file);
        let contents =
            std::fs::read_to_string(&path).map_err(|error| ConfigError::CredentialFile {
                path: path.clone(),
                reason: error.to_string(),
            })?;
        let token = contents.trim();
        if token.is_empty() {
            return Err(ConfigError::CredentialFile {
                path,
                reason: "file is empty".into(),
            });
        }
        Ok(token.to_string())
    }

    /// Build the `MotherDuck` connection string for `token`.
    ///
    /// Format: `md:{database}?motherduck_token={token}`
    #[must_use]
    pub fn connection_string(&self, token: &str) -> String {
        format!("md:{}?motherduck_token={token}", self.database)
    }
}
