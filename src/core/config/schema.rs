//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$BUILDMATRIX_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/buildmatrix/config.toml`
//! 3. `~/.buildmatrix/config.toml` (canonical write location)
//!
//! # Repo Config
//!
//! Located at `./buildmatrix.toml` in the working directory.
//!
//! # Validation
//!
//! Config values are validated after parsing to ensure they conform to
//! expected formats (e.g., the manifest path must be non-empty).

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// quiet = false
/// verbose = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Default quiet mode
    pub quiet: Option<bool>,

    /// Default verbose matrix rendering
    pub verbose: Option<bool>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}

/// Repository configuration.
///
/// # Example
///
/// ```toml
/// manifest = "manifest.json"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RepoConfig {
    /// Manifest path, relative to the working directory
    pub manifest: Option<String>,
}

impl RepoConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(manifest) = &self.manifest {
            if manifest.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "manifest path cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
