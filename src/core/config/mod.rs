//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! Buildmatrix has two configuration scopes:
//! - **Global**: User-level defaults
//! - **Repo**: Repository-level overrides
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Repo config file
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$BUILDMATRIX_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/buildmatrix/config.toml`
//! 3. `~/.buildmatrix/config.toml` (canonical write location)
//!
//! # Repo Config Location
//!
//! `./buildmatrix.toml` in the working directory.

pub mod schema;

pub use schema::{GlobalConfig, RepoConfig};

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Merged configuration from all sources.
///
/// This struct provides accessor methods that apply precedence rules
/// automatically. Repo config overrides global config.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Repository configuration (if present)
    pub repo: Option<RepoConfig>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed or
    /// fail validation. Missing config files are not an error (defaults
    /// are used).
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let global = match global_config_path() {
            Some(path) if path.exists() => {
                let config: GlobalConfig = read_toml(&path)?;
                config.validate()?;
                config
            }
            _ => GlobalConfig::default(),
        };

        let repo_path = cwd.join(REPO_CONFIG_NAME);
        let repo = if repo_path.exists() {
            let config: RepoConfig = read_toml(&repo_path)?;
            config.validate()?;
            Some(config)
        } else {
            None
        };

        Ok(Self { global, repo })
    }

    /// Default quiet mode.
    pub fn quiet(&self) -> bool {
        self.global.quiet.unwrap_or(false)
    }

    /// Default verbose matrix rendering.
    pub fn verbose(&self) -> bool {
        self.global.verbose.unwrap_or(false)
    }

    /// Configured manifest path, if any.
    pub fn manifest(&self) -> Option<&str> {
        self.repo.as_ref()?.manifest.as_deref()
    }
}

/// Repo config filename, resolved against the working directory.
pub const REPO_CONFIG_NAME: &str = "buildmatrix.toml";

/// Resolve the global config path.
///
/// Honors `$BUILDMATRIX_CONFIG`, then `$XDG_CONFIG_HOME`, then the home
/// directory. Returns `None` when no home directory is available.
fn global_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("BUILDMATRIX_CONFIG") {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Some(PathBuf::from(xdg).join("buildmatrix").join("config.toml"));
        }
    }

    dirs::home_dir().map(|home| home.join(".buildmatrix").join("config.toml"))
}

fn read_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
