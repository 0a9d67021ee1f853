//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use super::TrailogConfig;
use crate::error::{Result, TrailogError};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "TRAILOG_DATA_DIR";

/// User's config file: `~/.trailog/config.yml`.
pub fn user_config_path() -> Option<PathBuf> {
    Some(dirs::home_dir()?.join(".trailog").join("config.yml"))
}

/// Load a config file. A missing file yields the defaults.
pub fn load_config_file(path: &Path) -> Result<TrailogConfig> {
    if !path.exists() {
        return Ok(TrailogConfig::default());
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(TrailogConfig::default());
    }

    serde_yaml::from_str(&content).map_err(|e| TrailogError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Resolve configuration from file and environment.
///
/// An explicit `path` must exist; the default user config is optional.
pub fn load_config(path: Option<&Path>) -> Result<TrailogConfig> {
    let config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(TrailogError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            load_config_file(path)?
        }
        None => match user_config_path() {
            Some(path) => load_config_file(&path)?,
            None => TrailogConfig::default(),
        },
    };

    let config = apply_env(config, |name| std::env::var(name).ok());
    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}

/// Apply environment overrides using `lookup` to read variables.
pub fn apply_env(config: TrailogConfig, lookup: impl Fn(&str) -> Option<String>) -> TrailogConfig {
    let data_dir = lookup(DATA_DIR_ENV)
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from);

    config.merge(TrailogConfig {
        data_dir,
        ..Default::default()
    })
}
