//! Configuration schema.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::Result;
use crate::storage::default_data_dir;
use crate::store::{SortKey, DEFAULT_STORAGE_KEY};

/// User configuration. Every field is optional; unset fields fall back to
/// built-in defaults through the accessor methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrailogConfig {
    /// Directory holding the storage files.
    pub data_dir: Option<PathBuf>,

    /// Key the workout list is stored under.
    pub storage_key: Option<String>,

    /// Sort applied by `list` when no `--sort` is given.
    pub default_sort: Option<String>,
}

impl TrailogConfig {
    /// Resolved data directory.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }

    /// Resolved storage key.
    pub fn storage_key(&self) -> &str {
        self.storage_key.as_deref().unwrap_or(DEFAULT_STORAGE_KEY)
    }

    /// Parsed default sort key, if one is configured.
    pub fn default_sort(&self) -> Result<Option<SortKey>> {
        self.default_sort
            .as_deref()
            .map(str::parse::<SortKey>)
            .transpose()
    }

    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: TrailogConfig) -> Self {
        Self {
            data_dir: other.data_dir.or(self.data_dir),
            storage_key: other.storage_key.or(self.storage_key),
            default_sort: other.default_sort.or(self.default_sort),
        }
    }
}
