//! Configuration loading.
//!
//! Settings are resolved in priority order (later overrides earlier):
//!
//! 1. Built-in defaults
//! 2. Config file (`~/.trailog/config.yml`, or the path given with `--config`)
//! 3. `TRAILOG_DATA_DIR` environment variable
//! 4. Command-line flags (applied by the caller)
//!
//! # Example
//!
//! ```
//! use trailog::config::TrailogConfig;
//!
//! let config: TrailogConfig = serde_yaml::from_str("storage_key: mapty").unwrap();
//! assert_eq!(config.storage_key(), "mapty");
//! ```

pub mod loader;
pub mod schema;

pub use loader::{apply_env, load_config, load_config_file, user_config_path, DATA_DIR_ENV};
pub use schema::TrailogConfig;
