//! Durable key-value storage.
//!
//! The workout store persists through a [`KeyValueStorage`]: a string slot
//! per key, the same contract a browser's local storage offers. Two
//! backends ship with the crate:
//!
//! - [`FileStorage`] keeps one JSON file per key and writes atomically
//! - [`MemoryStorage`] keeps values in process, with an optional quota

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::Result;

/// A durable string slot per key.
///
/// Implementations must make a completed `set_item` visible to the next
/// `get_item` on the same key, and must not leave a partially written
/// value behind when a write fails.
pub trait KeyValueStorage {
    /// Read the value stored under `key`, or `None` if absent.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}

/// Get the default data directory.
pub fn default_data_dir() -> std::path::PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("trailog")
}
