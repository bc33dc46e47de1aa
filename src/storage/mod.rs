//! Local key-value persistence.
//!
//! A [`KeyValueStore`] holds named string values (the equivalent of a
//! browser's local storage). [`Persistence`] sits on top and never lets a
//! missing or corrupt value escape as an error on load.

mod adapter;
mod file;
mod memory;

use thiserror::Error;

pub use adapter::Persistence;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors raised by a key-value backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O failed for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize value for key '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage is read-only")]
    ReadOnly,
}

/// A flat string-to-string store addressed by key.
pub trait KeyValueStore: Send + Sync {
    /// Returns `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
