//! Key-value storage capability used by the persistence store.
//!
//! The store only ever needs `get`, `set` and `remove` by string key, so
//! anything that can hold two strings can back it: an in-memory map for
//! tests, or the SQLite `kv` table for the CLI.

pub mod memory;

pub use memory::MemoryStorage;

use thiserror::Error;

/// Key holding the JSON array of time logs.
pub const RECORDS_KEY: &str = "timeLogs";

/// Key holding the integrity token of the last successful write.
pub const CHECKSUM_KEY: &str = "timeLogs_checksum";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("quota exceeded writing '{key}': {needed} bytes needed, limit is {limit}")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },

    /// The stored value exists but cannot be read back as text.
    #[error("value of '{key}' is unreadable: {reason}")]
    Corrupt { key: String, reason: String },

    #[error("storage backend failure: {0}")]
    Backend(#[from] rusqlite::Error),
}

pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &mut T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
