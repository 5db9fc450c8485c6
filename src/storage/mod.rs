//! Key-value persistence
//!
//! The word bank and the theme preference each live under one fixed key.
//! Writes are synchronous and unbatched: a failed write is returned to the
//! caller and never retried.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::core::StorageError;

/// Key holding the word bank as a JSON array of strings
pub const WORD_BANK_KEY: &str = "wordBank";

/// Key holding the theme preference, `"light"` or `"dark"`
pub const THEME_KEY: &str = "theme";

/// String key-value storage
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
