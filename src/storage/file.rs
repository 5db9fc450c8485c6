//! JSON file backed store
//!
//! All keys live in one JSON object on disk. Every `set` rewrites the whole
//! file before returning.

use super::KeyValueStore;
use crate::core::StorageError;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`; a missing file is an empty store
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or does not
    /// contain a JSON object of string values.
    ///
    /// # Examples
    /// ```no_run
    /// use hangman_duel::storage::{JsonFileStore, KeyValueStore};
    ///
    /// let store = JsonFileStore::open("hangman_duel.json").unwrap();
    /// println!("theme = {:?}", store.get("theme").unwrap());
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();

        let entries = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };

        debug!(path = %path.display(), keys = entries.len(), "opened storage file");

        Ok(Self { path, entries })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the next save is staged in
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Write the whole map to a staging file, then rename it over the store.
    /// The store file is never left half-written.
    fn flush(&self) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(&self.entries)?;
        let staging = self.staging_path();

        fs::write(&staging, content)?;
        if let Err(err) = fs::rename(&staging, &self.path) {
            let _ = fs::remove_file(&staging);
            return Err(err.into());
        }
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let previous = self.entries.insert(key.to_string(), value.to_string());

        if let Err(err) = self.flush() {
            // Keep memory consistent with what is on disk
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(err);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("state.json")).unwrap();
        assert_eq!(store.get("wordBank").unwrap(), None);
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("theme", "dark").unwrap();
        store.set("wordBank", "[\"AGILE\"]").unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(
            reopened.get("wordBank").unwrap().as_deref(),
            Some("[\"AGILE\"]")
        );
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            JsonFileStore::open(&path),
            Err(StorageError::Json(_))
        ));
    }

    #[test]
    fn failed_write_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore {
            path: dir.path().join("missing").join("state.json"),
            entries: BTreeMap::new(),
        };

        assert!(matches!(
            store.set("theme", "dark"),
            Err(StorageError::Io(_))
        ));
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn save_replaces_file_without_leftovers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{\"theme\": \"light\"}").unwrap();

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("theme", "dark").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![OsString::from("state.json")]);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn stale_staging_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(dir.path().join("state.json.tmp"), "{\"theme\"").unwrap();

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("theme", "dark").unwrap();

        assert!(!dir.path().join("state.json.tmp").exists());
        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
    }
}
