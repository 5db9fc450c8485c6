//! Runtime settings resolved from the command line

use crate::core::StorageError;
use crate::game::GameRules;
use crate::storage::JsonFileStore;
use std::path::PathBuf;

/// Storage file used when `--data` is not given
pub const DEFAULT_DATA_FILE: &str = "hangman_duel.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// JSON file holding the word bank and theme
    pub data_path: PathBuf,
    /// Number of `-v` flags
    pub verbosity: u8,
    /// Log destination; stderr (or nowhere, in the TUI) when unset
    pub log_file: Option<PathBuf>,
    pub rules: GameRules,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            verbosity: 0,
            log_file: None,
            rules: GameRules::default(),
        }
    }
}

impl Settings {
    /// Open the configured storage file
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open_store(&self) -> Result<JsonFileStore, StorageError> {
        JsonFileStore::open(&self.data_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{MAX_WRONG, POINTS_PER_WIN};

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.data_path, PathBuf::from("hangman_duel.json"));
        assert_eq!(settings.rules.max_wrong, MAX_WRONG);
        assert_eq!(settings.rules.points_per_win, POINTS_PER_WIN);
        assert!(settings.log_file.is_none());
    }

    #[test]
    fn open_store_in_fresh_directory() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            data_path: dir.path().join("state.json"),
            ..Settings::default()
        };
        let store = settings.open_store().unwrap();
        assert_eq!(store.path(), settings.data_path.as_path());
    }
}
