//! Error types shared by the word bank, storage and game session

use thiserror::Error;

/// A user input was rejected before any state changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("word cannot be empty")]
    Empty,
    #[error("word must contain only letters A-Z")]
    InvalidChars,
    #[error("duplicate words are not allowed")]
    Duplicate,
    #[error("both player names are required")]
    MissingName,
    #[error("player names must be different")]
    DuplicateName,
}

/// Raised when a round is requested but the word bank has no entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no words in the word bank, add some words first")]
pub struct EmptyBankError;

/// Failure reading or writing the key-value store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("stored value for '{key}' is corrupt: {reason}")]
    Corrupt { key: String, reason: String },
}

/// Failure of a word bank operation
#[derive(Debug, Error)]
pub enum BankError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("no word at index {index} (bank has {len} words)")]
    NoSuchEntry { index: usize, len: usize },
    /// 1-based position as typed on the command line
    #[error("no word at position {position} (bank has {len} words)")]
    NoSuchPosition { position: usize, len: usize },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl BankError {
    /// The validation failure, if this error is one
    #[must_use]
    pub const fn validation(&self) -> Option<ValidationError> {
        match self {
            Self::Validation(err) => Some(*err),
            _ => None,
        }
    }
}

/// Failure of a game session transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    EmptyBank(#[from] EmptyBankError),
    #[error("no game has been started")]
    NotStarted,
}
