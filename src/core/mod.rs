//! Core domain types for the game
//!
//! Validated words, letters and the error types shared by the rest of the
//! crate. Nothing here touches storage or the terminal.

mod error;
mod letter;
mod word;

pub use error::{BankError, EmptyBankError, GameError, StorageError, ValidationError};
pub use letter::{Letter, LetterSet, NotALetter};
pub use word::{BankWord, normalize};
