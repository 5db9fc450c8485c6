//! Word bank commands
//!
//! Positions on the command line are 1-based.

use crate::core::{BankError, BankWord};
use crate::storage::KeyValueStore;
use crate::wordbank::WordBank;

/// Append a word
///
/// # Errors
///
/// Returns the bank's validation or storage error.
pub fn add_word<S: KeyValueStore>(
    bank: &mut WordBank,
    store: &mut S,
    raw: &str,
) -> Result<BankWord, BankError> {
    bank.add(raw, store).cloned()
}

/// Replace the word at a 1-based position
///
/// # Errors
///
/// Returns `NoSuchPosition` for a position outside the bank, or the bank's
/// validation or storage error.
pub fn edit_word<S: KeyValueStore>(
    bank: &mut WordBank,
    store: &mut S,
    position: usize,
    raw: &str,
) -> Result<BankWord, BankError> {
    let index = to_index(bank, position)?;
    bank.edit(index, raw, store)
        .cloned()
        .map_err(|err| at_position(err, position))
}

/// Delete the word at a 1-based position after `confirm` agrees
///
/// # Errors
///
/// Returns `NoSuchPosition` for a position outside the bank or a storage
/// error.
pub fn delete_word<S, F>(
    bank: &mut WordBank,
    store: &mut S,
    position: usize,
    confirm: F,
) -> Result<Option<BankWord>, BankError>
where
    S: KeyValueStore,
    F: FnOnce(&BankWord) -> bool,
{
    let index = to_index(bank, position)?;
    bank.delete(index, confirm, store)
        .map_err(|err| at_position(err, position))
}

fn to_index(bank: &WordBank, position: usize) -> Result<usize, BankError> {
    position.checked_sub(1).ok_or(BankError::NoSuchPosition {
        position,
        len: bank.len(),
    })
}

/// Report a missing entry by the position the user typed
fn at_position(err: BankError, position: usize) -> BankError {
    match err {
        BankError::NoSuchEntry { len, .. } => BankError::NoSuchPosition { position, len },
        other => other,
    }
}
