//! Theme preference commands

use crate::core::StorageError;
use crate::storage::KeyValueStore;
use crate::theme::{Theme, load_theme, toggle_theme};

/// Flip the saved theme and return the new one
///
/// # Errors
///
/// Returns an error if storage cannot be read or written.
pub fn run_toggle<S: KeyValueStore>(store: &mut S) -> Result<Theme, StorageError> {
    let mut theme = load_theme(&*store)?;
    toggle_theme(store, &mut theme)
}
