//! Command implementations

pub mod simple;
pub mod theme;
pub mod words;

pub use simple::run_simple;
pub use theme::run_toggle;
pub use words::{add_word, delete_word, edit_word};
