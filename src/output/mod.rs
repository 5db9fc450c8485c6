//! Terminal output formatting
//!
//! Display utilities for the CLI commands and the simple line mode.

pub mod display;
pub mod formatters;

pub use display::{print_effects, print_round, print_scoreboard, print_word_bank};
pub use formatters::effect_message;
