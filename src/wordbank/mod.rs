//! The word bank: persisted, validated candidate words for each round
//!
//! Provides the default seed list and the `WordBank` store with its
//! add/edit/delete rules.

mod bank;
mod defaults;

pub use bank::WordBank;
pub use defaults::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BankWord;

    #[test]
    fn defaults_count_matches_const() {
        assert_eq!(DEFAULT_WORDS.len(), DEFAULT_WORDS_COUNT);
    }

    #[test]
    fn defaults_are_valid_words() {
        for &word in DEFAULT_WORDS {
            let parsed = BankWord::new(word).unwrap();
            assert_eq!(parsed, word, "Word '{word}' is not already normalized");
        }
    }

    #[test]
    fn defaults_are_distinct() {
        let unique: std::collections::HashSet<_> = DEFAULT_WORDS.iter().collect();
        assert_eq!(unique.len(), DEFAULT_WORDS.len());
    }
}
