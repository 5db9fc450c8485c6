//! Word bank entry representation
//!
//! A `BankWord` is a non-empty word made only of the uppercase letters A-Z.
//! User input is trimmed and uppercased before it is checked.

use super::error::ValidationError;
use super::letter::Letter;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated, uppercase A-Z word
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BankWord(String);

/// Trim surrounding whitespace and uppercase the rest
///
/// # Examples
/// ```
/// use hangman_duel::core::normalize;
///
/// assert_eq!(normalize("  devops \n"), "DEVOPS");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

impl BankWord {
    /// Normalize and validate raw user input
    ///
    /// # Errors
    /// Returns `ValidationError::Empty` if nothing is left after trimming,
    /// or `ValidationError::InvalidChars` if anything other than A-Z remains.
    ///
    /// # Examples
    /// ```
    /// use hangman_duel::core::{BankWord, ValidationError};
    ///
    /// let word = BankWord::new(" docker ").unwrap();
    /// assert_eq!(word.as_str(), "DOCKER");
    ///
    /// assert_eq!(BankWord::new("   "), Err(ValidationError::Empty));
    /// assert_eq!(BankWord::new("CI/CD"), Err(ValidationError::InvalidChars));
    /// ```
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let text = normalize(raw);

        if text.is_empty() {
            return Err(ValidationError::Empty);
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(ValidationError::InvalidChars);
        }

        Ok(Self(text))
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a validated word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if the word contains a letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.0.as_bytes().contains(&letter.as_byte())
    }

    /// Iterate over the letters of the word in order
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        // Every byte was validated as A-Z on construction
        self.0.bytes().filter_map(Letter::from_byte)
    }
}

impl TryFrom<String> for BankWord {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<BankWord> for String {
    fn from(word: BankWord) -> Self {
        word.0
    }
}

impl AsRef<str> for BankWord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for BankWord {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BankWord {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for BankWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = BankWord::new("AGILE").unwrap();
        assert_eq!(word.as_str(), "AGILE");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_normalizes_case_and_whitespace() {
        assert_eq!(BankWord::new("kanban").unwrap(), "KANBAN");
        assert_eq!(BankWord::new("  HotFix\t").unwrap(), "HOTFIX");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(BankWord::new(""), Err(ValidationError::Empty));
        assert_eq!(BankWord::new(" \t\n"), Err(ValidationError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(BankWord::new("CI CD"), Err(ValidationError::InvalidChars)); // Inner space
        assert_eq!(BankWord::new("K8S"), Err(ValidationError::InvalidChars)); // Digit
        assert_eq!(BankWord::new("roll-out"), Err(ValidationError::InvalidChars)); // Hyphen
        assert_eq!(BankWord::new("ÉTÉ"), Err(ValidationError::InvalidChars)); // Non-ASCII
    }

    #[test]
    fn word_contains_letter() {
        let word = BankWord::new("MERGE").unwrap();
        assert!(word.contains(Letter::try_from('E').unwrap()));
        assert!(!word.contains(Letter::try_from('Z').unwrap()));
    }

    #[test]
    fn word_letters_in_order() {
        let word = BankWord::new("GIT").unwrap();
        let letters: String = word.letters().map(Letter::as_char).collect();
        assert_eq!(letters, "GIT");
    }

    #[test]
    fn word_serde_validates() {
        let word: BankWord = serde_json::from_str("\"scrum\"").unwrap();
        assert_eq!(word, "SCRUM");
        assert_eq!(serde_json::to_string(&word).unwrap(), "\"SCRUM\"");

        assert!(serde_json::from_str::<BankWord>("\"no way\"").is_err());
    }

    #[test]
    fn word_display() {
        let word = BankWord::new("commit").unwrap();
        assert_eq!(format!("{word}"), "COMMIT");
    }
}
