//! Guessable letters and the set of letters guessed in a round

use std::fmt;

/// One of the 26 uppercase letters A-Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// Error for characters outside A-Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a letter A-Z")]
pub struct NotALetter(pub char);

impl Letter {
    /// Build a letter from an ASCII byte, accepting either case
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        let upper = byte.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Some(Self(upper))
        } else {
            None
        }
    }

    /// All 26 letters in keyboard order
    pub fn alphabet() -> impl Iterator<Item = Self> {
        (b'A'..=b'Z').map(Self)
    }

    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Zero-based position in the alphabet (A = 0)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }
}

impl TryFrom<char> for Letter {
    type Error = NotALetter;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii() {
            Self::from_byte(c as u8).ok_or(NotALetter(c))
        } else {
            Err(NotALetter(c))
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Letters guessed so far, each at most once, in the order they were guessed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterSet {
    order: Vec<Letter>,
    mask: u32,
}

impl LetterSet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            order: Vec::new(),
            mask: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: Letter) -> bool {
        self.mask & (1 << letter.index()) != 0
    }

    /// Add a letter; returns false if it was already present
    pub fn insert(&mut self, letter: Letter) -> bool {
        if self.contains(letter) {
            return false;
        }
        self.mask |= 1 << letter.index();
        self.order.push(letter);
        true
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.mask = 0;
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate in guess order
    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        self.order.iter().copied()
    }
}

impl<'a> IntoIterator for &'a LetterSet {
    type Item = Letter;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Letter>>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::try_from(c).unwrap()
    }

    #[test]
    fn letter_accepts_both_cases() {
        assert_eq!(letter('a'), letter('A'));
        assert_eq!(letter('q').as_char(), 'Q');
    }

    #[test]
    fn letter_rejects_non_letters() {
        assert_eq!(Letter::try_from('1'), Err(NotALetter('1')));
        assert_eq!(Letter::try_from(' '), Err(NotALetter(' ')));
        assert_eq!(Letter::try_from('ß'), Err(NotALetter('ß')));
    }

    #[test]
    fn alphabet_has_26_letters_in_order() {
        let all: String = Letter::alphabet().map(Letter::as_char).collect();
        assert_eq!(all, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert_eq!(letter('Z').index(), 25);
    }

    #[test]
    fn set_insert_is_idempotent() {
        let mut set = LetterSet::new();
        assert!(set.insert(letter('E')));
        assert!(!set.insert(letter('E')));
        assert_eq!(set.len(), 1);
        assert!(set.contains(letter('E')));
        assert!(!set.contains(letter('D')));
    }

    #[test]
    fn set_keeps_guess_order() {
        let mut set = LetterSet::new();
        for c in ['Z', 'A', 'M'] {
            set.insert(letter(c));
        }
        let order: String = set.iter().map(Letter::as_char).collect();
        assert_eq!(order, "ZAM");
    }

    #[test]
    fn set_clear() {
        let mut set = LetterSet::new();
        set.insert(letter('A'));
        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains(letter('A')));
    }
}
