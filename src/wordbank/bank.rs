//! Word bank store
//!
//! Ordered list of distinct `BankWord`s. Every mutation writes the full list
//! to the key-value store under `WORD_BANK_KEY` before it takes effect in
//! memory, so a failed write leaves the bank as it was.

use super::defaults::DEFAULT_WORDS;
use crate::core::{BankError, BankWord, StorageError, ValidationError};
use crate::storage::{KeyValueStore, WORD_BANK_KEY};
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<BankWord>,
}

impl WordBank {
    /// Load the bank from storage, seeding the defaults on first use
    ///
    /// Stored entries that are not valid words, or repeat an earlier entry,
    /// are dropped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read, the stored value is not a
    /// JSON array of strings, or seeding the defaults cannot be written.
    pub fn load<S: KeyValueStore>(store: &mut S) -> Result<Self, BankError> {
        let Some(stored) = store.get(WORD_BANK_KEY)? else {
            let bank = Self::from_words(DEFAULT_WORDS.iter().copied());
            Self::persist(store, &bank.words)?;
            info!(count = bank.len(), "seeded default word bank");
            return Ok(bank);
        };

        let raw: Vec<String> =
            serde_json::from_str(&stored).map_err(|e| StorageError::Corrupt {
                key: WORD_BANK_KEY.to_string(),
                reason: e.to_string(),
            })?;

        let mut bank = Self::default();
        for entry in raw {
            match BankWord::new(&entry) {
                Ok(word) if bank.position(&word).is_none() => bank.words.push(word),
                Ok(word) => warn!(%word, "dropping duplicate stored word"),
                Err(err) => warn!(entry = %entry, %err, "dropping invalid stored word"),
            }
        }

        info!(count = bank.len(), "loaded word bank");
        Ok(bank)
    }

    /// Build an in-memory bank, skipping invalid and repeated entries
    ///
    /// # Examples
    /// ```
    /// use hangman_duel::wordbank::WordBank;
    ///
    /// let bank = WordBank::from_words(["agile", "AGILE", "k8s", "scrum"]);
    /// assert_eq!(bank.len(), 2);
    /// ```
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        let mut bank = Self::default();
        for word in words.into_iter().filter_map(|w| BankWord::new(w).ok()) {
            if bank.position(&word).is_none() {
                bank.words.push(word);
            }
        }
        bank
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[BankWord] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&BankWord> {
        self.words.get(index)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn position(&self, word: &BankWord) -> Option<usize> {
        self.words.iter().position(|w| w == word)
    }

    /// Validate and append a word, then persist
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Empty`, `InvalidChars` or `Duplicate` for
    /// rejected input, or a storage error if the write fails. The bank is
    /// unchanged on error.
    pub fn add<S: KeyValueStore>(
        &mut self,
        raw: &str,
        store: &mut S,
    ) -> Result<&BankWord, BankError> {
        let word = BankWord::new(raw)?;
        if self.position(&word).is_some() {
            return Err(ValidationError::Duplicate.into());
        }

        let mut updated = self.words.clone();
        updated.push(word);
        Self::persist(store, &updated)?;
        self.words = updated;

        let added = &self.words[self.words.len() - 1];
        info!(word = %added, "added word");
        Ok(added)
    }

    /// Replace the word at `index`, then persist
    ///
    /// Editing a word to its current value is allowed.
    ///
    /// # Errors
    ///
    /// Returns `NoSuchEntry` for an out-of-range index, a validation error
    /// for rejected input, or a storage error if the write fails. The entry
    /// is unchanged on error.
    pub fn edit<S: KeyValueStore>(
        &mut self,
        index: usize,
        raw: &str,
        store: &mut S,
    ) -> Result<&BankWord, BankError> {
        self.check_index(index)?;

        let word = BankWord::new(raw)?;
        if self.position(&word).is_some_and(|i| i != index) {
            return Err(ValidationError::Duplicate.into());
        }

        let mut updated = self.words.clone();
        let previous = std::mem::replace(&mut updated[index], word);
        Self::persist(store, &updated)?;
        self.words = updated;

        info!(index, from = %previous, to = %self.words[index], "edited word");
        Ok(&self.words[index])
    }

    /// Remove the word at `index` once `confirm` agrees, then persist
    ///
    /// `confirm` is shown the word about to be removed. Returns the removed
    /// word, or `None` if the user declined.
    ///
    /// # Errors
    ///
    /// Returns `NoSuchEntry` for an out-of-range index or a storage error if
    /// the write fails.
    pub fn delete<S, F>(
        &mut self,
        index: usize,
        confirm: F,
        store: &mut S,
    ) -> Result<Option<BankWord>, BankError>
    where
        S: KeyValueStore,
        F: FnOnce(&BankWord) -> bool,
    {
        self.check_index(index)?;

        if !confirm(&self.words[index]) {
            return Ok(None);
        }

        let mut updated = self.words.clone();
        let removed = updated.remove(index);
        Self::persist(store, &updated)?;
        self.words = updated;

        info!(index, word = %removed, "deleted word");
        Ok(Some(removed))
    }

    fn check_index(&self, index: usize) -> Result<(), BankError> {
        if index < self.words.len() {
            Ok(())
        } else {
            Err(BankError::NoSuchEntry {
                index,
                len: self.words.len(),
            })
        }
    }

    fn persist<S: KeyValueStore>(
        store: &mut S,
        words: &[BankWord],
    ) -> Result<(), StorageError> {
        let json = serde_json::to_string(words)?;
        store.set(WORD_BANK_KEY, &json)
    }
}
