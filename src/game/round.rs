//! A single round: one word guessed to a win or a loss
//!
//! Invariant: `wrong_guesses` always equals the number of guessed letters
//! that are not in the word.

use crate::core::{BankWord, Letter, LetterSet};

/// Where the round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// Hangman figure parts, drawn one per wrong guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HangmanPart {
    Head,
    Body,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl HangmanPart {
    /// Drawing order
    pub const ALL: [Self; 6] = [
        Self::Head,
        Self::Body,
        Self::LeftArm,
        Self::RightArm,
        Self::LeftLeg,
        Self::RightLeg,
    ];

    /// Part revealed by the `count`-th wrong guess (1-based)
    #[must_use]
    pub fn for_miss(count: u8) -> Option<Self> {
        usize::from(count)
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
    }
}

/// Result of guessing one letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Round over or letter already guessed; nothing changed
    Ignored,
    /// Letter is in the word
    Hit,
    /// Letter is not in the word
    Miss { wrong_guesses: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    word: BankWord,
    guessed: LetterSet,
    wrong_guesses: u8,
    max_wrong: u8,
    status: RoundStatus,
}

impl Round {
    #[must_use]
    pub const fn new(word: BankWord, max_wrong: u8) -> Self {
        Self {
            word,
            guessed: LetterSet::new(),
            wrong_guesses: 0,
            max_wrong,
            status: RoundStatus::InProgress,
        }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &BankWord {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn guessed(&self) -> &LetterSet {
        &self.guessed
    }

    #[inline]
    #[must_use]
    pub const fn wrong_guesses(&self) -> u8 {
        self.wrong_guesses
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == RoundStatus::InProgress
    }

    #[inline]
    #[must_use]
    pub const fn is_guessed(&self, letter: Letter) -> bool {
        self.guessed.contains(letter)
    }

    /// Guess a letter and settle the round if it is now won or lost
    ///
    /// Guessing after the round ended, or repeating a letter, changes nothing.
    pub fn guess(&mut self, letter: Letter) -> GuessOutcome {
        if !self.is_active() || !self.guessed.insert(letter) {
            return GuessOutcome::Ignored;
        }

        let outcome = if self.word.contains(letter) {
            GuessOutcome::Hit
        } else {
            self.wrong_guesses += 1;
            GuessOutcome::Miss {
                wrong_guesses: self.wrong_guesses,
            }
        };

        // A completed word wins even on the last life
        if self.is_solved() {
            self.status = RoundStatus::Won;
        } else if self.wrong_guesses >= self.max_wrong {
            self.status = RoundStatus::Lost;
        }

        outcome
    }

    /// Every letter of the word has been guessed
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.word.letters().all(|l| self.guessed.contains(l))
    }

    /// Word with unguessed letters as `_`, space separated
    ///
    /// # Examples
    /// ```
    /// use hangman_duel::core::{BankWord, Letter};
    /// use hangman_duel::game::Round;
    ///
    /// let mut round = Round::new(BankWord::new("DEVOPS").unwrap(), 6);
    /// round.guess(Letter::try_from('D').unwrap());
    /// round.guess(Letter::try_from('V').unwrap());
    /// assert_eq!(round.masked_word(), "D _ V _ _ _");
    /// ```
    #[must_use]
    pub fn masked_word(&self) -> String {
        self.word
            .letters()
            .map(|l| if self.is_guessed(l) { l.as_char() } else { '_' })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Guessed letters missing from the word, in guess order
    #[must_use]
    pub fn wrong_letters(&self) -> Vec<Letter> {
        self.guessed
            .iter()
            .filter(|&l| !self.word.contains(l))
            .collect()
    }

    #[must_use]
    pub const fn lives_left(&self) -> u8 {
        self.max_wrong.saturating_sub(self.wrong_guesses)
    }

    /// Hangman parts drawn so far
    #[must_use]
    pub fn visible_parts(&self) -> &'static [HangmanPart] {
        let shown = usize::from(self.wrong_guesses).min(HangmanPart::ALL.len());
        &HangmanPart::ALL[..shown]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(word: &str) -> Round {
        Round::new(BankWord::new(word).unwrap(), 6)
    }

    fn guess_all(round: &mut Round, letters: &str) -> Vec<GuessOutcome> {
        letters
            .chars()
            .map(|c| round.guess(Letter::try_from(c).unwrap()))
            .collect()
    }

    #[test]
    fn new_round_is_clean() {
        let r = round("AGILE");
        assert!(r.is_active());
        assert!(r.guessed().is_empty());
        assert_eq!(r.wrong_guesses(), 0);
        assert_eq!(r.lives_left(), 6);
        assert_eq!(r.masked_word(), "_ _ _ _ _");
    }

    #[test]
    fn guessing_every_letter_wins() {
        let mut r = round("DEVOPS");
        let outcomes = guess_all(&mut r, "DEVOP");
        assert!(outcomes.iter().all(|o| *o == GuessOutcome::Hit));
        assert!(r.is_active());

        guess_all(&mut r, "S");
        assert_eq!(r.status(), RoundStatus::Won);
        assert_eq!(r.masked_word(), "D E V O P S");
    }

    #[test]
    fn repeated_letters_need_one_guess() {
        let mut r = round("MERGE");
        guess_all(&mut r, "MRGE");
        assert_eq!(r.status(), RoundStatus::Won);
    }

    #[test]
    fn six_misses_lose() {
        let mut r = round("AGILE");
        let outcomes = guess_all(&mut r, "ZXQWY");
        assert_eq!(outcomes[4], GuessOutcome::Miss { wrong_guesses: 5 });
        assert!(r.is_active());

        guess_all(&mut r, "U");
        assert_eq!(r.status(), RoundStatus::Lost);
        assert_eq!(r.lives_left(), 0);
    }

    #[test]
    fn repeat_guess_is_ignored() {
        let mut r = round("AGILE");
        assert_eq!(guess_all(&mut r, "Z"), [GuessOutcome::Miss { wrong_guesses: 1 }]);
        assert_eq!(guess_all(&mut r, "Z"), [GuessOutcome::Ignored]);
        assert_eq!(r.wrong_guesses(), 1);
        assert_eq!(r.guessed().len(), 1);
    }

    #[test]
    fn guesses_after_round_end_are_ignored() {
        let mut r = round("GIT");
        guess_all(&mut r, "GIT");
        assert_eq!(guess_all(&mut r, "Z"), [GuessOutcome::Ignored]);
        assert_eq!(r.wrong_guesses(), 0);
    }

    #[test]
    fn winning_on_last_life_counts_as_win() {
        let mut r = Round::new(BankWord::new("AB").unwrap(), 2);
        guess_all(&mut r, "ZA");
        // One wrong guess left; completing the word must still win
        guess_all(&mut r, "B");
        assert_eq!(r.status(), RoundStatus::Won);
    }

    #[test]
    fn wrong_count_matches_wrong_letters() {
        let mut r = round("PIPELINE");
        guess_all(&mut r, "PZEQIX");
        let wrong: String = r.wrong_letters().iter().map(|l| l.as_char()).collect();
        assert_eq!(wrong, "ZQX");
        assert_eq!(usize::from(r.wrong_guesses()), r.wrong_letters().len());
    }

    #[test]
    fn parts_drawn_in_order() {
        let mut r = round("AGILE");
        assert!(r.visible_parts().is_empty());

        guess_all(&mut r, "ZX");
        assert_eq!(r.visible_parts(), &[HangmanPart::Head, HangmanPart::Body]);

        assert_eq!(HangmanPart::for_miss(0), None);
        assert_eq!(HangmanPart::for_miss(3), Some(HangmanPart::LeftArm));
        assert_eq!(HangmanPart::for_miss(6), Some(HangmanPart::RightLeg));
        assert_eq!(HangmanPart::for_miss(7), None);
    }
}
