//! Formatting utilities shared by the text front ends

use crate::core::Letter;
use crate::game::{Effect, GameSession, HangmanPart, PlayerSlot, Round};

/// Gallows with the given parts drawn, one string per line
#[must_use]
pub fn hangman_art(parts: &[HangmanPart]) -> Vec<String> {
    let shown = |part: HangmanPart, glyph: char| if parts.contains(&part) { glyph } else { ' ' };

    vec![
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  {}   |", shown(HangmanPart::Head, 'O')),
        format!(
            " {}{}{}  |",
            shown(HangmanPart::LeftArm, '/'),
            shown(HangmanPart::Body, '|'),
            shown(HangmanPart::RightArm, '\\')
        ),
        format!(
            " {} {}  |",
            shown(HangmanPart::LeftLeg, '/'),
            shown(HangmanPart::RightLeg, '\\')
        ),
        "      |".to_string(),
        "=========".to_string(),
    ]
}

/// Wrong letters as a comma list, or "None yet"
#[must_use]
pub fn wrong_letters_text(letters: &[Letter]) -> String {
    if letters.is_empty() {
        return "None yet".to_string();
    }
    letters
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Filled and empty hearts for remaining lives
#[must_use]
pub fn lives_bar(lives_left: u8, max_wrong: u8) -> String {
    let lost = max_wrong.saturating_sub(lives_left);
    format!(
        "{}{}",
        "♥".repeat(usize::from(lives_left)),
        "♡".repeat(usize::from(lost))
    )
}

/// A-Z with already guessed letters blanked out
#[must_use]
pub fn keyboard_row(round: &Round) -> String {
    Letter::alphabet()
        .map(|l| if round.is_guessed(l) { '·' } else { l.as_char() })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

fn player_name(session: &GameSession, slot: PlayerSlot) -> String {
    session
        .player(slot)
        .map_or_else(|| slot.to_string(), |p| p.name.clone())
}

/// One line describing an effect, using the session's player names
#[must_use]
pub fn effect_message(session: &GameSession, effect: &Effect) -> String {
    match effect {
        Effect::GameStarted => format!(
            "New game: {} vs {}",
            player_name(session, PlayerSlot::One),
            player_name(session, PlayerSlot::Two)
        ),
        Effect::RoundStarted { word_len } => format!(
            "New word with {word_len} letters. {}'s turn.",
            player_name(session, session.current_player())
        ),
        Effect::LetterRevealed(letter) => format!("{letter} is in the word"),
        Effect::WrongGuess {
            letter,
            lives_left: 1,
            ..
        } => format!("Wrong: {letter} (1 life left)"),
        Effect::WrongGuess {
            letter, lives_left, ..
        } => format!("Wrong: {letter} ({lives_left} lives left)"),
        Effect::ScoreChanged { slot, score } => format!(
            "{} +{} ({score} total)",
            player_name(session, *slot),
            session.rules().points_per_win
        ),
        Effect::RoundWon { winner, word } => {
            format!("{} won! The word was: {word}", player_name(session, *winner))
        }
        Effect::RoundLost { loser, word } => {
            format!("{} lost! The word was: {word}", player_name(session, *loser))
        }
        Effect::TurnPassed { to } => {
            format!("{} plays the next round.", player_name(session, *to))
        }
    }
}
