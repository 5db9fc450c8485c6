//! Display functions for the CLI and simple mode

use super::formatters::{
    effect_message, hangman_art, keyboard_row, lives_bar, wrong_letters_text,
};
use crate::game::{Effect, GameSession};
use crate::wordbank::WordBank;
use colored::Colorize;

/// Print the word bank with 1-based positions
pub fn print_word_bank(bank: &WordBank) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "{} {}",
        "WORD BANK".bright_cyan().bold(),
        format!("({} words)", bank.len()).bright_black()
    );
    println!("{}", "─".repeat(40).cyan());

    if bank.is_empty() {
        println!("\n  {}", "No words in the bank!".yellow().bold());
        println!("  Add some DevOps terms to get started.\n");
        return;
    }

    for (i, word) in bank.words().iter().enumerate() {
        println!(
            "  {:>3}. {}",
            (i + 1).to_string().bright_black(),
            word.as_str().bright_white().bold()
        );
    }
    println!();
}

/// Print both players, marking whose turn it is
pub fn print_scoreboard(session: &GameSession) {
    let Some(players) = session.players() else {
        return;
    };

    let line = players
        .iter()
        .map(|(slot, player)| {
            let entry = format!("{}: {}", player.name, player.score);
            if slot == session.current_player() {
                format!("▶ {}", entry.bright_yellow().bold())
            } else {
                format!("  {entry}")
            }
        })
        .collect::<Vec<_>>()
        .join("    ");

    println!("{line}");
}

/// Print the gallows, masked word, lives and wrong letters
pub fn print_round(session: &GameSession) {
    let Some(round) = session.round() else {
        return;
    };
    let max_wrong = session.rules().max_wrong;

    println!("\n{}", "═".repeat(50).cyan());
    print_scoreboard(session);
    println!("{}", "═".repeat(50).cyan());

    for line in hangman_art(round.visible_parts()) {
        println!("   {line}");
    }

    println!("\n   Word:   {}", round.masked_word().bright_white().bold());
    println!(
        "   Lives:  {} {}",
        lives_bar(round.lives_left(), max_wrong).red(),
        round.lives_left()
    );
    println!("   Wrong:  {}", wrong_letters_text(&round.wrong_letters()));
    println!("   Keys:   {}", keyboard_row(round).bright_black());
}

/// Print one line per effect of the last transition
pub fn print_effects(session: &GameSession, effects: &[Effect]) {
    for effect in effects {
        let text = effect_message(session, effect);
        match effect {
            Effect::LetterRevealed(_) => println!("   {}", text.green()),
            Effect::WrongGuess { .. } => println!("   {}", text.red()),
            Effect::ScoreChanged { .. } => println!("   {}", text.bright_yellow()),
            Effect::RoundWon { .. } => println!("\n🎉 {}", text.green().bold()),
            Effect::RoundLost { .. } => println!("\n😢 {}", text.red().bold()),
            Effect::GameStarted | Effect::RoundStarted { .. } | Effect::TurnPassed { .. } => {
                println!("{}", text.bright_cyan());
            }
        }
    }
}
