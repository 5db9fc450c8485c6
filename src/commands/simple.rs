//! Simple interactive CLI mode
//!
//! Text-based two-player game without TUI

use crate::core::{GameError, Letter};
use crate::game::{Action, GameRules, GameSession, Phase};
use crate::output::{print_effects, print_round, print_scoreboard};
use crate::wordbank::WordBank;
use anyhow::{Result, bail};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Answer to the "Next round?" prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NextStep {
    NextRound,
    NewGame,
    Quit,
}

impl NextStep {
    fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "yes" | "y" | "" => Self::NextRound,
            "new" => Self::NewGame,
            _ => Self::Quit,
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng>(bank: &WordBank, rules: GameRules, rng: &mut R) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Hangman Duel - Simple Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Two players take turns. Guess the word one letter at a time;");
    println!(
        "{} wrong guesses lose the round.\n",
        rules.max_wrong.to_string().bright_yellow()
    );
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut session = GameSession::new(rules);
    if !start_new_game(&mut session, bank, rng)? {
        return Ok(());
    }

    loop {
        print_round(&session);

        if matches!(session.phase(), Phase::Won | Phase::Lost) {
            println!();
            print_scoreboard(&session);
            println!();

            match NextStep::parse(&get_user_input("Next round? (yes/no/new)")?) {
                NextStep::NextRound => {
                    match session.dispatch(Action::NextRound, bank.words(), rng) {
                        Ok(effects) => print_effects(&session, &effects),
                        Err(err) => {
                            println!("❌ {err}");
                            return Ok(());
                        }
                    }
                }
                NextStep::NewGame => {
                    if !start_new_game(&mut session, bank, rng)? {
                        return Ok(());
                    }
                }
                NextStep::Quit => break,
            }
            continue;
        }

        let input = get_user_input("\nGuess a letter")?;
        match input.to_lowercase().as_str() {
            "quit" | "exit" => break,
            "new" => {
                if !start_new_game(&mut session, bank, rng)? {
                    return Ok(());
                }
            }
            _ => {
                let mut chars = input.chars();
                match (chars.next().map(Letter::try_from), chars.next()) {
                    (Some(Ok(letter)), None) => {
                        if session.round().is_some_and(|r| r.is_guessed(letter)) {
                            println!("Letter {letter} was already guessed.");
                        }
                        match session.dispatch(Action::Guess(letter), bank.words(), rng) {
                            Ok(effects) => print_effects(&session, &effects),
                            Err(err) => println!("❌ {err}"),
                        }
                    }
                    _ => println!("❌ Type a single letter A-Z, 'new' or 'quit'"),
                }
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Ask for names until the game starts; false if it cannot start
fn start_new_game<R: Rng>(
    session: &mut GameSession,
    bank: &WordBank,
    rng: &mut R,
) -> Result<bool> {
    loop {
        let action = Action::StartGame {
            player_one: get_user_input("Player 1 name")?,
            player_two: get_user_input("Player 2 name")?,
        };

        match session.dispatch(action, bank.words(), rng) {
            Ok(effects) => {
                print_effects(session, &effects);
                return Ok(true);
            }
            Err(GameError::Validation(err)) => println!("❌ {err}\n"),
            Err(err) => {
                println!("❌ {err}");
                return Ok(false);
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        bail!("input closed");
    }

    Ok(input.trim().to_string())
}
