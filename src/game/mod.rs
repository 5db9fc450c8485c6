//! Two-player hangman rounds and scoring

mod player;
mod round;
mod rules;
mod session;

pub use player::{Player, PlayerSlot, Players};
pub use round::{GuessOutcome, HangmanPart, Round, RoundStatus};
pub use rules::{GameRules, MAX_WRONG, POINTS_PER_WIN};
pub use session::{Action, Effect, GameSession, Phase};
