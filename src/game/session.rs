//! Game session state machine
//!
//! A `GameSession` is created once and owned by the front end, which feeds it
//! `Action`s and renders the returned `Effect`s. The word bank is read only
//! when a round starts.
//!
//! Scoring: when a round is won the player who is *not* current gets the
//! points and the turn stays put. When a round is lost nobody scores and the
//! turn passes to the other player.

use super::player::{Player, PlayerSlot, Players};
use super::round::{GuessOutcome, HangmanPart, Round, RoundStatus};
use super::rules::GameRules;
use crate::core::{BankWord, EmptyBankError, GameError, Letter, ValidationError};
use rand::Rng;
use tracing::{debug, info};

/// Session phase as seen by the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

/// User intent forwarded by the front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    StartGame {
        player_one: String,
        player_two: String,
    },
    NextRound,
    Guess(Letter),
}

/// Something the front end should show as a result of a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    GameStarted,
    RoundStarted {
        word_len: usize,
    },
    LetterRevealed(Letter),
    WrongGuess {
        letter: Letter,
        part: Option<HangmanPart>,
        lives_left: u8,
    },
    ScoreChanged {
        slot: PlayerSlot,
        score: u32,
    },
    RoundWon {
        winner: PlayerSlot,
        word: BankWord,
    },
    RoundLost {
        loser: PlayerSlot,
        word: BankWord,
    },
    TurnPassed {
        to: PlayerSlot,
    },
}

#[derive(Debug, Clone, Default)]
pub struct GameSession {
    rules: GameRules,
    players: Option<Players>,
    current: PlayerSlot,
    round: Option<Round>,
}

impl GameSession {
    #[must_use]
    pub fn new(rules: GameRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn rules(&self) -> GameRules {
        self.rules
    }

    #[must_use]
    pub const fn players(&self) -> Option<&Players> {
        self.players.as_ref()
    }

    #[must_use]
    pub fn player(&self, slot: PlayerSlot) -> Option<&Player> {
        self.players.as_ref().map(|p| p.get(slot))
    }

    /// The player being played against this round
    #[must_use]
    pub const fn current_player(&self) -> PlayerSlot {
        self.current
    }

    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match (&self.players, &self.round) {
            (Some(_), Some(round)) => match round.status() {
                RoundStatus::InProgress => Phase::InProgress,
                RoundStatus::Won => Phase::Won,
                RoundStatus::Lost => Phase::Lost,
            },
            _ => Phase::NotStarted,
        }
    }

    /// Apply one action
    ///
    /// # Errors
    ///
    /// See [`GameSession::start_game`] and [`GameSession::next_round`].
    /// Guessing never fails.
    pub fn dispatch<R: Rng + ?Sized>(
        &mut self,
        action: Action,
        words: &[BankWord],
        rng: &mut R,
    ) -> Result<Vec<Effect>, GameError> {
        match action {
            Action::StartGame {
                player_one,
                player_two,
            } => self.start_game(&player_one, &player_two, words, rng),
            Action::NextRound => self.next_round(words, rng),
            Action::Guess(letter) => Ok(self.guess_letter(letter)),
        }
    }

    /// Record both players with zero scores and start the first round
    ///
    /// Names are trimmed. Player 1 is current.
    ///
    /// # Errors
    ///
    /// Returns `MissingName` or `DuplicateName` without touching the session.
    /// Returns `EmptyBank` if the bank has no words; the players are kept and
    /// a later [`GameSession::next_round`] can start the round.
    pub fn start_game<R: Rng + ?Sized>(
        &mut self,
        player_one: &str,
        player_two: &str,
        words: &[BankWord],
        rng: &mut R,
    ) -> Result<Vec<Effect>, GameError> {
        let (one, two) = (player_one.trim(), player_two.trim());

        if one.is_empty() || two.is_empty() {
            return Err(ValidationError::MissingName.into());
        }
        if one == two {
            return Err(ValidationError::DuplicateName.into());
        }

        self.players = Some(Players::new(
            Player::new(one.to_string()),
            Player::new(two.to_string()),
        ));
        self.current = PlayerSlot::One;
        self.round = None;
        info!(player_one = one, player_two = two, "game started");

        let mut effects = vec![Effect::GameStarted];
        effects.extend(self.next_round(words, rng)?);
        Ok(effects)
    }

    /// Draw a word uniformly at random from `words` and start a fresh round
    ///
    /// # Errors
    ///
    /// Returns `NotStarted` before [`GameSession::start_game`] has succeeded,
    /// or `EmptyBank` if `words` is empty. The session is unchanged on error.
    pub fn next_round<R: Rng + ?Sized>(
        &mut self,
        words: &[BankWord],
        rng: &mut R,
    ) -> Result<Vec<Effect>, GameError> {
        if self.players.is_none() {
            return Err(GameError::NotStarted);
        }
        if words.is_empty() {
            return Err(EmptyBankError.into());
        }

        let word = words[rng.random_range(0..words.len())].clone();
        debug!(word_len = word.len(), current = %self.current, "round started");

        let word_len = word.len();
        self.round = Some(Round::new(word, self.rules.max_wrong));
        Ok(vec![Effect::RoundStarted { word_len }])
    }

    /// Guess a letter in the active round
    ///
    /// Does nothing, returning no effects, when no round is active or the
    /// letter was already guessed.
    pub fn guess_letter(&mut self, letter: Letter) -> Vec<Effect> {
        let Some(round) = self.round.as_mut() else {
            return Vec::new();
        };

        let mut effects = match round.guess(letter) {
            GuessOutcome::Ignored => return Vec::new(),
            GuessOutcome::Hit => vec![Effect::LetterRevealed(letter)],
            GuessOutcome::Miss { wrong_guesses } => vec![Effect::WrongGuess {
                letter,
                part: HangmanPart::for_miss(wrong_guesses),
                lives_left: round.lives_left(),
            }],
        };
        debug!(%letter, wrong = round.wrong_guesses(), "letter guessed");

        match round.status() {
            RoundStatus::InProgress => {}
            RoundStatus::Won => {
                let winner = self.current.other();
                if let Some(players) = self.players.as_mut() {
                    let player = players.get_mut(winner);
                    player.score += self.rules.points_per_win;
                    effects.push(Effect::ScoreChanged {
                        slot: winner,
                        score: player.score,
                    });
                }
                info!(%winner, word = %round.word(), "round won");
                effects.push(Effect::RoundWon {
                    winner,
                    word: round.word().clone(),
                });
            }
            RoundStatus::Lost => {
                let loser = self.current;
                self.current = loser.other();
                info!(%loser, word = %round.word(), "round lost");
                effects.push(Effect::RoundLost {
                    loser,
                    word: round.word().clone(),
                });
                effects.push(Effect::TurnPassed { to: self.current });
            }
        }

        effects
    }

    /// End-of-round announcement, once the round is over
    #[must_use]
    pub fn status_message(&self) -> Option<String> {
        let round = self.round.as_ref()?;
        // Winner and loser are both the non-current slot by now: the turn
        // stays after a win and has already passed after a loss
        let name = &self.player(self.current.other())?.name;

        match round.status() {
            RoundStatus::InProgress => None,
            RoundStatus::Won => Some(format!("{name} won! The word was: {}", round.word())),
            RoundStatus::Lost => Some(format!("{name} lost! The word was: {}", round.word())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<BankWord> {
        list.iter().map(|w| BankWord::new(w).unwrap()).collect()
    }

    fn letter(c: char) -> Letter {
        Letter::try_from(c).unwrap()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn started(list: &[&str]) -> GameSession {
        let mut session = GameSession::new(GameRules::default());
        session
            .start_game("Ana", "Ben", &words(list), &mut rng())
            .unwrap();
        session
    }

    fn guess_all(session: &mut GameSession, letters: &str) -> Vec<Effect> {
        letters
            .chars()
            .flat_map(|c| session.guess_letter(letter(c)))
            .collect()
    }

    fn scores(session: &GameSession) -> (u32, u32) {
        (
            session.player(PlayerSlot::One).unwrap().score,
            session.player(PlayerSlot::Two).unwrap().score,
        )
    }

    #[test]
    fn start_game_records_players() {
        let session = started(&["DEVOPS"]);

        assert_eq!(session.phase(), Phase::InProgress);
        assert_eq!(session.current_player(), PlayerSlot::One);
        assert_eq!(session.player(PlayerSlot::One).unwrap().name, "Ana");
        assert_eq!(session.player(PlayerSlot::Two).unwrap().name, "Ben");
        assert_eq!(scores(&session), (0, 0));
    }

    #[test]
    fn start_game_trims_names() {
        let mut session = GameSession::default();
        session
            .start_game("  Ana ", "Ben\n", &words(&["AGILE"]), &mut rng())
            .unwrap();
        assert_eq!(session.player(PlayerSlot::One).unwrap().name, "Ana");
    }

    #[test]
    fn start_game_missing_name() {
        let mut session = GameSession::default();
        for (one, two) in [("", "Ben"), ("Ana", "   "), ("", "")] {
            assert_eq!(
                session.start_game(one, two, &words(&["AGILE"]), &mut rng()),
                Err(GameError::Validation(ValidationError::MissingName))
            );
        }
        assert_eq!(session.phase(), Phase::NotStarted);
        assert!(session.players().is_none());
    }

    #[test]
    fn start_game_duplicate_name_leaves_state() {
        let mut session = GameSession::default();
        assert_eq!(
            session.start_game("Ana", "Ana", &words(&["AGILE"]), &mut rng()),
            Err(GameError::Validation(ValidationError::DuplicateName))
        );
        assert_eq!(session.phase(), Phase::NotStarted);
        assert!(session.players().is_none());
        assert!(session.round().is_none());
    }

    #[test]
    fn start_game_with_empty_bank() {
        let mut session = GameSession::default();
        assert_eq!(
            session.start_game("Ana", "Ben", &[], &mut rng()),
            Err(GameError::EmptyBank(EmptyBankError))
        );
        assert!(session.players().is_some());
        assert_eq!(session.phase(), Phase::NotStarted);

        // Round can start once words exist
        session.next_round(&words(&["AGILE"]), &mut rng()).unwrap();
        assert_eq!(session.phase(), Phase::InProgress);
    }

    #[test]
    fn next_round_before_start() {
        let mut session = GameSession::default();
        assert_eq!(
            session.next_round(&words(&["AGILE"]), &mut rng()),
            Err(GameError::NotStarted)
        );
    }

    #[test]
    fn next_round_resets_round_state() {
        let bank = words(&["AGILE", "SCRUM", "MERGE"]);
        let mut session = started(&["AGILE", "SCRUM", "MERGE"]);
        guess_all(&mut session, "ZA");

        let effects = session.next_round(&bank, &mut rng()).unwrap();
        let round = session.round().unwrap();

        assert_eq!(effects.len(), 1);
        assert_eq!(round.wrong_guesses(), 0);
        assert!(round.guessed().is_empty());
        assert!(round.is_active());
        assert!(bank.contains(round.word()));
    }

    #[test]
    fn next_round_draws_every_word() {
        let bank = words(&["AGILE", "SCRUM", "MERGE"]);
        let mut session = started(&["AGILE"]);
        let mut rng = rng();
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            session.next_round(&bank, &mut rng).unwrap();
            seen.insert(session.round().unwrap().word().clone());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn next_round_with_empty_bank_keeps_round() {
        let mut session = started(&["AGILE"]);
        assert_eq!(
            session.next_round(&[], &mut rng()),
            Err(GameError::EmptyBank(EmptyBankError))
        );
        assert_eq!(session.round().unwrap().word(), "AGILE");
    }

    #[test]
    fn winning_round_scores_other_player() {
        let mut session = started(&["DEVOPS"]);
        assert_eq!(session.round().unwrap().word(), "DEVOPS");

        let effects = guess_all(&mut session, "DEVOPS");

        assert_eq!(session.phase(), Phase::Won);
        assert_eq!(scores(&session), (0, 10));
        assert_eq!(session.current_player(), PlayerSlot::One);
        assert!(effects.contains(&Effect::ScoreChanged {
            slot: PlayerSlot::Two,
            score: 10
        }));
        assert_eq!(
            effects.last(),
            Some(&Effect::RoundWon {
                winner: PlayerSlot::Two,
                word: BankWord::new("DEVOPS").unwrap()
            })
        );
        assert_eq!(
            session.status_message().as_deref(),
            Some("Ben won! The word was: DEVOPS")
        );
    }

    #[test]
    fn losing_round_passes_turn() {
        let mut session = started(&["AGILE"]);

        let effects = guess_all(&mut session, "ZXQWY");
        assert_eq!(session.phase(), Phase::InProgress);
        assert_eq!(effects.len(), 5);

        let effects = guess_all(&mut session, "U");
        assert_eq!(session.phase(), Phase::Lost);
        assert_eq!(scores(&session), (0, 0));
        assert_eq!(session.current_player(), PlayerSlot::Two);
        assert_eq!(
            effects,
            vec![
                Effect::WrongGuess {
                    letter: letter('U'),
                    part: Some(HangmanPart::RightLeg),
                    lives_left: 0
                },
                Effect::RoundLost {
                    loser: PlayerSlot::One,
                    word: BankWord::new("AGILE").unwrap()
                },
                Effect::TurnPassed {
                    to: PlayerSlot::Two
                },
            ]
        );
        assert_eq!(
            session.status_message().as_deref(),
            Some("Ana lost! The word was: AGILE")
        );
    }

    #[test]
    fn win_after_turn_passed_scores_player_one() {
        let bank = words(&["AGILE"]);
        let mut session = started(&["AGILE"]);
        guess_all(&mut session, "ZXQWYU");
        assert_eq!(session.current_player(), PlayerSlot::Two);

        session.next_round(&bank, &mut rng()).unwrap();
        guess_all(&mut session, "AGILE");
        assert_eq!(scores(&session), (10, 0));
        assert_eq!(session.current_player(), PlayerSlot::Two);
    }

    #[test]
    fn guess_is_idempotent() {
        let mut session = started(&["AGILE"]);

        assert_eq!(
            session.guess_letter(letter('A')),
            vec![Effect::LetterRevealed(letter('A'))]
        );
        let before = session.round().cloned();
        assert!(session.guess_letter(letter('A')).is_empty());
        assert_eq!(session.round().cloned(), before);
    }

    #[test]
    fn guess_ignored_when_round_over_or_not_started() {
        let mut fresh = GameSession::default();
        assert!(fresh.guess_letter(letter('A')).is_empty());

        let mut session = started(&["GIT"]);
        guess_all(&mut session, "GIT");
        assert!(session.guess_letter(letter('Z')).is_empty());
        assert_eq!(session.round().unwrap().wrong_guesses(), 0);
    }

    #[test]
    fn restart_resets_scores_and_turn() {
        let bank = words(&["AGILE"]);
        let mut session = started(&["AGILE"]);
        guess_all(&mut session, "ZXQWYU");
        session.next_round(&bank, &mut rng()).unwrap();
        guess_all(&mut session, "AGILE");

        session.start_game("Cy", "Di", &bank, &mut rng()).unwrap();
        assert_eq!(scores(&session), (0, 0));
        assert_eq!(session.current_player(), PlayerSlot::One);
        assert_eq!(session.phase(), Phase::InProgress);
    }

    #[test]
    fn dispatch_routes_actions() {
        let bank = words(&["GIT"]);
        let mut session = GameSession::default();
        let mut rng = rng();

        let effects = session
            .dispatch(
                Action::StartGame {
                    player_one: "Ana".to_string(),
                    player_two: "Ben".to_string(),
                },
                &bank,
                &mut rng,
            )
            .unwrap();
        assert_eq!(
            effects,
            vec![Effect::GameStarted, Effect::RoundStarted { word_len: 3 }]
        );

        let effects = session
            .dispatch(Action::Guess(letter('X')), &bank, &mut rng)
            .unwrap();
        assert!(matches!(effects[0], Effect::WrongGuess { lives_left: 5, .. }));

        assert!(session.dispatch(Action::NextRound, &bank, &mut rng).is_ok());
        assert_eq!(session.round().unwrap().wrong_guesses(), 0);
    }

    #[test]
    fn no_status_message_mid_round() {
        let session = started(&["AGILE"]);
        assert_eq!(session.status_message(), None);
    }
}
