//! TUI application state and logic
//!
//! The `App` owns the store, word bank, game session and theme, turns key
//! presses into calls on them, and keeps messages for the view to show.

use crate::core::{BankError, GameError, Letter};
use crate::game::{Action, Effect, GameSession, Phase};
use crate::output::effect_message;
use crate::storage::KeyValueStore;
use crate::theme::{Theme, toggle_theme};
use crate::wordbank::WordBank;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Visible tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Game,
    WordBank,
}

impl Tab {
    pub const ALL: [Self; 2] = [Self::Game, Self::WordBank];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Game => "Game",
            Self::WordBank => "Word Bank",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Game => 0,
            Self::WordBank => 1,
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Game => Self::WordBank,
            Self::WordBank => Self::Game,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    PlayerOneName,
    PlayerTwoName,
    AddWord,
    EditWord(usize),
    ConfirmDelete(usize),
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<S, R> {
    pub store: S,
    pub bank: WordBank,
    pub session: GameSession,
    pub rng: R,
    pub theme: Theme,
    pub tab: Tab,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub player_one_name: String,
    pub selected: usize,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

impl<S: KeyValueStore, R: Rng> App<S, R> {
    #[must_use]
    pub fn new(store: S, bank: WordBank, session: GameSession, theme: Theme, rng: R) -> Self {
        Self {
            store,
            bank,
            session,
            rng,
            theme,
            tab: Tab::Game,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            player_one_name: String::new(),
            selected: 0,
            messages: vec![Message {
                text: "Welcome! Press Enter to enter player names.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
    }

    pub fn toggle_theme(&mut self) {
        match toggle_theme(&mut self.store, &mut self.theme) {
            Ok(theme) => self.add_message(&format!("Switched to {theme} mode"), MessageStyle::Info),
            Err(err) => self.add_message(&format!("Could not save theme: {err}"), MessageStyle::Error),
        }
    }

    /// Begin entering player names for a new game
    pub fn begin_new_game(&mut self) {
        self.input_mode = InputMode::PlayerOneName;
        self.input_buffer.clear();
        self.player_one_name.clear();
    }

    /// Run one action through the session and report its effects
    fn dispatch(&mut self, action: Action) -> Result<(), GameError> {
        let effects = self
            .session
            .dispatch(action, self.bank.words(), &mut self.rng)?;
        self.report(&effects);
        Ok(())
    }

    fn submit_names(&mut self) {
        let action = Action::StartGame {
            player_one: std::mem::take(&mut self.player_one_name),
            player_two: std::mem::take(&mut self.input_buffer),
        };

        match self.dispatch(action) {
            Ok(()) => self.input_mode = InputMode::Normal,
            Err(GameError::Validation(err)) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                self.begin_new_game();
            }
            Err(err) => {
                // Players are recorded; the round waits for words
                self.input_mode = InputMode::Normal;
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn next_round(&mut self) {
        if let Err(err) = self.dispatch(Action::NextRound) {
            self.add_message(&err.to_string(), MessageStyle::Error);
        }
    }

    pub fn guess(&mut self, letter: Letter) {
        if let Err(err) = self.dispatch(Action::Guess(letter)) {
            self.add_message(&err.to_string(), MessageStyle::Error);
        }
    }

    /// Turn effects into messages
    fn report(&mut self, effects: &[Effect]) {
        for effect in effects {
            let text = effect_message(&self.session, effect);
            match effect {
                Effect::RoundWon { .. } => {
                    self.add_message(&format!("🎉 {text}"), MessageStyle::Success);
                }
                Effect::RoundLost { .. } => {
                    self.add_message(&format!("😢 {text}"), MessageStyle::Error);
                }
                Effect::LetterRevealed(_) | Effect::ScoreChanged { .. } => {
                    self.add_message(&text, MessageStyle::Success);
                }
                Effect::WrongGuess { .. } => self.add_message(&text, MessageStyle::Error),
                Effect::GameStarted
                | Effect::RoundStarted { .. }
                | Effect::TurnPassed { .. } => self.add_message(&text, MessageStyle::Info),
            }
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.bank.len() {
            self.selected += 1;
        }
    }

    pub const fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn begin_add(&mut self) {
        self.input_mode = InputMode::AddWord;
        self.input_buffer.clear();
    }

    /// Start editing the selected word, prefilled with its current value
    pub fn begin_edit(&mut self) {
        if let Some(word) = self.bank.get(self.selected) {
            self.input_buffer = word.to_string();
            self.input_mode = InputMode::EditWord(self.selected);
        }
    }

    pub fn begin_delete(&mut self) {
        if let Some(word) = self.bank.get(self.selected) {
            let prompt = format!("Delete {word}? Press y to confirm, any other key to cancel.");
            self.input_mode = InputMode::ConfirmDelete(self.selected);
            self.add_message(&prompt, MessageStyle::Info);
        }
    }

    fn submit_add(&mut self) {
        let raw = std::mem::take(&mut self.input_buffer);
        match self.bank.add(&raw, &mut self.store) {
            Ok(word) => {
                let text = format!("Added {word}");
                self.selected = self.bank.len() - 1;
                self.input_mode = InputMode::Normal;
                self.add_message(&text, MessageStyle::Success);
            }
            Err(err) => self.reject_bank_input(raw, &err),
        }
    }

    fn submit_edit(&mut self, index: usize) {
        let raw = std::mem::take(&mut self.input_buffer);
        match self.bank.edit(index, &raw, &mut self.store) {
            Ok(word) => {
                let text = format!("Updated to {word}");
                self.input_mode = InputMode::Normal;
                self.add_message(&text, MessageStyle::Success);
            }
            Err(err) => self.reject_bank_input(raw, &err),
        }
    }

    /// Keep the input open so the user can correct it
    fn reject_bank_input(&mut self, raw: String, err: &BankError) {
        self.input_buffer = raw;
        if err.validation().is_none() {
            self.input_mode = InputMode::Normal;
        }
        self.add_message(&err.to_string(), MessageStyle::Error);
    }

    pub fn confirm_delete(&mut self, index: usize, confirmed: bool) {
        self.input_mode = InputMode::Normal;
        match self.bank.delete(index, |_| confirmed, &mut self.store) {
            Ok(Some(word)) => {
                self.selected = self.selected.min(self.bank.len().saturating_sub(1));
                self.add_message(&format!("Deleted {word}"), MessageStyle::Success);
            }
            Ok(None) => self.add_message("Delete cancelled", MessageStyle::Info),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Route one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('t') => self.toggle_theme(),
                KeyCode::Char('n') => {
                    self.switch_tab(Tab::Game);
                    self.begin_new_game();
                }
                _ => {}
            }
            return;
        }

        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key.code),
            InputMode::ConfirmDelete(index) => {
                self.confirm_delete(index, matches!(key.code, KeyCode::Char('y' | 'Y')));
            }
            InputMode::PlayerOneName
            | InputMode::PlayerTwoName
            | InputMode::AddWord
            | InputMode::EditWord(_) => self.handle_text_key(key.code),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) {
        match (self.tab, code) {
            (_, KeyCode::Esc) => self.should_quit = true,
            (tab, KeyCode::Tab | KeyCode::BackTab) => self.switch_tab(tab.next()),
            (Tab::Game, KeyCode::Enter) => match self.session.phase() {
                Phase::NotStarted if self.session.players().is_some() => self.next_round(),
                Phase::NotStarted => self.begin_new_game(),
                Phase::Won | Phase::Lost => self.next_round(),
                Phase::InProgress => {}
            },
            (Tab::Game, KeyCode::Char(c)) => {
                if let Ok(letter) = Letter::try_from(c) {
                    self.guess(letter);
                }
            }
            (Tab::WordBank, KeyCode::Down | KeyCode::Char('j')) => self.select_next(),
            (Tab::WordBank, KeyCode::Up | KeyCode::Char('k')) => self.select_previous(),
            (Tab::WordBank, KeyCode::Char('a')) => self.begin_add(),
            (Tab::WordBank, KeyCode::Char('e') | KeyCode::Enter) => self.begin_edit(),
            (Tab::WordBank, KeyCode::Char('d') | KeyCode::Delete) => self.begin_delete(),
            _ => {}
        }
    }

    fn handle_text_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
                self.add_message("Cancelled", MessageStyle::Info);
            }
            KeyCode::Char(c) => self.input_buffer.push(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => match self.input_mode {
                InputMode::PlayerOneName => {
                    self.player_one_name = std::mem::take(&mut self.input_buffer);
                    self.input_mode = InputMode::PlayerTwoName;
                }
                InputMode::PlayerTwoName => self.submit_names(),
                InputMode::AddWord => self.submit_add(),
                InputMode::EditWord(index) => self.submit_edit(index),
                InputMode::Normal | InputMode::ConfirmDelete(_) => {}
            },
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: KeyValueStore, R: Rng>(app: App<S, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, S, R>(terminal: &mut Terminal<B>, mut app: App<S, R>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: KeyValueStore,
    R: Rng,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
