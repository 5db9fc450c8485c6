//! Hangman Duel
//!
//! A two-player hangman game with an editable, persisted word bank.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_duel::core::Letter;
//! use hangman_duel::game::{GameRules, GameSession, Phase};
//! use hangman_duel::storage::MemoryStore;
//! use hangman_duel::wordbank::WordBank;
//!
//! let mut store = MemoryStore::new();
//! let bank = WordBank::load(&mut store).unwrap();
//!
//! let mut session = GameSession::new(GameRules::default());
//! session
//!     .start_game("Ana", "Ben", bank.words(), &mut rand::rng())
//!     .unwrap();
//!
//! session.guess_letter(Letter::from_byte(b'E').unwrap());
//! assert_eq!(session.phase(), Phase::InProgress);
//! ```

// Core domain types
pub mod core;

// Key-value persistence
pub mod storage;

// Word bank with validation and defaults
pub mod wordbank;

// Two-player game state machine
pub mod game;

// Light/dark preference
pub mod theme;

// Runtime settings and logging
pub mod config;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
