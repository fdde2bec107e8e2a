//! Daily Hangman
//!
//! One word per calendar day, six lives, and a result that sticks until midnight.
//!
//! # Quick Start
//!
//! ```rust
//! use daily_hangman::clock::ManualClock;
//! use daily_hangman::game::{DailyGame, DailyWords, Outcome};
//! use daily_hangman::storage::MemoryStore;
//! use chrono::NaiveDate;
//!
//! let clock = ManualClock::at_start_of(NaiveDate::from_ymd_opt(2025, 4, 17).unwrap());
//! let mut game = DailyGame::new(&clock, MemoryStore::new(), DailyWords::embedded().unwrap());
//!
//! for letter in "REACT".chars() {
//!     game.submit_guess(letter);
//! }
//! assert_eq!(game.session().outcome(), Outcome::Won);
//! assert_eq!(game.masked_word(), "R E A C T");
//! ```

// Core domain types
pub mod core;

// Daily game engine
pub mod game;

// Time sources
pub mod clock;

// Key-value persistence
pub mod storage;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Runtime configuration
pub mod config;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
