//! The daily game
//!
//! - [`state`]: rules for a single game (guesses, lives, outcome)
//! - [`daily`]: which word belongs to which date
//! - [`records`]: what is persisted once a day is finished
//! - [`rollover`]: the midnight timer
//! - [`engine`]: everything above wired to a clock and a store

pub mod daily;
pub mod engine;
pub mod records;
pub mod rollover;
pub mod state;

pub use daily::{DailyWords, day_of_year};
pub use engine::{DailyGame, LockedView, Session, initialize};
pub use records::{PersistedRecord, Statistics};
pub use rollover::Rollover;
pub use state::{GameState, GuessResult, MAX_LIVES, Outcome};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("word list is empty")]
    EmptyWordList,
}
