//! Persisted records: the finished day's snapshot and cumulative statistics

use super::state::Outcome;
use crate::storage::{KeyValueStore, Result, keys};
use serde::{Deserialize, Serialize};

/// Snapshot of a finished game, enough to redraw it after a restart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedRecord {
    pub lives_remaining: u8,
    pub outcome: Outcome,
    pub guessed_letters: Vec<char>,
    pub masked_word: String,
}

/// On-disk shape of the board part of [`PersistedRecord`]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DailySnapshot {
    guessed_word: String,
    guessed_letters: Vec<char>,
    lives: u8,
}

impl PersistedRecord {
    /// Store the snapshot and outcome flag
    ///
    /// # Errors
    /// Returns `StoreError` if either write fails.
    pub fn write_to<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        let snapshot = DailySnapshot {
            guessed_word: self.masked_word.clone(),
            guessed_letters: self.guessed_letters.clone(),
            lives: self.lives_remaining,
        };
        store.set(keys::DAILY_SNAPSHOT, &serde_json::to_string(&snapshot)?)?;
        store.set(keys::OUTCOME, self.outcome.as_str())
    }

    /// Load the record; `Ok(None)` when it is missing or incomplete
    ///
    /// # Errors
    /// Returns `StoreError` if the store cannot be read or the snapshot is malformed.
    pub fn read_from<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<Self>> {
        let Some(raw) = store.get(keys::DAILY_SNAPSHOT)? else {
            return Ok(None);
        };
        let Some(outcome) = store
            .get(keys::OUTCOME)?
            .as_deref()
            .and_then(Outcome::from_flag)
        else {
            return Ok(None);
        };

        let snapshot: DailySnapshot = serde_json::from_str(&raw)?;
        Ok(Some(Self {
            lives_remaining: snapshot.lives.min(super::MAX_LIVES),
            outcome,
            guessed_letters: snapshot.guessed_letters,
            masked_word: snapshot.guessed_word,
        }))
    }

    /// Drop the day's snapshot and outcome flag
    ///
    /// # Errors
    /// Returns `StoreError` if a removal fails.
    pub fn clear<S: KeyValueStore + ?Sized>(store: &mut S) -> Result<()> {
        store.remove(keys::DAILY_SNAPSHOT)?;
        store.remove(keys::OUTCOME)
    }
}

/// Cumulative results across all days
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(rename = "played")]
    pub days_played: u32,
    pub wins: u32,
    pub losses: u32,
}

impl Statistics {
    /// Count one finished game; in-progress outcomes are not counted
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won => {
                self.days_played += 1;
                self.wins += 1;
            }
            Outcome::Lost => {
                self.days_played += 1;
                self.losses += 1;
            }
            Outcome::InProgress => {}
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.days_played == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.days_played)
        }
    }

    /// Load statistics, zeroed when none were saved yet
    ///
    /// # Errors
    /// Returns `StoreError` if the store cannot be read or the record is malformed.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Self> {
        match store.get(keys::STATS)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Self::default()),
        }
    }

    /// # Errors
    /// Returns `StoreError` if the write fails.
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        store.set(keys::STATS, &serde_json::to_string(self)?)
    }
}
