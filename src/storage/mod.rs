//! Key-value persistence for the daily game
//!
//! The engine only sees the [`KeyValueStore`] trait. Two implementations ship
//! with the crate: an in-memory map and a JSON file on disk.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

/// Keys the game reads and writes
pub mod keys {
    /// Date (`YYYY-MM-DD`) of the last finished game
    pub const COMPLETED_DATE: &str = "gameCompletedDate";
    /// JSON snapshot of the finished board: masked word, guesses, lives
    pub const DAILY_SNAPSHOT: &str = "dailySnapshot";
    /// `won` or `lost`
    pub const OUTCOME: &str = "outcome";
    /// JSON cumulative statistics
    pub const STATS: &str = "hangmanStats";
}

/// String key-value storage with get/set/remove semantics
pub trait KeyValueStore {
    /// Read a value; `Ok(None)` when the key is absent
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete a key; removing an absent key is not an error
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage cannot be written.
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
