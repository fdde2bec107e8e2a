//! Core domain types for Hangman
//!
//! This module contains the fundamental word types with no I/O.
//! Everything here is pure and testable in isolation.

mod mask;
mod word;

pub use mask::{PLACEHOLDER, SEPARATOR, masked_word};
pub use word::{Word, WordError};
