//! Word lists for the daily game
//!
//! Provides the embedded word pool compiled into the binary for zero-cost access.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
