//! Daily word selection
//!
//! The word for a date is `pool[day_of_year % pool.len()]`, so everyone playing
//! on the same local date gets the same word.

use super::GameError;
use crate::core::Word;
use crate::wordlists::{WORDS, loader::words_from_slice};
use chrono::{Datelike, NaiveDate};

/// Day of the year, 1-indexed (January 1st is day 1)
#[must_use]
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// A non-empty, ordered pool of candidate daily words
#[derive(Debug, Clone)]
pub struct DailyWords {
    words: Vec<Word>,
}

impl DailyWords {
    /// # Errors
    /// Returns `GameError::EmptyWordList` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, GameError> {
        if words.is_empty() {
            return Err(GameError::EmptyWordList);
        }
        Ok(Self { words })
    }

    /// The pool compiled into the binary
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if the embedded list has no valid words.
    pub fn embedded() -> Result<Self, GameError> {
        Self::new(words_from_slice(WORDS))
    }

    /// The word for `date`
    #[must_use]
    pub fn word_for(&self, date: NaiveDate) -> &Word {
        let index = day_of_year(date) as usize % self.words.len();
        &self.words[index]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; see [`DailyWords::new`]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_of_year_is_one_indexed() {
        assert_eq!(day_of_year(date(2025, 1, 1)), 1);
        assert_eq!(day_of_year(date(2025, 2, 1)), 32);
        assert_eq!(day_of_year(date(2025, 12, 31)), 365);
        assert_eq!(day_of_year(date(2024, 12, 31)), 366);
    }

    #[test]
    fn embedded_words_for_known_dates() {
        let words = DailyWords::embedded().unwrap();
        assert_eq!(words.len(), 290);

        assert_eq!(words.word_for(date(2025, 1, 1)).text(), "IGNORE");
        assert_eq!(words.word_for(date(2025, 4, 17)).text(), "REACT");
        assert_eq!(words.word_for(date(2025, 4, 18)).text(), "JOKING");
        // Day 290 wraps to the start of the list
        assert_eq!(words.word_for(date(2025, 10, 17)).text(), "MINING");
    }

    #[test]
    fn leap_year_shifts_by_one_after_february() {
        let words = DailyWords::embedded().unwrap();
        assert_eq!(words.word_for(date(2024, 4, 16)).text(), "REACT");
    }

    #[test]
    fn selection_is_deterministic() {
        let words = DailyWords::embedded().unwrap();
        for day in 1..=365 {
            let d = NaiveDate::from_yo_opt(2025, day).unwrap();
            assert_eq!(words.word_for(d), words.word_for(d));
        }
    }

    #[test]
    fn single_word_pool_always_selected() {
        let words = DailyWords::new(vec![Word::new("REACT").unwrap()]).unwrap();
        assert_eq!(words.word_for(date(2025, 6, 1)).text(), "REACT");
        assert_eq!(words.word_for(date(2031, 11, 9)).text(), "REACT");
    }

    #[test]
    fn empty_pool_rejected() {
        assert!(matches!(DailyWords::new(Vec::new()), Err(GameError::EmptyWordList)));
    }
}
