//! Single-day game state machine
//!
//! Lives only ever go down, one per wrong letter. The loss check runs before
//! the win check, and a winning guess is always a correct one, so a single
//! guess can never produce both outcomes.

use crate::core::{Word, masked_word};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lives at the start of every game
pub const MAX_LIVES: u8 = 6;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }

    /// Parse the stored outcome flag; only finished outcomes are ever stored
    #[must_use]
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag.trim() {
            "won" => Some(Self::Won),
            "lost" => Some(Self::Lost),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a single guess did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Game already over, letter repeated, or not a letter
    Ignored,
    /// Letter is in the word
    Hit,
    /// Letter is not in the word; one life lost
    Miss,
}

/// State of today's game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    word: Word,
    guessed: Vec<char>,
    lives: u8,
    outcome: Outcome,
}

impl GameState {
    /// Fresh game: nothing guessed, full lives
    #[must_use]
    pub const fn new(word: Word) -> Self {
        Self {
            word,
            guessed: Vec::new(),
            lives: MAX_LIVES,
            outcome: Outcome::InProgress,
        }
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Guessed letters in the order they were played
    #[must_use]
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed
    }

    #[must_use]
    pub const fn lives_remaining(&self) -> u8 {
        self.lives
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_finished()
    }

    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter.to_ascii_uppercase())
    }

    #[must_use]
    pub fn masked_word(&self) -> String {
        masked_word(&self.word, &self.guessed)
    }

    /// Play one letter
    ///
    /// Lowercase input is accepted. Guesses after the game ended, repeated
    /// letters and non-letters leave the state untouched.
    pub fn submit_guess(&mut self, letter: char) -> GuessResult {
        if self.is_over() || !letter.is_ascii_alphabetic() {
            return GuessResult::Ignored;
        }

        let letter = letter.to_ascii_uppercase();
        if self.guessed.contains(&letter) {
            return GuessResult::Ignored;
        }

        self.guessed.push(letter);

        let result = if self.word.has_letter(letter) {
            GuessResult::Hit
        } else {
            self.lives = self.lives.saturating_sub(1);
            GuessResult::Miss
        };

        self.evaluate();
        result
    }

    fn evaluate(&mut self) {
        if self.lives == 0 {
            self.outcome = Outcome::Lost;
        } else if self
            .word
            .distinct_letters()
            .all(|ch| self.guessed.contains(&ch))
        {
            self.outcome = Outcome::Won;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn react() -> GameState {
        GameState::new(Word::new("REACT").unwrap())
    }

    #[test]
    fn fresh_game() {
        let state = react();
        assert_eq!(state.lives_remaining(), MAX_LIVES);
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert!(state.guessed_letters().is_empty());
        assert_eq!(state.masked_word(), "_ _ _ _ _");
    }

    #[test]
    fn all_correct_guesses_win_without_losing_lives() {
        let mut state = react();

        for (i, letter) in ['R', 'E', 'A', 'C', 'T'].into_iter().enumerate() {
            assert_eq!(state.submit_guess(letter), GuessResult::Hit);
            assert_eq!(state.lives_remaining(), 6);
            if i < 4 {
                assert_eq!(state.outcome(), Outcome::InProgress);
            }
        }

        assert_eq!(state.outcome(), Outcome::Won);
        assert_eq!(state.masked_word(), "R E A C T");
    }

    #[test]
    fn six_wrong_guesses_lose() {
        let mut state = react();

        for (i, letter) in ['Q', 'W', 'X', 'Y', 'Z', 'B'].into_iter().enumerate() {
            assert_eq!(state.submit_guess(letter), GuessResult::Miss);
            assert_eq!(usize::from(state.lives_remaining()), 5 - i);
            if i < 5 {
                assert_eq!(state.outcome(), Outcome::InProgress);
            }
        }

        assert_eq!(state.lives_remaining(), 0);
        assert_eq!(state.outcome(), Outcome::Lost);
        assert_eq!(state.masked_word(), "_ _ _ _ _");
    }

    #[test]
    fn lowercase_guess_is_normalized() {
        let mut state = react();
        assert_eq!(state.submit_guess('r'), GuessResult::Hit);
        assert_eq!(state.guessed_letters(), &['R']);
        assert!(state.has_guessed('r'));
        assert_eq!(state.masked_word(), "R _ _ _ _");
    }

    #[test]
    fn repeated_guess_is_ignored() {
        let mut state = react();
        state.submit_guess('Q');
        let before = state.clone();

        assert_eq!(state.submit_guess('Q'), GuessResult::Ignored);
        assert_eq!(state.submit_guess('q'), GuessResult::Ignored);
        assert_eq!(state, before);
    }

    #[test]
    fn repeated_correct_guess_is_ignored() {
        let mut state = react();
        state.submit_guess('E');
        let before = state.clone();

        assert_eq!(state.submit_guess('E'), GuessResult::Ignored);
        assert_eq!(state, before);
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut state = react();
        for input in ['1', ' ', '-', 'É', '\n'] {
            assert_eq!(state.submit_guess(input), GuessResult::Ignored);
        }
        assert_eq!(state, react());
    }

    #[test]
    fn finished_game_is_frozen() {
        let mut won = react();
        for letter in "REACT".chars() {
            won.submit_guess(letter);
        }
        let frozen = won.clone();
        for letter in 'A'..='Z' {
            assert_eq!(won.submit_guess(letter), GuessResult::Ignored);
        }
        assert_eq!(won, frozen);

        let mut lost = react();
        for letter in "QWXYZB".chars() {
            lost.submit_guess(letter);
        }
        let frozen = lost.clone();
        assert_eq!(lost.submit_guess('R'), GuessResult::Ignored);
        assert_eq!(lost, frozen);
    }

    #[test]
    fn duplicate_letters_need_one_guess() {
        let mut state = GameState::new(Word::new("MIRROR").unwrap());
        for letter in "MIRO".chars() {
            state.submit_guess(letter);
        }
        assert_eq!(state.outcome(), Outcome::Won);
        assert_eq!(state.guessed_letters().len(), 4);
    }

    #[test]
    fn winning_on_the_last_life() {
        let mut state = react();
        for letter in "QWXYZ".chars() {
            state.submit_guess(letter);
        }
        assert_eq!(state.lives_remaining(), 1);

        for letter in "REAC".chars() {
            state.submit_guess(letter);
        }
        assert_eq!(state.outcome(), Outcome::InProgress);

        assert_eq!(state.submit_guess('T'), GuessResult::Hit);
        assert_eq!(state.outcome(), Outcome::Won);
        assert_eq!(state.lives_remaining(), 1);
    }

    #[test]
    fn losing_with_word_almost_complete() {
        let mut state = react();
        for letter in "REAC".chars() {
            state.submit_guess(letter);
        }
        for letter in "QWXYZB".chars() {
            state.submit_guess(letter);
        }
        assert_eq!(state.outcome(), Outcome::Lost);
        assert_eq!(state.masked_word(), "R E A C _");
    }

    #[test]
    fn invariants_hold_for_every_guess_sequence_prefix() {
        // Walk a deterministic spread of guess orders over the alphabet
        let alphabet: Vec<char> = ('A'..='Z').collect();
        for offset in 0..alphabet.len() {
            for stride in [1, 3, 5, 7, 11] {
                let mut state = GameState::new(Word::new("GALAXY").unwrap());
                for step in 0..alphabet.len() {
                    let letter = alphabet[(offset + step * stride) % alphabet.len()];
                    let before = state.clone();
                    let result = state.submit_guess(letter);

                    assert!(state.lives_remaining() <= MAX_LIVES);
                    assert_eq!(
                        state.outcome() == Outcome::Lost,
                        state.lives_remaining() == 0
                    );
                    if state.outcome() == Outcome::Won {
                        assert!(state.word().distinct_letters().all(|c| state.has_guessed(c)));
                        assert!(state.lives_remaining() > 0);
                    }
                    if before.is_over() {
                        assert_eq!(result, GuessResult::Ignored);
                        assert_eq!(state, before);
                    }
                }
                assert!(state.is_over());
            }
        }
    }

    #[test]
    fn outcome_flags() {
        assert_eq!(Outcome::from_flag("won"), Some(Outcome::Won));
        assert_eq!(Outcome::from_flag("lost\n"), Some(Outcome::Lost));
        assert_eq!(Outcome::from_flag("in_progress"), None);
        assert_eq!(Outcome::from_flag(""), None);
        assert_eq!(Outcome::Won.to_string(), "won");
        assert!(!Outcome::InProgress.is_finished());
    }
}
