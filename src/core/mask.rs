//! Masked word formatting
//!
//! The masked form shows each guessed letter in place and a placeholder for
//! every letter still hidden, positions separated by a single space.

use super::Word;

/// Placeholder shown for an unguessed letter
pub const PLACEHOLDER: char = '_';

/// Separator placed between letter positions
pub const SEPARATOR: char = ' ';

/// Build the masked display string for `word` given the letters guessed so far
///
/// # Examples
/// ```
/// use daily_hangman::core::{Word, masked_word};
///
/// let word = Word::new("REACT").unwrap();
/// assert_eq!(masked_word(&word, &['A', 'T']), "_ _ A _ T");
/// ```
#[must_use]
pub fn masked_word(word: &Word, guessed: &[char]) -> String {
    let mut masked = String::with_capacity(word.len() * 2);

    for (i, ch) in word.text().chars().enumerate() {
        if i > 0 {
            masked.push(SEPARATOR);
        }
        masked.push(if guessed.contains(&ch) { ch } else { PLACEHOLDER });
    }

    masked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn react() -> Word {
        Word::new("REACT").unwrap()
    }

    #[test]
    fn nothing_guessed() {
        assert_eq!(masked_word(&react(), &[]), "_ _ _ _ _");
    }

    #[test]
    fn everything_guessed() {
        assert_eq!(masked_word(&react(), &['R', 'E', 'A', 'C', 'T']), "R E A C T");
    }

    #[test]
    fn misses_are_not_shown() {
        assert_eq!(masked_word(&react(), &['Q', 'E', 'Z']), "_ E _ _ _");
    }

    #[test]
    fn repeated_letters_revealed_together() {
        let word = Word::new("MIRROR").unwrap();
        assert_eq!(masked_word(&word, &['R']), "_ _ R R _ R");
    }

    #[test]
    fn single_letter_word_has_no_separator() {
        let word = Word::new("A").unwrap();
        assert_eq!(masked_word(&word, &['A']), "A");
    }
}
