//! Formatting utilities shared by the TUI and the line mode

use crate::game::{MAX_LIVES, Outcome};

/// Link appended to shared results
pub const PLAY_URL: &str = "https://daily-hangman.netlify.app/";

/// Gallows drawings, from fully hanged (no lives) to empty (all lives)
const STAGES: [&str; 7] = [
    "   -----\n   |   |\n   O   |\n  /|\\  |\n  / \\  |\n---------",
    "   -----\n   |   |\n   O   |\n  /|\\  |\n  /    |\n---------",
    "   -----\n   |   |\n   O   |\n  /|\\  |\n       |\n---------",
    "   -----\n   |   |\n   O   |\n  /|   |\n       |\n---------",
    "   -----\n   |   |\n   O   |\n   |   |\n       |\n---------",
    "   -----\n   |   |\n   O   |\n       |\n       |\n---------",
    "   -----\n   |   |\n       |\n       |\n       |\n---------",
];

/// Gallows drawing for the given remaining lives
///
/// Lives above the maximum draw the empty gallows.
#[must_use]
pub fn hangman_drawing(lives: u8) -> &'static str {
    STAGES[usize::from(lives.min(MAX_LIVES))]
}

/// Six hearts: full for remaining lives, black for lost ones
#[must_use]
pub fn render_hearts(lives: u8) -> String {
    (0..MAX_LIVES)
        .map(|i| if i < lives { "❤️" } else { "🖤" })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Guessed letters as shown under the board
#[must_use]
pub fn guessed_list(letters: &[char]) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Text to paste when sharing a finished game; `None` while still playing
#[must_use]
pub fn share_text(outcome: Outcome, guess_count: usize) -> Option<String> {
    let headline = match outcome {
        Outcome::Won => format!("You won! It took {guess_count} guesses! 🎉"),
        Outcome::Lost => "You lost! Better luck next time! 😢".to_string(),
        Outcome::InProgress => return None,
    };
    Some(format!("{headline}\n\nPlay here: {PLAY_URL}"))
}
