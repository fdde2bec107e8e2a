//! Terminal output formatting
//!
//! Drawing, share text and pretty-printing for the line-oriented commands.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_result, print_statistics};
pub use formatters::{PLAY_URL, guessed_list, hangman_drawing, render_hearts, share_text};
