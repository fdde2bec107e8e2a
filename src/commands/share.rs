//! Share today's result

use crate::clock::Clock;
use crate::game::{DailyGame, Session};
use crate::output::share_text;
use crate::storage::KeyValueStore;
use colored::Colorize;

/// Share text for a finished session, `None` while today's game is still open
#[must_use]
pub fn share_result(session: &Session) -> Option<String> {
    share_text(session.outcome(), session.guessed_letters().len())
}

/// Print the share text, or a notice that there is nothing to share yet
pub fn run_share<C: Clock, S: KeyValueStore>(game: &DailyGame<C, S>) {
    match share_result(game.session()) {
        Some(text) => println!("{text}"),
        None => println!(
            "{}",
            "Today's game isn't finished yet. Play first, then share!".yellow()
        ),
    }
}
