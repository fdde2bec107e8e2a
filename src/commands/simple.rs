//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: one letter per line.

use crate::clock::Clock;
use crate::game::{DailyGame, GuessResult};
use crate::output::{print_board, print_result, print_statistics, share_text};
use crate::storage::KeyValueStore;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the line mode against stdin
///
/// # Errors
///
/// Returns an error if reading user input or flushing stdout fails.
pub fn run_simple<C: Clock, S: KeyValueStore>(game: &mut DailyGame<C, S>) -> Result<()> {
    let stdin = io::stdin();
    play_lines(game, &mut stdin.lock())
}

/// Drive the game from any line source until it ends, the input ends, or the player quits
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn play_lines<C, S, R>(game: &mut DailyGame<C, S>, input: &mut R) -> Result<()>
where
    C: Clock,
    S: KeyValueStore,
    R: BufRead,
{
    println!("\n╔══════════════════════════════════════╗");
    println!("║            DAILY HANGMAN             ║");
    println!("╚══════════════════════════════════════╝");

    game.schedule_rollover();

    loop {
        if game.tick() {
            println!("\n{}", "🌅 A new day, a new word!".bright_cyan());
        }

        print_board(game.session());

        if game.session().outcome().is_finished() {
            print_result(game.session().outcome(), game.revealed_word());
            if game.session().is_locked() {
                println!("{}", "You've already played today!".bright_black());
            }
            print_statistics(game.statistics());
            break;
        }

        let Some(line) = read_line(input, "Guess a letter ('quit' to exit)")? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "quit" | "exit" => break,
            "stats" => print_statistics(game.statistics()),
            other => {
                let mut chars = other.chars();
                let (Some(letter), None) = (chars.next(), chars.next()) else {
                    println!("{}", "❌ Enter a single letter".red());
                    continue;
                };
                let day = game.date();
                let result = game.submit_guess(letter);
                if game.date() == day {
                    report_guess(result, letter);
                } else {
                    println!("\n{}", "🌅 A new day, a new word!".bright_cyan());
                }
            }
        }
    }

    let session = game.session();
    if let Some(text) = share_text(session.outcome(), session.guessed_letters().len()) {
        println!("\nShare your result:\n{text}\n");
    }

    game.cancel_rollover();
    Ok(())
}

fn report_guess(result: GuessResult, letter: char) {
    let letter = letter.to_ascii_uppercase();
    match result {
        GuessResult::Hit => println!("{}", format!("✓ {letter} is in the word").green()),
        GuessResult::Miss => println!("{}", format!("✗ No {letter}").red()),
        GuessResult::Ignored => println!(
            "{}",
            format!("{letter} was already guessed or is not a letter").yellow()
        ),
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("\n{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
