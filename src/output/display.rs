//! Display functions for the line-oriented commands

use super::formatters::{guessed_list, hangman_drawing, render_hearts};
use crate::game::{Outcome, Session, Statistics};
use colored::Colorize;

/// Print the cumulative statistics
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());

    println!("   Days played:  {}", stats.days_played);
    println!("   Wins:         {}", stats.wins.to_string().green());
    println!("   Losses:       {}", stats.losses.to_string().red());
    println!(
        "   Win rate:     {}",
        format!("{:.0}%", stats.win_rate() * 100.0).bright_yellow()
    );
}

/// Print the board: gallows, masked word, lives and guessed letters
pub fn print_board(session: &Session) {
    println!("\n{}", hangman_drawing(session.lives_remaining()).bright_white());
    println!(
        "\nWord:            {}",
        session.masked_word().bright_yellow().bold()
    );
    println!("Lives:           {}", render_hearts(session.lives_remaining()));
    println!(
        "Guessed letters: {}",
        guessed_list(session.guessed_letters())
    );
}

/// Print the end-of-game banner
///
/// `word` is only known when the game ended during this run.
pub fn print_result(outcome: Outcome, word: Option<&str>) {
    match outcome {
        Outcome::Won => println!("\n{}", "Congratulations, You Won!".green().bold()),
        Outcome::Lost => println!("\n{}", "Game Over! You Lost".red().bold()),
        Outcome::InProgress => return,
    }
    if let Some(word) = word {
        println!("The word was: {}", word.bright_white().bold());
    }
}
