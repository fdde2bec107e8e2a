//! TUI application state and logic

use crate::clock::Clock;
use crate::commands::share_result;
use crate::game::{DailyGame, GuessResult, Outcome};
use crate::storage::KeyValueStore;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Longest wait for input before redrawing; keeps the countdown current
const MAX_POLL: Duration = Duration::from_secs(1);

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 6;

/// Application state
pub struct App<C: Clock, S: KeyValueStore> {
    pub game: DailyGame<C, S>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<C: Clock, S: KeyValueStore> App<C, S> {
    #[must_use]
    pub fn new(game: DailyGame<C, S>) -> Self {
        let mut app = Self {
            game,
            messages: Vec::new(),
            should_quit: false,
        };

        if app.game.session().is_locked() {
            app.add_message("You've already played today!", MessageStyle::Info);
            app.add_message("Come back after midnight for a new word.", MessageStyle::Info);
        } else {
            app.add_message(
                "Welcome! Guess today's word one letter at a time.",
                MessageStyle::Info,
            );
            app.add_message("Six wrong letters and you're out.", MessageStyle::Info);
        }

        app
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => self.share(),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => self.guess(c),
            _ => {}
        }
    }

    pub fn guess(&mut self, letter: char) {
        let letter = letter.to_ascii_uppercase();
        let was_over = self.game.session().outcome().is_finished();
        let day = self.game.date();

        let result = self.game.submit_guess(letter);
        if self.game.date() != day {
            self.greet_new_day();
            return;
        }

        match result {
            GuessResult::Hit => {
                self.add_message(&format!("{letter} is in the word!"), MessageStyle::Success);
            }
            GuessResult::Miss => {
                let lives = self.game.session().lives_remaining();
                self.add_message(
                    &format!("No {letter}. {lives} lives left."),
                    MessageStyle::Error,
                );
            }
            GuessResult::Ignored if was_over => {
                self.add_message("Today's game is over.", MessageStyle::Info);
            }
            GuessResult::Ignored => {
                self.add_message(&format!("{letter} was already guessed."), MessageStyle::Info);
            }
        }

        if !was_over {
            match self.game.session().outcome() {
                Outcome::Won => {
                    self.add_message("🎉 Congratulations, You Won! 🎉", MessageStyle::Success);
                    self.add_message("Press TAB to share your result.", MessageStyle::Info);
                }
                Outcome::Lost => {
                    self.add_message("Game Over! You Lost", MessageStyle::Error);
                    self.add_message("Press TAB to share your result.", MessageStyle::Info);
                }
                Outcome::InProgress => {}
            }
        }
    }

    pub fn share(&mut self) {
        match share_result(self.game.session()) {
            Some(text) => {
                for line in text.lines().filter(|line| !line.is_empty()) {
                    self.add_message(line, MessageStyle::Success);
                }
            }
            None => self.add_message("Finish today's game to share it.", MessageStyle::Error),
        }
    }

    /// Poll the rollover timer
    pub fn tick(&mut self) {
        if self.game.tick() {
            self.greet_new_day();
        }
    }

    fn greet_new_day(&mut self) {
        self.messages.clear();
        self.add_message("🌅 A new day, a new word!", MessageStyle::Success);
    }

    /// How long to wait for input before the next redraw
    #[must_use]
    pub fn poll_timeout(&self) -> Duration {
        self.game
            .time_to_rollover()
            .map_or(MAX_POLL, |remaining| remaining.min(MAX_POLL))
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal initialization or restoration fails.
pub fn run_tui<C: Clock, S: KeyValueStore>(mut app: App<C, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "tui exited with an error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, C, S>(terminal: &mut Terminal<B>, app: &mut App<C, S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    C: Clock,
    S: KeyValueStore,
{
    app.game.schedule_rollover();

    loop {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        let key = if event::poll(app.poll_timeout())?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            Some(key)
        } else {
            None
        };

        // Midnight goes first so a late key lands on the new day
        app.tick();
        if let Some(key) = key {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    app.game.cancel_rollover();
    Ok(())
}
