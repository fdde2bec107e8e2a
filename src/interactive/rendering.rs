//! TUI rendering with ratatui
//!
//! Gallows, board, on-screen keyboard, statistics and message log.

use super::app::{App, MessageStyle};
use crate::clock::Clock;
use crate::game::{Outcome, Session};
use crate::output::{guessed_list, hangman_drawing, render_hearts};
use crate::storage::KeyValueStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Keyboard rows in alphabetical order
const KEY_ROWS: [&str; 2] = ["ABCDEFGHIJKLM", "NOPQRSTUVWXYZ"];

/// Main UI rendering function
pub fn ui<C: Clock, S: KeyValueStore>(f: &mut Frame, app: &App<C, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(16),   // Main content
            Constraint::Length(4), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Stats and messages
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_keyboard(f, app.game.session(), chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 DAILY HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel<C: Clock, S: KeyValueStore>(f: &mut Frame, app: &App<C, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Gallows
            Constraint::Length(5), // Word, lives, guesses
            Constraint::Min(3),    // Result
        ])
        .split(area);

    let session = app.game.session();
    render_gallows(f, session, chunks[0]);
    render_board(f, session, chunks[1]);
    render_result(f, session, app.game.revealed_word(), chunks[2]);
}

fn render_gallows(f: &mut Frame, session: &Session, area: Rect) {
    let color = match session.outcome() {
        Outcome::Won => Color::Green,
        Outcome::Lost => Color::Red,
        Outcome::InProgress => Color::White,
    };

    let gallows = Paragraph::new(hangman_drawing(session.lives_remaining()))
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(gallows, area);
}

fn render_board(f: &mut Frame, session: &Session, area: Rect) {
    let content = vec![
        Line::from(vec![
            Span::raw("Word:    "),
            Span::styled(
                session.masked_word(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            "Lives:   {}",
            render_hearts(session.lives_remaining())
        )),
        Line::from(format!(
            "Guessed: {}",
            guessed_list(session.guessed_letters())
        )),
    ];

    let board = Paragraph::new(content).block(
        Block::default()
            .title(" Today's Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_result(f: &mut Frame, session: &Session, revealed: Option<&str>, area: Rect) {
    let mut lines = match session.outcome() {
        Outcome::InProgress => vec![Line::from("Pick a letter on your keyboard.")],
        Outcome::Won => vec![Line::from(Span::styled(
            "Congratulations, You Won!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))],
        Outcome::Lost => vec![Line::from(Span::styled(
            "Game Over! You Lost",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))],
    };

    if let Some(word) = revealed {
        lines.push(Line::from(format!("The word was: {word}")));
    }
    if session.is_locked() {
        lines.push(Line::from(Span::styled(
            "You've already played today!",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let result = Paragraph::new(lines).block(
        Block::default()
            .title(" Result ")
            .borders(Borders::ALL),
    );
    f.render_widget(result, area);
}

fn render_info_panel<C: Clock, S: KeyValueStore>(f: &mut Frame, app: &App<C, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Statistics
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_statistics(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_statistics<C: Clock, S: KeyValueStore>(f: &mut Frame, app: &App<C, S>, area: Rect) {
    let stats = app.game.statistics();
    let content = vec![
        Line::from(format!("Days Played: {}", stats.days_played)),
        Line::from(vec![
            Span::raw("Wins:        "),
            Span::styled(stats.wins.to_string(), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::raw("Losses:      "),
            Span::styled(stats.losses.to_string(), Style::default().fg(Color::Red)),
        ]),
        Line::from(format!("Win Rate:    {:.0}%", stats.win_rate() * 100.0)),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages<C: Clock, S: KeyValueStore>(f: &mut Frame, app: &App<C, S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn key_style(session: &Session, letter: char) -> Style {
    let guessed = session.guessed_letters().contains(&letter);
    match session {
        Session::Playing(state) if guessed && state.word().has_letter(letter) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green),
        // A locked view has no word, only the masked form
        Session::Locked(view) if guessed && view.record.masked_word.contains(letter) => {
            Style::default().fg(Color::Black).bg(Color::Green)
        }
        _ if guessed => Style::default().fg(Color::DarkGray).bg(Color::Red),
        _ if session.accepts(letter) => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::DarkGray),
    }
}

fn render_keyboard(f: &mut Frame, session: &Session, area: Rect) {
    let lines: Vec<Line> = KEY_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|letter| {
                    [
                        Span::styled(format!(" {letter} "), key_style(session, letter)),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double),
    );
    f.render_widget(keyboard, area);
}

fn render_status<C: Clock, S: KeyValueStore>(f: &mut Frame, app: &App<C, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let date = Paragraph::new(format!("Date: {}", app.game.date())).alignment(Alignment::Center);
    f.render_widget(date, chunks[0]);

    let countdown_text = app.game.time_to_rollover().map_or_else(
        || "Next word at midnight".to_string(),
        |remaining| {
            let secs = remaining.as_secs();
            format!(
                "Next word in {:02}:{:02}:{:02}",
                secs / 3600,
                (secs % 3600) / 60,
                secs % 60
            )
        },
    );
    let countdown = Paragraph::new(countdown_text).alignment(Alignment::Center);
    f.render_widget(countdown, chunks[1]);

    let help = Paragraph::new("A-Z: Guess | TAB: Share | ESC: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::game::{DailyGame, DailyWords};
    use crate::storage::MemoryStore;
    use chrono::{Duration, NaiveDate};
    use ratatui::{Terminal, backend::TestBackend};

    fn clock() -> ManualClock {
        let clock = ManualClock::at_start_of(NaiveDate::from_ymd_opt(2025, 4, 17).unwrap());
        clock.advance(Duration::hours(20));
        clock
    }

    fn screen<C: Clock, S: KeyValueStore>(app: &App<C, S>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn fresh_board() {
        let clock = clock();
        let mut app = App::new(DailyGame::new(
            &clock,
            MemoryStore::new(),
            DailyWords::embedded().unwrap(),
        ));
        app.game.schedule_rollover();
        let text = screen(&app);

        assert!(text.contains("DAILY HANGMAN"));
        assert!(text.contains("_ _ _ _ _"));
        assert!(text.contains("Days Played: 0"));
        assert!(text.contains("Next word in 04:00:00"));
        assert!(text.contains("Date: 2025-04-17"));
        assert!(text.contains(" M "));
    }

    #[test]
    fn finished_game_reveals_word() {
        let clock = clock();
        let mut app = App::new(DailyGame::new(
            &clock,
            MemoryStore::new(),
            DailyWords::embedded().unwrap(),
        ));
        for c in "QWXYZB".chars() {
            app.guess(c);
        }
        let text = screen(&app);

        assert!(text.contains("Game Over! You Lost"));
        assert!(text.contains("The word was: REACT"));
        assert!(text.contains("Losses:      1"));
        assert!(text.contains("Guessed: Q, W, X, Y, Z, B"));
    }

    #[test]
    fn locked_view_keeps_word_hidden() {
        let clock = clock();
        let mut first = DailyGame::new(&clock, MemoryStore::new(), DailyWords::embedded().unwrap());
        for c in "RQWXYZB".chars() {
            first.submit_guess(c);
        }
        let app = App::new(DailyGame::new(
            &clock,
            first.into_store(),
            DailyWords::embedded().unwrap(),
        ));
        let text = screen(&app);

        assert!(text.contains("R _ _ _ _"));
        assert!(text.contains("You've already played today!"));
        assert!(!text.contains("The word was"));
    }

    #[test]
    fn key_styles_follow_guesses() {
        let clock = clock();
        let mut game = DailyGame::new(&clock, MemoryStore::new(), DailyWords::embedded().unwrap());
        game.submit_guess('R');
        game.submit_guess('Q');
        let session = game.session();

        assert_eq!(key_style(session, 'R').bg, Some(Color::Green));
        assert_eq!(key_style(session, 'Q').bg, Some(Color::Red));
        assert_eq!(key_style(session, 'E').fg, Some(Color::White));
    }
}
