//! TUI rendering with ratatui
//!
//! Tile grid, keyboard hints, messages and a status bar.

use super::app::{App, MessageStyle};
use crate::core::Mark;
use crate::engine::{Cell, GameStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use rustc_hash::FxHashMap;

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let rows = app.engine.board().rows() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),        // Header
            Constraint::Length(rows + 2), // Board
            Constraint::Length(5),        // Keyboard
            Constraint::Min(4),           // Messages
            Constraint::Length(1),        // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

fn mark_style(mark: Option<Mark>) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match mark {
        Some(Mark::Correct) => base.fg(Color::Black).bg(Color::Green),
        Some(Mark::Present) => base.fg(Color::Black).bg(Color::Yellow),
        Some(Mark::Absent) => base.fg(Color::White).bg(Color::DarkGray),
        None => base.fg(Color::White),
    }
}

fn tile(cell: Cell) -> Span<'static> {
    let text = match cell.letter {
        Some(letter) => format!(" {} ", letter.to_ascii_uppercase()),
        None => " · ".to_string(),
    };
    Span::styled(text, mark_style(cell.mark))
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .grid()
        .into_iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for cell in row {
                spans.push(tile(cell));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints: FxHashMap<u8, Mark> = app.engine.board().letter_marks();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|letter| {
                    Span::styled(
                        format!(" {} ", char::from(letter.to_ascii_uppercase())),
                        mark_style(hints.get(&letter).copied()),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(40),
            Constraint::Percentage(35),
        ])
        .split(area);

    let turn = app.engine.turn();
    let status_text = match app.engine.status() {
        GameStatus::InProgress => format!(
            "Guess {}/{}",
            turn.attempts_used() + 1,
            turn.max_attempts()
        ),
        GameStatus::Won => "Solved!".to_string(),
        GameStatus::Lost => "Game over".to_string(),
    };
    f.render_widget(
        Paragraph::new(status_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {}",
        app.stats.games_played,
        app.stats.win_rate(),
        app.stats.current_streak
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = if app.engine.status().is_over() {
        "Enter: New Game | Esc: Quit"
    } else {
        "Enter: Submit | Ctrl-N: New | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
