//! TUI rendering with ratatui
//!
//! Board, message log, and status bar for the word game.

use super::app::{App, Message, MessageStyle};
use crate::core::{LetterScore, WORD_LEN};
use crate::game::{GUESS_LIMIT, GameMode, GameState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(10),    // Board
            Constraint::Length(7),  // Messages
            Constraint::Length(3),  // Input
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
    render_input(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = if app.free_mode {
        "✝ SELAH - Word Game (free play)"
    } else {
        "✝ SELAH - Daily Word"
    };

    let header = Paragraph::new(title)
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

fn score_style(score: LetterScore) -> Style {
    let bg = match score {
        LetterScore::Exact => Color::Green,
        LetterScore::Present => Color::Yellow,
        LetterScore::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = vec![Line::from("")];

    // Scored guesses
    for (word, feedback) in app.session.guesses() {
        let mut spans = vec![Span::raw("   ")];
        for (i, &score) in feedback.scores().iter().enumerate() {
            let letter = char::from(word.letter_at(i));
            spans.push(Span::styled(format!(" {letter} "), score_style(score)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    // Current input row
    if !app.session.is_over() {
        let mut spans = vec![Span::raw("   ")];
        for i in 0..WORD_LEN {
            let letter = app.input.chars().nth(i).unwrap_or('·');
            spans.push(Span::styled(
                format!(" {letter} "),
                Style::default().fg(Color::White).bg(Color::Black),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    // Unused rows in limited mode
    if app.session.mode() == GameMode::Limited {
        let used = app.session.guesses().len() + usize::from(!app.session.is_over());
        for _ in used..GUESS_LIMIT {
            let mut spans = vec![Span::raw("   ")];
            for _ in 0..WORD_LEN {
                spans.push(Span::styled(
                    " · ",
                    Style::default().fg(Color::DarkGray),
                ));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
            lines.push(Line::from(""));
        }
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|Message { text, style }| {
            let style = match style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(text.clone()).style(style)
        })
        .collect();

    let list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.session.state() {
        GameState::Solved => (" 🎉 SOLVED! | Press 'n' for new game or 'q' to quit ", "", Color::Green),
        GameState::Exhausted => (
            " Out of guesses | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Red,
        ),
        GameState::InProgress => (
            " Type your guess (5 letters), Enter to submit | ESC to quit ",
            app.input.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let mode_text = match (app.session.mode(), app.free_mode) {
        (GameMode::Unlimited, _) => "Mode: Unlimited".to_string(),
        (GameMode::Limited, true) => "Mode: Free play".to_string(),
        (GameMode::Limited, false) => "Mode: Daily word".to_string(),
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win rate: {:.0}%",
        app.stats.games_played,
        if app.stats.games_played > 0 {
            app.stats.games_won as f64 / app.stats.games_played as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let remaining_text = match app.session.guesses_remaining() {
        Some(n) => format!("Guesses left: {n}"),
        None => format!("Guesses: {}", app.session.guesses().len()),
    };
    let remaining = Paragraph::new(remaining_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(remaining, chunks[2]);
}
