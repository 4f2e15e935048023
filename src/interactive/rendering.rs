//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::Letter;
use crate::game::GameView;
use crate::output::formatters::spaced_pattern;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Gallows drawings from empty to complete
const GALLOWS: [[&str; 6]; 7] = [
    ["  +---+", "  |   |", "      |", "      |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", "      |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", "  |   |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|   |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", " /    |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", " / \\  |", "========="],
];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input hint
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("😈 EVIL HANGMAN")
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Red)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(8)])
        .split(area);

    let Some(board) = &app.board else {
        let paragraph = Paragraph::new("No game running").block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        f.render_widget(paragraph, area);
        return;
    };

    let mut word_lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            spaced_pattern(&board.pattern),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
    ];
    if let Some(word) = &app.revealed {
        word_lines.push(Line::from(format!("The word was {word}")));
    }

    let word = Paragraph::new(word_lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Word ({} letters) ", board.word_length))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(word, chunks[0]);

    let drawing: Vec<Line> = GALLOWS[gallows_stage(board)]
        .iter()
        .map(|row| Line::from(*row))
        .collect();
    let gallows = Paragraph::new(drawing)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Gallows ").borders(Borders::ALL));
    f.render_widget(gallows, chunks[1]);
}

/// Which drawing to show, spreading the allowed misses over the stages
fn gallows_stage(board: &GameView) -> usize {
    let last = GALLOWS.len() - 1;
    if board.total_misses == 0 {
        return last;
    }
    usize::from(board.misses_used()) * last / usize::from(board.total_misses)
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Misses gauge
            Constraint::Length(4), // Alphabet
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_misses(f, app, chunks[0]);
    render_alphabet(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_misses(f: &mut Frame, app: &App, area: Rect) {
    let (left, total) = app
        .board
        .as_ref()
        .map_or((0, 0), |b| (b.misses_left, b.total_misses));
    let percent = if total == 0 {
        0
    } else {
        u16::from(left) * 100 / u16::from(total)
    };
    let color = match percent {
        0..=30 => Color::Red,
        31..=60 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Misses Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{left}/{total}"));

    f.render_widget(gauge, area);
}

fn render_alphabet(f: &mut Frame, app: &App, area: Rect) {
    let spans: Vec<Span> = Letter::all()
        .map(|letter| {
            let style = match &app.board {
                Some(board) if board.guessed.contains(letter) && board.pattern.contains(letter) => {
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
                }
                Some(board) if board.guessed.contains(letter) => {
                    Style::default().fg(Color::Red).add_modifier(Modifier::CROSSED_OUT)
                }
                _ => Style::default().fg(Color::DarkGray),
            };
            Span::styled(format!("{} ", letter.to_uppercase()), style)
        })
        .collect();

    let alphabet = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(alphabet, area);
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Guessing => (" Type a letter to guess | Ctrl-N: give up and restart ", Color::Yellow),
        InputMode::GameOver => (" Game over | Enter/n: new game | q: quit ", Color::Green),
    };

    let input = Paragraph::new("").block(
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
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let words = Paragraph::new(format!("Words: {}", app.store.corpus().len())).alignment(Alignment::Center);
    f.render_widget(words, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[1]);

    let streak_text = format!(
        "Streak: {} (best {})",
        app.stats.current_streak, app.stats.best_streak
    );
    f.render_widget(Paragraph::new(streak_text).alignment(Alignment::Center), chunks[2]);

    let help = Paragraph::new("Esc/Ctrl-C: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
