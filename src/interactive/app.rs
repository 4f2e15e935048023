//! TUI application state and logic

use crate::game::{GameView, GuessStatus, SessionKey, SessionStore};
use crate::output::formatters::{describe_outcome, start_message};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 8;

/// Application state
pub struct App<'a> {
    pub store: &'a SessionStore,
    pub key: SessionKey,
    /// What the player sees; kept after the game ends so the final board stays up
    pub board: Option<GameView>,
    /// Word disclosed by the last finished game
    pub revealed: Option<String>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub best_streak: usize,
}

impl Statistics {
    fn record(&mut self, won: bool) {
        self.total_games += 1;
        if won {
            self.games_won += 1;
            self.current_streak += 1;
            self.best_streak = self.best_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(store: &'a SessionStore) -> Self {
        Self {
            store,
            key: SessionKey::new("tui", "local"),
            board: None,
            revealed: None,
            messages: vec![Message {
                text: "Welcome! Guess letters. I'm not committed to any word yet.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        }
    }

    /// Abandon any running game and start a fresh one
    pub fn new_game(&mut self) {
        if self.store.end_game(&self.key) && self.input_mode == InputMode::Guessing {
            self.stats.record(false);
        }
        self.revealed = None;

        match self.store.start_game(&self.key) {
            Ok(view) => {
                self.add_message(&start_message(view.word_length), MessageStyle::Info);
                self.board = Some(view);
                self.input_mode = InputMode::Guessing;
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                self.board = None;
            }
        }
    }

    /// Send one keypress worth of input as a guess
    pub fn guess(&mut self, input: &str) {
        if self.input_mode != InputMode::Guessing {
            return;
        }

        let outcome = match self.store.guess_letter(&self.key, input) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        let style = match outcome.status {
            GuessStatus::Won => MessageStyle::Success,
            GuessStatus::Continuing if outcome.letter.is_some_and(|l| outcome.pattern.contains(l)) => {
                MessageStyle::Success
            }
            GuessStatus::Continuing | GuessStatus::AlreadyGuessedHit | GuessStatus::AlreadyGuessedMiss => {
                MessageStyle::Info
            }
            GuessStatus::InvalidLetter | GuessStatus::Lost | GuessStatus::Error => MessageStyle::Error,
        };
        self.add_message(&describe_outcome(&outcome), style);

        if let Some(board) = &mut self.board {
            board.pattern = outcome.pattern.clone();
            board.misses_left = outcome.misses_left;
            if let Some(letter) = outcome.letter.filter(|_| outcome.status.counts_as_turn()) {
                board.guessed.insert(letter);
            }
        }

        if outcome.status.is_terminal() {
            self.stats.record(outcome.status == GuessStatus::Won);
            self.revealed = outcome.disclosed_word.map(|w| w.text().to_uppercase());
            self.input_mode = InputMode::GameOver;
            self.add_message("Press Enter or 'n' for a new game, 'q' to quit.", MessageStyle::Info);
        }
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
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.new_game();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match (app.input_mode, key.code) {
                (_, KeyCode::Char('c')) if ctrl => app.should_quit = true,
                (_, KeyCode::Esc) => app.should_quit = true,
                (InputMode::Guessing, KeyCode::Char('n')) if ctrl => app.new_game(),
                (InputMode::Guessing, KeyCode::Char(c)) => app.guess(&c.to_string()),
                (InputMode::GameOver, KeyCode::Enter | KeyCode::Char('n')) => app.new_game(),
                (InputMode::GameOver, KeyCode::Char('q')) => app.should_quit = true,
                _ => {}
            }
        }

        if app.should_quit {
            app.store.end_game(&app.key);
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::wordlists::Corpus;
    use std::sync::Arc;

    fn store(words: &str, misses: u8) -> SessionStore {
        let corpus = Arc::new(Corpus::parse(words).unwrap());
        SessionStore::with_seed(corpus, GameConfig::new(misses).unwrap(), 3)
    }

    #[test]
    fn new_game_sets_board() {
        let store = store("cat\ncar", 7);
        let mut app = App::new(&store);
        app.new_game();

        let board = app.board.as_ref().unwrap();
        assert_eq!(board.pattern.to_string(), "___");
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.messages.last().unwrap().text.contains("3 letters long"));
    }

    #[test]
    fn win_updates_stats_and_mode() {
        let store = store("cat", 7);
        let mut app = App::new(&store);
        app.new_game();

        for c in ["c", "a", "t"] {
            app.guess(c);
        }

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.current_streak, 1);
        assert_eq!(app.revealed.as_deref(), Some("CAT"));
        assert_eq!(app.board.as_ref().unwrap().pattern.to_string(), "cat");
        assert_eq!(app.board.as_ref().unwrap().guessed.len(), 3);
    }

    #[test]
    fn loss_resets_streak() {
        let store = store("cat", 1);
        let mut app = App::new(&store);
        app.new_game();
        app.guess("z");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert_eq!(app.board.as_ref().unwrap().misses_left, 0);
        assert!(app.messages.iter().any(|m| m.text == "Game over! The word was CAT."));
    }

    #[test]
    fn guesses_ignored_after_game_over() {
        let store = store("cat", 1);
        let mut app = App::new(&store);
        app.new_game();
        app.guess("z");
        let messages = app.messages.len();

        app.guess("c");
        assert_eq!(app.messages.len(), messages);
    }

    #[test]
    fn abandoning_counts_as_loss() {
        let store = store("cat", 7);
        let mut app = App::new(&store);
        app.new_game();
        app.guess("c");
        app.new_game();

        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.board.as_ref().unwrap().pattern.to_string(), "___");
    }

    #[test]
    fn invalid_input_not_recorded() {
        let store = store("cat", 7);
        let mut app = App::new(&store);
        app.new_game();
        app.guess("_");

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(app.board.as_ref().unwrap().guessed.is_empty());
    }

    #[test]
    fn message_log_is_bounded() {
        let store = store("cat", 7);
        let mut app = App::new(&store);
        app.new_game();
        for _ in 0..20 {
            app.guess("_");
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
    }
}
