//! Simple interactive CLI mode
//!
//! Line-based driver that talks to the store the way a chat adapter would:
//! one local channel, one line per message.

use crate::error::SessionError;
use crate::game::{SessionKey, SessionStore};
use crate::output::formatters::{
    ONE_LETTER_HINT, no_game_message, reply_lines, start_message, status_line,
};
use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Command that starts a game in this driver
const START_COMMAND: &str = "new";

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(store: &SessionStore) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let key = SessionKey::new("terminal", "local");

    print_banner(&mut stdout.lock())?;
    run_session(store, &key, stdin.lock(), stdout.lock())?;
    Ok(())
}

fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                  Evil Hangman - Simple Mode                  ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess one letter per line. I never pick a word until I have to.")?;
    writeln!(out, "Commands: 'new' to start, 'status', 'end' to give up, 'quit' to exit\n")
}

/// Drive one channel from `input` until EOF or `quit`
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_session<R: BufRead, W: Write>(
    store: &SessionStore,
    key: &SessionKey,
    input: R,
    mut out: W,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let command = line.trim();
        if command.is_empty() {
            continue;
        }

        match command.to_lowercase().as_str() {
            "quit" | "exit" => {
                store.end_game(key);
                writeln!(out, "Thanks for playing!")?;
                return Ok(());
            }
            "new" | "start" | "hangman" => match store.start_game(key) {
                Ok(view) => {
                    writeln!(out, "{}", start_message(view.word_length))?;
                    writeln!(out, "{}", status_line(&view.pattern, view.misses_left, view.total_misses))?;
                }
                Err(SessionError::AlreadyActive) => {
                    writeln!(out, "{ONE_LETTER_HINT}")?;
                    print_status(store, key, &mut out)?;
                }
                Err(e) => writeln!(out, "{e}")?,
            },
            "status" => print_status(store, key, &mut out)?,
            "end" | "stop" => {
                if store.end_game(key) {
                    writeln!(out, "Game ended.")?;
                } else {
                    writeln!(out, "{}", no_game_message(START_COMMAND))?;
                }
            }
            _ => match store.guess_letter(key, command) {
                Ok(outcome) => {
                    for reply in reply_lines(&outcome) {
                        writeln!(out, "{reply}")?;
                    }
                    if outcome.status.is_terminal() {
                        writeln!(out, "Type '{START_COMMAND}' to play again.")?;
                    }
                }
                Err(_) => writeln!(out, "{}", no_game_message(START_COMMAND))?,
            },
        }
        out.flush()?;
    }

    Ok(())
}

fn print_status<W: Write>(store: &SessionStore, key: &SessionKey, out: &mut W) -> io::Result<()> {
    match store.status(key) {
        Ok(view) => writeln!(out, "{}", status_line(&view.pattern, view.misses_left, view.total_misses)),
        Err(_) => writeln!(out, "{}", no_game_message(START_COMMAND)),
    }
}
