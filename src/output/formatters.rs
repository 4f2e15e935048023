//! Formatting utilities for replies and terminal output

use crate::core::{LetterError, Pattern};
use crate::game::{GuessOutcome, GuessStatus};

/// Reply to multi-letter chatter while a game is running
pub const ONE_LETTER_HINT: &str = "Send a message consisting of one letter to make a guess.";

/// Reply when the engine gives up on a game
pub const SOMETHING_WENT_WRONG: &str = "Sorry, something went wrong!";

/// Reply to a blank-marker guess
pub const NO_UNDERSCORES: &str = "No words contain underscores. Lol, that'd be confusing.";

/// Pattern in upper case with a space between cells: `H E _ _ O`
///
/// # Examples
/// ```
/// use evil_hangman::core::Pattern;
/// use evil_hangman::output::formatters::spaced_pattern;
///
/// let pattern: Pattern = "he__o".parse().unwrap();
/// assert_eq!(spaced_pattern(&pattern), "H E _ _ O");
/// ```
#[must_use]
pub fn spaced_pattern(pattern: &Pattern) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    for (i, &cell) in pattern.cells().iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(char::from(cell.to_ascii_uppercase()));
    }
    out
}

/// Pattern followed by the misses counter: `H E _ _ O   5/7`
#[must_use]
pub fn status_line(pattern: &Pattern, misses_left: u8, total_misses: u8) -> String {
    format!("{}   {misses_left}/{total_misses}", spaced_pattern(pattern))
}

#[must_use]
pub fn start_message(word_length: usize) -> String {
    format!("Started a new hangman game in English! The word is {word_length} letters long. Guess a letter…")
}

/// Reply when a guess or status arrives without a running game
#[must_use]
pub fn no_game_message(start_command: &str) -> String {
    format!("There's no hangman game going on here! Start one first by doing {start_command}")
}

/// The one human-readable message for an outcome
#[must_use]
pub fn describe_outcome(outcome: &GuessOutcome) -> String {
    let letter = outcome.letter.map_or('?', |l| l.to_uppercase());

    match outcome.status {
        GuessStatus::Continuing => {
            if outcome.letter.is_some_and(|l| outcome.pattern.contains(l)) {
                format!("Yes, there's {letter} in the word!")
            } else {
                format!("No {letter} in the word.")
            }
        }
        GuessStatus::AlreadyGuessedHit => format!("You already guessed {letter}"),
        GuessStatus::AlreadyGuessedMiss => format!("You already tried {letter}"),
        GuessStatus::InvalidLetter => match outcome.rejection {
            Some(LetterError::Blank) => NO_UNDERSCORES.to_string(),
            _ => ONE_LETTER_HINT.to_string(),
        },
        GuessStatus::Won => "Congratulations, you guessed the word!".to_string(),
        GuessStatus::Lost => {
            let word = outcome
                .disclosed_word
                .as_ref()
                .map_or_else(|| spaced_pattern(&outcome.pattern), |w| w.text().to_uppercase());
            format!("Game over! The word was {word}.")
        }
        GuessStatus::Error => SOMETHING_WENT_WRONG.to_string(),
    }
}

/// Lines a chat-style driver sends back, in order
///
/// Applied guesses show the status line; repeated letters and engine errors
/// only get their message.
#[must_use]
pub fn reply_lines(outcome: &GuessOutcome) -> Vec<String> {
    let status = || status_line(&outcome.pattern, outcome.misses_left, outcome.total_misses);

    match outcome.status {
        GuessStatus::Continuing => vec![status()],
        GuessStatus::InvalidLetter => vec![describe_outcome(outcome), status()],
        GuessStatus::Won | GuessStatus::Lost => vec![status(), describe_outcome(outcome)],
        GuessStatus::AlreadyGuessedHit | GuessStatus::AlreadyGuessedMiss | GuessStatus::Error => {
            vec![describe_outcome(outcome)]
        }
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64).round().max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letter, Word};

    fn outcome(status: GuessStatus, letter: Option<char>, pattern: &str, misses_left: u8) -> GuessOutcome {
        GuessOutcome {
            status,
            letter: letter.map(|c| Letter::new(c).unwrap()),
            rejection: None,
            pattern: pattern.parse().unwrap(),
            misses_left,
            total_misses: 7,
            disclosed_word: None,
        }
    }

    #[test]
    fn spaced_pattern_uppercases() {
        assert_eq!(spaced_pattern(&"c_t".parse().unwrap()), "C _ T");
        assert_eq!(spaced_pattern(&Pattern::blank(1)), "_");
    }

    #[test]
    fn status_line_format() {
        let pattern: Pattern = "he__o".parse().unwrap();
        assert_eq!(status_line(&pattern, 5, 7), "H E _ _ O   5/7");
    }

    #[test]
    fn start_message_mentions_length() {
        assert!(start_message(5).contains("The word is 5 letters long."));
    }

    #[test]
    fn repeated_letters() {
        let hit = outcome(GuessStatus::AlreadyGuessedHit, Some('e'), "_e_", 7);
        assert_eq!(describe_outcome(&hit), "You already guessed E");

        let miss = outcome(GuessStatus::AlreadyGuessedMiss, Some('z'), "_e_", 7);
        assert_eq!(describe_outcome(&miss), "You already tried Z");
        assert_eq!(reply_lines(&miss).len(), 1);
    }

    #[test]
    fn invalid_letter_messages() {
        let mut blank = outcome(GuessStatus::InvalidLetter, None, "___", 7);
        blank.rejection = Some(LetterError::Blank);
        assert_eq!(describe_outcome(&blank), NO_UNDERSCORES);
        assert_eq!(reply_lines(&blank), vec![NO_UNDERSCORES.to_string(), "_ _ _   7/7".to_string()]);

        let mut long = outcome(GuessStatus::InvalidLetter, None, "___", 7);
        long.rejection = Some(LetterError::WrongLength);
        assert_eq!(describe_outcome(&long), ONE_LETTER_HINT);
    }

    #[test]
    fn terminal_messages() {
        let won = outcome(GuessStatus::Won, Some('t'), "cat", 4);
        assert_eq!(
            reply_lines(&won),
            vec!["C A T   4/7".to_string(), "Congratulations, you guessed the word!".to_string()]
        );

        let mut lost = outcome(GuessStatus::Lost, Some('q'), "c__", 0);
        lost.disclosed_word = Some(Word::new("cup").unwrap());
        assert_eq!(describe_outcome(&lost), "Game over! The word was CUP.");

        let error = outcome(GuessStatus::Error, Some('a'), "zz_", 3);
        assert_eq!(reply_lines(&error), vec![SOMETHING_WENT_WRONG.to_string()]);
    }

    #[test]
    fn continuing_distinguishes_hit_and_miss() {
        let hit = outcome(GuessStatus::Continuing, Some('a'), "_a_", 7);
        assert_eq!(describe_outcome(&hit), "Yes, there's A in the word!");

        let miss = outcome(GuessStatus::Continuing, Some('e'), "_a_", 6);
        assert_eq!(describe_outcome(&miss), "No E in the word.");
        assert_eq!(reply_lines(&miss), vec!["_ A _   6/7".to_string()]);
    }

    #[test]
    fn progress_bar_bounds() {
        assert_eq!(create_progress_bar(0.0, 100.0, 4), "░░░░");
        assert_eq!(create_progress_bar(100.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(50.0, 100.0, 4), "██░░");
        assert_eq!(create_progress_bar(5.0, 0.0, 3), "░░░");
    }
}
