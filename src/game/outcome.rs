//! Values reported back to drivers

use crate::core::{GuessedSet, Letter, LetterError, Pattern, Word};

/// What a single guess did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuessStatus {
    /// Guess applied, game goes on
    Continuing,
    /// Letter was guessed before and is revealed in the pattern
    AlreadyGuessedHit,
    /// Letter was guessed before and missed
    AlreadyGuessedMiss,
    /// Blank marker or not a single letter; nothing changed
    InvalidLetter,
    Won,
    Lost,
    /// Session state no longer matched the corpus; the game was aborted
    Error,
}

impl GuessStatus {
    /// The session ends with this status
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost | Self::Error)
    }

    /// The guess was applied to the session
    #[must_use]
    pub const fn counts_as_turn(self) -> bool {
        matches!(self, Self::Continuing | Self::Won | Self::Lost)
    }
}

/// Result of `guess`: the status plus the state the guesser should see
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub status: GuessStatus,
    /// The parsed letter, absent for `InvalidLetter`
    pub letter: Option<Letter>,
    /// Why the input was rejected, for `InvalidLetter`
    pub rejection: Option<LetterError>,
    pub pattern: Pattern,
    pub misses_left: u8,
    pub total_misses: u8,
    /// A word fitting the final pattern, set on `Won` and `Lost`
    pub disclosed_word: Option<Word>,
}

/// Read-only snapshot of an active game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub pattern: Pattern,
    pub word_length: usize,
    pub misses_left: u8,
    pub total_misses: u8,
    pub guessed: GuessedSet,
}

impl GameView {
    /// Misses already spent
    #[must_use]
    pub const fn misses_used(&self) -> u8 {
        self.total_misses - self.misses_left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_statuses() {
        assert!(GuessStatus::Won.is_terminal());
        assert!(GuessStatus::Lost.is_terminal());
        assert!(GuessStatus::Error.is_terminal());
        assert!(!GuessStatus::Continuing.is_terminal());
        assert!(!GuessStatus::InvalidLetter.is_terminal());
        assert!(!GuessStatus::AlreadyGuessedHit.is_terminal());
        assert!(!GuessStatus::AlreadyGuessedMiss.is_terminal());
    }

    #[test]
    fn only_applied_guesses_count_as_turns() {
        assert!(GuessStatus::Continuing.counts_as_turn());
        assert!(GuessStatus::Lost.counts_as_turn());
        assert!(!GuessStatus::InvalidLetter.counts_as_turn());
        assert!(!GuessStatus::AlreadyGuessedMiss.counts_as_turn());
        assert!(!GuessStatus::Error.counts_as_turn());
    }

    #[test]
    fn misses_used() {
        let view = GameView {
            pattern: Pattern::blank(3),
            word_length: 3,
            misses_left: 5,
            total_misses: 7,
            guessed: GuessedSet::new(),
        };
        assert_eq!(view.misses_used(), 2);
    }
}
