//! Per-channel game state machine
//!
//! A session owns the pattern, the guessed letters and the miss counter. It
//! never stores a secret word: each guess re-partitions the corpus and moves
//! the pattern to whichever bucket the selection policy picks.

use super::outcome::{GameView, GuessOutcome, GuessStatus};
use crate::config::GameConfig;
use crate::core::{GuessedSet, Letter, LetterError, Pattern, Word};
use crate::error::SessionError;
use crate::solver::{partition, select};
use crate::wordlists::Corpus;
use rand::Rng;

/// Lifecycle of a session. `NoGame` is modelled by the absence of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Won,
    Lost,
    Error,
}

/// One hangman game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pattern: Pattern,
    guessed: GuessedSet,
    misses_left: u8,
    total_misses: u8,
    state: SessionState,
}

impl GameSession {
    /// Start a game whose word length is that of a random corpus word
    pub fn start<R: Rng + ?Sized>(corpus: &Corpus, config: GameConfig, rng: &mut R) -> Self {
        Self::with_length(corpus.random_length(rng), config)
    }

    /// Start a game with an explicit word length
    #[must_use]
    pub fn with_length(word_length: usize, config: GameConfig) -> Self {
        debug_assert!(word_length > 0, "word length must be positive");
        Self {
            pattern: Pattern::blank(word_length),
            guessed: GuessedSet::new(),
            misses_left: config.total_misses(),
            total_misses: config.total_misses(),
            state: SessionState::Active,
        }
    }

    /// Rebuild an active game from a known position
    ///
    /// `misses_left` is clamped to `1..=total`: an active game always has a
    /// miss to spend, so only a real miss can end it in `Lost`.
    #[must_use]
    pub fn resume(pattern: Pattern, guessed: GuessedSet, misses_left: u8, config: GameConfig) -> Self {
        Self {
            pattern,
            guessed,
            misses_left: misses_left.clamp(1, config.total_misses()),
            total_misses: config.total_misses(),
            state: SessionState::Active,
        }
    }

    #[inline]
    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[inline]
    #[must_use]
    pub const fn guessed(&self) -> GuessedSet {
        self.guessed
    }

    #[inline]
    #[must_use]
    pub const fn misses_left(&self) -> u8 {
        self.misses_left
    }

    #[inline]
    #[must_use]
    pub const fn total_misses(&self) -> u8 {
        self.total_misses
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.pattern.len()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    /// Snapshot for status displays; never mutates the session
    #[must_use]
    pub fn view(&self) -> GameView {
        GameView {
            pattern: self.pattern.clone(),
            word_length: self.word_length(),
            misses_left: self.misses_left,
            total_misses: self.total_misses,
            guessed: self.guessed,
        }
    }

    /// Apply raw user input as a guess
    ///
    /// Input that is not exactly one letter (including the blank marker) is
    /// reported as `InvalidLetter` and leaves the session untouched.
    ///
    /// # Errors
    /// Returns `SessionError::NotActive` if the game already ended.
    pub fn guess<R: Rng + ?Sized>(
        &mut self,
        input: &str,
        corpus: &Corpus,
        rng: &mut R,
    ) -> Result<GuessOutcome, SessionError> {
        self.ensure_active()?;

        match input.parse::<Letter>() {
            Ok(letter) => self.guess_letter(letter, corpus, rng),
            Err(rejection) => Ok(self.rejected(rejection)),
        }
    }

    /// Apply a parsed letter as a guess
    ///
    /// # Errors
    /// Returns `SessionError::NotActive` if the game already ended.
    pub fn guess_letter<R: Rng + ?Sized>(
        &mut self,
        letter: Letter,
        corpus: &Corpus,
        rng: &mut R,
    ) -> Result<GuessOutcome, SessionError> {
        self.ensure_active()?;

        if self.guessed.contains(letter) {
            let status = if self.pattern.contains(letter) {
                GuessStatus::AlreadyGuessedHit
            } else {
                GuessStatus::AlreadyGuessedMiss
            };
            return Ok(self.outcome(status, Some(letter), None));
        }

        let buckets = partition(&self.pattern, &self.guessed, letter, corpus);
        let selection = match select(&buckets, rng) {
            Ok(selection) => selection,
            Err(e) => {
                log::error!("aborting game at {} on '{letter}': {e}", self.pattern);
                self.state = SessionState::Error;
                return Ok(self.outcome(GuessStatus::Error, Some(letter), None));
            }
        };

        log::debug!(
            "'{letter}': {} -> {} ({} of {} words kept)",
            self.pattern,
            selection.pattern,
            selection.bucket_size,
            buckets.total_words()
        );

        self.pattern = selection.pattern;
        self.guessed.insert(letter);
        if !self.pattern.contains(letter) {
            self.misses_left = self.misses_left.saturating_sub(1);
        }

        let status = if self.pattern.is_solved() {
            self.state = SessionState::Won;
            GuessStatus::Won
        } else if self.misses_left == 0 {
            self.state = SessionState::Lost;
            GuessStatus::Lost
        } else {
            GuessStatus::Continuing
        };

        let disclosed = status.is_terminal().then(|| selection.exemplar.clone());
        Ok(self.outcome(status, Some(letter), disclosed))
    }

    fn ensure_active(&self) -> Result<(), SessionError> {
        if self.is_active() {
            Ok(())
        } else {
            Err(SessionError::NotActive)
        }
    }

    fn rejected(&self, rejection: LetterError) -> GuessOutcome {
        GuessOutcome {
            rejection: Some(rejection),
            ..self.outcome(GuessStatus::InvalidLetter, None, None)
        }
    }

    fn outcome(&self, status: GuessStatus, letter: Option<Letter>, disclosed_word: Option<Word>) -> GuessOutcome {
        GuessOutcome {
            status,
            letter,
            rejection: None,
            pattern: self.pattern.clone(),
            misses_left: self.misses_left,
            total_misses: self.total_misses,
            disclosed_word,
        }
    }
}
