//! Hangman word representation
//!
//! A Word is a non-empty run of lowercase ASCII letters of any length.

use super::Letter;
use std::fmt;
use thiserror::Error;

/// A candidate word from the corpus
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must contain at least one letter")]
    Empty,
    #[error("word contains invalid character {0:?}")]
    InvalidCharacter(char),
}

#[allow(clippy::len_without_is_empty)] // A Word is never empty
impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - It contains anything other than ASCII letters (spaces, digits,
    ///   underscores, accented letters)
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Word;
    ///
    /// let word = Word::new("Hello").unwrap();
    /// assert_eq!(word.text(), "hello");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("hell_").is_err());
    /// assert!(Word::new("two words").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes (all in `a..=z`)
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Letter {
        Letter::from_ascii(self.bytes()[position])
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.bytes().contains(&letter.byte())
    }

    /// Iterate over the letters in order
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.bytes().iter().map(|&b| Letter::from_ascii(b))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
