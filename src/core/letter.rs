//! Single-letter guesses
//!
//! A `Letter` is one lowercase ASCII letter. Parsing normalizes case and
//! rejects the blank marker and anything that is not exactly one letter.

use super::pattern::BLANK;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One lowercase ASCII letter, `a` through `z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

/// Error type for guesses that are not a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LetterError {
    #[error("no words contain underscores")]
    Blank,
    #[error("'{0}' is not a letter")]
    NotALetter(char),
    #[error("a guess must be exactly one letter")]
    WrongLength,
}

impl Letter {
    /// Create a letter from a character, normalizing to lowercase
    ///
    /// # Errors
    /// Returns `LetterError::Blank` for the blank marker and
    /// `LetterError::NotALetter` for anything outside `a..=z` / `A..=Z`.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::{Letter, LetterError};
    ///
    /// assert_eq!(Letter::new('Q').unwrap().to_char(), 'q');
    /// assert_eq!(Letter::new('_'), Err(LetterError::Blank));
    /// assert!(Letter::new('7').is_err());
    /// ```
    pub fn new(ch: char) -> Result<Self, LetterError> {
        let lower = ch.to_ascii_lowercase();

        if lower == char::from(BLANK) {
            return Err(LetterError::Blank);
        }

        if lower.is_ascii_lowercase() {
            Ok(Self(lower as u8))
        } else {
            Err(LetterError::NotALetter(ch))
        }
    }

    /// Wrap a byte already known to be in `a..=z`
    #[inline]
    pub(crate) const fn from_ascii(byte: u8) -> Self {
        debug_assert!(byte.is_ascii_lowercase(), "Letter byte must be a..=z");
        Self(byte)
    }

    /// All 26 letters in alphabetical order
    pub fn all() -> impl Iterator<Item = Self> {
        (b'a'..=b'z').map(Self)
    }

    #[inline]
    #[must_use]
    pub const fn byte(self) -> u8 {
        self.0
    }

    /// Position in the alphabet (0-25)
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        (self.0 - b'a') as u32
    }

    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        self.0 as char
    }

    #[must_use]
    pub const fn to_uppercase(self) -> char {
        self.0.to_ascii_uppercase() as char
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::new(ch)
    }
}

impl FromStr for Letter {
    type Err = LetterError;

    /// Parse user input; surrounding whitespace is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();

        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::new(ch),
            _ => Err(LetterError::WrongLength),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
