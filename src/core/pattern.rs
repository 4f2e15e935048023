//! Reveal pattern representation
//!
//! A pattern is the guesser's view of the word: one cell per position, each
//! either a revealed lowercase letter or the blank marker `_`. Its length is
//! fixed when a game starts.

use super::Letter;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The blank marker for unrevealed positions
pub const BLANK: u8 = b'_';

/// Revealed letters and blanks for every position of the hidden word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Box<[u8]>);

/// Error type for pattern strings that cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern must have at least one position")]
    Empty,
    #[error("pattern contains invalid character {0:?}")]
    InvalidCell(char),
}

impl Pattern {
    /// A pattern of `len` blanks, the state of a fresh game
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Pattern;
    ///
    /// let pattern = Pattern::blank(4);
    /// assert_eq!(pattern.to_string(), "____");
    /// assert_eq!(pattern.blank_count(), 4);
    /// ```
    #[must_use]
    pub fn blank(len: usize) -> Self {
        Self(vec![BLANK; len].into_boxed_slice())
    }

    /// Build a pattern from raw cells already known to be `a..=z` or `_`
    pub(crate) fn from_cells(cells: Vec<u8>) -> Self {
        debug_assert!(
            cells.iter().all(|&c| c == BLANK || c.is_ascii_lowercase()),
            "Pattern cells must be a..=z or _"
        );
        Self(cells.into_boxed_slice())
    }

    /// Raw cells: lowercase letters and `BLANK`
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The revealed letter at `position`, or `None` for a blank
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<Letter> {
        match self.0[position] {
            BLANK => None,
            byte => Some(Letter::from_ascii(byte)),
        }
    }

    /// Check whether any position is still hidden
    #[inline]
    #[must_use]
    pub fn has_blank(&self) -> bool {
        self.0.contains(&BLANK)
    }

    #[must_use]
    pub fn blank_count(&self) -> usize {
        self.0.iter().filter(|&&c| c == BLANK).count()
    }

    /// Every position is revealed
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.has_blank()
    }

    /// Check if a letter has been revealed anywhere
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.0.contains(&letter.byte())
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    /// Parse a pattern such as `"hell_"`; letters are normalized to lowercase
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .trim()
            .chars()
            .map(|ch| match ch {
                '_' => Ok(BLANK),
                c if c.is_ascii_alphabetic() => Ok(c.to_ascii_lowercase() as u8),
                c => Err(PatternError::InvalidCell(c)),
            })
            .collect::<Result<Vec<u8>, _>>()?;

        if cells.is_empty() {
            return Err(PatternError::Empty);
        }

        Ok(Self::from_cells(cells))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &cell in self.cells() {
            write!(f, "{}", cell as char)?;
        }
        Ok(())
    }
}
