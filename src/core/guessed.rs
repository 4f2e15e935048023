//! Set of letters already guessed in a game
//!
//! Stored as a 26-bit mask, so the blank marker cannot be a member.

use super::{Letter, LetterError};
use std::fmt;
use std::str::FromStr;

/// Letters guessed so far; only ever grows during a game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GuessedSet(u32);

impl GuessedSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: Letter) -> bool {
        self.0 & (1 << letter.index()) != 0
    }

    /// Membership test for a raw word byte
    ///
    /// Bytes outside `a..=z` (including the blank marker) are never members.
    #[inline]
    #[must_use]
    pub const fn contains_byte(self, byte: u8) -> bool {
        byte.is_ascii_lowercase() && self.0 & (1 << (byte - b'a')) != 0
    }

    /// Add a letter; returns `false` if it was already present
    pub fn insert(&mut self, letter: Letter) -> bool {
        let fresh = !self.contains(letter);
        self.0 |= 1 << letter.index();
        fresh
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Guessed letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = Letter> {
        Letter::all().filter(move |&letter| self.contains(letter))
    }

    /// Letters not yet guessed, alphabetically
    pub fn remaining(self) -> impl Iterator<Item = Letter> {
        Letter::all().filter(move |&letter| !self.contains(letter))
    }
}

impl FromIterator<Letter> for GuessedSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Letter> for GuessedSet {
    fn extend<I: IntoIterator<Item = Letter>>(&mut self, iter: I) {
        for letter in iter {
            self.insert(letter);
        }
    }
}

impl FromStr for GuessedSet {
    type Err = LetterError;

    /// Parse a list of letters like `"h,e,l"` or `"hel"`; separators are ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(Letter::new)
            .collect()
    }
}

impl fmt::Display for GuessedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    #[test]
    fn starts_empty() {
        let set = GuessedSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.remaining().count(), 26);
    }

    #[test]
    fn insert_reports_novelty() {
        let mut set = GuessedSet::new();
        assert!(set.insert(letter('e')));
        assert!(!set.insert(letter('e')));
        assert_eq!(set.len(), 1);
        assert!(set.contains(letter('e')));
        assert!(!set.contains(letter('a')));
    }

    #[test]
    fn blank_marker_never_member() {
        let set: GuessedSet = "abcdefghijklmnopqrstuvwxyz".parse().unwrap();
        assert_eq!(set.len(), 26);
        assert!(!set.contains_byte(b'_'));
        assert!(set.contains_byte(b'q'));
    }

    #[test]
    fn parse_ignores_separators() {
        let set: GuessedSet = "h, e ,L".parse().unwrap();
        assert_eq!(set.to_string(), "ehl");
        assert_eq!("h_".parse::<GuessedSet>(), Err(LetterError::Blank));
    }

    #[test]
    fn iterates_alphabetically() {
        let set: GuessedSet = [letter('z'), letter('a'), letter('m')].into_iter().collect();
        let letters: String = set.iter().map(Letter::to_char).collect();
        assert_eq!(letters, "amz");
        assert_eq!(set.remaining().count(), 23);
    }
}
