//! Core domain types for hangman
//!
//! This module contains the fundamental value types with no game logic.
//! All types here are pure, testable, and enforce their invariants on construction.

mod guessed;
mod letter;
mod pattern;
mod word;

pub use guessed::GuessedSet;
pub use letter::{Letter, LetterError};
pub use pattern::{BLANK, Pattern, PatternError};
pub use word::{Word, WordError};
