//! Word lists for hangman
//!
//! Provides the embedded English list and the immutable corpus every game reads from.

mod corpus;
mod embedded;
pub mod loader;

pub use corpus::Corpus;
pub use embedded::{WORDS, WORDS_COUNT};
