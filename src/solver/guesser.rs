//! Letter guessing strategies
//!
//! Automatic players used to exercise the engine. A guesser sees only what a
//! human would see: the pattern, the guessed letters, and the public corpus.

use super::partition::candidates;
use crate::core::{GuessedSet, Letter, Pattern};
use crate::wordlists::Corpus;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// English letters from most to least common
pub const ENGLISH_FREQUENCY_ORDER: &[u8; 26] = b"etaoinshrdlcumwfgypbvkjxqz";

/// A strategy for choosing the next letter to guess
pub trait Guesser {
    /// Choose a letter not yet in `guessed`
    ///
    /// Returns `None` when every letter has been guessed.
    fn next_letter<R: Rng + ?Sized>(
        &self,
        pattern: &Pattern,
        guessed: GuessedSet,
        corpus: &Corpus,
        rng: &mut R,
    ) -> Option<Letter>;
}

/// Enum wrapper for all guesser types
///
/// Allows runtime selection of guesser while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuesserType {
    /// Most informative letter among remaining candidates (default)
    Frequency(FrequencyGuesser),
    /// Fixed English letter frequency order
    Alphabet(AlphabetGuesser),
    /// Uniformly random unguessed letter
    Random(RandomGuesser),
}

impl Guesser for GuesserType {
    fn next_letter<R: Rng + ?Sized>(
        &self,
        pattern: &Pattern,
        guessed: GuessedSet,
        corpus: &Corpus,
        rng: &mut R,
    ) -> Option<Letter> {
        match self {
            Self::Frequency(g) => g.next_letter(pattern, guessed, corpus, rng),
            Self::Alphabet(g) => g.next_letter(pattern, guessed, corpus, rng),
            Self::Random(g) => g.next_letter(pattern, guessed, corpus, rng),
        }
    }
}

impl GuesserType {
    /// Create guesser from name string
    ///
    /// Supported names: "frequency", "alphabet", "english", "random".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "alphabet" | "english" => Self::Alphabet(AlphabetGuesser),
            "random" => Self::Random(RandomGuesser),
            _ => Self::Frequency(FrequencyGuesser),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Alphabet(_) => "alphabet",
            Self::Random(_) => "random",
        }
    }
}

/// Picks the unguessed letter contained in the most remaining candidates
///
/// Ties go to the letter that is more common in English.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrequencyGuesser;

impl Guesser for FrequencyGuesser {
    fn next_letter<R: Rng + ?Sized>(
        &self,
        pattern: &Pattern,
        guessed: GuessedSet,
        corpus: &Corpus,
        rng: &mut R,
    ) -> Option<Letter> {
        let remaining = candidates(pattern, &guessed, corpus);

        let mut counts = [0usize; 26];
        for word in &remaining {
            let mut seen = GuessedSet::new();
            for letter in word.letters() {
                if seen.insert(letter) {
                    counts[letter.index() as usize] += 1;
                }
            }
        }

        let best = english_order()
            .filter(|&letter| !guessed.contains(letter))
            .filter(|&letter| counts[letter.index() as usize] > 0)
            .fold(None, |best: Option<Letter>, letter| match best {
                Some(b) if counts[b.index() as usize] >= counts[letter.index() as usize] => Some(b),
                _ => Some(letter),
            });

        // Nothing useful left: fall back to plain frequency order
        best.or_else(|| AlphabetGuesser.next_letter(pattern, guessed, corpus, rng))
    }
}

/// Guesses letters in fixed English frequency order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlphabetGuesser;

impl Guesser for AlphabetGuesser {
    fn next_letter<R: Rng + ?Sized>(
        &self,
        _pattern: &Pattern,
        guessed: GuessedSet,
        _corpus: &Corpus,
        _rng: &mut R,
    ) -> Option<Letter> {
        english_order().find(|&letter| !guessed.contains(letter))
    }
}

/// Guesses a uniformly random unguessed letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomGuesser;

impl Guesser for RandomGuesser {
    fn next_letter<R: Rng + ?Sized>(
        &self,
        _pattern: &Pattern,
        guessed: GuessedSet,
        _corpus: &Corpus,
        rng: &mut R,
    ) -> Option<Letter> {
        let open: Vec<Letter> = guessed.remaining().collect();
        open.choose(rng).copied()
    }
}

fn english_order() -> impl Iterator<Item = Letter> {
    ENGLISH_FREQUENCY_ORDER.iter().map(|&b| Letter::from_ascii(b))
}
