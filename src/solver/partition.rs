//! Partitioning candidate words by reveal pattern
//!
//! Given the current pattern, the guess history and a new letter, every
//! consistent corpus word is grouped by the pattern it would produce if it
//! were the hidden word.

use crate::core::{BLANK, GuessedSet, Letter, Pattern, Word};
use crate::wordlists::Corpus;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// Words that would all produce the same pattern after a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket<'a> {
    pattern: Pattern,
    words: Vec<&'a Word>,
}

#[allow(clippy::len_without_is_empty)] // A Bucket always holds at least one word
impl<'a> Bucket<'a> {
    #[inline]
    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Words in corpus order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[&'a Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }
}

/// All buckets for one guess, in the order they were first seen during the corpus scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition<'a> {
    buckets: Vec<Bucket<'a>>,
    largest: Option<usize>,
}

impl<'a> Partition<'a> {
    #[inline]
    #[must_use]
    pub fn buckets(&self) -> &[Bucket<'a>] {
        &self.buckets
    }

    /// Number of distinct patterns
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of consistent words across all buckets
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.buckets.iter().map(Bucket::len).sum()
    }

    /// Index of the largest bucket
    ///
    /// Among equally large buckets this is the one that reached that size
    /// first during the corpus scan, not the one created first.
    #[inline]
    #[must_use]
    pub fn largest(&self) -> Option<usize> {
        self.largest
    }

    /// Find the bucket for an exact pattern
    #[must_use]
    pub fn get(&self, pattern: &Pattern) -> Option<&Bucket<'a>> {
        self.buckets.iter().find(|bucket| bucket.pattern == *pattern)
    }
}

/// Check whether `word` could be the hidden word behind `pattern`
///
/// Two-way consistency: a position may be revealed only if its letter was
/// guessed, and may be blank only if its letter was never guessed.
///
/// # Examples
/// ```
/// use evil_hangman::core::{GuessedSet, Pattern, Word};
/// use evil_hangman::solver::partition::consistent;
///
/// let pattern: Pattern = "he__o".parse().unwrap();
/// let guessed: GuessedSet = "heo".parse().unwrap();
///
/// assert!(consistent(&Word::new("hello").unwrap(), &pattern, &guessed));
/// // The second 'e' would have been revealed already
/// assert!(!consistent(&Word::new("heeho").unwrap(), &pattern, &guessed));
/// ```
#[must_use]
pub fn consistent(word: &Word, pattern: &Pattern, guessed: &GuessedSet) -> bool {
    word.len() == pattern.len()
        && word
            .bytes()
            .iter()
            .zip(pattern.cells())
            .all(|(&letter, &cell)| {
                if cell == BLANK {
                    !guessed.contains_byte(letter)
                } else {
                    cell == letter && guessed.contains_byte(letter)
                }
            })
}

/// The pattern `word` would produce once `letter` is revealed
///
/// Positions holding `letter` in `word` are revealed; every other cell is kept.
/// Revealing the same letter twice yields the same pattern.
///
/// # Examples
/// ```
/// use evil_hangman::core::{Letter, Pattern, Word};
/// use evil_hangman::solver::partition::reveal;
///
/// let word = Word::new("hello").unwrap();
/// let pattern: Pattern = "h____".parse().unwrap();
/// let l = Letter::new('l').unwrap();
///
/// assert_eq!(reveal(&word, &pattern, l).to_string(), "h_ll_");
/// ```
#[must_use]
pub fn reveal(word: &Word, pattern: &Pattern, letter: Letter) -> Pattern {
    let cells = word
        .bytes()
        .iter()
        .zip(pattern.cells())
        .map(|(&w, &cell)| if w == letter.byte() { w } else { cell })
        .collect();

    Pattern::from_cells(cells)
}

/// Corpus words still consistent with the pattern and guess history
#[must_use]
pub fn candidates<'a>(pattern: &Pattern, guessed: &GuessedSet, corpus: &'a Corpus) -> Vec<&'a Word> {
    corpus
        .iter()
        .filter(|word| consistent(word, pattern, guessed))
        .collect()
}

/// Group consistent words by the pattern they produce for `letter`
///
/// Words keep corpus order inside each bucket, and buckets keep the order in
/// which their first word was seen. The largest bucket is tracked as a running
/// maximum that only moves when a bucket strictly overtakes it.
///
/// # Examples
/// ```
/// use evil_hangman::core::{GuessedSet, Letter, Pattern};
/// use evil_hangman::solver::partition::partition;
/// use evil_hangman::wordlists::Corpus;
///
/// let corpus = Corpus::parse("cat\ncar\ndog").unwrap();
/// let a = Letter::new('a').unwrap();
/// let buckets = partition(&Pattern::blank(3), &GuessedSet::new(), a, &corpus);
///
/// assert_eq!(buckets.len(), 2);
/// assert_eq!(buckets.buckets()[0].pattern().to_string(), "_a_");
/// assert_eq!(buckets.buckets()[0].len(), 2);
/// ```
#[must_use]
pub fn partition<'a>(
    pattern: &Pattern,
    guessed: &GuessedSet,
    letter: Letter,
    corpus: &'a Corpus,
) -> Partition<'a> {
    let mut index: FxHashMap<Pattern, usize> = FxHashMap::default();
    let mut buckets: Vec<Bucket<'a>> = Vec::new();
    let mut largest: Option<usize> = None;

    for word in corpus.iter().filter(|word| consistent(word, pattern, guessed)) {
        let touched = match index.entry(reveal(word, pattern, letter)) {
            Entry::Occupied(slot) => {
                let i = *slot.get();
                buckets[i].words.push(word);
                i
            }
            Entry::Vacant(slot) => {
                buckets.push(Bucket {
                    pattern: slot.key().clone(),
                    words: vec![word],
                });
                *slot.insert(buckets.len() - 1)
            }
        };

        if largest.is_none_or(|best| buckets[touched].len() > buckets[best].len()) {
            largest = Some(touched);
        }
    }

    log::trace!(
        "partition of {pattern} on '{letter}': {} words in {} buckets",
        buckets.iter().map(Bucket::len).sum::<usize>(),
        buckets.len()
    );

    Partition { buckets, largest }
}
