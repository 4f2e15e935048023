//! The immutable word corpus
//!
//! Loaded once at startup and shared read-only (usually behind an `Arc`) by
//! every session.

use super::WORDS;
use super::loader::{load_from_file, parse_words, words_from_slice};
use crate::core::Word;
use crate::error::CorpusLoadError;
use rand::Rng;
use std::collections::BTreeMap;
use std::path::Path;

/// A non-empty, ordered list of candidate words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    words: Vec<Word>,
}

#[allow(clippy::len_without_is_empty)] // A Corpus is never empty
impl Corpus {
    /// Wrap an ordered list of words
    ///
    /// # Errors
    /// Returns `CorpusLoadError::Empty` if `words` is empty.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Word;
    /// use evil_hangman::wordlists::Corpus;
    ///
    /// let corpus = Corpus::from_words(vec![Word::new("cat").unwrap()]).unwrap();
    /// assert_eq!(corpus.len(), 1);
    ///
    /// assert!(Corpus::from_words(Vec::new()).is_err());
    /// ```
    pub fn from_words(words: Vec<Word>) -> Result<Self, CorpusLoadError> {
        if words.is_empty() {
            return Err(CorpusLoadError::Empty);
        }
        Ok(Self { words })
    }

    /// Parse a newline-delimited word list
    ///
    /// # Errors
    /// Returns `CorpusLoadError::Empty` if no line holds a valid word.
    pub fn parse(content: &str) -> Result<Self, CorpusLoadError> {
        Self::from_words(parse_words(content))
    }

    /// Read a newline-delimited word list from disk
    ///
    /// # Errors
    /// Returns `CorpusLoadError::Io` if the file is unreadable and
    /// `CorpusLoadError::Empty` if it holds no valid words.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CorpusLoadError> {
        let path = path.as_ref();
        let corpus = Self::from_words(load_from_file(path)?)?;
        log::info!("loaded {} words from {}", corpus.len(), path.display());
        Ok(corpus)
    }

    /// The English list compiled into the binary
    ///
    /// # Errors
    /// Returns `CorpusLoadError::Empty` only if the build embedded an empty list.
    pub fn embedded() -> Result<Self, CorpusLoadError> {
        let corpus = Self::from_words(words_from_slice(WORDS))?;
        log::info!("loaded {} embedded words", corpus.len());
        Ok(corpus)
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Iterate in corpus order
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Length of a uniformly random corpus word
    ///
    /// Longer-tailed lengths are drawn as often as they occur in the corpus,
    /// not uniformly over distinct lengths.
    pub fn random_length<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let index = rng.random_range(0..self.words.len());
        self.words[index].len()
    }

    /// Number of words of each length
    #[must_use]
    pub fn length_histogram(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for word in &self.words {
            *histogram.entry(word.len()).or_insert(0) += 1;
        }
        histogram
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parse_builds_ordered_corpus() {
        let corpus = Corpus::parse("cat\ncar\n\ncan\n").unwrap();
        let texts: Vec<&str> = corpus.iter().map(Word::text).collect();
        assert_eq!(texts, ["cat", "car", "can"]);
    }

    #[test]
    fn empty_list_is_load_error() {
        assert!(matches!(Corpus::parse(""), Err(CorpusLoadError::Empty)));
        assert!(matches!(Corpus::parse("\n  \n"), Err(CorpusLoadError::Empty)));
        assert!(matches!(Corpus::parse("n0t\nwo rd\n"), Err(CorpusLoadError::Empty)));
    }

    #[test]
    fn embedded_corpus_loads() {
        let corpus = Corpus::embedded().unwrap();
        assert_eq!(corpus.len(), crate::wordlists::WORDS_COUNT);
    }

    #[test]
    fn random_length_comes_from_corpus() {
        let corpus = Corpus::parse("at\nhello\nlengthy").unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let len = corpus.random_length(&mut rng);
            assert!([2, 5, 7].contains(&len), "unexpected length {len}");
        }
    }

    #[test]
    fn random_length_single_length_corpus() {
        let corpus = Corpus::parse("cat\ncar\ncan").unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(corpus.random_length(&mut rng), 3);
    }

    #[test]
    fn length_histogram_counts() {
        let corpus = Corpus::parse("cat\ncar\nhello\na").unwrap();
        let histogram = corpus.length_histogram();
        assert_eq!(histogram.get(&1), Some(&1));
        assert_eq!(histogram.get(&3), Some(&2));
        assert_eq!(histogram.get(&5), Some(&1));
        assert_eq!(histogram.get(&4), None);
    }

    #[test]
    fn corpus_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Corpus>();
    }
}
