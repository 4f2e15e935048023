//! Corpus statistics command

use crate::wordlists::Corpus;
use std::collections::BTreeMap;

/// Summary of the loaded word list
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusStats {
    pub total_words: usize,
    pub shortest: usize,
    pub longest: usize,
    pub average_length: f64,
    /// Word length to number of words
    pub histogram: BTreeMap<usize, usize>,
}

impl CorpusStats {
    /// Share of games that start with a word of `length` letters
    #[must_use]
    pub fn length_share(&self, length: usize) -> f64 {
        let count = self.histogram.get(&length).copied().unwrap_or(0);
        count as f64 / self.total_words as f64
    }
}

#[must_use]
pub fn corpus_stats(corpus: &Corpus) -> CorpusStats {
    let histogram = corpus.length_histogram();
    let letters: usize = corpus.iter().map(|w| w.len()).sum();

    CorpusStats {
        total_words: corpus.len(),
        shortest: histogram.keys().next().copied().unwrap_or(0),
        longest: histogram.keys().next_back().copied().unwrap_or(0),
        average_length: letters as f64 / corpus.len() as f64,
        histogram,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_corpus() {
        let corpus = Corpus::parse("cat\ncar\nhello\nhi").unwrap();
        let stats = corpus_stats(&corpus);

        assert_eq!(stats.total_words, 4);
        assert_eq!(stats.shortest, 2);
        assert_eq!(stats.longest, 5);
        assert!((stats.average_length - 3.25).abs() < 1e-9);
        assert_eq!(stats.histogram.get(&3), Some(&2));
        assert!((stats.length_share(3) - 0.5).abs() < 1e-9);
        assert!(stats.length_share(9).abs() < 1e-9);
    }

    #[test]
    fn embedded_histogram_covers_every_word() {
        let corpus = Corpus::embedded().unwrap();
        let stats = corpus_stats(&corpus);
        assert_eq!(stats.histogram.values().sum::<usize>(), stats.total_words);
    }
}
