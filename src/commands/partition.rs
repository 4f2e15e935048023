//! Partition inspection command
//!
//! Shows how a guess would split the remaining candidates and which bucket
//! the engine would commit to.

use crate::core::{GuessedSet, Letter, Pattern};
use crate::solver::{candidates, choose_bucket, partition};
use crate::wordlists::Corpus;
use anyhow::{Context, Result, bail};

/// One bucket of the inspected partition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketSummary {
    pub pattern: String,
    pub size: usize,
    pub samples: Vec<String>,
}

/// Result of inspecting a partition
#[derive(Debug, Clone)]
pub struct PartitionReport {
    pub pattern: String,
    pub guessed: String,
    pub letter: char,
    pub candidates: usize,
    /// Buckets in the order they were created
    pub buckets: Vec<BucketSummary>,
    /// Index into `buckets` the engine would choose
    pub chosen: Option<usize>,
}

impl PartitionReport {
    #[must_use]
    pub fn chosen_bucket(&self) -> Option<&BucketSummary> {
        self.chosen.and_then(|i| self.buckets.get(i))
    }
}

/// Partition the candidates for `pattern`/`guessed` by guessing `letter`
///
/// Letters revealed in `pattern` count as guessed even if missing from
/// `guessed`.
///
/// # Errors
///
/// Returns an error if:
/// - The pattern, guessed letters or letter cannot be parsed
/// - The letter was already guessed
pub fn inspect_partition(
    pattern: &str,
    guessed: &str,
    letter: &str,
    corpus: &Corpus,
    samples: usize,
) -> Result<PartitionReport> {
    let pattern: Pattern = pattern
        .parse()
        .with_context(|| format!("invalid pattern '{pattern}'"))?;
    let mut guessed: GuessedSet = guessed
        .parse()
        .with_context(|| format!("invalid guessed letters '{guessed}'"))?;
    let letter: Letter = letter
        .parse()
        .with_context(|| format!("invalid letter '{letter}'"))?;

    guessed.extend((0..pattern.len()).filter_map(|i| pattern.letter_at(i)));

    if guessed.contains(letter) {
        bail!("'{letter}' was already guessed");
    }

    let remaining = candidates(&pattern, &guessed, corpus).len();
    let buckets = partition(&pattern, &guessed, letter, corpus);
    let chosen = choose_bucket(&buckets);

    let buckets = buckets
        .buckets()
        .iter()
        .map(|bucket| BucketSummary {
            pattern: bucket.pattern().to_string(),
            size: bucket.len(),
            samples: bucket
                .words()
                .iter()
                .take(samples)
                .map(|w| w.text().to_string())
                .collect(),
        })
        .collect();

    Ok(PartitionReport {
        pattern: pattern.to_string(),
        guessed: guessed.to_string(),
        letter: letter.to_char(),
        candidates: remaining,
        buckets,
        chosen,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Corpus {
        Corpus::parse("cat\ncar\ncan\ncot\nsea\ntea").unwrap()
    }

    #[test]
    fn reports_buckets_in_creation_order() {
        let report = inspect_partition("___", "", "a", &corpus(), 2).unwrap();

        let patterns: Vec<&str> = report.buckets.iter().map(|b| b.pattern.as_str()).collect();
        assert_eq!(patterns, vec!["_a_", "___", "__a"]);
        assert_eq!(report.candidates, 6);
        assert_eq!(report.chosen_bucket().map(|b| b.size), Some(3));
        assert_eq!(report.buckets[0].samples, vec!["cat", "car"]);
    }

    #[test]
    fn sizes_sum_to_candidates() {
        let report = inspect_partition("c__", "c", "t", &corpus(), 5).unwrap();
        let total: usize = report.buckets.iter().map(|b| b.size).sum();
        assert_eq!(total, report.candidates);
        assert_eq!(report.candidates, 4);
    }

    #[test]
    fn pattern_letters_count_as_guessed() {
        let report = inspect_partition("c__", "", "t", &corpus(), 5).unwrap();
        assert_eq!(report.guessed, "c");
        assert!(inspect_partition("c__", "", "c", &corpus(), 5).is_err());
    }

    #[test]
    fn avoids_premature_solution() {
        let corpus = Corpus::parse("hello\nhelly").unwrap();
        let report = inspect_partition("hell_", "hel", "o", &corpus, 3).unwrap();
        assert_eq!(report.chosen_bucket().map(|b| b.pattern.as_str()), Some("hell_"));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(inspect_partition("c-t", "", "a", &corpus(), 3).is_err());
        assert!(inspect_partition("___", "", "_", &corpus(), 3).is_err());
        assert!(inspect_partition("___", "", "ab", &corpus(), 3).is_err());
    }

    #[test]
    fn no_candidates_means_no_choice() {
        let report = inspect_partition("_____", "", "e", &corpus(), 3).unwrap();
        assert!(report.buckets.is_empty());
        assert_eq!(report.chosen, None);
    }
}
