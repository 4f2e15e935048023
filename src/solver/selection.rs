//! Adversarial bucket selection
//!
//! Picks the bucket that leaves the guesser with the most words to worry
//! about. A single-word bucket that would solve the game is passed over
//! whenever some other bucket still has a blank.

use super::partition::{Bucket, Partition};
use crate::core::{Pattern, Word};
use crate::error::SelectionError;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// The pattern the engine settled on and one word that fits it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'a> {
    pub pattern: Pattern,
    /// Disclosed when the game ends; never a committed secret
    pub exemplar: &'a Word,
    /// Words still possible after this guess
    pub bucket_size: usize,
}

/// Index of the bucket the engine should commit to, or `None` for an empty partition
///
/// The largest bucket wins, ties going to the bucket that reached that size
/// first. If that bucket is a lone fully revealed word, the first bucket that
/// still has a blank is used instead.
#[must_use]
pub fn choose_bucket(partition: &Partition<'_>) -> Option<usize> {
    let buckets = partition.buckets();
    let best = partition.largest()?;

    let forced = &buckets[best];
    if forced.len() == 1 && forced.pattern().is_solved() {
        if let Some(open) = buckets.iter().position(|b| b.pattern().has_blank()) {
            log::debug!(
                "avoiding early solution {}: keeping {} open",
                forced.pattern(),
                buckets[open].pattern()
            );
            return Some(open);
        }
        log::debug!("no open pattern left, conceding {}", forced.pattern());
    }

    Some(best)
}

/// Choose the final pattern and draw an exemplar word from it
///
/// # Errors
/// Returns `SelectionError::NoCandidateWords` if the partition is empty.
///
/// # Examples
/// ```
/// use evil_hangman::core::{GuessedSet, Letter, Pattern};
/// use evil_hangman::solver::{partition::partition, selection::select};
/// use evil_hangman::wordlists::Corpus;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let corpus = Corpus::parse("hello\nhelly").unwrap();
/// let pattern: Pattern = "hell_".parse().unwrap();
/// let guessed: GuessedSet = "hel".parse().unwrap();
/// let o = Letter::new('o').unwrap();
///
/// let buckets = partition(&pattern, &guessed, o, &corpus);
/// let selection = select(&buckets, &mut StdRng::seed_from_u64(1)).unwrap();
///
/// assert_eq!(selection.pattern.to_string(), "hell_");
/// assert_eq!(selection.exemplar.text(), "helly");
/// ```
pub fn select<'a, R: Rng + ?Sized>(
    partition: &Partition<'a>,
    rng: &mut R,
) -> Result<Selection<'a>, SelectionError> {
    let bucket: &Bucket<'a> = choose_bucket(partition)
        .map(|i| &partition.buckets()[i])
        .ok_or(SelectionError::NoCandidateWords)?;

    let exemplar = *bucket
        .words()
        .choose(rng)
        .ok_or(SelectionError::NoCandidateWords)?;

    Ok(Selection {
        pattern: bucket.pattern().clone(),
        exemplar,
        bucket_size: bucket.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GuessedSet, Letter};
    use crate::solver::partition::partition;
    use crate::wordlists::Corpus;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn run(corpus: &str, pattern: &str, guessed: &str, letter: char) -> (String, String, usize) {
        let corpus = Corpus::parse(corpus).unwrap();
        let pattern: Pattern = pattern.parse().unwrap();
        let guessed: GuessedSet = guessed.parse().unwrap();
        let letter = Letter::new(letter).unwrap();

        let buckets = partition(&pattern, &guessed, letter, &corpus);
        let selection = select(&buckets, &mut StdRng::seed_from_u64(42)).unwrap();
        (
            selection.pattern.to_string(),
            selection.exemplar.text().to_string(),
            selection.bucket_size,
        )
    }

    #[test]
    fn picks_largest_bucket() {
        // 'e' absent from cat/car/cot, present in one word only
        let (pattern, _, size) = run("cat\ncar\ncot\nbee", "___", "", 'e');
        assert_eq!(pattern, "___");
        assert_eq!(size, 3);
    }

    #[test]
    fn ties_go_to_first_bucket_filled() {
        // "_a_" and "__a" both hold two words; "_a_" gets its second word first
        let (pattern, _, size) = run("cat\nsea\ncar\ntea", "___", "", 'a');
        assert_eq!(pattern, "_a_");
        assert_eq!(size, 2);
    }

    #[test]
    fn tie_break_uses_fill_order_not_creation_order() {
        // "__a" is created second but fills to two words first
        let (pattern, exemplar, size) = run("cat\nsea\ntea\ncar", "___", "", 'a');
        assert_eq!(pattern, "__a");
        assert!(["sea", "tea"].contains(&exemplar.as_str()));
        assert_eq!(size, 2);
    }

    #[test]
    fn avoids_premature_solution() {
        let (pattern, exemplar, size) = run("hello\nhelly", "hell_", "hel", 'o');
        assert_eq!(pattern, "hell_");
        assert_eq!(exemplar, "helly");
        assert_eq!(size, 1);
    }

    #[test]
    fn avoids_premature_solution_regardless_of_corpus_order() {
        let (pattern, exemplar, _) = run("helly\nhello", "hell_", "hel", 'o');
        assert_eq!(pattern, "hell_");
        assert_eq!(exemplar, "helly");
    }

    #[test]
    fn concedes_when_only_solution_remains() {
        let (pattern, exemplar, size) = run("hello\nworld", "hell_", "hel", 'o');
        assert_eq!(pattern, "hello");
        assert_eq!(exemplar, "hello");
        assert_eq!(size, 1);
    }

    #[test]
    fn larger_solved_bucket_is_not_overridden() {
        // Duplicates make the solved bucket genuinely larger than one word
        let (pattern, _, size) = run("hello\nhello\nhelly", "hell_", "hel", 'o');
        assert_eq!(pattern, "hello");
        assert_eq!(size, 2);
    }

    #[test]
    fn empty_partition_is_error() {
        let empty = Partition::default();
        let result = select(&empty, &mut StdRng::seed_from_u64(0));
        assert_eq!(result, Err(SelectionError::NoCandidateWords));
        assert_eq!(choose_bucket(&empty), None);
    }

    #[test]
    fn exemplar_always_from_chosen_bucket() {
        let corpus = Corpus::parse("cat\ncar\ncan\ncap\ndog").unwrap();
        let letter = Letter::new('a').unwrap();
        let buckets = partition(&Pattern::blank(3), &GuessedSet::new(), letter, &corpus);

        for seed in 0..20 {
            let selection = select(&buckets, &mut StdRng::seed_from_u64(seed)).unwrap();
            assert_eq!(selection.pattern.to_string(), "_a_");
            assert!(["cat", "car", "can", "cap"].contains(&selection.exemplar.text()));
        }
    }

    #[test]
    fn same_seed_same_exemplar() {
        let corpus = Corpus::parse("cat\ncar\ncan\ncap").unwrap();
        let letter = Letter::new('a').unwrap();
        let buckets = partition(&Pattern::blank(3), &GuessedSet::new(), letter, &corpus);

        let first = select(&buckets, &mut StdRng::seed_from_u64(9)).unwrap();
        let second = select(&buckets, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(first, second);
    }
}
