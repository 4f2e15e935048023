//! Word list loading utilities
//!
//! Parses newline-delimited word lists from files or embedded constants.

use crate::core::Word;
use crate::error::CorpusLoadError;
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// Returns the valid words in file order; see [`parse_words`] for the line rules.
///
/// # Errors
///
/// Returns `CorpusLoadError::Io` if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use evil_hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, CorpusLoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CorpusLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_words(&content))
}

/// Parse newline-delimited words
///
/// Each line is trimmed and lowercased. Blank lines are ignored; lines that
/// are not a single word of ASCII letters are skipped with a warning.
///
/// # Examples
/// ```
/// use evil_hangman::wordlists::loader::parse_words;
///
/// let words = parse_words("Cat\n\n  dog \nnot a word\n");
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["cat", "dog"]);
/// ```
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    let mut skipped = 0usize;

    let words: Vec<Word> = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    log::trace!("skipping word list entry {trimmed:?}: {e}");
                    skipped += 1;
                    None
                }
            }
        })
        .collect();

    if skipped > 0 {
        log::warn!("skipped {skipped} invalid word list entries");
    }

    words
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use evil_hangman::wordlists::loader::words_from_slice;
/// use evil_hangman::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "at", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "at");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "two words", "", "sl_te", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn parse_words_lowercases_and_trims() {
        let words = parse_words("  HELLO\r\nWorld\t\n");
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "hello");
        assert_eq!(words[1].text(), "world");
    }

    #[test]
    fn parse_words_ignores_blank_lines() {
        let words = parse_words("\n\ncat\n   \n\ncar\n");
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn parse_words_keeps_corpus_order() {
        let words = parse_words("zebra\napple\nmango");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = load_from_file("/no/such/dir/words.txt");
        assert!(matches!(result, Err(CorpusLoadError::Io { .. })));
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!("evil_hangman_loader_{}.txt", std::process::id()));
        fs::write(&path, "alpha\nbeta\n\ngamma\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 3);
        assert_eq!(words[2].text(), "gamma");
    }
}
