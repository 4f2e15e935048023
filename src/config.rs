//! Game rules and runtime settings
//!
//! Settings come from the command line (see `main.rs`); this module holds the
//! validated forms the library consumes.

use crate::error::{ConfigError, CorpusLoadError};
use crate::wordlists::Corpus;
use log::LevelFilter;
use std::path::PathBuf;

/// Misses allowed per game unless overridden
pub const DEFAULT_TOTAL_MISSES: u8 = 7;

/// Rules shared by every session in a store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    total_misses: u8,
}

impl GameConfig {
    /// Create rules allowing `total_misses` wrong guesses
    ///
    /// # Errors
    /// Returns `ConfigError::ZeroMisses` if `total_misses` is zero, since such
    /// a game would be lost before the first guess.
    pub const fn new(total_misses: u8) -> Result<Self, ConfigError> {
        if total_misses == 0 {
            return Err(ConfigError::ZeroMisses);
        }
        Ok(Self { total_misses })
    }

    #[inline]
    #[must_use]
    pub const fn total_misses(self) -> u8 {
        self.total_misses
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_misses: DEFAULT_TOTAL_MISSES,
        }
    }
}

/// Where the corpus comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordlistSource {
    /// The list compiled into the binary
    Embedded,
    /// A newline-delimited file on disk
    File(PathBuf),
}

impl WordlistSource {
    /// Interpret the `--wordlist` argument: `embedded` or a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" | "builtin" | "default" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Load the corpus this source points at
    ///
    /// # Errors
    /// Returns `CorpusLoadError` if the file cannot be read or holds no valid words.
    pub fn load(&self) -> Result<Corpus, CorpusLoadError> {
        match self {
            Self::Embedded => Corpus::embedded(),
            Self::File(path) => Corpus::load(path),
        }
    }
}

/// Map repeated `-v` flags to a log level
#[must_use]
pub const fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_allows_seven_misses() {
        assert_eq!(GameConfig::default().total_misses(), 7);
        assert_eq!(GameConfig::default(), GameConfig::new(DEFAULT_TOTAL_MISSES).unwrap());
    }

    #[test]
    fn zero_misses_rejected() {
        assert_eq!(GameConfig::new(0), Err(ConfigError::ZeroMisses));
        assert_eq!(GameConfig::new(1).unwrap().total_misses(), 1);
    }

    #[test]
    fn wordlist_source_from_arg() {
        assert_eq!(WordlistSource::from_arg("embedded"), WordlistSource::Embedded);
        assert_eq!(
            WordlistSource::from_arg("words.txt"),
            WordlistSource::File(PathBuf::from("words.txt"))
        );
    }

    #[test]
    fn missing_file_is_load_error() {
        let source = WordlistSource::File(PathBuf::from("/definitely/not/here.txt"));
        assert!(matches!(source.load(), Err(CorpusLoadError::Io { .. })));
    }

    #[test]
    fn embedded_source_loads() {
        let corpus = WordlistSource::Embedded.load().unwrap();
        assert!(corpus.len() > 100);
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(log_level(0), LevelFilter::Warn);
        assert_eq!(log_level(1), LevelFilter::Info);
        assert_eq!(log_level(2), LevelFilter::Debug);
        assert_eq!(log_level(9), LevelFilter::Trace);
    }
}
