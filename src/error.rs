//! Error types shared across the engine
//!
//! Only `CorpusLoadError` is fatal. Everything that can go wrong during a
//! guess is reported to the driver as a `GuessOutcome` instead.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The word list could not be turned into a usable corpus
#[derive(Debug, Error)]
pub enum CorpusLoadError {
    #[error("could not read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list contains no usable words")]
    Empty,
}

/// The selection step found nothing to choose from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// No corpus word matches the pattern and guess history. This means the
    /// session state and the corpus disagree.
    #[error("no corpus word is consistent with the current pattern and guesses")]
    NoCandidateWords,
}

/// Session lifecycle misuse by a driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("a game is already running in this channel")]
    AlreadyActive,

    #[error("there's no hangman game going on here")]
    NoActiveSession,

    /// The session reached a terminal outcome and accepts no more guesses
    #[error("this game has already finished")]
    NotActive,
}

/// Invalid game rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a game needs at least one allowed miss")]
    ZeroMisses,
}
