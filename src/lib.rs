//! Evil Hangman
//!
//! A hangman engine that never commits to a secret word. Every guess splits
//! the remaining candidate words by the pattern they would reveal, and the
//! engine moves to whichever group keeps the most words alive.
//!
//! # Quick Start
//!
//! ```rust
//! use evil_hangman::config::GameConfig;
//! use evil_hangman::game::{GuessStatus, SessionKey, SessionStore};
//! use evil_hangman::wordlists::Corpus;
//! use std::sync::Arc;
//!
//! let corpus = Arc::new(Corpus::parse("cat\ncar\ncan").unwrap());
//! let store = SessionStore::with_seed(corpus, GameConfig::default(), 1);
//! let key = SessionKey::new("irc", "#games");
//!
//! store.start_game(&key).unwrap();
//! let outcome = store.guess_letter(&key, "c").unwrap();
//!
//! assert_eq!(outcome.status, GuessStatus::Continuing);
//! assert_eq!(outcome.pattern.to_string(), "c__");
//! ```

// Core domain types
pub mod core;

// Game rules and runtime settings
pub mod config;

// Error types
pub mod error;

// Partitioning, selection and automatic guessers
pub mod solver;

// Sessions and the session store
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
