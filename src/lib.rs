//! Word Scramble
//!
//! A word derivation game: build new words from the letters of a root word.
//! Each accepted word scores its letter count.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::dictionary::WordListDictionary;
//! use word_scramble::game::{GameState, Rejection};
//!
//! let dictionary = WordListDictionary::embedded();
//! let mut state = GameState::new("silkworm");
//!
//! let accepted = state.submit("worm", &dictionary).unwrap();
//! assert_eq!(accepted.points, 4);
//!
//! assert_eq!(state.submit("worm", &dictionary), Err(Rejection::AlreadyUsed));
//! assert_eq!(state.score(), 4);
//! ```

// Core domain types
pub mod core;

// Dictionary oracle
pub mod dictionary;

// Game state and rules
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing subscriber setup
pub mod logging;
