//! Core domain types for the word game
//!
//! Candidate normalization and the letter multiset behind the composability rule.
//! Everything here is pure and independent of game state.

mod derivation;
mod letters;
mod word;

pub use derivation::{derivable_words, max_score, total_score};
pub use letters::{LetterCounts, is_composable};
pub use word::{letter_count, normalize};
