//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary, plus loaders for
//! lists supplied at runtime.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START, START_COUNT};
pub use loader::LoadError;
pub use source::WordSource;
