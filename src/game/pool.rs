//! Root word pool

use crate::core::normalize;
use crate::wordlists::loader::{LoadError, load_from_file, split_words, words_from_slice};
use crate::wordlists::START;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::path::Path;

/// Root word used when the pool has nothing to offer
pub const DEFAULT_ROOT_WORD: &str = "silkworm";

/// Ordered candidate root words, loaded once per session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootWordPool {
    words: Vec<String>,
}

impl RootWordPool {
    /// Build a pool from already-split words
    ///
    /// Words are normalized like root words, and blank ones dropped.
    #[must_use]
    pub fn from_words(words: Vec<String>) -> Self {
        let words = words
            .iter()
            .map(|word| normalize(word))
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Parse a pool from newline-delimited text
    ///
    /// # Examples
    /// ```
    /// use word_scramble::game::RootWordPool;
    ///
    /// let pool = RootWordPool::from_text("silkworm\nnotebook\n");
    /// assert_eq!(pool.words(), ["silkworm", "notebook"]);
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_words(split_words(text))
    }

    /// Pool compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(words_from_slice(START))
    }

    /// Load a pool from a newline-delimited file
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the file cannot be read. The game cannot start
    /// without its root words.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        load_from_file(path).map(Self::from_words)
    }

    /// Pick a root word uniformly at random
    ///
    /// Falls back to [`DEFAULT_ROOT_WORD`] when the pool is empty.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use word_scramble::game::RootWordPool;
    ///
    /// let pool = RootWordPool::from_text("silkworm\nnotebook");
    /// let mut rng = StdRng::seed_from_u64(7);
    /// assert!(pool.contains(&pool.pick(&mut rng)));
    ///
    /// assert_eq!(RootWordPool::default().pick(&mut rng), "silkworm");
    /// ```
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        if let Some(word) = self.words.choose(rng) {
            word.clone()
        } else {
            tracing::warn!(
                fallback = DEFAULT_ROOT_WORD,
                "root word pool is empty, using fallback"
            );
            DEFAULT_ROOT_WORD.to_string()
        }
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let word = normalize(word);
        self.words.iter().any(|w| *w == word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
