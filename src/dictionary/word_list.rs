//! Word-list backed dictionary

use super::Dictionary;
use crate::wordlists::loader::{LoadError, load_from_file};
use crate::wordlists::DICTIONARY;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Dictionary answering membership against a fixed set of words
///
/// Words are stored lowercase; lookups lowercase their input first.
#[derive(Debug, Clone, Default)]
pub struct WordListDictionary {
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary from any list of words
    ///
    /// Entries are trimmed and lowercased; blank entries are dropped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{Dictionary, WordListDictionary};
    ///
    /// let dictionary = WordListDictionary::from_words(["Silk", " worm "]);
    /// assert!(dictionary.is_valid_english_word("silk"));
    /// assert!(dictionary.is_valid_english_word("worm"));
    /// assert!(!dictionary.is_valid_english_word("wrom"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(DICTIONARY)
    }

    /// Load a newline-delimited dictionary file
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the file cannot be read.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        load_from_file(path).map(Self::from_words)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words, sorted alphabetically
    #[must_use]
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

impl Dictionary for WordListDictionary {
    fn is_valid_english_word(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        if self.words.contains(word) {
            return true;
        }
        let lowered = word.to_lowercase();
        lowered != word && self.words.contains(&lowered)
    }
}
