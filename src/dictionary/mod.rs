//! Dictionary oracle
//!
//! The real-word check is delegated to a [`Dictionary`]. Any backing
//! implementation (bundled word list, spell checker, network service) can be
//! substituted without touching validation logic.

mod word_list;

pub use word_list::WordListDictionary;

/// Decides whether a word is a valid English word
pub trait Dictionary {
    /// Returns `true` if `word` is a recognized English word.
    ///
    /// Called with normalized (lowercase, trimmed) input. Must return `false`
    /// for the empty string.
    fn is_valid_english_word(&self, word: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_valid_english_word(&self, word: &str) -> bool {
        (**self).is_valid_english_word(word)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn is_valid_english_word(&self, word: &str) -> bool {
        (**self).is_valid_english_word(word)
    }
}
