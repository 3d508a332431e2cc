//! State of a single round

use super::rejection::Rejection;
use crate::core::{is_composable, letter_count, normalize};
use crate::dictionary::Dictionary;

/// A word that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    /// Normalized word as stored in the accepted list
    pub word: String,
    /// Points added to the score
    pub points: usize,
}

/// Root word, accepted words and score of the current round
///
/// Invariants:
/// - accepted words are unique
/// - each accepted word was composable from the root word when accepted
/// - `score` is the total letter count of words accepted since the round started
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    root_word: String,
    accepted_words: Vec<String>,
    score: usize,
}

impl GameState {
    /// Start a round on `root_word`
    ///
    /// The root word is normalized the same way candidates are.
    #[must_use]
    pub fn new(root_word: &str) -> Self {
        Self {
            root_word: normalize(root_word),
            accepted_words: Vec::new(),
            score: 0,
        }
    }

    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn accepted_words(&self) -> &[String] {
        &self.accepted_words
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Run the validation pipeline without changing state
    ///
    /// Checks, in order: identical to root, real word, not yet used,
    /// composable from the root. Returns the normalized candidate on success.
    ///
    /// # Errors
    ///
    /// Returns the first [`Rejection`] the candidate hits.
    pub fn validate<D>(&self, candidate: &str, dictionary: &D) -> Result<String, Rejection>
    where
        D: Dictionary + ?Sized,
    {
        let word = normalize(candidate);

        if word == self.root_word {
            return Err(Rejection::IdenticalToRoot);
        }

        if word.is_empty() || !dictionary.is_valid_english_word(&word) {
            return Err(Rejection::NotARealWord);
        }

        if !self.is_original(&word) {
            return Err(Rejection::AlreadyUsed);
        }

        if !is_composable(&word, &self.root_word) {
            return Err(Rejection::NotComposable {
                root: self.root_word.clone(),
            });
        }

        Ok(word)
    }

    /// Submit a candidate word
    ///
    /// On success the word goes to the front of the accepted list and its
    /// letter count is added to the score. A rejection leaves the state as it
    /// was.
    ///
    /// # Errors
    ///
    /// Returns the first [`Rejection`] the candidate hits.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::WordListDictionary;
    /// use word_scramble::game::{GameState, Rejection};
    ///
    /// let dictionary = WordListDictionary::from_words(["silt", "listen"]);
    /// let mut state = GameState::new("listen");
    ///
    /// let accepted = state.submit(" Silt\n", &dictionary).unwrap();
    /// assert_eq!(accepted.word, "silt");
    /// assert_eq!(state.score(), 4);
    ///
    /// assert_eq!(state.submit("silt", &dictionary), Err(Rejection::AlreadyUsed));
    /// assert_eq!(state.submit("LISTEN", &dictionary), Err(Rejection::IdenticalToRoot));
    /// ```
    pub fn submit<D>(&mut self, candidate: &str, dictionary: &D) -> Result<Accepted, Rejection>
    where
        D: Dictionary + ?Sized,
    {
        match self.validate(candidate, dictionary) {
            Ok(word) => {
                let points = letter_count(&word);
                self.accepted_words.insert(0, word.clone());
                self.score += points;
                tracing::debug!(word = %word, points, score = self.score, "word accepted");
                Ok(Accepted { word, points })
            }
            Err(rejection) => {
                tracing::debug!(
                    candidate = %candidate.trim(),
                    reason = rejection.title(),
                    "word rejected"
                );
                Err(rejection)
            }
        }
    }

    /// Forget the accepted words
    ///
    /// The root word and score stay as they are.
    pub fn clear_accepted(&mut self) {
        self.accepted_words.clear();
    }

    /// Begin a new round on `root_word`
    ///
    /// Replaces the root word, resets the score to zero and clears the
    /// accepted words.
    pub fn start_round(&mut self, root_word: &str) {
        *self = Self::new(root_word);
        tracing::info!(root = %self.root_word, "new round");
    }

    fn is_original(&self, word: &str) -> bool {
        !self.accepted_words.iter().any(|used| used == word)
    }
}
