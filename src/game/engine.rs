//! Word game session
//!
//! Owns the root word pool, the dictionary, the random source and the state
//! of the current round.

use super::pool::RootWordPool;
use super::rejection::Rejection;
use super::state::{Accepted, GameState};
use crate::dictionary::Dictionary;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A play session
///
/// Generic over the dictionary so any oracle can back the real-word check.
pub struct WordGame<D: Dictionary> {
    pool: RootWordPool,
    dictionary: D,
    state: GameState,
    rng: StdRng,
}

impl<D: Dictionary> WordGame<D> {
    /// Start a session with a randomly seeded root word picker
    #[must_use]
    pub fn new(pool: RootWordPool, dictionary: D) -> Self {
        Self::with_rng(pool, dictionary, StdRng::from_os_rng())
    }

    /// Start a session whose root word choices are reproducible
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::WordListDictionary;
    /// use word_scramble::game::{RootWordPool, WordGame};
    ///
    /// let pool = RootWordPool::from_text("silkworm\nnotebook\nairlines");
    /// let a = WordGame::with_seed(pool.clone(), WordListDictionary::embedded(), 5);
    /// let b = WordGame::with_seed(pool, WordListDictionary::embedded(), 5);
    /// assert_eq!(a.root_word(), b.root_word());
    /// ```
    #[must_use]
    pub fn with_seed(pool: RootWordPool, dictionary: D, seed: u64) -> Self {
        Self::with_rng(pool, dictionary, StdRng::seed_from_u64(seed))
    }

    fn with_rng(pool: RootWordPool, dictionary: D, mut rng: StdRng) -> Self {
        let root_word = pool.pick(&mut rng);
        tracing::info!(root = %root_word, pool_size = pool.len(), "game started");
        Self {
            pool,
            dictionary,
            state: GameState::new(&root_word),
            rng,
        }
    }

    /// Start a session on a specific root word
    ///
    /// Later calls to [`new_word`](Self::new_word) still draw from `pool`.
    #[must_use]
    pub fn with_root_word(pool: RootWordPool, dictionary: D, root_word: &str) -> Self {
        let state = GameState::new(root_word);
        tracing::info!(root = %state.root_word(), pool_size = pool.len(), "game started");
        Self {
            pool,
            dictionary,
            state,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Submit a candidate word to the current round
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] explaining why the word was refused; the
    /// round is unchanged in that case.
    pub fn submit(&mut self, candidate: &str) -> Result<Accepted, Rejection> {
        self.state.submit(candidate, &self.dictionary)
    }

    /// Pick a new root word and start a fresh round
    ///
    /// Resets the score to zero and clears the accepted words. Returns the new
    /// root word.
    pub fn new_word(&mut self) -> &str {
        let root_word = self.pool.pick(&mut self.rng);
        self.state.start_round(&root_word);
        self.state.root_word()
    }

    /// Clear the accepted words, keeping root word and score
    pub fn clear_accepted(&mut self) {
        self.state.clear_accepted();
    }

    #[must_use]
    pub fn root_word(&self) -> &str {
        self.state.root_word()
    }

    #[must_use]
    pub fn accepted_words(&self) -> &[String] {
        self.state.accepted_words()
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.state.score()
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn pool(&self) -> &RootWordPool {
        &self.pool
    }

    #[must_use]
    pub const fn dictionary(&self) -> &D {
        &self.dictionary
    }
}
