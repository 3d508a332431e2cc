//! Game state and rules
//!
//! [`GameState`] holds one round (root word, accepted words, score) and applies
//! the validation pipeline. [`WordGame`] ties it to a root word pool, a
//! dictionary and a random source.

mod engine;
mod pool;
mod rejection;
mod state;

pub use engine::WordGame;
pub use pool::{DEFAULT_ROOT_WORD, RootWordPool};
pub use rejection::Rejection;
pub use state::{Accepted, GameState};
