//! Reasons a submitted word is refused

use thiserror::Error;

/// Why a candidate word was not accepted
///
/// Every rejection is user-correctable: the round continues and nothing in the
/// game state changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The candidate is the root word itself.
    #[error("Word is the same! Type in a derivative of the word.")]
    IdenticalToRoot,

    /// The candidate is empty or the dictionary does not know it.
    #[error("Word not recognized. This must be a real word!")]
    NotARealWord,

    /// The candidate was already accepted this round.
    #[error("Word already exists! You can't input the same word twice!")]
    AlreadyUsed,

    /// The candidate needs letters the root word does not have.
    #[error("Word not possible. This word is not possible from \"{root}\"")]
    NotComposable { root: String },
}

impl Rejection {
    /// Short headline for display
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::IdenticalToRoot => "Word is the same!",
            Self::NotARealWord => "Word not recognized",
            Self::AlreadyUsed => "Word already exists!",
            Self::NotComposable { .. } => "Word not possible",
        }
    }

    /// Explanation shown under the title
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::IdenticalToRoot => "Type in a derivative of the word.".to_string(),
            Self::NotARealWord => "This must be a real word!".to_string(),
            Self::AlreadyUsed => "You can't input the same word twice!".to_string(),
            Self::NotComposable { root } => {
                format!("This word is not possible from \"{root}\"")
            }
        }
    }
}
