//! Formatting utilities for terminal output

use crate::core::letter_count;
use crate::game::{GameState, Rejection};
use colored::Colorize;

/// Letter count badge shown next to a word
///
/// Circled digits for 1 through 20, parenthesized numbers beyond that.
#[must_use]
pub fn letter_badge(count: usize) -> String {
    match count {
        // U+2460 CIRCLED DIGIT ONE .. U+2473 CIRCLED NUMBER TWENTY
        1..=20 => char::from_u32(0x2460 + count as u32 - 1)
            .map_or_else(|| format!("({count})"), String::from),
        _ => format!("({count})"),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Rejection as a title line and an indented message line
#[must_use]
pub fn format_rejection(rejection: &Rejection) -> String {
    format!(
        "❌ {}\n   {}",
        rejection.title().red().bold(),
        rejection.message()
    )
}

/// Accepted words with badges, most recent first
#[must_use]
pub fn format_accepted_words(words: &[String]) -> String {
    words
        .iter()
        .map(|word| format!("  {word:<12} {}", letter_badge(letter_count(word))))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Root word, accepted words and score
#[must_use]
pub fn format_round(state: &GameState) -> String {
    let mut lines = vec![format!(
        "Root word: {}",
        state.root_word().to_uppercase().bright_yellow().bold()
    )];

    if !state.accepted_words().is_empty() {
        lines.push("Inputted words:".bright_cyan().to_string());
        lines.push(format_accepted_words(state.accepted_words()));
    }

    lines.push(format!(
        "Score is: {}",
        state.score().to_string().bright_blue().bold()
    ));
    lines.join("\n")
}
