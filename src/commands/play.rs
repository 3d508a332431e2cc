//! Interactive line mode
//!
//! Every line is a candidate word unless it is one of the `:` commands.

use crate::core::normalize;
use crate::dictionary::Dictionary;
use crate::game::{RootWordPool, WordGame};
use crate::output::formatters::{format_accepted_words, format_rejection, format_round};
use anyhow::{Result, bail};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// A parsed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    /// Submit the line as a candidate word
    Submit(String),
    /// Pick a new root word
    NewWord,
    /// Clear the accepted words
    Reset,
    /// Show the current round
    Words,
    Help,
    Quit,
}

impl PlayCommand {
    /// Parse a line of input
    ///
    /// # Examples
    /// ```
    /// use word_scramble::commands::PlayCommand;
    ///
    /// assert_eq!(PlayCommand::parse(":new"), PlayCommand::NewWord);
    /// assert_eq!(PlayCommand::parse("worm\n"), PlayCommand::Submit("worm\n".to_string()));
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            ":new" | ":n" => Self::NewWord,
            ":reset" | ":r" => Self::Reset,
            ":words" | ":w" => Self::Words,
            ":help" | ":h" | ":?" => Self::Help,
            ":quit" | ":q" | ":exit" => Self::Quit,
            _ => Self::Submit(line.to_string()),
        }
    }
}

const HELP: &str = "\
Type a word made from the letters of the root word and press Enter.
Longer words score more: each accepted word is worth its letter count.

Commands:
  :new    pick a new root word (score starts over)
  :reset  clear your accepted words
  :words  show your words and score
  :help   show this help
  :quit   leave the game";

/// Set up a game from the `play` options
///
/// An explicit `root` wins over `seed`; with neither, the first root word is
/// drawn from an OS-seeded generator.
///
/// # Errors
///
/// Returns an error if `root` is given but blank.
pub fn start_game<D: Dictionary>(
    pool: RootWordPool,
    dictionary: D,
    root: Option<&str>,
    seed: Option<u64>,
) -> Result<WordGame<D>> {
    let game = match (root, seed) {
        (Some(root), _) => {
            if normalize(root).is_empty() {
                bail!("Root word must not be blank");
            }
            WordGame::with_root_word(pool, dictionary, root)
        }
        (None, Some(seed)) => WordGame::with_seed(pool, dictionary, seed),
        (None, None) => WordGame::new(pool, dictionary),
    };
    Ok(game)
}

/// Run the interactive game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<D: Dictionary>(game: &mut WordGame<D>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_session(game, stdin.lock(), stdout.lock())
}

/// Drive a game from any line source
///
/// Ends on `:quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_session<D, R, W>(game: &mut WordGame<D>, mut input: R, mut output: W) -> Result<()>
where
    D: Dictionary,
    R: BufRead,
    W: Write,
{
    writeln!(output, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(output, "{}", "  W O R D   S C R A M B L E".bright_green().bold())?;
    writeln!(output, "{}\n", "═".repeat(60).bright_cyan())?;
    writeln!(output, "{HELP}\n")?;
    writeln!(output, "{}\n", format_round(game.state()))?;

    let mut line = String::new();
    loop {
        write!(output, "{} ", ">".bright_black())?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match PlayCommand::parse(&line) {
            PlayCommand::Quit => break,
            PlayCommand::Help => writeln!(output, "{HELP}\n")?,
            PlayCommand::Words => writeln!(output, "{}\n", format_round(game.state()))?,
            PlayCommand::NewWord => {
                game.new_word();
                writeln!(output, "🔄 New word!\n{}\n", format_round(game.state()))?;
            }
            PlayCommand::Reset => {
                game.clear_accepted();
                writeln!(output, "🧹 Inputted words cleared.\n")?;
            }
            PlayCommand::Submit(candidate) => match game.submit(&candidate) {
                Ok(accepted) => {
                    writeln!(
                        output,
                        "✅ {} +{}\n{}\n{}\n",
                        accepted.word.bright_green().bold(),
                        accepted.points,
                        format_accepted_words(game.accepted_words()),
                        format!("Score is: {}", game.score()).bright_blue().bold()
                    )?;
                }
                Err(rejection) => writeln!(output, "{}\n", format_rejection(&rejection))?,
            },
        }
    }

    writeln!(output, "\n👋 Final score: {}", game.score())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;

    fn game() -> WordGame<WordListDictionary> {
        WordGame::with_root_word(
            RootWordPool::from_text("notebook"),
            WordListDictionary::embedded(),
            "silkworm",
        )
    }

    fn play(game: &mut WordGame<WordListDictionary>, script: &str) -> String {
        let mut output = Vec::new();
        play_session(game, script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(PlayCommand::parse(":new"), PlayCommand::NewWord);
        assert_eq!(PlayCommand::parse(" :reset \n"), PlayCommand::Reset);
        assert_eq!(PlayCommand::parse(":w"), PlayCommand::Words);
        assert_eq!(PlayCommand::parse(":q"), PlayCommand::Quit);
        assert_eq!(PlayCommand::parse(":?"), PlayCommand::Help);
    }

    #[test]
    fn parse_anything_else_is_a_candidate() {
        assert_eq!(PlayCommand::parse("worm"), PlayCommand::Submit("worm".to_string()));
        assert_eq!(PlayCommand::parse(""), PlayCommand::Submit(String::new()));
        assert_eq!(PlayCommand::parse(":bogus"), PlayCommand::Submit(":bogus".to_string()));
    }

    #[test]
    fn session_scores_words() {
        let mut game = game();
        let text = play(&mut game, "worm\nsilk\n:quit\n");

        assert_eq!(game.score(), 8);
        assert_eq!(game.accepted_words(), ["silk", "worm"]);
        assert!(text.contains("Final score: 8"));
    }

    #[test]
    fn session_reports_rejections_and_continues() {
        let mut game = game();
        let text = play(&mut game, "silkworm\nmrow\nworm\nworm\nnotebook\n");

        assert!(text.contains("Word is the same!"));
        assert!(text.contains("Word not recognized"));
        assert!(text.contains("Word already exists!"));
        assert!(text.contains("Word not possible"));
        assert_eq!(game.score(), 4);
    }

    #[test]
    fn session_ends_at_end_of_input() {
        let mut game = game();
        let text = play(&mut game, "worm");
        assert_eq!(game.score(), 4);
        assert!(text.contains("Final score: 4"));
    }

    #[test]
    fn session_new_word_resets_round() {
        let mut game = game();
        play(&mut game, "worm\n:new\n");

        assert_eq!(game.root_word(), "notebook");
        assert_eq!(game.score(), 0);
        assert!(game.accepted_words().is_empty());
    }

    #[test]
    fn session_reset_clears_words_only() {
        let mut game = game();
        play(&mut game, "worm\n:reset\n");

        assert_eq!(game.root_word(), "silkworm");
        assert_eq!(game.score(), 4);
        assert!(game.accepted_words().is_empty());
    }

    #[test]
    fn session_ignores_input_after_quit() {
        let mut game = game();
        play(&mut game, ":quit\nworm\n");
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn start_game_on_given_root() {
        let game = start_game(
            RootWordPool::from_text("notebook"),
            WordListDictionary::embedded(),
            Some(" Silkworm "),
            Some(1),
        )
        .unwrap();
        assert_eq!(game.root_word(), "silkworm");
    }

    #[test]
    fn start_game_rejects_blank_root() {
        for root in ["", "  ", "\t\n"] {
            let result = start_game(
                RootWordPool::embedded(),
                WordListDictionary::embedded(),
                Some(root),
                None,
            );
            assert!(result.is_err(), "{root:?} accepted as a root word");
        }
    }

    #[test]
    fn start_game_draws_from_pool() {
        let pool = RootWordPool::from_text("notebook\nairlines");
        let game = start_game(pool, WordListDictionary::embedded(), None, Some(3)).unwrap();
        assert!(game.pool().contains(game.root_word()));

        let game = start_game(
            RootWordPool::from_text("notebook"),
            WordListDictionary::embedded(),
            None,
            None,
        )
        .unwrap();
        assert_eq!(game.root_word(), "notebook");
    }
}
