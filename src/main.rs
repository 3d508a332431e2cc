//! Word Scramble - CLI
//!
//! Interactive word derivation game plus tools for checking words and
//! analyzing root words.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use word_scramble::{
    commands::{analyze_root, check_words, run_play, run_survey, start_game},
    dictionary::WordListDictionary,
    game::RootWordPool,
    logging::init_logging,
    output::{print_analysis_result, print_check_report, print_survey_statistics},
    wordlists::WordSource,
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Build new words from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Dictionary: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Seed for reproducible root word selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play {
        /// Start on this root word instead of a random one
        #[arg(short, long)]
        root: Option<String>,
    },

    /// Submit words against a root word and report each outcome
    Check {
        /// Root word to derive from
        #[arg(short, long)]
        root: String,

        /// Candidate words, submitted in order
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// List every dictionary word a root word can produce
    Analyze {
        /// Root word to analyze
        root: String,

        /// Print only the summary, not the word list
        #[arg(short, long)]
        quiet: bool,
    },

    /// Survey derivation statistics over the root word pool
    Survey {
        /// Limit number of root words to survey
        #[arg(short, long)]
        limit: Option<usize>,

        /// Number of top roots to show
        #[arg(short, long, default_value = "10")]
        top: usize,
    },
}

/// Load the root word pool and dictionary selected on the command line
///
/// Either failing to load is fatal: the game cannot start without them.
fn load_word_sources(cli: &Cli) -> Result<(RootWordPool, WordListDictionary)> {
    let pool = WordSource::from_name(&cli.wordlist)
        .load_root_word_pool()
        .context("Could not load root words")?;
    let dictionary = WordSource::from_name(&cli.dictionary)
        .load_dictionary()
        .context("Could not load dictionary")?;

    tracing::info!(
        root_words = pool.len(),
        dictionary_words = dictionary.len(),
        "word sources loaded"
    );
    Ok((pool, dictionary))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let (pool, dictionary) = load_word_sources(&cli)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { root: None });

    match command {
        Commands::Play { root } => run_play_command(pool, dictionary, root.as_deref(), cli.seed),
        Commands::Check { root, words } => {
            let report = check_words(&root, &words, &dictionary)?;
            print_check_report(&report);
            Ok(())
        }
        Commands::Analyze { root, quiet } => {
            let result = analyze_root(&root, &dictionary)?;
            print_analysis_result(&result, !quiet);
            Ok(())
        }
        Commands::Survey { limit, top } => {
            let words = dictionary.sorted_words();
            let stats = run_survey(&pool, &words, limit, true);
            print_survey_statistics(&stats, top);
            Ok(())
        }
    }
}

fn run_play_command(
    pool: RootWordPool,
    dictionary: WordListDictionary,
    root: Option<&str>,
    seed: Option<u64>,
) -> Result<()> {
    let mut game = start_game(pool, dictionary, root, seed)?;
    run_play(&mut game)
}
