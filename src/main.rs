//! Word Scramble - CLI
//!
//! Word Scramble with TUI and CLI modes.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use word_scramble::{
    commands::{CheckConfig, check_words, run_simple},
    dictionary::{Language, WordSetDictionary},
    game::Game,
    output::print_check_result,
    validation::{ValidationPolicy, WordValidator},
    wordlists::{
        START_WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word list: newline-delimited file (default: built-in list)
    #[arg(short = 'w', long, global = true, env = "WORD_SCRAMBLE_START_WORDS")]
    start_words: Option<PathBuf>,

    /// Dictionary: newline-delimited file of English words (default: built-in list)
    #[arg(short, long, global = true, env = "WORD_SCRAMBLE_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Start on this root word instead of a random one
    #[arg(short, long, global = true)]
    root: Option<String>,

    /// Seed for root word selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Minimum number of letters a word needs
    #[arg(long, global = true, default_value_t = 1)]
    min_length: usize,

    /// Refuse the root word itself as an answer
    #[arg(long, global = true)]
    reject_root: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Check words against a root word without playing
    Check {
        /// The root word to check against
        #[arg(value_name = "ROOT")]
        root_word: String,

        /// Words that count as already used
        #[arg(short, long)]
        used: Vec<String>,

        /// Candidate words, checked in order
        #[arg(required = true)]
        words: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_scramble=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let dictionary = load_dictionary(cli.dictionary.as_deref())?;
    let policy = ValidationPolicy {
        min_length: cli.min_length,
        allow_root_word: !cli.reject_root,
    };
    let validator = WordValidator::with_policy(dictionary, Language::ENGLISH, policy);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let game = start_game(
                cli.start_words.as_deref(),
                cli.root.as_deref(),
                cli.seed,
                validator,
            )?;
            run_play_command(game)
        }
        Commands::Simple => {
            let mut game = start_game(
                cli.start_words.as_deref(),
                cli.root.as_deref(),
                cli.seed,
                validator,
            )?;
            run_simple(&mut game).map_err(|e| anyhow!(e))
        }
        Commands::Check {
            root_word,
            used,
            words,
        } => run_check_command(root_word, used, words, &validator),
    }
}

/// Load the dictionary from `path`, or the built-in one
fn load_dictionary(path: Option<&Path>) -> Result<WordSetDictionary> {
    match path {
        Some(path) => WordSetDictionary::from_file(Language::ENGLISH, path)
            .with_context(|| format!("could not load dictionary from {}", path.display())),
        None => {
            let dictionary = WordSetDictionary::embedded();
            info!("Using built-in dictionary ({} words)", dictionary.len());
            Ok(dictionary)
        }
    }
}

/// Load root words and start the first session
fn start_game(
    start_words: Option<&Path>,
    root: Option<&str>,
    seed: Option<u64>,
    validator: WordValidator<WordSetDictionary>,
) -> Result<Game<WordSetDictionary>> {
    let words = match start_words {
        Some(path) => load_from_file(path)
            .with_context(|| format!("could not load root words from {}", path.display()))?,
        None => words_from_slice(START_WORDS),
    };

    let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut game = Game::new(&words, validator, rng).context("could not start a game")?;

    if let Some(root) = root {
        game.restart_with(root)
            .with_context(|| format!("cannot start on root word '{root}'"))?;
    }

    Ok(game)
}

fn run_play_command(game: Game<WordSetDictionary>) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(game);
    run_tui(app)
}

fn run_check_command(
    root: String,
    used: Vec<String>,
    words: Vec<String>,
    validator: &WordValidator<WordSetDictionary>,
) -> Result<()> {
    let config = CheckConfig {
        root,
        used,
        candidates: words,
    };
    let result = check_words(config, validator).map_err(|e| anyhow!(e))?;

    print_check_result(&result);
    Ok(())
}
