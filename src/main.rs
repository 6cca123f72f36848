//! Word Scramble - CLI
//!
//! Play in the TUI or a plain terminal loop, check guesses against a root
//! word, or list the words a root word can spell.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;
use word_scramble::{
    commands::{find_spellable_words, run_check, run_simple},
    game::{
        FileWordSource, GameEngine, StaticWordSource, WordListDictionary, WordSource,
        config::DICTIONARY_LANGUAGE, load_start_words,
    },
    output::{print_check_report, print_hint_report},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell words from the letters of a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word list: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 's', long, global = true, default_value = "embedded")]
    start_words: String,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Seed for picking root words (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log level when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Check guesses against a fixed root word
    Check {
        /// Root word to spell from
        #[arg(short, long)]
        root: String,

        /// Guesses, submitted in order
        #[arg(required = true)]
        guesses: Vec<String>,
    },

    /// List every dictionary word a root word can spell
    Words {
        /// Root word to spell from
        root: String,

        /// Show at most this many words
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` takes precedence over `--log-level`.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the candidate root words based on the -s flag
fn load_candidates(start_words: &str) -> Result<Vec<String>> {
    let source: Box<dyn WordSource> = match start_words {
        "embedded" => Box::new(StaticWordSource::start_words()),
        path => Box::new(FileWordSource::new(path)),
    };

    load_start_words(source.as_ref())
        .with_context(|| format!("could not load start words from {}", source.describe()))
}

/// Load the dictionary based on the -d flag
fn load_dictionary(dictionary: &str) -> Result<WordListDictionary> {
    match dictionary {
        "embedded" => Ok(WordListDictionary::embedded()),
        path => WordListDictionary::from_file(path, DICTIONARY_LANGUAGE)
            .with_context(|| format!("could not load dictionary from {path}")),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let engine = GameEngine::default();
    let dictionary = load_dictionary(&cli.dictionary)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let candidates = load_candidates(&cli.start_words)?;
            run_play_command(&engine, &candidates, &dictionary, make_rng(cli.seed))
        }
        Commands::Simple => {
            let candidates = load_candidates(&cli.start_words)?;
            run_simple(&engine, &candidates, &dictionary, &mut make_rng(cli.seed))
        }
        Commands::Check { root, guesses } => {
            let report = run_check(&engine, &root, &guesses, &dictionary);
            print_check_report(&report);
            Ok(())
        }
        Commands::Words { root, limit } => {
            let report = find_spellable_words(&engine, &root, &dictionary);
            print_hint_report(&report, limit);
            Ok(())
        }
    }
}

fn run_play_command(
    engine: &GameEngine,
    candidates: &[String],
    dictionary: &WordListDictionary,
    rng: StdRng,
) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(engine, candidates, dictionary, rng);
    run_tui(app)
}
