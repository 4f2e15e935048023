//! Evil Hangman - CLI
//!
//! Hangman with TUI and CLI modes where the computer never commits to a word.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use evil_hangman::{
    commands::{corpus_stats, inspect_partition, run_simple, run_simulation},
    config::{DEFAULT_TOTAL_MISSES, GameConfig, WordlistSource, log_level},
    game::SessionStore,
    output::{print_corpus_stats, print_partition_report, print_simulation_stats},
    solver::GuesserType,
    wordlists::Corpus,
};
use log::LevelFilter;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "evil_hangman",
    about = "Hangman where the computer keeps changing its mind about the word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Wrong guesses allowed per game
    #[arg(
        short = 'm',
        long,
        global = true,
        default_value_t = DEFAULT_TOTAL_MISSES,
        value_parser = clap::value_parser!(u8).range(1..)
    )]
    misses: u8,

    /// Seed for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Show how a guess would split the remaining words
    Partition {
        /// Current pattern, '_' for unrevealed cells (e.g. "c__")
        #[arg(short, long)]
        pattern: String,

        /// Letters already guessed (e.g. "cez")
        #[arg(short, long, default_value = "")]
        guessed: String,

        /// The letter being guessed
        #[arg(short, long)]
        letter: String,

        /// Sample words shown per bucket
        #[arg(short, long, default_value = "8")]
        samples: usize,
    },

    /// Play many games with an automatic guesser
    Simulate {
        /// Number of games
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Guesser: frequency (default), alphabet, random
        #[arg(short, long, default_value = "frequency")]
        guesser: String,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Word list summary
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // Log lines would tear up the alternate screen
    if matches!(command, Commands::Play) {
        init_logging(LevelFilter::Off, false);
    } else {
        init_logging(log_level(cli.verbose), true);
    }

    let config = GameConfig::new(cli.misses)?;
    let corpus = Arc::new(WordlistSource::from_arg(&cli.wordlist).load()?);

    match command {
        Commands::Play => run_play_command(build_store(corpus, config, cli.seed)),
        Commands::Simple => run_simple(&build_store(corpus, config, cli.seed)),
        Commands::Partition {
            pattern,
            guessed,
            letter,
            samples,
        } => run_partition_command(&pattern, &guessed, &letter, samples, &corpus),
        Commands::Simulate {
            count,
            guesser,
            quiet,
        } => run_simulate_command(&guesser, count, quiet, cli.seed, config, &corpus),
        Commands::Stats => {
            print_corpus_stats(&corpus_stats(&corpus));
            Ok(())
        }
    }
}

fn init_logging(level: LevelFilter, from_env: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if from_env {
        builder.parse_default_env();
    }
    builder.init();
}

fn build_store(corpus: Arc<Corpus>, config: GameConfig, seed: Option<u64>) -> SessionStore {
    match seed {
        Some(seed) => SessionStore::with_seed(corpus, config, seed),
        None => SessionStore::new(corpus, config),
    }
}

fn run_partition_command(
    pattern: &str,
    guessed: &str,
    letter: &str,
    samples: usize,
    corpus: &Corpus,
) -> Result<()> {
    let report = inspect_partition(pattern, guessed, letter, corpus, samples)?;
    print_partition_report(&report);
    Ok(())
}

fn run_simulate_command(
    guesser_name: &str,
    count: usize,
    quiet: bool,
    seed: Option<u64>,
    config: GameConfig,
    corpus: &Corpus,
) -> Result<()> {
    let guesser = GuesserType::from_name(guesser_name);
    let seed = seed.unwrap_or_else(rand::random);

    if !quiet {
        println!(
            "Simulating {count} games with the {} guesser (seed {seed})...",
            guesser.name()
        );
    }

    let stats = run_simulation(guesser, corpus, config, count, seed, !quiet)?;
    print_simulation_stats(&stats);
    Ok(())
}

fn run_play_command(store: SessionStore) -> Result<()> {
    use evil_hangman::interactive::{App, run_tui};

    let app = App::new(&store);
    run_tui(app)
}
