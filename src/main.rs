//! Daily Hangman - CLI
//!
//! Daily word game with TUI and line modes. Progress and statistics are kept in
//! a small JSON store in the data directory.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use daily_hangman::{
    clock::SystemClock,
    commands::{run_share, run_simple},
    config::{Config, WordSource},
    game::{DailyGame, DailyWords},
    interactive::{App, run_tui},
    output::print_statistics,
    storage::{JsonFileStore, KeyValueStore, MemoryStore},
    wordlists::loader::load_from_file,
};
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "daily_hangman",
    about = "Guess the word of the day, one letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory for saved progress, statistics and the log file
    #[arg(short, long, global = true)]
    data_dir: Option<std::path::PathBuf>,

    /// Word list: 'embedded' (default, 290 words) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one letter per line, no TUI)
    Simple,

    /// Show cumulative statistics
    Stats,

    /// Print a shareable summary of today's finished game
    Share,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::new(cli.data_dir, &cli.wordlist, cli.verbose);

    let data_dir_ready = fs::create_dir_all(config.data_dir());
    init_logging(&config, data_dir_ready.is_ok());
    if let Err(e) = &data_dir_ready {
        warn!(dir = %config.data_dir().display(), error = %e, "data directory unavailable");
    }

    let words = load_words(&config.words)?;
    let store = open_store(&config, data_dir_ready.is_ok());
    let mut game = DailyGame::new(SystemClock, store, words);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_tui(App::new(game)),
        Commands::Simple => run_simple(&mut game),
        Commands::Stats => {
            print_statistics(game.statistics());
            Ok(())
        }
        Commands::Share => {
            run_share(&game);
            Ok(())
        }
    }
}

/// Log to a file in the data directory so the TUI screen stays clean
fn init_logging(config: &Config, data_dir_ready: bool) {
    let level = if config.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("daily_hangman={level}")));

    let log_file = data_dir_ready
        .then(|| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(config.log_path())
                .ok()
        })
        .flatten();

    // Without a log file there is nowhere safe to write while the TUI owns the terminal
    let Some(file) = log_file else {
        return;
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
}

fn load_words(source: &WordSource) -> Result<DailyWords> {
    let words = match source {
        WordSource::Embedded => DailyWords::embedded()?,
        WordSource::File(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read word list {}", path.display()))?;
            if words.is_empty() {
                bail!("word list {} has no valid words", path.display());
            }
            info!(path = %path.display(), count = words.len(), "loaded custom word list");
            DailyWords::new(words)?
        }
    };
    Ok(words)
}

/// Open the JSON store, falling back to memory when the disk is not usable
fn open_store(config: &Config, data_dir_ready: bool) -> Box<dyn KeyValueStore> {
    if data_dir_ready {
        match JsonFileStore::open(config.store_path()) {
            Ok(store) => return Box::new(store),
            Err(e) => warn!(
                path = %config.store_path().display(),
                error = %e,
                "store unavailable, progress will not be saved"
            ),
        }
    }
    Box::new(MemoryStore::new())
}
