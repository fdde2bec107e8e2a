//! Runtime configuration resolved from the command line

use std::path::{Path, PathBuf};

/// Name of the store file inside the data directory
pub const STORE_FILE: &str = "store.json";

/// Name of the log file inside the data directory
pub const LOG_FILE: &str = "hangman.log";

/// Where the daily pool comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    Embedded,
    File(PathBuf),
}

impl WordSource {
    /// `embedded` selects the built-in list; anything else is a file path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" | "default" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub words: WordSource,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            words: WordSource::Embedded,
            verbose: false,
        }
    }
}

impl Config {
    #[must_use]
    pub fn new(data_dir: Option<PathBuf>, words: &str, verbose: bool) -> Self {
        Self {
            data_dir: data_dir.unwrap_or_else(default_data_dir),
            words: WordSource::from_arg(words),
            verbose,
        }
    }

    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE)
    }

    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("daily-hangman")
}
