//! CLI argument parsing.
//!
//! With no subcommand the interactive shell starts; the other commands answer
//! a single request and exit.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Environment variable consulted when `--corpus` is not passed.
pub const CORPUS_ENV: &str = "VERSE_CORPUS";

/// File name looked up in the user data directory by default.
const DEFAULT_CORPUS_FILE: &str = "corpus.json";

#[derive(Parser, Debug)]
#[command(
    name = "verse",
    version,
    about = "Search and read a book/chapter/verse text corpus",
    after_help = "Examples:\n  verse --corpus KJV.json\n  verse --corpus KJV.json search \"love thy neighbour\"\n  verse --corpus KJV.json show 43 3 16\n  verse random --json"
)]
pub struct RootArgs {
    /// Corpus JSON document ({"books": [...]})
    #[arg(long, value_name = "PATH", env = CORPUS_ENV, global = true)]
    pub corpus: Option<PathBuf>,

    /// Seed for reproducible verse-of-the-day selection
    #[arg(long, value_name = "N", global = true)]
    pub seed: Option<u64>,

    /// Log debug detail to stderr (RUST_LOG overrides)
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive menu (default)
    Shell,
    /// List books with their chapter counts
    Books(JsonArgs),
    /// Show a chapter, or a single verse
    Show(ShowArgs),
    /// Case-insensitive keyword search
    Search(SearchArgs),
    /// Pick a verse of the day
    Random(JsonArgs),
}

#[derive(Parser, Debug)]
pub struct JsonArgs {
    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// 1-based book position
    pub book: String,
    /// 1-based chapter position within the book
    pub chapter: String,
    /// 1-based verse position within the chapter
    pub verse: Option<String>,
}

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Word or phrase to look for
    pub keyword: String,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

impl RootArgs {
    /// Corpus path from the flag or environment, else the user data directory.
    pub fn corpus_path(&self) -> PathBuf {
        if let Some(path) = &self.corpus {
            return path.clone();
        }
        default_corpus_path()
    }
}

fn default_corpus_path() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join("verse-shell").join(DEFAULT_CORPUS_FILE),
        None => PathBuf::from(DEFAULT_CORPUS_FILE),
    }
}
