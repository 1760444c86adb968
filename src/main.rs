use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::io::{self, Write};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use verse_shell::cli::{Command, JsonArgs, RootArgs, SearchArgs, ShowArgs};
use verse_shell::format::{write_book_list, write_chapter, write_hits, write_verse};
use verse_shell::resolve::parse_index;
use verse_shell::shell::Shell;
use verse_shell::{load_corpus, Session, View};

fn main() -> Result<()> {
    let args = RootArgs::parse();
    init_tracing(args.verbose);

    let path = args.corpus_path();
    let corpus = load_corpus(&path)
        .with_context(|| format!("load corpus {}", path.display()))?;
    let corpus = Arc::new(corpus);
    let mut session = match args.seed {
        Some(seed) => Session::with_seed(corpus, seed),
        None => Session::new(corpus),
    };

    match args.command.unwrap_or(Command::Shell) {
        Command::Shell => cmd_shell(&mut session),
        Command::Books(args) => cmd_books(&session, &args),
        Command::Show(args) => cmd_show(&session, &args),
        Command::Search(args) => cmd_search(&mut session, &args),
        Command::Random(args) => cmd_random(&mut session, &args),
    }
}

/// Logs go to stderr so they never interleave with command output.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn cmd_shell(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(session, stdin.lock(), stdout.lock())
        .run()
        .context("interactive shell")
}

#[derive(Serialize)]
struct BookEntry<'a> {
    position: usize,
    name: &'a str,
    chapters: usize,
}

fn cmd_books(session: &Session, args: &JsonArgs) -> Result<()> {
    let mut out = io::stdout().lock();
    if args.json {
        let entries: Vec<BookEntry<'_>> = session
            .corpus()
            .books()
            .iter()
            .enumerate()
            .map(|(idx, book)| BookEntry {
                position: idx + 1,
                name: book.name(),
                chapters: book.chapter_count(),
            })
            .collect();
        return write_json(&mut out, &entries);
    }
    write_book_list(&mut out, &session.list_books()).context("write book list")
}

fn cmd_show(session: &Session, args: &ShowArgs) -> Result<()> {
    let book = parse_index(&args.book)?;
    let chapter = parse_index(&args.chapter)?;
    let verse = args.verse.as_deref().map(parse_index).transpose()?;
    let view = session.resolve_and_show(book, chapter, verse)?;
    let mut out = io::stdout().lock();
    let written = match view {
        View::Chapter(view) => write_chapter(&mut out, &view),
        View::Verse(view) => write_verse(&mut out, &view),
    };
    written.context("write view")
}

fn cmd_search(session: &mut Session, args: &SearchArgs) -> Result<()> {
    let hits = session.search(&args.keyword)?;
    let mut out = io::stdout().lock();
    if args.json {
        return write_json(&mut out, &hits);
    }
    write_hits(&mut out, &hits).context("write search results")
}

fn cmd_random(session: &mut Session, args: &JsonArgs) -> Result<()> {
    let view = session
        .verse_of_the_day()
        .context("corpus has no verses to choose from")?;
    let mut out = io::stdout().lock();
    if args.json {
        return write_json(&mut out, &view);
    }
    write_verse(&mut out, &view).context("write verse of the day")
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize JSON output")?;
    writeln!(out, "{text}").context("write JSON output")?;
    Ok(())
}
