//! Console rendering shared by the shell and the one-shot commands.
use crate::search::SearchHit;
use crate::session::{ChapterView, VerseView};
use std::io::{self, Write};

/// Search result previews are cut to this many characters.
pub const PREVIEW_CHARS: usize = 100;

const RULE_WIDTH: usize = 40;

/// Truncate to `max_chars` characters, appending `...` when anything was cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

pub fn write_book_list<W: Write>(out: &mut W, names: &[&str]) -> io::Result<()> {
    writeln!(out, "\n=== LIST OF BOOKS ===")?;
    for (idx, name) in names.iter().enumerate() {
        writeln!(out, "{}. {name}", idx + 1)?;
    }
    Ok(())
}

pub fn write_chapter<W: Write>(out: &mut W, view: &ChapterView<'_>) -> io::Result<()> {
    writeln!(out, "\n{} Chapter {}", view.book.name(), view.chapter.number())?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for verse in view.chapter.verses() {
        writeln!(out, "{}. {}", verse.number(), verse.text())?;
    }
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(out, "Total verses: {}", view.chapter.verse_count())
}

pub fn write_verse<W: Write>(out: &mut W, view: &VerseView) -> io::Result<()> {
    writeln!(out, "\n{}", view.reference)?;
    writeln!(out, "\"{}\"", view.text)
}

pub fn write_hits<W: Write>(out: &mut W, hits: &[SearchHit]) -> io::Result<()> {
    if hits.is_empty() {
        return writeln!(out, "No results found.");
    }
    writeln!(out, "\nFound {} result(s):\n", hits.len())?;
    for (idx, hit) in hits.iter().enumerate() {
        writeln!(
            out,
            "{}. {} - {}",
            idx + 1,
            hit.reference,
            truncate_chars(&hit.text, PREVIEW_CHARS)
        )?;
    }
    Ok(())
}
