//! Reference resolution for 1-based, positional coordinates.
//!
//! Indexes always mean "the n-th item in source order". Declared chapter and
//! verse numbers may be non-contiguous and are never used for bounds checks.
use crate::corpus::{Book, Chapter, Corpus, Reference, Verse};
use crate::error::QueryError;
use serde::Serialize;

/// Positional location of a verse (all fields 1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Coordinates {
    pub book: usize,
    pub chapter: usize,
    pub verse: usize,
}

/// Parse user input as a coordinate index.
///
/// Only ASCII digits are accepted; `0` parses and is left for the range check
/// to reject.
pub fn parse_index(input: &str) -> Result<usize, QueryError> {
    let trimmed = input.trim();
    let invalid = || QueryError::InputFormat {
        input: trimmed.to_string(),
    };
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    trimmed.parse::<usize>().map_err(|_| invalid())
}

pub fn resolve_book(corpus: &Corpus, n: usize) -> Result<&Book, QueryError> {
    let books = corpus.books();
    position(n, books.len())
        .and_then(|idx| books.get(idx))
        .ok_or(QueryError::BookRange {
            requested: n,
            count: books.len(),
        })
}

/// Resolve the n-th chapter slot; malformed slots surface their format error.
pub fn resolve_chapter(book: &Book, n: usize) -> Result<&Chapter, QueryError> {
    let slots = book.slots();
    let slot = position(n, slots.len())
        .and_then(|idx| slots.get(idx))
        .ok_or_else(|| QueryError::ChapterRange {
            book: book.name().to_string(),
            requested: n,
            count: slots.len(),
        })?;
    slot.as_chapter().map_err(|err| err.clone().into())
}

pub fn resolve_verse<'a>(
    book: &Book,
    chapter: &'a Chapter,
    n: usize,
) -> Result<&'a Verse, QueryError> {
    let verses = chapter.verses();
    position(n, verses.len())
        .and_then(|idx| verses.get(idx))
        .ok_or_else(|| QueryError::VerseRange {
            book: book.name().to_string(),
            chapter: chapter.number(),
            requested: n,
            count: verses.len(),
        })
}

/// A fully resolved verse.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    pub book: &'a Book,
    pub chapter: &'a Chapter,
    pub verse: &'a Verse,
}

impl Resolved<'_> {
    pub fn reference(&self) -> Reference {
        Reference::new(self.book, self.chapter, self.verse)
    }
}

/// Resolve all three levels, stopping at the first failing level.
pub fn resolve(corpus: &Corpus, at: Coordinates) -> Result<Resolved<'_>, QueryError> {
    let book = resolve_book(corpus, at.book)?;
    let chapter = resolve_chapter(book, at.chapter)?;
    let verse = resolve_verse(book, chapter, at.verse)?;
    Ok(Resolved {
        book,
        chapter,
        verse,
    })
}

/// 0-based index for a 1-based `n` within `[1, len]`.
fn position(n: usize, len: usize) -> Option<usize> {
    if (1..=len).contains(&n) {
        Some(n - 1)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
