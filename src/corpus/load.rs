//! Building a corpus from its JSON source document.
use super::raw::{RawBook, RawChapter};
use super::{normalize, Book, ChapterSlot, Corpus, Verse};
use crate::error::{FormatError, LoadError};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Read and normalize the corpus document at `path`.
pub fn load_corpus(path: &Path) -> Result<Corpus, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_slice(&bytes)?;
    let corpus = Corpus::from_value(&value)?;
    let stats = corpus.stats();
    tracing::info!(
        path = %path.display(),
        books = stats.books,
        chapters = stats.chapters,
        verses = stats.verses,
        malformed_chapters = stats.malformed_chapters,
        "loaded corpus"
    );
    Ok(corpus)
}

impl Corpus {
    pub fn from_json_str(text: &str) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Build from an already-parsed document of the form `{"books": [...]}`.
    pub fn from_value(document: &Value) -> Result<Self, LoadError> {
        let raw_books = document
            .get("books")
            .and_then(Value::as_array)
            .ok_or(LoadError::MissingBooks)?;

        let mut books = Vec::with_capacity(raw_books.len());
        for (idx, raw_book) in raw_books.iter().enumerate() {
            books.push(build_book(idx + 1, raw_book)?);
        }
        Ok(Corpus::new(books))
    }
}

fn build_book(position: usize, value: &Value) -> Result<Book, LoadError> {
    let raw = RawBook::deserialize(value).map_err(|err| LoadError::MalformedBook {
        position,
        reason: err.to_string(),
    })?;
    if raw.name.trim().is_empty() {
        return Err(LoadError::MalformedBook {
            position,
            reason: "empty book name".to_string(),
        });
    }

    let mut slots = Vec::with_capacity(raw.chapters.len());
    let mut chapter_numbers = BTreeSet::new();
    for (idx, raw_chapter) in raw.chapters.iter().enumerate() {
        let chapter_position = idx + 1;
        let slot = match RawChapter::classify(raw_chapter) {
            Ok(classified) => {
                let chapter = normalize(classified, &raw.name, chapter_position);
                if !chapter_numbers.insert(chapter.number()) {
                    tracing::warn!(
                        book = %raw.name,
                        chapter = chapter.number(),
                        "duplicate chapter number"
                    );
                }
                warn_duplicate_verses(&raw.name, chapter.number(), chapter.verses());
                ChapterSlot::Ready(chapter)
            }
            Err(shape) => {
                let err = FormatError {
                    book: raw.name.clone(),
                    position: chapter_position,
                    shape,
                };
                tracing::warn!(
                    book = %err.book,
                    position = err.position,
                    shape = %err.shape,
                    "skipping chapter with unknown format"
                );
                ChapterSlot::Malformed(err)
            }
        };
        slots.push(slot);
    }
    Ok(Book::new(raw.name, slots))
}

fn warn_duplicate_verses(book: &str, chapter: u32, verses: &[Verse]) {
    let mut seen = BTreeSet::new();
    for verse in verses {
        if !seen.insert(verse.number()) {
            tracing::warn!(book, chapter, verse = verse.number(), "duplicate verse number");
        }
    }
}
