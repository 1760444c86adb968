//! Canonical book/chapter/verse model.
//!
//! A corpus is built once from a source document and never mutated. Every
//! chapter is normalized at load time, so nothing downstream inspects raw
//! source shapes again.
mod load;
mod normalize;
mod raw;

pub use load::load_corpus;
pub(crate) use normalize::normalize;

use crate::error::FormatError;
use serde::Serialize;
use std::fmt;

/// A single verse with its declared (or positional) number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    number: u32,
    text: String,
}

impl Verse {
    pub(crate) fn new(number: u32, text: String) -> Self {
        Self { number, text }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// An ordered run of verses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    number: u32,
    verses: Vec<Verse>,
}

impl Chapter {
    pub(crate) fn new(number: u32, verses: Vec<Verse>) -> Self {
        Self { number, verses }
    }

    /// Declared chapter number, or the 1-based position when none was declared.
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }

    pub fn verse_count(&self) -> usize {
        self.verses.len()
    }
}

/// One chapter position within a book.
///
/// Malformed chapters keep their slot so positional navigation stays aligned
/// with the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChapterSlot {
    Ready(Chapter),
    Malformed(FormatError),
}

impl ChapterSlot {
    pub fn as_chapter(&self) -> Result<&Chapter, &FormatError> {
        match self {
            ChapterSlot::Ready(chapter) => Ok(chapter),
            ChapterSlot::Malformed(err) => Err(err),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    name: String,
    chapters: Vec<ChapterSlot>,
}

impl Book {
    pub(crate) fn new(name: String, chapters: Vec<ChapterSlot>) -> Self {
        Self { name, chapters }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of chapter positions, including malformed ones.
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    pub fn slots(&self) -> &[ChapterSlot] {
        &self.chapters
    }

    /// Iterate usable chapters with their 0-based positions, in source order.
    pub fn chapters(&self) -> impl Iterator<Item = (usize, &Chapter)> {
        self.chapters
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_chapter().ok().map(|chapter| (idx, chapter)))
    }
}

/// The full, immutable corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    books: Vec<Book>,
}

impl Corpus {
    pub(crate) fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Chapters that failed normalization, in traversal order.
    pub fn format_errors(&self) -> impl Iterator<Item = &FormatError> {
        self.books
            .iter()
            .flat_map(|book| book.slots())
            .filter_map(|slot| slot.as_chapter().err())
    }

    pub fn stats(&self) -> CorpusStats {
        let mut stats = CorpusStats {
            books: self.books.len(),
            ..CorpusStats::default()
        };
        for book in &self.books {
            for slot in book.slots() {
                match slot.as_chapter() {
                    Ok(chapter) => {
                        stats.chapters += 1;
                        stats.verses += chapter.verse_count();
                    }
                    Err(_) => stats.malformed_chapters += 1,
                }
            }
        }
        stats
    }
}

/// Summary counts reported after load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    pub books: usize,
    pub chapters: usize,
    pub verses: usize,
    pub malformed_chapters: usize,
}

/// Human-facing identity of a verse, rendered as `Book C:V`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
}

impl Reference {
    pub fn new(book: &Book, chapter: &Chapter, verse: &Verse) -> Self {
        Self {
            book: book.name().to_string(),
            chapter: chapter.number(),
            verse: verse.number(),
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

impl Serialize for Reference {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
