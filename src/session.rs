//! Per-user session over a shared, immutable corpus.
//!
//! The session owns everything that changes while the program runs: bookmarks,
//! search history and the random source. The corpus itself is shared read-only.
use crate::bookmarks::BookmarkStore;
use crate::corpus::{Book, Chapter, Corpus, Reference};
use crate::error::QueryError;
use crate::history::SearchHistory;
use crate::random::select_random;
use crate::resolve::{resolve, resolve_book, resolve_chapter, Coordinates};
use crate::search::{search, Query, SearchHit};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::sync::Arc;

/// A whole chapter selected by position.
#[derive(Debug, Clone, Copy)]
pub struct ChapterView<'a> {
    pub book: &'a Book,
    pub chapter: &'a Chapter,
    /// 1-based positions of the book and chapter.
    pub book_index: usize,
    pub chapter_index: usize,
}

/// A single verse with its reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerseView {
    pub reference: Reference,
    pub text: String,
    pub coordinates: Coordinates,
}

/// Result of navigating to a chapter or a verse.
#[derive(Debug, Clone)]
pub enum View<'a> {
    Chapter(ChapterView<'a>),
    Verse(VerseView),
}

pub struct Session<R = StdRng> {
    corpus: Arc<Corpus>,
    bookmarks: BookmarkStore,
    history: SearchHistory,
    rng: R,
}

impl Session<StdRng> {
    /// Session with an entropy-seeded random source.
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self::with_rng(corpus, StdRng::from_entropy())
    }

    /// Session whose verse-of-the-day sequence is reproducible.
    pub fn with_seed(corpus: Arc<Corpus>, seed: u64) -> Self {
        Self::with_rng(corpus, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(corpus: Arc<Corpus>, rng: R) -> Self {
        Self {
            corpus,
            bookmarks: BookmarkStore::new(),
            history: SearchHistory::new(),
            rng,
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn list_books(&self) -> Vec<&str> {
        self.corpus.books().iter().map(Book::name).collect()
    }

    pub fn book_name(&self, book: usize) -> Result<&str, QueryError> {
        Ok(resolve_book(&self.corpus, book)?.name())
    }

    pub fn chapter_count(&self, book: usize) -> Result<usize, QueryError> {
        Ok(resolve_book(&self.corpus, book)?.chapter_count())
    }

    pub fn verse_count(&self, book: usize, chapter: usize) -> Result<usize, QueryError> {
        let book = resolve_book(&self.corpus, book)?;
        Ok(resolve_chapter(book, chapter)?.verse_count())
    }

    /// Navigate to a chapter, or to one verse when `verse` is given.
    pub fn resolve_and_show(
        &self,
        book: usize,
        chapter: usize,
        verse: Option<usize>,
    ) -> Result<View<'_>, QueryError> {
        if let Some(verse) = verse {
            return self.show_verse(book, chapter, verse).map(View::Verse);
        }
        let book_ref = resolve_book(&self.corpus, book)?;
        let chapter_ref = resolve_chapter(book_ref, chapter)?;
        Ok(View::Chapter(ChapterView {
            book: book_ref,
            chapter: chapter_ref,
            book_index: book,
            chapter_index: chapter,
        }))
    }

    /// Navigate straight to one verse.
    pub fn show_verse(
        &self,
        book: usize,
        chapter: usize,
        verse: usize,
    ) -> Result<VerseView, QueryError> {
        let coordinates = Coordinates {
            book,
            chapter,
            verse,
        };
        let resolved = resolve(&self.corpus, coordinates)?;
        Ok(VerseView {
            reference: resolved.reference(),
            text: resolved.verse.text().to_string(),
            coordinates,
        })
    }

    /// Search for `keyword` and record it in history.
    ///
    /// Blank keywords are rejected before history or the corpus is touched.
    pub fn search(&mut self, keyword: &str) -> Result<Vec<SearchHit>, QueryError> {
        let query = Query::new(keyword)?;
        let hits = search(&self.corpus, &query);
        self.history.record(query.keyword());
        Ok(hits)
    }

    /// Save a verse under its reference. Returns `true` when it replaced an entry.
    pub fn bookmark(&mut self, reference: impl Into<String>, text: impl Into<String>) -> bool {
        self.bookmarks.add(reference, text)
    }

    pub fn list_bookmarks(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bookmarks.list()
    }

    pub fn search_history(&self) -> impl Iterator<Item = &str> {
        self.history.list()
    }

    pub fn verse_of_the_day(&mut self) -> Option<VerseView> {
        let (coordinates, picked) = select_random(&self.corpus, &mut self.rng)?;
        Some(VerseView {
            reference: picked.reference(),
            text: picked.verse.text().to_string(),
            coordinates,
        })
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
