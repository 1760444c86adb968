//! Case-insensitive substring search over the whole corpus.
use crate::corpus::{Corpus, Reference};
use crate::error::QueryError;
use crate::resolve::Coordinates;
use serde::Serialize;

/// A non-blank search keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    keyword: String,
    folded: String,
}

impl Query {
    /// Accept `keyword` verbatim unless it is blank.
    pub fn new(keyword: &str) -> Result<Self, QueryError> {
        if keyword.trim().is_empty() {
            return Err(QueryError::EmptyQuery);
        }
        Ok(Self {
            keyword: keyword.to_string(),
            folded: keyword.to_lowercase(),
        })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.folded)
    }
}

/// One matching verse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub reference: Reference,
    pub text: String,
    pub coordinates: Coordinates,
}

/// Scan every usable verse in book, chapter, verse order.
pub fn search(corpus: &Corpus, query: &Query) -> Vec<SearchHit> {
    let mut hits = Vec::new();
    for (book_idx, book) in corpus.books().iter().enumerate() {
        for (chapter_idx, chapter) in book.chapters() {
            for (verse_idx, verse) in chapter.verses().iter().enumerate() {
                if !query.matches(verse.text()) {
                    continue;
                }
                hits.push(SearchHit {
                    reference: Reference::new(book, chapter, verse),
                    text: verse.text().to_string(),
                    coordinates: Coordinates {
                        book: book_idx + 1,
                        chapter: chapter_idx + 1,
                        verse: verse_idx + 1,
                    },
                });
            }
        }
    }
    tracing::debug!(keyword = query.keyword(), hits = hits.len(), "search complete");
    hits
}
