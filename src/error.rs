//! Error types for corpus loading and queries.
//!
//! Load failures abort startup; everything else is reported to the caller of
//! the single operation that failed and leaves session state untouched.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to build a corpus from its source document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The corpus file could not be read.
    #[error("read corpus {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document is not valid JSON.
    #[error("parse corpus JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level document has no `books` list.
    #[error("corpus document is missing the \"books\" list")]
    MissingBooks,

    /// A book record lacks a usable name or chapter list.
    #[error("book record {position} is malformed: {reason}")]
    MalformedBook { position: usize, reason: String },
}

/// A chapter whose raw shape matches neither accepted encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{book} chapter {position} has an unknown format ({shape})")]
pub struct FormatError {
    pub book: String,
    /// 1-based position of the chapter within its book.
    pub position: usize,
    /// Short description of what was found instead.
    pub shape: String,
}

/// Recoverable failure of a navigation or search request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Coordinate input is not a non-negative integer.
    #[error("invalid input {input:?}: please enter a number")]
    InputFormat { input: String },

    #[error("book number {requested} is out of range (1-{count})")]
    BookRange { requested: usize, count: usize },

    #[error("{book} chapter {requested} is out of range (1-{count})")]
    ChapterRange {
        book: String,
        requested: usize,
        count: usize,
    },

    #[error("{book} chapter {chapter} verse {requested} is out of range (1-{count})")]
    VerseRange {
        book: String,
        chapter: u32,
        requested: usize,
        count: usize,
    },

    /// The requested chapter exists but could not be normalized at load.
    #[error(transparent)]
    ChapterFormat(#[from] FormatError),

    #[error("search keyword must not be empty")]
    EmptyQuery,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_errors_report_valid_range() {
        let err = QueryError::BookRange {
            requested: 67,
            count: 66,
        };
        assert_eq!(err.to_string(), "book number 67 is out of range (1-66)");

        let err = QueryError::VerseRange {
            book: "John".to_string(),
            chapter: 3,
            requested: 40,
            count: 36,
        };
        assert_eq!(
            err.to_string(),
            "John chapter 3 verse 40 is out of range (1-36)"
        );
    }

    #[test]
    fn chapter_format_is_distinct_from_range() {
        let format = FormatError {
            book: "Psalms".to_string(),
            position: 2,
            shape: "string".to_string(),
        };
        let err = QueryError::from(format.clone());
        assert!(matches!(err, QueryError::ChapterFormat(_)));
        assert_eq!(err.to_string(), format.to_string());
        assert!(err.to_string().contains("unknown format"));
    }

    #[test]
    fn missing_books_message() {
        assert!(LoadError::MissingBooks.to_string().contains("books"));
    }
}
