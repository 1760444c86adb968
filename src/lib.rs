//! Retrieval over a hierarchical book/chapter/verse corpus.
//!
//! The corpus is loaded once and shared read-only; a [`Session`] layers
//! bookmarks, bounded search history and verse-of-the-day selection on top.
pub mod bookmarks;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod format;
pub mod history;
pub mod random;
pub mod resolve;
pub mod search;
pub mod session;
pub mod shell;

pub use corpus::{load_corpus, Book, Chapter, Corpus, Reference, Verse};
pub use error::{FormatError, LoadError, QueryError};
pub use session::{Session, VerseView, View};
