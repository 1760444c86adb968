//! Session bookmarks keyed by reference string.
use serde::Serialize;
use std::collections::BTreeMap;

/// Reference -> verse text snapshot. Re-bookmarking a reference replaces its text.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BookmarkStore {
    entries: BTreeMap<String, String>,
}

impl BookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. Returns `true` when an existing entry was replaced.
    pub fn add(&mut self, reference: impl Into<String>, text: impl Into<String>) -> bool {
        let reference = reference.into();
        let replaced = self.entries.insert(reference.clone(), text.into()).is_some();
        tracing::debug!(reference = %reference, replaced, "bookmark saved");
        replaced
    }

    pub fn get(&self, reference: &str) -> Option<&str> {
        self.entries.get(reference).map(String::as_str)
    }

    pub fn list(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(reference, text)| (reference.as_str(), text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
