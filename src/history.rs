//! Bounded record of recent search keywords.
use std::collections::VecDeque;

/// Number of keywords retained before the oldest is evicted.
pub const HISTORY_CAPACITY: usize = 10;

/// FIFO of keywords, oldest first. Repeats are kept as separate entries.
#[derive(Debug, Clone)]
pub struct SearchHistory {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn record(&mut self, keyword: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(keyword.into());
    }

    /// Keywords from oldest retained to most recent.
    pub fn list(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest_beyond_capacity() {
        let mut history = SearchHistory::new();
        for idx in 1..=11 {
            history.record(format!("kw{idx}"));
        }
        let listed: Vec<_> = history.list().collect();
        assert_eq!(listed.len(), HISTORY_CAPACITY);
        assert_eq!(listed.first(), Some(&"kw2"));
        assert_eq!(listed.last(), Some(&"kw11"));
    }

    #[test]
    fn keeps_duplicates_and_case() {
        let mut history = SearchHistory::new();
        history.record("Love");
        history.record("Love");
        history.record("love");
        assert_eq!(history.list().collect::<Vec<_>>(), vec!["Love", "Love", "love"]);
    }

    #[test]
    fn zero_capacity_retains_nothing() {
        let mut history = SearchHistory::with_capacity(0);
        history.record("grace");
        assert!(history.is_empty());
    }
}
