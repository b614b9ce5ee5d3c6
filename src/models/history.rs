//! Bounded search-history log

use serde::{Deserialize, Serialize};

/// Recent search terms, most recent first.
///
/// Re-submitting an existing term moves it to the front instead of adding a
/// second copy; the log is truncated to the configured capacity after every
/// insert. Persisted as a bare JSON array under a single storage key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchHistory {
    entries: Vec<String>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a submitted query, returning whether anything was recorded.
    /// Empty and whitespace-only input is ignored.
    pub fn record(&mut self, query: &str, capacity: usize) -> bool {
        let term = query.trim();
        if term.is_empty() {
            return false;
        }
        self.entries.retain(|entry| entry != term);
        self.entries.insert(0, term.to_string());
        self.entries.truncate(capacity);
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAP: usize = 3;

    #[test]
    fn test_record_inserts_at_front() {
        let mut history = SearchHistory::new();
        assert!(history.record("garden", CAP));
        assert!(history.record("shelter", CAP));
        assert_eq!(history.entries(), ["shelter", "garden"]);
    }

    #[test]
    fn test_duplicate_moves_to_front() {
        let mut history = SearchHistory::new();
        history.record("garden", CAP);
        history.record("shelter", CAP);
        history.record("garden", CAP);
        assert_eq!(history.entries(), ["garden", "shelter"]);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_repeat_of_same_term_keeps_length_one() {
        let mut history = SearchHistory::new();
        history.record("garden", CAP);
        history.record("garden", CAP);
        assert_eq!(history.entries(), ["garden"]);
    }

    #[test]
    fn test_oldest_evicted_past_capacity() {
        let mut history = SearchHistory::new();
        for term in ["q1", "q2", "q3", "q4"] {
            history.record(term, CAP);
        }
        assert_eq!(history.entries(), ["q4", "q3", "q2"]);
    }

    #[test]
    fn test_blank_input_ignored() {
        let mut history = SearchHistory::new();
        assert!(!history.record("", CAP));
        assert!(!history.record("   ", CAP));
        assert!(history.is_empty());
    }

    #[test]
    fn test_input_is_trimmed() {
        let mut history = SearchHistory::new();
        history.record("  garden  ", CAP);
        assert_eq!(history.entries(), ["garden"]);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut history = SearchHistory::new();
        history.record("garden", CAP);
        history.record("shelter", CAP);
        let raw = serde_json::to_string(&history).unwrap();
        assert_eq!(raw, r#"["shelter","garden"]"#);
        let restored: SearchHistory = serde_json::from_str(&raw).unwrap();
        assert_eq!(restored, history);
    }
}
