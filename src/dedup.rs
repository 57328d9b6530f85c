//! Duplicate suppression for accepted words
//!
//! The filter is a single sequential pass, so first-occurrence-wins order
//! falls out of a plain insert-if-absent set. Keyed with ahash, which beats
//! the default hasher on short dictionary words.

use ahash::RandomState;
use hashbrown::HashSet;

/// Tracks accepted words so later repeats can be dropped, keeping only the
/// first occurrence of each word.
#[derive(Debug, Default)]
pub struct SeenWords {
    set: HashSet<String, RandomState>,
}

impl SeenWords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            set: HashSet::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    /// Record `word`. Returns true the first time the word is seen.
    pub fn insert(&mut self, word: &str) -> bool {
        if self.set.contains(word) {
            return false;
        }
        self.set.insert(word.to_owned())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word)
    }

    /// Number of distinct words recorded.
    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_wins() {
        let mut seen = SeenWords::new();

        assert!(seen.insert("APPLE"));
        assert!(seen.insert("STONE"));
        assert!(!seen.insert("APPLE")); // repeat

        assert_eq!(seen.len(), 2);
        assert!(seen.contains("APPLE"));
        assert!(!seen.contains("QUIZ"));
    }

    #[test]
    fn test_case_sensitive_keys() {
        // Candidates are uppercased before they get here; the set itself
        // does not fold case.
        let mut seen = SeenWords::new();

        assert!(seen.insert("APPLE"));
        assert!(seen.insert("apple"));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_with_capacity() {
        let mut seen = SeenWords::with_capacity(128);
        assert!(seen.is_empty());

        assert!(seen.insert("WORD"));
        assert!(!seen.is_empty());
    }
}
