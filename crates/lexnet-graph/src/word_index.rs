//! Word to synset index.
//!
//! Built once from the synset records; read-only afterwards.

use crate::digraph::Vertex;
use std::collections::HashMap;

/// Maps each noun to the synsets it belongs to.
///
/// A word may name several synsets (polysemy) and a synset may hold several
/// words (synonymy). Ids per word are kept in insertion order without
/// duplicates.
#[derive(Debug, Default, Clone)]
pub struct WordIndex {
    /// Map of word to synset ids
    by_word: HashMap<String, Vec<Vertex>>,
}

impl WordIndex {
    /// Creates a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `word` belongs to synset `id`.
    pub fn insert(&mut self, word: &str, id: Vertex) {
        let ids = self.by_word.entry(word.to_string()).or_default();
        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    /// Resolves a word to its synset ids.
    pub fn resolve(&self, word: &str) -> Option<&[Vertex]> {
        self.by_word.get(word).map(Vec::as_slice)
    }

    /// Returns true if the word is indexed.
    pub fn contains(&self, word: &str) -> bool {
        self.by_word.contains_key(word)
    }

    /// Iterates over all distinct words, in no particular order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.by_word.keys().map(String::as_str)
    }

    /// Returns the number of distinct words.
    pub fn len(&self) -> usize {
        self.by_word.len()
    }

    /// Returns true if no word is indexed.
    pub fn is_empty(&self) -> bool {
        self.by_word.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_resolve() {
        let mut index = WordIndex::new();
        index.insert("bank", 4);
        index.insert("bank", 9);
        index.insert("depository", 4);

        assert_eq!(index.resolve("bank"), Some(&[4, 9][..]));
        assert_eq!(index.resolve("depository"), Some(&[4][..]));
        assert_eq!(index.resolve("river"), None);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_insert_deduplicates() {
        let mut index = WordIndex::new();
        index.insert("a", 1);
        index.insert("a", 1);
        assert_eq!(index.resolve("a"), Some(&[1][..]));
    }

    #[test]
    fn test_words_are_distinct() {
        let mut index = WordIndex::new();
        index.insert("x", 0);
        index.insert("y", 0);
        index.insert("x", 2);

        let mut words: Vec<&str> = index.words().collect();
        words.sort();
        assert_eq!(words, vec!["x", "y"]);
        assert!(index.contains("y"));
        assert!(!index.is_empty());
    }
}
