//! Record types produced by the parsers.
//!
//! Records are deliberately dumb: they mirror one line of input each and do
//! no cross-record validation. The graph crate owns the invariants.

use serde::{Deserialize, Serialize};

/// Dense vertex identifier. Each synset owns exactly one.
pub type Vertex = usize;

/// One line of the synsets file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynsetRecord {
    /// The synset's vertex id.
    pub id: Vertex,

    /// Raw member field, e.g. `"dog domestic_dog Canis_familiaris"`.
    ///
    /// This is the text handed back to callers when the synset is the
    /// answer of an ancestor query.
    pub members: String,

    /// Dictionary definition. May be empty.
    pub gloss: String,

    /// Separator used to split `members` into words.
    #[serde(default = "default_member_separator")]
    member_separator: char,
}

fn default_member_separator() -> char {
    ' '
}

impl SynsetRecord {
    /// Creates a record with space-separated members.
    pub fn new(id: Vertex, members: impl Into<String>, gloss: impl Into<String>) -> Self {
        Self {
            id,
            members: members.into(),
            gloss: gloss.into(),
            member_separator: default_member_separator(),
        }
    }

    /// Sets the separator used by [`words`](Self::words).
    pub fn with_member_separator(mut self, separator: char) -> Self {
        self.member_separator = separator;
        self
    }

    /// Iterates over the member words, skipping empty fragments.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.members
            .split(self.member_separator)
            .filter(|word| !word.is_empty())
    }
}

/// One line of the hypernyms file: `id` is-a each of `parents`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HypernymRecord {
    /// The subject synset.
    pub id: Vertex,
    /// Parent synsets, in file order.
    pub parents: Vec<Vertex>,
}

impl HypernymRecord {
    /// Creates a record.
    pub fn new(id: Vertex, parents: Vec<Vertex>) -> Self {
        Self { id, parents }
    }
}

/// A raw digraph in edge-list form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigraphRecord {
    /// Declared number of vertices.
    pub vertex_count: usize,
    /// Edges `(from, to)` in file order.
    pub edges: Vec<(Vertex, Vertex)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_split_on_spaces() {
        let record = SynsetRecord::new(3, "dog domestic_dog  Canis_familiaris", "a canine");
        let words: Vec<&str> = record.words().collect();
        assert_eq!(words, vec!["dog", "domestic_dog", "Canis_familiaris"]);
    }

    #[test]
    fn test_words_custom_separator() {
        let record = SynsetRecord::new(0, "a|b|c", "").with_member_separator('|');
        assert_eq!(record.words().count(), 3);
    }

    #[test]
    fn test_empty_members_yield_no_words() {
        let record = SynsetRecord::new(0, "", "nothing");
        assert_eq!(record.words().next(), None);
    }

    #[test]
    fn test_synset_json_defaults_separator() {
        let json = r#"{"id":1,"members":"x y","gloss":"g"}"#;
        let record: SynsetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.words().collect::<Vec<_>>(), vec!["x", "y"]);
    }
}
