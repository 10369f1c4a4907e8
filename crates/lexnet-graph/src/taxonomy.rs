//! WordNet-style taxonomy.
//!
//! The Taxonomy wraps the validated hypernym digraph together with the word
//! index and the synset texts. It's immutable: build it once with
//! [`TaxonomyBuilder`](crate::TaxonomyBuilder) or [`Taxonomy::build`], then
//! query it as often as needed.

use crate::builder::TaxonomyBuilder;
use crate::digraph::{Digraph, Vertex};
use crate::error::{GraphError, GraphResult};
use crate::sap::{AncestralPath, ShortestAncestralPath};
use crate::word_index::WordIndex;
use lexnet_core::{HypernymRecord, SynsetRecord};
use serde::{Deserialize, Serialize};

/// A validated rooted DAG of synsets.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    /// Hypernym edges: synset -> parent synset.
    graph: Digraph,

    /// Maps nouns to the synsets containing them.
    words: WordIndex,

    /// Member text per synset id.
    members: Vec<String>,

    /// Gloss per synset id.
    glosses: Vec<String>,

    root: Vertex,
}

impl Taxonomy {
    /// Builds and validates a taxonomy from records.
    ///
    /// Shorthand for feeding a [`TaxonomyBuilder`].
    pub fn build<S, H>(synsets: S, hypernyms: H) -> GraphResult<Self>
    where
        S: IntoIterator<Item = SynsetRecord>,
        H: IntoIterator<Item = HypernymRecord>,
    {
        let mut builder = TaxonomyBuilder::new();
        builder.add_synsets(synsets).add_hypernyms(hypernyms);
        builder.build()
    }

    pub(crate) fn from_parts(
        graph: Digraph,
        words: WordIndex,
        members: Vec<String>,
        glosses: Vec<String>,
        root: Vertex,
    ) -> Self {
        Self {
            graph,
            words,
            members,
            glosses,
            root,
        }
    }

    /// Iterates over every distinct noun, in no particular order.
    pub fn nouns(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.words()
    }

    /// Returns the number of distinct nouns.
    pub fn noun_count(&self) -> usize {
        self.words.len()
    }

    /// Is `word` a noun of this taxonomy?
    pub fn is_noun(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// The synsets `word` belongs to.
    pub fn synsets_of(&self, word: &str) -> GraphResult<&[Vertex]> {
        self.words
            .resolve(word)
            .ok_or_else(|| GraphError::UnknownWord(word.to_string()))
    }

    /// Length of the shortest ancestral path between any synset of `a` and
    /// any synset of `b`.
    pub fn distance(&self, a: &str, b: &str) -> GraphResult<usize> {
        let (ids_a, ids_b) = self.resolve_pair(a, b)?;
        self.sap()
            .length_between(ids_a.iter().copied(), ids_b.iter().copied())?
            .ok_or_else(|| no_common_ancestor(a, b))
    }

    /// The common ancestor on a shortest ancestral path between `a` and `b`.
    pub fn ancestor(&self, a: &str, b: &str) -> GraphResult<Vertex> {
        let (ids_a, ids_b) = self.resolve_pair(a, b)?;
        self.sap()
            .ancestor_between(ids_a.iter().copied(), ids_b.iter().copied())?
            .ok_or_else(|| no_common_ancestor(a, b))
    }

    /// Member text of the synset returned by [`ancestor`](Self::ancestor).
    pub fn ancestor_synset(&self, a: &str, b: &str) -> GraphResult<&str> {
        let ancestor = self.ancestor(a, b)?;
        Ok(&self.members[ancestor])
    }

    /// The full shortest ancestral path between `a` and `b`.
    pub fn ancestral_path(&self, a: &str, b: &str) -> GraphResult<AncestralPath> {
        let (ids_a, ids_b) = self.resolve_pair(a, b)?;
        self.sap()
            .shortest_path(ids_a.iter().copied(), ids_b.iter().copied())?
            .ok_or_else(|| no_common_ancestor(a, b))
    }

    /// Member text of synset `id`.
    pub fn synset(&self, id: Vertex) -> Option<&str> {
        self.members.get(id).map(String::as_str)
    }

    /// Gloss of synset `id`.
    pub fn gloss(&self, id: Vertex) -> Option<&str> {
        self.glosses.get(id).map(String::as_str)
    }

    /// The root synset every other synset reaches.
    pub fn root(&self) -> Vertex {
        self.root
    }

    /// Returns the number of synsets.
    pub fn synset_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// The hypernym digraph.
    pub fn graph(&self) -> &Digraph {
        &self.graph
    }

    /// A SAP engine over the hypernym digraph.
    pub fn sap(&self) -> ShortestAncestralPath<'_> {
        ShortestAncestralPath::new(&self.graph)
    }

    fn resolve_pair(&self, a: &str, b: &str) -> GraphResult<(&[Vertex], &[Vertex])> {
        Ok((self.synsets_of(a)?, self.synsets_of(b)?))
    }
}

fn no_common_ancestor(a: &str, b: &str) -> GraphError {
    GraphError::NoCommonAncestor {
        a: a.to_string(),
        b: b.to_string(),
    }
}

/// Taxonomy statistics for status output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyStats {
    pub synsets: usize,
    pub hypernym_edges: usize,
    pub nouns: usize,
    pub root: Vertex,
    pub root_synset: String,
}

impl Taxonomy {
    /// Returns taxonomy statistics.
    pub fn stats(&self) -> TaxonomyStats {
        TaxonomyStats {
            synsets: self.synset_count(),
            hypernym_edges: self.graph.edge_count(),
            nouns: self.noun_count(),
            root: self.root,
            root_synset: self.members[self.root].clone(),
        }
    }
}
