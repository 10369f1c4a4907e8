//! Error types for graph construction and queries.

use crate::digraph::Vertex;
use thiserror::Error;

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors raised by the digraph, the SAP engine, and the taxonomy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex id outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a graph of {vertex_count} vertices")]
    OutOfRange { vertex: Vertex, vertex_count: usize },

    /// A declared vertex count too large to allocate.
    #[error("cannot allocate a graph of {vertex_count} vertices")]
    CapacityExceeded { vertex_count: usize },

    /// The taxonomy records do not describe a rooted DAG.
    #[error("invalid taxonomy: {0}")]
    InvalidInput(#[from] InvalidTaxonomy),

    /// The query word is not a noun of the taxonomy.
    #[error("unknown word: {0:?}")]
    UnknownWord(String),

    /// Two words share no ancestor. Cannot happen on a validated taxonomy.
    #[error("no common ancestor between {a:?} and {b:?}")]
    NoCommonAncestor { a: String, b: String },
}

/// Why a set of taxonomy records was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidTaxonomy {
    /// The hypernym relation contains a directed cycle.
    #[error("hypernym cycle {}", format_cycle(.cycle))]
    Cyclic { cycle: Vec<Vertex> },

    /// Not exactly one synset lacks a hypernym record.
    #[error("expected exactly one root, found {}", .roots.len())]
    NotRooted { roots: Vec<Vertex> },

    /// A synset without parents other than the root; it cannot reach the root.
    #[error("synset {vertex} has no hypernyms but is not the root")]
    UnreachableRoot { vertex: Vertex },

    /// Synset ids must be dense in `[0, synset_count)`.
    #[error("synset id {id} is out of range for {count} synsets")]
    SynsetOutOfRange { id: Vertex, count: usize },

    /// A hypernym record names a synset that does not exist.
    #[error("hypernym record refers to synset {id}, but there are only {count} synsets")]
    HypernymOutOfRange { id: Vertex, count: usize },

    /// The same synset id was declared twice.
    #[error("synset {0} is declared more than once")]
    DuplicateSynset(Vertex),

    /// A synset line carries no member words.
    #[error("synset {0} has no member words")]
    EmptySynset(Vertex),
}

fn format_cycle(cycle: &[Vertex]) -> String {
    cycle
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

impl GraphError {
    /// Returns true for construction-time invariant violations.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_message() {
        let err = GraphError::from(InvalidTaxonomy::Cyclic {
            cycle: vec![0, 4, 3, 0],
        });
        assert_eq!(err.to_string(), "invalid taxonomy: hypernym cycle 0 -> 4 -> 3 -> 0");
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_out_of_range_message() {
        let err = GraphError::OutOfRange {
            vertex: 9,
            vertex_count: 5,
        };
        assert!(err.to_string().contains("vertex 9"));
        assert!(!err.is_invalid_input());
    }
}
