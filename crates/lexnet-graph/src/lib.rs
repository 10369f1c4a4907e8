//! Lexnet Graph - Semantic relatedness over a hypernym taxonomy
//!
//! This crate holds the shortest-ancestral-path (SAP) engine and the
//! taxonomy built on top of it. Words map to synsets, synsets are linked by
//! is-a edges into a rooted DAG, and the distance between two words is the
//! shortest path from one word's synsets up to a common ancestor and back
//! down to the other word's synsets.
//!
//! # Architecture
//!
//! - [`Digraph`]: adjacency lists over dense vertex ids
//! - [`CycleDetector`]: DFS cycle check used during validation
//! - [`MultiSourceBfs`]: distances from a set of sources
//! - [`ShortestAncestralPath`]: two BFS runs plus a minimizing scan
//! - [`Taxonomy`]: the validated graph, word index and synset texts
//! - [`Outcast`]: the least related noun of a list
//!
//! # Example
//!
//! ```
//! use lexnet_core::{HypernymRecord, SynsetRecord};
//! use lexnet_graph::Taxonomy;
//!
//! let synsets = vec![
//!     SynsetRecord::new(0, "animal", ""),
//!     SynsetRecord::new(1, "dog", ""),
//!     SynsetRecord::new(2, "cat", ""),
//! ];
//! let hypernyms = vec![
//!     HypernymRecord::new(1, vec![0]),
//!     HypernymRecord::new(2, vec![0]),
//! ];
//!
//! let taxonomy = Taxonomy::build(synsets, hypernyms).unwrap();
//! assert_eq!(taxonomy.distance("dog", "cat").unwrap(), 2);
//! assert_eq!(taxonomy.ancestor_synset("dog", "cat").unwrap(), "animal");
//! ```

mod bfs;
mod builder;
mod cycle;
mod digraph;
mod error;
mod outcast;
mod sap;
mod taxonomy;
mod word_index;

pub use bfs::MultiSourceBfs;
pub use builder::TaxonomyBuilder;
pub use cycle::{has_cycle, CycleDetector};
pub use digraph::{Adjacent, Digraph, Vertex};
pub use error::{GraphError, GraphResult, InvalidTaxonomy};
pub use outcast::{Outcast, OutcastScore};
pub use sap::{AncestralPath, ShortestAncestralPath};
pub use taxonomy::{Taxonomy, TaxonomyStats};
pub use word_index::WordIndex;
