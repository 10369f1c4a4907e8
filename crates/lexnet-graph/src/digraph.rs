//! Adjacency-list digraph over dense vertex ids.
//!
//! Vertices are `0..vertex_count()`. Each vertex keeps its out-neighbors in
//! insertion order; parallel edges and self-loops are kept as given.

use crate::error::{GraphError, GraphResult};
use lexnet_core::DigraphRecord;
use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::iter::Copied;
use std::slice::Iter;

pub use lexnet_core::Vertex;

/// Out-neighbors of a vertex, in insertion order.
pub type Adjacent<'a> = Copied<Iter<'a, Vertex>>;

/// A directed graph with a fixed vertex count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digraph {
    adjacency: Vec<Vec<Vertex>>,
    edge_count: usize,
}

impl Digraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Builds a graph from an edge-list record.
    ///
    /// Fails with `CapacityExceeded` when the declared vertex count cannot be
    /// allocated.
    pub fn from_record(record: &DigraphRecord) -> GraphResult<Self> {
        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(record.vertex_count)
            .map_err(|_| GraphError::CapacityExceeded {
                vertex_count: record.vertex_count,
            })?;
        adjacency.resize_with(record.vertex_count, Vec::new);

        let mut graph = Self {
            adjacency,
            edge_count: 0,
        };
        for &(from, to) in &record.edges {
            graph.add_edge(from, to)?;
        }
        Ok(graph)
    }

    /// Adds the edge `from -> to`.
    pub fn add_edge(&mut self, from: Vertex, to: Vertex) -> GraphResult<()> {
        self.validate(from)?;
        self.validate(to)?;
        self.adjacency[from].push(to);
        self.edge_count += 1;
        Ok(())
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges, counting duplicates.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Iterates over the out-neighbors of `v`.
    ///
    /// The iterator is cheap to clone, so callers can walk it more than once.
    pub fn adjacent(&self, v: Vertex) -> GraphResult<Adjacent<'_>> {
        self.validate(v)?;
        Ok(self.adjacency[v].iter().copied())
    }

    /// Number of edges leaving `v`.
    pub fn out_degree(&self, v: Vertex) -> GraphResult<usize> {
        self.validate(v)?;
        Ok(self.adjacency[v].len())
    }

    /// Checks that `v` is a vertex of this graph.
    pub fn validate(&self, v: Vertex) -> GraphResult<()> {
        if v < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::OutOfRange {
                vertex: v,
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// Unchecked neighbor slice for traversals that already own a valid id.
    pub(crate) fn neighbors(&self, v: Vertex) -> &[Vertex] {
        &self.adjacency[v]
    }

    /// Iterates over all edges as `(from, to)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, targets)| targets.iter().map(move |&to| (from, to)))
    }

    /// Converts to a petgraph graph with the same vertex ids.
    pub fn to_petgraph(&self) -> DiGraph<(), ()> {
        let mut graph = DiGraph::with_capacity(self.vertex_count(), self.edge_count);
        for _ in 0..self.vertex_count() {
            graph.add_node(());
        }
        for (from, to) in self.edges() {
            graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), ());
        }
        graph
    }

    /// Renders the graph in Graphviz DOT, vertices labelled by id.
    pub fn to_dot(&self) -> String {
        let graph = self.to_petgraph();
        format!(
            "{:?}",
            Dot::with_config(&graph, &[Config::EdgeNoLabel, Config::NodeIndexLabel])
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_graph_is_empty() {
        let graph = Digraph::new(4);
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.adjacent(3).unwrap().count(), 0);
    }

    #[test]
    fn test_adjacency_keeps_insertion_order() {
        let mut graph = Digraph::new(4);
        graph.add_edge(0, 3).unwrap();
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 3).unwrap(); // parallel edge
        graph.add_edge(0, 0).unwrap(); // self-loop

        let adj: Vec<Vertex> = graph.adjacent(0).unwrap().collect();
        assert_eq!(adj, vec![3, 1, 3, 0]);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.out_degree(0).unwrap(), 4);
    }

    #[test]
    fn test_adjacent_is_restartable() {
        let mut graph = Digraph::new(3);
        graph.add_edge(1, 2).unwrap();
        let adj = graph.adjacent(1).unwrap();
        assert_eq!(adj.clone().count(), 1);
        assert_eq!(adj.collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_add_edge_out_of_range() {
        let mut graph = Digraph::new(2);
        assert_eq!(
            graph.add_edge(0, 2),
            Err(GraphError::OutOfRange {
                vertex: 2,
                vertex_count: 2
            })
        );
        assert!(graph.add_edge(5, 0).is_err());
        assert!(graph.adjacent(2).is_err());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut graph = Digraph::new(2);
        graph.add_edge(0, 1).unwrap();
        let copy = graph.clone();
        graph.add_edge(1, 0).unwrap();

        assert_eq!(copy.edge_count(), 1);
        assert_eq!(copy.adjacent(1).unwrap().count(), 0);
    }

    #[test]
    fn test_from_record() {
        let record = DigraphRecord {
            vertex_count: 3,
            edges: vec![(0, 1), (1, 2)],
        };
        let graph = Digraph::from_record(&record).unwrap();
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 2)]);

        let bad = DigraphRecord {
            vertex_count: 2,
            edges: vec![(0, 7)],
        };
        assert!(Digraph::from_record(&bad).is_err());
    }

    #[test]
    fn test_from_record_impossible_vertex_count() {
        let record = DigraphRecord {
            vertex_count: usize::MAX,
            edges: Vec::new(),
        };
        assert_eq!(
            Digraph::from_record(&record),
            Err(GraphError::CapacityExceeded {
                vertex_count: usize::MAX
            })
        );
    }

    #[test]
    fn test_to_dot() {
        let mut graph = Digraph::new(3);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(2, 1).unwrap();
        let dot = graph.to_dot();

        assert!(dot.starts_with("digraph"));
        assert!(dot.contains("0 -> 1"));
        assert!(dot.contains("2 -> 1"));
        assert!(!dot.contains("1 -> 0"));
    }

    #[test]
    fn test_to_petgraph() {
        let mut graph = Digraph::new(3);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(2, 1).unwrap();
        let pg = graph.to_petgraph();

        assert_eq!(pg.node_count(), 3);
        assert_eq!(pg.edge_count(), 2);
        assert!(pg.contains_edge(NodeIndex::new(2), NodeIndex::new(1)));
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut graph = Digraph::new(2);
        graph.add_edge(1, 0).unwrap();
        let json = serde_json::to_string(&graph).unwrap();
        let back: Digraph = serde_json::from_str(&json).unwrap();
        assert_eq!(graph, back);
    }
}
