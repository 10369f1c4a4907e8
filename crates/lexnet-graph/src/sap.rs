//! Shortest ancestral path queries.
//!
//! An ancestral path between two vertex sets `A` and `B` is a pair of
//! directed paths, one from some `a ∈ A` and one from some `b ∈ B`, that meet
//! at a common ancestor `x`. The shortest such path minimizes
//! `dist(A, x) + dist(B, x)`.
//!
//! A query runs one [`MultiSourceBfs`] per side and then scans every vertex
//! in ascending id order. The scan keeps the first strict minimum, so on a
//! tie the lowest vertex id wins. Each query owns its BFS state; nothing is
//! cached between calls.

use crate::bfs::MultiSourceBfs;
use crate::digraph::{Digraph, Vertex};
use crate::error::GraphResult;
use serde::{Deserialize, Serialize};

/// The winning common ancestor of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AncestralPath {
    /// The common ancestor.
    pub ancestor: Vertex,
    /// Total number of edges on both sides.
    pub length: usize,
    /// Vertices from the first set up to the ancestor and down to the
    /// second set. Always `length + 1` vertices long.
    pub path: Vec<Vertex>,
}

/// Shortest-ancestral-path engine over a borrowed digraph.
///
/// The graph need not be acyclic.
#[derive(Debug, Clone, Copy)]
pub struct ShortestAncestralPath<'g> {
    graph: &'g Digraph,
}

impl<'g> ShortestAncestralPath<'g> {
    /// Creates an engine for `graph`.
    pub fn new(graph: &'g Digraph) -> Self {
        Self { graph }
    }

    /// The graph queries run against.
    pub fn graph(&self) -> &'g Digraph {
        self.graph
    }

    /// Length of the shortest ancestral path between `v` and `w`.
    pub fn length(&self, v: Vertex, w: Vertex) -> GraphResult<Option<usize>> {
        self.length_between([v], [w])
    }

    /// A common ancestor of `v` and `w` on a shortest ancestral path.
    pub fn ancestor(&self, v: Vertex, w: Vertex) -> GraphResult<Option<Vertex>> {
        self.ancestor_between([v], [w])
    }

    /// Length of the shortest ancestral path between any vertex of `v` and
    /// any vertex of `w`.
    pub fn length_between<V, W>(&self, v: V, w: W) -> GraphResult<Option<usize>>
    where
        V: IntoIterator<Item = Vertex>,
        W: IntoIterator<Item = Vertex>,
    {
        Ok(self.search(v, w)?.map(|found| found.length))
    }

    /// The common ancestor chosen by [`length_between`](Self::length_between).
    pub fn ancestor_between<V, W>(&self, v: V, w: W) -> GraphResult<Option<Vertex>>
    where
        V: IntoIterator<Item = Vertex>,
        W: IntoIterator<Item = Vertex>,
    {
        Ok(self.search(v, w)?.map(|found| found.ancestor))
    }

    /// Ancestor, length and the concrete path in one pass.
    pub fn shortest_path<V, W>(&self, v: V, w: W) -> GraphResult<Option<AncestralPath>>
    where
        V: IntoIterator<Item = Vertex>,
        W: IntoIterator<Item = Vertex>,
    {
        let Some(found) = self.search(v, w)? else {
            return Ok(None);
        };

        let mut path = found.from_v.path_to(found.ancestor).unwrap_or_default();
        if let Some(down) = found.from_w.path_to(found.ancestor) {
            path.extend(down.into_iter().rev().skip(1));
        }

        Ok(Some(AncestralPath {
            ancestor: found.ancestor,
            length: found.length,
            path,
        }))
    }

    fn search<V, W>(&self, v: V, w: W) -> GraphResult<Option<Search>>
    where
        V: IntoIterator<Item = Vertex>,
        W: IntoIterator<Item = Vertex>,
    {
        let v: Vec<Vertex> = v.into_iter().collect();
        let w: Vec<Vertex> = w.into_iter().collect();
        for &x in v.iter().chain(&w) {
            self.graph.validate(x)?;
        }

        let from_v = MultiSourceBfs::new(self.graph, v)?;
        let from_w = MultiSourceBfs::new(self.graph, w)?;

        let mut best: Option<(Vertex, usize)> = None;
        for x in 0..self.graph.vertex_count() {
            let (Some(dv), Some(dw)) = (from_v.dist_to(x), from_w.dist_to(x)) else {
                continue;
            };
            let length = dv + dw;
            if best.map_or(true, |(_, shortest)| length < shortest) {
                best = Some((x, length));
            }
        }

        Ok(best.map(|(ancestor, length)| Search {
            ancestor,
            length,
            from_v,
            from_w,
        }))
    }
}

struct Search {
    ancestor: Vertex,
    length: usize,
    from_v: MultiSourceBfs,
    from_w: MultiSourceBfs,
}
