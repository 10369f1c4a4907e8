//! Multi-source breadth-first search.
//!
//! Every source starts at distance 0 and the frontier grows level by level
//! along edge direction. The first visit of a vertex fixes its distance,
//! which is therefore the length of a shortest path from the nearest source.

use crate::digraph::{Digraph, Vertex};
use crate::error::GraphResult;
use std::collections::VecDeque;

/// Shortest-path distances from a set of sources.
#[derive(Debug, Clone)]
pub struct MultiSourceBfs {
    dist_to: Vec<Option<usize>>,
    edge_to: Vec<Option<Vertex>>,
}

impl MultiSourceBfs {
    /// Runs the search from `sources`.
    ///
    /// Every source is checked before the search starts, so an out-of-range
    /// id fails without partial work. An empty source set is valid and
    /// reaches nothing.
    pub fn new<I>(graph: &Digraph, sources: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = Vertex>,
    {
        let sources: Vec<Vertex> = sources.into_iter().collect();
        for &s in &sources {
            graph.validate(s)?;
        }

        let n = graph.vertex_count();
        let mut dist_to = vec![None; n];
        let mut edge_to = vec![None; n];
        let mut queue = VecDeque::with_capacity(sources.len());

        for s in sources {
            if dist_to[s].is_none() {
                dist_to[s] = Some(0);
                queue.push_back(s);
            }
        }

        while let Some(v) = queue.pop_front() {
            let next = dist_to[v].map_or(0, |d| d + 1);
            for &w in graph.neighbors(v) {
                if dist_to[w].is_none() {
                    dist_to[w] = Some(next);
                    edge_to[w] = Some(v);
                    queue.push_back(w);
                }
            }
        }

        Ok(Self { dist_to, edge_to })
    }

    /// Is there a path from some source to `v`?
    ///
    /// Ids outside the graph are simply unreachable.
    pub fn has_path_to(&self, v: Vertex) -> bool {
        self.dist_to(v).is_some()
    }

    /// Length of a shortest path from the nearest source to `v`.
    pub fn dist_to(&self, v: Vertex) -> Option<usize> {
        self.dist_to.get(v).copied().flatten()
    }

    /// A shortest path from the nearest source to `v`, source first.
    pub fn path_to(&self, v: Vertex) -> Option<Vec<Vertex>> {
        self.dist_to(v)?;

        let mut path = vec![v];
        let mut x = v;
        while let Some(prev) = self.edge_to[x] {
            path.push(prev);
            x = prev;
        }
        path.reverse();
        Some(path)
    }

    /// Iterates over every reachable vertex with its distance, by ascending id.
    pub fn reachable(&self) -> impl Iterator<Item = (Vertex, usize)> + '_ {
        self.dist_to
            .iter()
            .enumerate()
            .filter_map(|(v, d)| d.map(|d| (v, d)))
    }

    /// Number of vertices the search covered.
    pub fn vertex_count(&self) -> usize {
        self.dist_to.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use petgraph::algo::dijkstra;
    use petgraph::graph::NodeIndex;

    fn graph(n: usize, edges: &[(Vertex, Vertex)]) -> Digraph {
        let mut g = Digraph::new(n);
        for &(v, w) in edges {
            g.add_edge(v, w).unwrap();
        }
        g
    }

    /// Brute force: unit-weight Dijkstra from each source, minimum per vertex.
    fn oracle(g: &Digraph, sources: &[Vertex]) -> Vec<Option<usize>> {
        let pg = g.to_petgraph();
        let mut best = vec![None; g.vertex_count()];
        for &s in sources {
            for (node, d) in dijkstra(&pg, NodeIndex::new(s), None, |_| 1usize) {
                let slot: &mut Option<usize> = &mut best[node.index()];
                *slot = Some(slot.map_or(d, |cur| cur.min(d)));
            }
        }
        best
    }

    fn wordnet_like() -> Digraph {
        // A small slice of a hypernym DAG with a shared grandparent
        graph(
            12,
            &[
                (1, 0),
                (2, 1),
                (3, 1),
                (4, 3),
                (5, 3),
                (6, 5),
                (7, 2),
                (8, 7),
                (9, 7),
                (10, 5),
                (10, 8),
                (11, 10),
                (6, 9),
            ],
        )
    }

    #[test]
    fn test_single_source_chain() {
        let g = graph(4, &[(0, 1), (1, 2), (2, 3)]);
        let bfs = MultiSourceBfs::new(&g, [0]).unwrap();

        assert_eq!(bfs.dist_to(0), Some(0));
        assert_eq!(bfs.dist_to(3), Some(3));
        assert_eq!(bfs.path_to(3), Some(vec![0, 1, 2, 3]));
    }

    #[test]
    fn test_edge_direction_is_respected() {
        let g = graph(3, &[(0, 1), (1, 2)]);
        let bfs = MultiSourceBfs::new(&g, [1]).unwrap();

        assert!(!bfs.has_path_to(0));
        assert_eq!(bfs.dist_to(0), None);
        assert_eq!(bfs.path_to(0), None);
        assert!(bfs.has_path_to(2));
    }

    #[test]
    fn test_multiple_sources_take_nearest() {
        let g = graph(5, &[(0, 1), (1, 2), (2, 3), (4, 3)]);
        let bfs = MultiSourceBfs::new(&g, [0, 4]).unwrap();

        assert_eq!(bfs.dist_to(0), Some(0));
        assert_eq!(bfs.dist_to(4), Some(0));
        assert_eq!(bfs.dist_to(3), Some(1));
        assert_eq!(bfs.path_to(3), Some(vec![4, 3]));
    }

    #[test]
    fn test_empty_sources_reach_nothing() {
        let g = graph(3, &[(0, 1)]);
        let bfs = MultiSourceBfs::new(&g, Vec::new()).unwrap();

        assert_eq!(bfs.reachable().count(), 0);
        assert_eq!(bfs.vertex_count(), 3);
    }

    #[test]
    fn test_duplicate_sources() {
        let g = graph(2, &[(0, 1)]);
        let bfs = MultiSourceBfs::new(&g, [0, 0, 0]).unwrap();
        assert_eq!(bfs.reachable().collect::<Vec<_>>(), vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn test_invalid_source() {
        let g = graph(3, &[]);
        let err = MultiSourceBfs::new(&g, [1, 3]).unwrap_err();
        assert_eq!(
            err,
            GraphError::OutOfRange {
                vertex: 3,
                vertex_count: 3
            }
        );
    }

    #[test]
    fn test_out_of_range_query_is_unreachable() {
        let g = graph(2, &[(0, 1)]);
        let bfs = MultiSourceBfs::new(&g, [0]).unwrap();
        assert!(!bfs.has_path_to(99));
    }

    #[test]
    fn test_cycles_terminate() {
        let g = graph(3, &[(0, 1), (1, 2), (2, 0), (1, 1)]);
        let bfs = MultiSourceBfs::new(&g, [2]).unwrap();
        assert_eq!(bfs.dist_to(1), Some(2));
        assert_eq!(bfs.dist_to(2), Some(0));
    }

    #[test]
    fn test_matches_brute_force() {
        let g = wordnet_like();
        let source_sets: Vec<Vec<Vertex>> = vec![
            vec![11],
            vec![6],
            vec![6, 11],
            vec![4, 9],
            vec![0],
            (0..12).collect(),
        ];

        for sources in source_sets {
            let bfs = MultiSourceBfs::new(&g, sources.iter().copied()).unwrap();
            let expected = oracle(&g, &sources);
            for v in 0..g.vertex_count() {
                assert_eq!(bfs.dist_to(v), expected[v], "sources {:?}, vertex {}", sources, v);
            }
        }
    }

    #[test]
    fn test_paths_have_reported_length() {
        let g = wordnet_like();
        let bfs = MultiSourceBfs::new(&g, [6, 11]).unwrap();
        for (v, d) in bfs.reachable() {
            let path = bfs.path_to(v).unwrap();
            assert_eq!(path.len(), d + 1);
            assert!([6, 11].contains(&path[0]));
            assert_eq!(*path.last().unwrap(), v);
        }
    }
}
