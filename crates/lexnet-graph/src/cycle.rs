//! Directed cycle detection.
//!
//! Depth-first search from every unvisited vertex, tracking which vertices
//! sit on the current exploration path. An edge into a vertex still on the
//! path closes a cycle. The search uses an explicit stack, so graph depth is
//! bounded by heap memory rather than the call stack.

use crate::digraph::{Digraph, Vertex};

/// Finds a directed cycle in a digraph, if one exists.
#[derive(Debug, Clone)]
pub struct CycleDetector {
    cycle: Option<Vec<Vertex>>,
}

impl CycleDetector {
    /// Runs the search over every vertex of `graph`.
    pub fn new(graph: &Digraph) -> Self {
        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut on_stack = vec![false; n];
        let mut edge_to = vec![0; n];

        // (vertex, index of the next neighbor to explore)
        let mut stack: Vec<(Vertex, usize)> = Vec::new();

        for source in 0..n {
            if marked[source] {
                continue;
            }
            marked[source] = true;
            on_stack[source] = true;
            stack.push((source, 0));

            while let Some(frame) = stack.last_mut() {
                let v = frame.0;
                let neighbors = graph.neighbors(v);

                if frame.1 == neighbors.len() {
                    on_stack[v] = false;
                    stack.pop();
                    continue;
                }

                let w = neighbors[frame.1];
                frame.1 += 1;

                if !marked[w] {
                    edge_to[w] = v;
                    marked[w] = true;
                    on_stack[w] = true;
                    stack.push((w, 0));
                } else if on_stack[w] {
                    return Self {
                        cycle: Some(trace_cycle(&edge_to, v, w)),
                    };
                }
            }
        }

        Self { cycle: None }
    }

    /// Returns true if the graph has a directed cycle.
    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// One directed cycle, first vertex repeated at the end.
    pub fn cycle(&self) -> Option<&[Vertex]> {
        self.cycle.as_deref()
    }

    /// Consumes the detector, returning the cycle.
    pub fn into_cycle(self) -> Option<Vec<Vertex>> {
        self.cycle
    }
}

/// Shorthand for `CycleDetector::new(graph).has_cycle()`.
pub fn has_cycle(graph: &Digraph) -> bool {
    CycleDetector::new(graph).has_cycle()
}

/// Walks the DFS tree from `v` back up to `w`, which is still on the stack.
fn trace_cycle(edge_to: &[Vertex], v: Vertex, w: Vertex) -> Vec<Vertex> {
    let mut cycle = Vec::new();
    let mut x = v;
    while x != w {
        cycle.push(x);
        x = edge_to[x];
    }
    cycle.push(w);
    cycle.reverse();
    cycle.push(w);
    cycle
}
