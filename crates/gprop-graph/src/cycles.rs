//! Simple cycle enumeration.
//!
//! A simple cycle is a closed path through at least three distinct nodes.
//! Every cycle is counted once, whichever direction and starting node it
//! is found from.
//!
//! # Algorithm
//!
//! Each node in turn is the start `s` of a depth-first path search. The
//! path never re-enters a node already on it, and never enters a node
//! positioned before `s` (every cycle through such a node was already
//! enumerated when that node was the start). Reaching `s` again with at
//! least three nodes on the path yields a candidate. Each cycle is still
//! found in both directions, so candidates are reduced to a
//! [canonical form](Cycle::canonical) and recorded only once.
//!
//! # Limitations
//!
//! The number of simple cycles grows exponentially with density: the
//! complete graph on `n` nodes has `Σ C(n,k)·(k-1)!/2` of them for
//! `k = 3..=n`. Enumeration is exhaustive and never truncated, so dense
//! graphs near the node limit take a very long time. Recursion depth is
//! bounded by the node limit.

use crate::graph::{GraphStore, NodeId};
use crate::node_set::NodeSet;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// A simple cycle in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cycle(Vec<NodeId>);

impl Cycle {
    /// Builds the canonical form of the closed path `path`.
    ///
    /// The sequence is rotated to begin at its lowest position, then of the
    /// two traversal directions the lexicographically smaller one is kept.
    /// Two paths describe the same cycle iff their canonical forms match.
    pub fn canonical(path: &[NodeId]) -> Cycle {
        let n = path.len();
        let Some(min) = (0..n).min_by_key(|&i| path[i]) else {
            return Cycle(Vec::new());
        };

        let forward: Vec<NodeId> = (0..n).map(|k| path[(min + k) % n]).collect();
        let backward: Vec<NodeId> = (0..n).map(|k| path[(min + n - k) % n]).collect();

        Cycle(forward.min(backward))
    }

    /// Nodes along the cycle, starting from the lowest position.
    pub fn nodes(&self) -> &[NodeId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Cycle {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(|node| node.index()))
    }
}

/// Enumerates and deduplicates simple cycles of one graph.
pub struct CycleCounter<'g, K> {
    graph: &'g GraphStore<K>,
    start: NodeId,
    path: Vec<NodeId>,
    on_path: NodeSet,
    seen: HashSet<Cycle>,
    cycles: Vec<Cycle>,
}

impl<'g, K> CycleCounter<'g, K> {
    pub fn new(graph: &'g GraphStore<K>) -> Self {
        Self {
            graph,
            start: NodeId::new(0),
            path: Vec::new(),
            on_path: NodeSet::new(),
            seen: HashSet::new(),
            cycles: Vec::new(),
        }
    }

    /// Runs the enumeration, returning the distinct cycles in discovery
    /// order.
    pub fn run(mut self) -> Vec<Cycle> {
        for start in self.graph.node_ids() {
            self.start = start;
            self.enter(start);
            self.extend(start);
            self.leave(start);
        }

        debug!(
            cycles = self.cycles.len(),
            nodes = self.graph.node_count(),
            "enumerated simple cycles"
        );
        self.cycles
    }

    fn extend(&mut self, node: NodeId) {
        let graph = self.graph;

        for &next in graph.neighbors(node) {
            if next == self.start {
                if self.path.len() >= 3 {
                    self.record();
                }
                continue;
            }
            if next.index() < self.start.index() || self.on_path.contains(next) {
                continue;
            }

            self.enter(next);
            self.extend(next);
            self.leave(next);
        }
    }

    fn enter(&mut self, node: NodeId) {
        self.path.push(node);
        self.on_path.insert(node);
    }

    fn leave(&mut self, node: NodeId) {
        self.path.pop();
        self.on_path.remove(node);
    }

    fn record(&mut self) {
        let cycle = Cycle::canonical(&self.path);
        if self.seen.insert(cycle.clone()) {
            self.cycles.push(cycle);
        }
    }
}

impl<K> GraphStore<K> {
    /// All distinct simple cycles, in discovery order.
    pub fn cycles(&self) -> Vec<Cycle> {
        CycleCounter::new(self).run()
    }

    /// Number of distinct simple cycles.
    pub fn cycle_count(&self) -> usize {
        self.cycles().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(n: usize, edges: &[(usize, usize)]) -> GraphStore<usize> {
        let mut graph = GraphStore::new();
        for i in 0..n {
            graph.create_node(i).unwrap();
        }
        for (a, b) in edges {
            graph.create_edge(a, b).unwrap();
        }
        graph
    }

    fn complete(n: usize) -> GraphStore<usize> {
        let mut edges = Vec::new();
        for a in 0..n {
            for b in (a + 1)..n {
                edges.push((a, b));
            }
        }
        build(n, &edges)
    }

    fn ids(indexes: &[usize]) -> Vec<NodeId> {
        indexes.iter().map(|&i| NodeId::new(i)).collect()
    }

    #[test]
    fn test_canonical_ignores_direction_and_start() {
        let a = Cycle::canonical(&ids(&[2, 0, 3, 1]));
        let b = Cycle::canonical(&ids(&[1, 3, 0, 2]));
        let c = Cycle::canonical(&ids(&[3, 1, 2, 0]));

        assert_eq!(a.nodes(), ids(&[0, 2, 1, 3]).as_slice());
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_canonical_distinguishes_vertex_order() {
        // same vertex set, different cycles
        let a = Cycle::canonical(&ids(&[0, 1, 2, 3]));
        let b = Cycle::canonical(&ids(&[0, 2, 1, 3]));
        assert_ne!(a, b);
    }

    #[test]
    fn test_tree_has_no_cycles() {
        let graph = build(5, &[(0, 1), (0, 2), (2, 3), (2, 4)]);
        assert_eq!(graph.cycle_count(), 0);
    }

    #[test]
    fn test_single_edge_is_not_a_cycle() {
        let graph = build(2, &[(0, 1)]);
        assert_eq!(graph.cycle_count(), 0);
    }

    #[test]
    fn test_square() {
        let graph = build(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        let cycles = graph.cycles();

        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].nodes(), ids(&[0, 1, 2, 3]).as_slice());
    }

    #[test]
    fn test_complete_graphs() {
        assert_eq!(complete(3).cycle_count(), 1);
        assert_eq!(complete(4).cycle_count(), 7);
        assert_eq!(complete(5).cycle_count(), 37);
    }

    #[test]
    fn test_complete_bipartite_3_3() {
        let mut edges = Vec::new();
        for a in 0..3 {
            for b in 3..6 {
                edges.push((a, b));
            }
        }
        let graph = build(6, &edges);
        let cycles = graph.cycles();

        assert_eq!(cycles.len(), 15);
        assert_eq!(cycles.iter().filter(|c| c.len() == 4).count(), 9);
        assert_eq!(cycles.iter().filter(|c| c.len() == 6).count(), 6);
    }

    #[test]
    fn test_two_triangles_sharing_a_node() {
        let graph = build(5, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)]);
        assert_eq!(graph.cycle_count(), 2);
    }

    #[test]
    fn test_serializes_as_positions() {
        let cycle = Cycle::canonical(&ids(&[2, 1, 0]));
        assert_eq!(serde_json::to_string(&cycle).unwrap(), "[0,1,2]");
    }
}
