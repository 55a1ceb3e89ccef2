//! Connectivity, completeness and degree queries.
//!
//! All of these are total over a constructed graph.

use crate::graph::{GraphStore, Node, NodeId};
use crate::node_set::NodeSet;
use crate::traversal::{self, depth_first};

impl<K> GraphStore<K> {
    /// True iff a traversal from the first node reaches every node.
    ///
    /// A single node is trivially connected. The empty graph counts as
    /// connected too, although parsers never produce one.
    pub fn is_connected(&self) -> bool {
        if self.is_empty() {
            return true;
        }
        let mut visited = NodeSet::new();
        depth_first(self, NodeId::new(0), &mut visited);
        visited.len() == self.node_count()
    }

    /// True iff every node is adjacent to every other node.
    pub fn is_complete(&self) -> bool {
        let expected = self.node_count().saturating_sub(1);
        self.nodes().all(|node| node.degree() == expected)
    }

    /// True iff some node has no neighbors.
    pub fn has_isolated_node(&self) -> bool {
        self.nodes().any(|node| node.degree() == 0)
    }

    /// Largest degree in the graph, 0 when there are no nodes.
    pub fn max_degree(&self) -> usize {
        self.nodes().map(Node::degree).max().unwrap_or(0)
    }

    /// Smallest degree in the graph, 0 when there are no nodes.
    pub fn min_degree(&self) -> usize {
        self.nodes().map(Node::degree).min().unwrap_or(0)
    }

    pub fn component_count(&self) -> usize {
        traversal::components(self).len()
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

    #[test]
    fn test_single_node() {
        let graph = build(1, &[]);
        assert!(graph.is_connected());
        assert!(graph.is_complete());
        assert!(graph.has_isolated_node());
        assert_eq!(graph.max_degree(), 0);
        assert_eq!(graph.component_count(), 1);
    }

    #[test]
    fn test_empty_graph_queries_are_total() {
        let graph: GraphStore<usize> = GraphStore::new();
        assert!(graph.is_connected());
        assert!(graph.is_complete());
        assert!(!graph.has_isolated_node());
        assert_eq!(graph.max_degree(), 0);
        assert_eq!(graph.component_count(), 0);
    }

    #[test]
    fn test_star() {
        let graph = build(4, &[(0, 1), (0, 2), (0, 3)]);
        assert!(graph.is_connected());
        assert!(!graph.is_complete());
        assert!(!graph.has_isolated_node());
        assert_eq!(graph.max_degree(), 3);
        assert_eq!(graph.min_degree(), 1);
    }

    #[test]
    fn test_disconnected_from_first_node() {
        let graph = build(3, &[(1, 2)]);
        assert!(!graph.is_connected());
        assert!(graph.has_isolated_node());
        assert_eq!(graph.component_count(), 2);
    }

    #[test]
    fn test_complete_graph() {
        let mut edges = Vec::new();
        for a in 0..5 {
            for b in (a + 1)..5 {
                edges.push((a, b));
            }
        }
        let graph = build(5, &edges);

        assert!(graph.is_complete());
        assert_eq!(graph.edge_count(), 10);
        assert_eq!(graph.max_degree(), 4);
    }
}
