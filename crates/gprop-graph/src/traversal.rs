//! Depth-first traversal.
//!
//! The walk keeps an explicit stack of `(node, next neighbor position)`
//! frames. This visits nodes in exactly the order a recursive search
//! would, following neighbor insertion order, without growing the call
//! stack.

use crate::graph::{GraphStore, NodeId};
use crate::node_set::NodeSet;

/// Marks every node reachable from `start` in `visited`.
///
/// Nodes already in `visited` are not entered again. If `start` itself is
/// already marked, nothing happens.
pub fn depth_first<K>(graph: &GraphStore<K>, start: NodeId, visited: &mut NodeSet) {
    walk(graph, start, visited, |_| {});
}

/// Nodes reachable from `start`, in visiting order.
pub fn preorder<K>(graph: &GraphStore<K>, start: NodeId) -> Vec<NodeId> {
    let mut order = Vec::new();
    let mut visited = NodeSet::new();
    walk(graph, start, &mut visited, |node| order.push(node));
    order
}

/// Connected components, each in visiting order, ordered by their first
/// node's position.
pub fn components<K>(graph: &GraphStore<K>) -> Vec<Vec<NodeId>> {
    let mut visited = NodeSet::new();
    let mut components = Vec::new();

    for node in graph.node_ids() {
        if visited.contains(node) {
            continue;
        }
        let mut component = Vec::new();
        walk(graph, node, &mut visited, |n| component.push(n));
        components.push(component);
    }

    components
}

fn walk<K>(
    graph: &GraphStore<K>,
    start: NodeId,
    visited: &mut NodeSet,
    mut on_visit: impl FnMut(NodeId),
) {
    if !visited.insert(start) {
        return;
    }
    on_visit(start);

    let mut stack = vec![(start, 0usize)];
    while let Some(frame) = stack.last_mut() {
        let (node, position) = *frame;
        frame.1 += 1;

        match graph.neighbor(node, position) {
            Some(next) => {
                if visited.insert(next) {
                    on_visit(next);
                    stack.push((next, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
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

    fn indexes(nodes: &[NodeId]) -> Vec<usize> {
        nodes.iter().map(|n| n.index()).collect()
    }

    #[test]
    fn test_follows_insertion_order() {
        // 0 - 2 - 3
        //  \
        //   1
        let graph = build(4, &[(0, 2), (0, 1), (2, 3)]);
        assert_eq!(indexes(&preorder(&graph, NodeId::new(0))), vec![0, 2, 3, 1]);
    }

    #[test]
    fn test_cycle_terminates() {
        let graph = build(3, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(indexes(&preorder(&graph, NodeId::new(1))), vec![1, 0, 2]);
    }

    #[test]
    fn test_visited_set_is_respected() {
        let graph = build(3, &[(0, 1), (1, 2)]);
        let mut visited = NodeSet::new();
        visited.insert(NodeId::new(1));

        depth_first(&graph, NodeId::new(0), &mut visited);

        assert!(visited.contains(NodeId::new(0)));
        assert!(!visited.contains(NodeId::new(2)));
    }

    #[test]
    fn test_components() {
        let graph = build(5, &[(3, 1), (0, 4)]);
        let components: Vec<Vec<usize>> = components(&graph).iter().map(|c| indexes(c)).collect();
        assert_eq!(components, vec![vec![0, 4], vec![1, 3], vec![2]]);
    }
}
