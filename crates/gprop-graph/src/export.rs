//! Graph export for visualization and other tools.

use crate::graph::GraphStore;
use petgraph::graph::UnGraph;
use serde::Serialize;
use std::fmt::Display;

/// A simplified graph for JSON export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphExport {
    pub nodes: Vec<String>,
    pub edges: Vec<(String, String)>,
}

impl<K: Display> GraphStore<K> {
    /// Returns node names and edges in store order.
    pub fn export(&self) -> GraphExport {
        let nodes = self.nodes().map(|node| node.key().to_string()).collect();
        let edges = self
            .edges()
            .map(|(a, b)| (self.name(a), self.name(b)))
            .collect();

        GraphExport { nodes, edges }
    }

    /// Copies the graph into a petgraph `UnGraph` with identical node
    /// positions.
    pub fn to_petgraph(&self) -> UnGraph<String, ()> {
        let mut graph = UnGraph::with_capacity(self.node_count(), self.edge_count());
        for node in self.nodes() {
            graph.add_node(node.key().to_string());
        }
        for (a, b) in self.edges() {
            graph.add_edge(a, b, ());
        }
        graph
    }

    /// Renders the graph in Graphviz DOT format.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("graph {\n");
        for node in self.nodes() {
            dot.push_str(&format!("    \"{}\";\n", node.key()));
        }
        for (a, b) in self.edges() {
            dot.push_str(&format!("    \"{}\" -- \"{}\";\n", self.name(a), self.name(b)));
        }
        dot.push_str("}\n");
        dot
    }

    fn name(&self, node: crate::graph::NodeId) -> String {
        self.key(node).map(ToString::to_string).unwrap_or_default()
    }
}
