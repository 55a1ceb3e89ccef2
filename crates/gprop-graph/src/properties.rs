//! The full property report for a graph.

use crate::classify::{Classification, ForestPolicy};
use crate::graph::GraphStore;
use serde::Serialize;
use tracing::debug;

/// Every structural property gprop reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphProperties {
    pub node_count: usize,
    pub edge_count: usize,
    pub max_degree: usize,
    pub has_isolated_node: bool,
    pub is_connected: bool,
    pub is_complete: bool,
    pub is_tree: bool,
    pub is_forest: bool,
    pub cycle_count: usize,
    pub component_count: usize,
}

impl<K> GraphStore<K> {
    /// Computes all properties, enumerating cycles once.
    pub fn properties(&self, policy: ForestPolicy) -> GraphProperties {
        let cycle_count = self.cycle_count();
        let is_connected = self.is_connected();
        let Classification { tree, forest } =
            Classification::new(cycle_count, is_connected, policy);

        let properties = GraphProperties {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            max_degree: self.max_degree(),
            has_isolated_node: self.has_isolated_node(),
            is_connected,
            is_complete: self.is_complete(),
            is_tree: tree,
            is_forest: forest,
            cycle_count,
            component_count: self.component_count(),
        };
        debug!(?properties, %policy, "analyzed graph");

        properties
    }
}
