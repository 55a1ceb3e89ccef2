//! Core graph data structure.
//!
//! The GraphStore owns every node and its ordered neighbor list. It's the
//! single input to all analysis; parsers populate it through
//! [`GraphSink`] and nothing mutates it afterwards.

use gprop_core::{GraphError, GraphSink, NodeKey, Result};
use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::{trace, warn};

/// Maximum number of nodes in a graph.
///
/// Node sets are 64-bit masks with one bit kept in reserve.
pub const MAX_NODE_COUNT: usize = u64::BITS as usize - 1;

/// Stable 0-based position of a node, assigned in creation order.
pub type NodeId = NodeIndex;

/// A node and its neighbors in insertion order.
#[derive(Debug, Clone)]
pub struct Node<K> {
    key: K,
    neighbors: Vec<NodeId>,
}

impl<K> Node<K> {
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

/// Non-fatal observations made during construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// The edge was already present; the repeated creation was ignored.
    DuplicateEdge { a: String, b: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::DuplicateEdge { a, b } => {
                write!(f, "edge ({a},{b}) == ({b},{a}) already exists")
            }
        }
    }
}

/// A bounded undirected simple graph.
///
/// Edges are not stored on their own: an edge (A,B) is B in A's neighbor
/// list and A in B's, and both sides are always updated together.
#[derive(Debug, Clone)]
pub struct GraphStore<K> {
    nodes: Vec<Node<K>>,

    /// Maps identities to positions.
    index: HashMap<K, NodeId>,

    warnings: Vec<Warning>,
}

impl<K: NodeKey> Default for GraphStore<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: NodeKey> GraphStore<K> {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds a node with an empty neighbor list.
    ///
    /// # Errors
    ///
    /// `NodeCountOverflow` once [`MAX_NODE_COUNT`] nodes exist,
    /// `NodeNameDuplication` if `key` is already present.
    pub fn create_node(&mut self, key: K) -> Result<NodeId> {
        if self.nodes.len() >= MAX_NODE_COUNT {
            return Err(GraphError::NodeCountOverflow {
                limit: MAX_NODE_COUNT,
            });
        }
        if self.index.contains_key(&key) {
            return Err(GraphError::NodeNameDuplication(key.to_string()));
        }

        let id = NodeId::new(self.nodes.len());
        trace!(node = %key, index = id.index(), "created node");

        self.index.insert(key.clone(), id);
        self.nodes.push(Node {
            key,
            neighbors: Vec::new(),
        });

        Ok(id)
    }

    /// Connects two existing nodes.
    ///
    /// Creating an edge that already exists records a
    /// [`Warning::DuplicateEdge`] and leaves the graph unchanged.
    ///
    /// # Errors
    ///
    /// `NodeEdgeLoop` if both endpoints are the same identity,
    /// `NodeNameNotFound` if either endpoint is absent.
    pub fn create_edge(&mut self, a: &K, b: &K) -> Result<()> {
        if a == b {
            return Err(GraphError::NodeEdgeLoop(a.to_string()));
        }
        let from = self.node_by_identity(a)?;
        let to = self.node_by_identity(b)?;

        if self.contains_edge(from, to) {
            let warning = Warning::DuplicateEdge {
                a: a.to_string(),
                b: b.to_string(),
            };
            warn!("{}", warning);
            self.warnings.push(warning);
            return Ok(());
        }

        self.nodes[from.index()].neighbors.push(to);
        self.nodes[to.index()].neighbors.push(from);
        trace!(%a, %b, "created edge");

        Ok(())
    }

    /// Looks up a node by identity.
    pub fn node_by_identity(&self, key: &K) -> Result<NodeId> {
        self.index
            .get(key)
            .copied()
            .ok_or_else(|| GraphError::NodeNameNotFound(key.to_string()))
    }
}

impl<K> GraphStore<K> {
    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of edges, half the degree sum.
    pub fn edge_count(&self) -> usize {
        self.degree_sum() / 2
    }

    /// Sum of all node degrees.
    pub fn degree_sum(&self) -> usize {
        self.nodes.iter().map(Node::degree).sum()
    }

    /// Gets a node by position.
    pub fn node(&self, node: NodeId) -> Option<&Node<K>> {
        self.nodes.get(node.index())
    }

    /// Gets a node's identity.
    pub fn key(&self, node: NodeId) -> Option<&K> {
        self.node(node).map(Node::key)
    }

    /// Neighbors of `node` in insertion order; empty for unknown positions.
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        match self.node(node) {
            Some(node) => node.neighbors(),
            None => &[],
        }
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbors(node).len()
    }

    /// The `i`-th neighbor of `node`, in insertion order.
    pub fn neighbor(&self, node: NodeId, i: usize) -> Option<NodeId> {
        self.neighbors(node).get(i).copied()
    }

    /// Stable 0-based position of `node`, for bitmask algorithms.
    pub fn node_index(&self, node: NodeId) -> usize {
        node.index()
    }

    pub fn contains_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Iterates over all node positions in creation order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId::new)
    }

    /// Iterates over all nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<K>> {
        self.nodes.iter()
    }

    /// Iterates over every edge once, as `(lower, higher)` positions.
    ///
    /// Edges are grouped by their lower endpoint and follow that node's
    /// neighbor insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.node_ids().flat_map(move |from| {
            self.neighbors(from)
                .iter()
                .filter(move |to| to.index() > from.index())
                .map(move |&to| (from, to))
        })
    }

    /// Warnings recorded during construction.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }
}

impl<K: NodeKey> GraphSink<K> for GraphStore<K> {
    fn create_node(&mut self, key: K) -> Result<()> {
        GraphStore::create_node(self, key).map(|_| ())
    }

    fn create_edge(&mut self, a: &K, b: &K) -> Result<()> {
        GraphStore::create_edge(self, a, b)
    }

    fn node_count(&self) -> usize {
        GraphStore::node_count(self)
    }
}
