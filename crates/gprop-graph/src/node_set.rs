//! Bitmask set of node positions.

use crate::graph::{NodeId, MAX_NODE_COUNT};

/// A set of [`NodeId`]s stored in a single 64-bit word.
///
/// One bit per node position. The graph capacity is one less than the word
/// width, so every valid position fits. Positions at or beyond
/// [`MAX_NODE_COUNT`] are a caller error and panic in debug builds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NodeSet(u64);

impl NodeSet {
    pub fn new() -> Self {
        Self(0)
    }

    /// Adds `node`, returning `true` if it was not already present.
    pub fn insert(&mut self, node: NodeId) -> bool {
        let bit = Self::bit(node);
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    pub fn remove(&mut self, node: NodeId) {
        self.0 &= !Self::bit(node);
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.0 & Self::bit(node) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates members in ascending position order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> {
        let bits = self.0;
        (0..u64::BITS as usize)
            .filter(move |i| bits & (1u64 << i) != 0)
            .map(NodeId::new)
    }

    fn bit(node: NodeId) -> u64 {
        debug_assert!(
            node.index() < MAX_NODE_COUNT,
            "node position {} outside a {}-node graph",
            node.index(),
            MAX_NODE_COUNT
        );
        1u64 << node.index()
    }
}
