//! The narrow construction interface between parsers and graph stores.

use crate::error::Result;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// An opaque, comparable node identity.
///
/// The list notation identifies nodes by name (`String`); the matrix
/// notation identifies them by their 1-based row number (`usize`).
pub trait NodeKey: Clone + Eq + Hash + Display + Debug {}

impl<T> NodeKey for T where T: Clone + Eq + Hash + Display + Debug {}

/// Receives construction calls from a parser.
///
/// Implementors enforce the graph invariants (unique identities, no
/// self-loops, bounded capacity) and report violations as errors. Parsers
/// stop at the first error.
pub trait GraphSink<K: NodeKey> {
    /// Adds a node with the given identity.
    fn create_node(&mut self, key: K) -> Result<()>;

    /// Adds an undirected edge between two existing nodes.
    fn create_edge(&mut self, a: &K, b: &K) -> Result<()>;

    /// Number of nodes created so far.
    fn node_count(&self) -> usize;
}
