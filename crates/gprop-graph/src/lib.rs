//! gprop Graph - Undirected graph store and property analysis
//!
//! This crate holds the graph built from parsed input and answers
//! structural questions about it: counts, degrees, connectivity,
//! completeness, simple cycles and tree/forest classification.
//!
//! # Architecture
//!
//! [`GraphStore`] owns nodes with ordered neighbor lists and enforces the
//! simple-graph invariants while it is populated. Once built it is only
//! read. Analyses are inherent methods spread over modules:
//! - `analysis`: connectivity, completeness, degrees
//! - `cycles`: simple cycle enumeration with canonical deduplication
//! - `classify`: tree and forest verdicts
//! - `properties`: everything at once, for reporting
//!
//! Node sets use a single 64-bit mask, which caps graphs at
//! [`MAX_NODE_COUNT`] nodes.
//!
//! # Example
//!
//! ```
//! use gprop_graph::{ForestPolicy, GraphStore};
//!
//! let mut graph = GraphStore::new();
//! gprop_core::parse_list("{A,B,C}{(A,B),(B,C),(A,C)}", &mut graph).unwrap();
//!
//! assert!(graph.is_complete());
//! assert_eq!(graph.cycle_count(), 1);
//! assert!(!graph.properties(ForestPolicy::default()).is_tree);
//! ```

mod analysis;
mod classify;
mod cycles;
mod export;
mod graph;
mod node_set;
mod properties;
pub mod traversal;

pub use classify::{Classification, ForestPolicy};
pub use cycles::{Cycle, CycleCounter};
pub use export::GraphExport;
pub use graph::{GraphStore, Node, NodeId, Warning, MAX_NODE_COUNT};
pub use node_set::NodeSet;
pub use properties::GraphProperties;
