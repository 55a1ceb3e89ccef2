//! gprop Core - Errors, node identity and input grammars
//!
//! This crate defines everything that happens before a graph exists:
//! the error taxonomy with its process exit codes, the [`GraphSink`]
//! construction interface, and the parsers for the two accepted input
//! notations.
//!
//! # Example
//!
//! ```
//! use gprop_core::{parse_list, GraphSink, Result};
//!
//! #[derive(Default)]
//! struct Counter {
//!     nodes: usize,
//!     edges: usize,
//! }
//!
//! impl GraphSink<String> for Counter {
//!     fn create_node(&mut self, _key: String) -> Result<()> {
//!         self.nodes += 1;
//!         Ok(())
//!     }
//!     fn create_edge(&mut self, _a: &String, _b: &String) -> Result<()> {
//!         self.edges += 1;
//!         Ok(())
//!     }
//!     fn node_count(&self) -> usize {
//!         self.nodes
//!     }
//! }
//!
//! let mut counter = Counter::default();
//! parse_list("{A,B,C}{(A,B),(B,C)}", &mut counter).unwrap();
//! assert_eq!((counter.nodes, counter.edges), (3, 2));
//! ```

pub mod error;
pub mod parser;
mod sink;

pub use error::{ErrorCode, GraphError, Position, Result, MAX_NODE_NAME_LENGTH};
pub use parser::{detect_format, parse_list, parse_matrix, InputFormat};
pub use sink::{GraphSink, NodeKey};
