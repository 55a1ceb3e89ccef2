//! Reading input and building the graph.

use crate::error::{CliError, Result};
use gprop_core::{parse_list, parse_matrix, InputFormat, NodeKey};
use gprop_graph::{Cycle, ForestPolicy, GraphExport, GraphProperties, GraphStore, Warning};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// A graph built from either notation.
///
/// List input names its nodes; matrix input numbers them by row.
pub enum LoadedGraph {
    Named(GraphStore<String>),
    Numbered(GraphStore<usize>),
}

/// Reads `path`, or stdin when it is absent or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            std::fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| CliError::Read {
                    path: Path::new("<stdin>").to_path_buf(),
                    source,
                })?;
            Ok(text)
        }
    }
}

/// Parses `text` in the given notation.
pub fn load_graph(text: &str, format: InputFormat) -> Result<LoadedGraph> {
    let format = format.resolve(text)?;
    debug!(%format, bytes = text.len(), "parsing input");

    let graph = match format {
        InputFormat::Matrix => {
            let mut graph = GraphStore::new();
            parse_matrix(text, &mut graph)?;
            LoadedGraph::Numbered(graph)
        }
        InputFormat::List | InputFormat::Auto => {
            let mut graph = GraphStore::new();
            parse_list(text, &mut graph)?;
            LoadedGraph::Named(graph)
        }
    };

    Ok(graph)
}

impl LoadedGraph {
    pub fn properties(&self, policy: ForestPolicy) -> GraphProperties {
        match self {
            LoadedGraph::Named(graph) => graph.properties(policy),
            LoadedGraph::Numbered(graph) => graph.properties(policy),
        }
    }

    /// Distinct simple cycles, each as node names.
    pub fn named_cycles(&self) -> Vec<Vec<String>> {
        match self {
            LoadedGraph::Named(graph) => name_cycles(graph, graph.cycles()),
            LoadedGraph::Numbered(graph) => name_cycles(graph, graph.cycles()),
        }
    }

    pub fn export(&self) -> GraphExport {
        match self {
            LoadedGraph::Named(graph) => graph.export(),
            LoadedGraph::Numbered(graph) => graph.export(),
        }
    }

    pub fn to_dot(&self) -> String {
        match self {
            LoadedGraph::Named(graph) => graph.to_dot(),
            LoadedGraph::Numbered(graph) => graph.to_dot(),
        }
    }

    pub fn warnings(&self) -> &[Warning] {
        match self {
            LoadedGraph::Named(graph) => graph.warnings(),
            LoadedGraph::Numbered(graph) => graph.warnings(),
        }
    }
}

fn name_cycles<K: NodeKey>(graph: &GraphStore<K>, cycles: Vec<Cycle>) -> Vec<Vec<String>> {
    cycles
        .iter()
        .map(|cycle| {
            cycle
                .nodes()
                .iter()
                .filter_map(|&node| graph.key(node))
                .map(ToString::to_string)
                .collect()
        })
        .collect()
}
