//! Error types for graph construction and parsing.
//!
//! Every failure maps onto a numeric [`ErrorCode`], which the command line
//! uses as its process exit code.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Maximum number of characters in a node name.
pub const MAX_NODE_NAME_LENGTH: usize = 256;

/// Numeric error kinds surfaced at the process boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    SyntaxError = 1,
    NodeCountZero = 2,
    NodeCountOverflow = 3,
    NodeNameLengthOverflow = 4,
    NodeNameDuplication = 5,
    NodeNameNotFound = 6,
    NodeEdgeLoop = 7,
    InternalError = 99,
}

impl ErrorCode {
    /// The process exit code for this kind of error.
    pub fn exit_code(self) -> i32 {
        self as i32
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::SyntaxError => "syntax_error",
            ErrorCode::NodeCountZero => "node_count_zero",
            ErrorCode::NodeCountOverflow => "node_count_overflow",
            ErrorCode::NodeNameLengthOverflow => "node_name_length_overflow",
            ErrorCode::NodeNameDuplication => "node_name_duplication",
            ErrorCode::NodeNameNotFound => "node_name_not_found",
            ErrorCode::NodeEdgeLoop => "node_edge_loop",
            ErrorCode::InternalError => "internal_error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A 1-based position in the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors raised while reading or constructing a graph.
///
/// All of these are fatal. Analysis queries never fail once construction
/// has succeeded.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("unexpected {found} at position {position}")]
    UnexpectedChar { found: String, position: Position },

    #[error("graph is not finished, unexpected end of input")]
    UnexpectedEof,

    #[error("{message} at position {position}")]
    Malformed { message: String, position: Position },

    #[error("graph node list is empty")]
    NodeCountZero,

    #[error("node limit reached ({limit})")]
    NodeCountOverflow { limit: usize },

    #[error(
        "node name length overflow (max {} characters) at position {position}",
        MAX_NODE_NAME_LENGTH
    )]
    NodeNameLengthOverflow { position: Position },

    #[error("node with name '{0}' already exists")]
    NodeNameDuplication(String),

    #[error("node with name '{0}' not found")]
    NodeNameNotFound(String),

    #[error("node '{0}' cannot have an edge to itself")]
    NodeEdgeLoop(String),
}

impl GraphError {
    /// Builds an "unexpected character" error, rendering newlines readably.
    pub fn unexpected(found: char, position: Position) -> Self {
        let found = match found {
            '\n' | '\r' => "end of line".to_string(),
            c => format!("'{}'", c),
        };
        GraphError::UnexpectedChar { found, position }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            GraphError::UnexpectedChar { .. }
            | GraphError::UnexpectedEof
            | GraphError::Malformed { .. } => ErrorCode::SyntaxError,
            GraphError::NodeCountZero => ErrorCode::NodeCountZero,
            GraphError::NodeCountOverflow { .. } => ErrorCode::NodeCountOverflow,
            GraphError::NodeNameLengthOverflow { .. } => ErrorCode::NodeNameLengthOverflow,
            GraphError::NodeNameDuplication(_) => ErrorCode::NodeNameDuplication,
            GraphError::NodeNameNotFound(_) => ErrorCode::NodeNameNotFound,
            GraphError::NodeEdgeLoop(_) => ErrorCode::NodeEdgeLoop,
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
