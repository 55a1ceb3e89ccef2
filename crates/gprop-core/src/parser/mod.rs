//! Input grammars.
//!
//! Two textual notations are accepted:
//!
//! - **List**: `{A,B,C}{(A,B),(B,C)}`, nodes identified by name.
//! - **Matrix**: one 0/1 adjacency row per line, nodes identified by row
//!   number.
//!
//! Both drive a [`GraphSink`](crate::GraphSink) and never build a graph
//! themselves.

mod list;
mod matrix;
mod scanner;

pub use list::parse_list;
pub use matrix::parse_matrix;

use crate::error::{GraphError, Position, Result};
use serde::{Deserialize, Serialize};

/// Which grammar to use for an input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFormat {
    /// Decide from the first non-whitespace character.
    #[default]
    Auto,
    List,
    Matrix,
}

impl InputFormat {
    /// Resolves `Auto` against the given input; other formats pass through.
    pub fn resolve(self, input: &str) -> Result<InputFormat> {
        match self {
            InputFormat::Auto => detect_format(input),
            other => Ok(other),
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Auto => "auto",
            Self::List => "list",
            Self::Matrix => "matrix",
        };
        write!(f, "{}", s)
    }
}

/// Guesses the notation of `input`.
///
/// `{` starts list notation, `0` or `1` starts a matrix. Blank input has
/// no nodes at all.
pub fn detect_format(input: &str) -> Result<InputFormat> {
    let mut line = 1;
    let mut column = 1;

    for c in input.chars() {
        match c {
            '{' => return Ok(InputFormat::List),
            '0' | '1' => return Ok(InputFormat::Matrix),
            '\n' => {
                line += 1;
                column = 1;
            }
            c if c.is_ascii_whitespace() => column += 1,
            c => return Err(GraphError::unexpected(c, Position::new(line, column))),
        }
    }

    Err(GraphError::NodeCountZero)
}
