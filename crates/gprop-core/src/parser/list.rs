//! Parser for the `{n1,n2,...}{(a,b),(c,d),...}` notation.
//!
//! The first brace group lists node names, the second lists edges as
//! parenthesised name pairs. Whitespace is allowed between tokens but not
//! inside names. Construction calls are issued as soon as each node or
//! edge has been read, so errors surface in input order.

use super::scanner::Scanner;
use crate::error::{GraphError, Result, MAX_NODE_NAME_LENGTH};
use crate::sink::GraphSink;
use tracing::debug;

// ─────────────────────────────────────────────────────────────────────────────
// Entry point
// ─────────────────────────────────────────────────────────────────────────────

/// Parses list notation and feeds the result into `sink`.
///
/// # Errors
///
/// Returns the first syntax or construction error encountered.
pub fn parse_list<S: GraphSink<String>>(input: &str, sink: &mut S) -> Result<()> {
    let mut parser = ListParser {
        scanner: Scanner::new(input),
    };

    let nodes = parser.node_list(sink)?;
    debug!(nodes, "parsed node list");

    let edges = parser.edge_list(sink)?;
    debug!(edges, "parsed edge list");

    parser.finish()
}

// ─────────────────────────────────────────────────────────────────────────────
// ListParser
// ─────────────────────────────────────────────────────────────────────────────

struct ListParser<'a> {
    scanner: Scanner<'a>,
}

impl<'a> ListParser<'a> {
    /// `{` name (`,` name)* `}`
    fn node_list<S: GraphSink<String>>(&mut self, sink: &mut S) -> Result<usize> {
        self.scanner.skip_whitespace();
        if self.scanner.peek().is_none() {
            return Err(GraphError::NodeCountZero);
        }
        self.expect('{')?;
        self.scanner.skip_whitespace();

        if self.scanner.peek() == Some('}') {
            return Err(GraphError::NodeCountZero);
        }

        let mut count = 0;
        loop {
            let name = self.name()?;
            sink.create_node(name)?;
            count += 1;

            self.scanner.skip_whitespace();
            if self.separator()? {
                self.scanner.skip_whitespace();
            } else {
                return Ok(count);
            }
        }
    }

    /// `{` [ edge (`,` edge)* ] `}`
    fn edge_list<S: GraphSink<String>>(&mut self, sink: &mut S) -> Result<usize> {
        self.scanner.skip_whitespace();
        self.expect('{')?;
        self.scanner.skip_whitespace();

        if self.scanner.peek() == Some('}') {
            self.scanner.bump();
            return Ok(0);
        }

        let mut count = 0;
        loop {
            let (a, b) = self.edge()?;
            sink.create_edge(&a, &b)?;
            count += 1;

            self.scanner.skip_whitespace();
            if self.separator()? {
                self.scanner.skip_whitespace();
            } else {
                return Ok(count);
            }
        }
    }

    /// `(` name `,` name `)`
    fn edge(&mut self) -> Result<(String, String)> {
        self.expect('(')?;
        self.scanner.skip_whitespace();
        let a = self.name()?;
        self.scanner.skip_whitespace();
        self.expect(',')?;
        self.scanner.skip_whitespace();
        let b = self.name()?;
        self.scanner.skip_whitespace();
        self.expect(')')?;
        Ok((a, b))
    }

    /// Reads a run of ASCII letters and digits.
    fn name(&mut self) -> Result<String> {
        let mut name = String::new();

        while let Some(c) = self.scanner.peek() {
            if !c.is_ascii_alphanumeric() {
                break;
            }
            if name.len() == MAX_NODE_NAME_LENGTH {
                return Err(GraphError::NodeNameLengthOverflow {
                    position: self.scanner.position(),
                });
            }
            name.push(c);
            self.scanner.bump();
        }

        if name.is_empty() {
            let position = self.scanner.position();
            return match self.scanner.bump() {
                Some(c) => Err(GraphError::unexpected(c, position)),
                None => Err(GraphError::UnexpectedEof),
            };
        }

        Ok(name)
    }

    /// Consumes `,` (returns true) or the closing `}` (returns false).
    fn separator(&mut self) -> Result<bool> {
        let position = self.scanner.position();
        match self.scanner.bump() {
            Some(',') => Ok(true),
            Some('}') => Ok(false),
            Some(c) => Err(GraphError::unexpected(c, position)),
            None => Err(GraphError::UnexpectedEof),
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        let position = self.scanner.position();
        match self.scanner.bump() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(GraphError::unexpected(c, position)),
            None => Err(GraphError::UnexpectedEof),
        }
    }

    /// Only whitespace may follow the edge list.
    fn finish(&mut self) -> Result<()> {
        self.scanner.skip_whitespace();
        let position = self.scanner.position();
        match self.scanner.bump() {
            Some(c) => Err(GraphError::unexpected(c, position)),
            None => Ok(()),
        }
    }
}
