//! Parser for the adjacency-matrix notation.
//!
//! Each non-blank line is one row of a 0/1 adjacency matrix and introduces
//! one node, identified by its 1-based row number. Row `i` (0-based) holds
//! either the lower triangle including the diagonal (`i + 1` entries) or a
//! full row (`n` entries). Entries may be separated by spaces, tabs or
//! commas.
//!
//! ```text
//! 0
//! 1 0
//! 1 1 0
//! ```

use super::scanner::Scanner;
use crate::error::{GraphError, Position, Result};
use crate::sink::GraphSink;
use tracing::debug;

/// One parsed matrix row.
struct Row {
    start: Position,
    entries: Vec<(bool, Position)>,
}

/// Parses matrix notation and feeds the result into `sink`.
///
/// All nodes are created before any edge. Edges are created from the lower
/// triangle, row by row.
///
/// # Errors
///
/// Syntax errors (bad characters, wrong row lengths, asymmetric full rows)
/// are reported before any construction call is made.
pub fn parse_matrix<S: GraphSink<usize>>(input: &str, sink: &mut S) -> Result<()> {
    let rows = read_rows(input)?;
    if rows.is_empty() {
        return Err(GraphError::NodeCountZero);
    }
    check_shape(&rows)?;

    for id in 1..=rows.len() {
        sink.create_node(id)?;
    }
    debug!(nodes = rows.len(), "parsed matrix rows");

    let mut edges = 0;
    for (i, row) in rows.iter().enumerate() {
        for (j, &(connected, _)) in row.entries.iter().take(i + 1).enumerate() {
            if connected {
                sink.create_edge(&(i + 1), &(j + 1))?;
                edges += 1;
            }
        }
    }
    debug!(edges, "parsed matrix edges");

    Ok(())
}

fn read_rows(input: &str) -> Result<Vec<Row>> {
    let mut scanner = Scanner::new(input);
    let mut rows = Vec::new();

    loop {
        scanner.skip_blanks();
        match scanner.peek() {
            None => break,
            Some('\n') => {
                scanner.bump();
                continue;
            }
            Some(_) => {}
        }

        let mut row = Row {
            start: scanner.position(),
            entries: Vec::new(),
        };

        loop {
            scanner.skip_blanks();
            let position = scanner.position();
            match scanner.peek() {
                Some('0') => row.entries.push((false, position)),
                Some('1') => row.entries.push((true, position)),
                Some(',') => {}
                Some('\n') | None => break,
                Some(c) => return Err(GraphError::unexpected(c, position)),
            }
            scanner.bump();
        }

        if row.entries.is_empty() {
            return Err(GraphError::Malformed {
                message: "row has no entries".to_string(),
                position: row.start,
            });
        }
        rows.push(row);
    }

    Ok(rows)
}

fn check_shape(rows: &[Row]) -> Result<()> {
    let n = rows.len();

    for (i, row) in rows.iter().enumerate() {
        let len = row.entries.len();
        if len != i + 1 && len != n {
            let expected = if i + 1 == n {
                n.to_string()
            } else {
                format!("{} or {}", i + 1, n)
            };
            let noun = if len == 1 { "entry" } else { "entries" };
            return Err(GraphError::Malformed {
                message: format!("row {} has {} {}, expected {}", i + 1, len, noun, expected),
                position: row.start,
            });
        }
    }

    // A full row's upper triangle must mirror the lower one.
    for (i, row) in rows.iter().enumerate() {
        for (j, &(value, position)) in row.entries.iter().enumerate().skip(i + 1) {
            let (mirror, _) = rows[j].entries[i];
            if value != mirror {
                return Err(GraphError::Malformed {
                    message: format!("matrix is not symmetric at row {}, column {}", i + 1, j + 1),
                    position,
                });
            }
        }
    }

    Ok(())
}
