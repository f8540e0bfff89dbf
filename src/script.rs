//! Paint scripts: streams of JSON5 operations driven through a [`Session`]
//!
//! A script is one operation per object, either single-line JSONL or JSON5
//! objects spanning several lines:
//!
//! ```text
//! {"op": "paint", "x": 3, "y": 4, "layer": "red"}
//! // comments and trailing commas are fine
//! {op: "brush", delta: -1,}
//! {"op": "special"}
//! {"op": "undo"}
//! ```

use std::io::{BufRead, BufReader, Read};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::{MAX_BRUSH, MIN_BRUSH};
use crate::layers::Layer;
use crate::registry::Registry;
use crate::session::Session;

/// Error type for script parsing and execution.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("line {line}: unknown layer '{name}'")]
    UnknownLayer { line: usize, name: String },
    #[error("line {line}: brush takes exactly one of 'size' or 'delta'")]
    InvalidBrush { line: usize },
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),
}

/// One operation in a paint script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum ScriptOp {
    Paint { x: usize, y: usize, layer: String },
    Erase { x: usize, y: usize, layer: String },
    Special,
    Undo,
    Redo,
    Brush {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        delta: Option<i64>,
    },
}

/// An operation and the line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEntry {
    pub line: usize,
    pub op: ScriptOp,
}

/// Counts of what a script run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    pub operations: usize,
    pub cells_changed: usize,
    /// Undo or redo requests that had nothing to act on.
    pub history_misses: usize,
}

/// Parse a single JSON5 object into an operation.
pub fn parse_op(text: &str, line: usize) -> Result<ScriptOp, ScriptError> {
    json5::from_str(text).map_err(|e| ScriptError::Parse { line, message: e.to_string() })
}

/// Parse a whole script. Stops at the first malformed object.
pub fn parse_script<R: Read>(reader: R) -> Result<Vec<ScriptEntry>, ScriptError> {
    let mut entries = Vec::new();
    let mut accumulator = String::new();
    let mut start_line = 1;
    let mut scanner = Scanner::default();

    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let has_content = scanner.scan_line(&line);

        if accumulator.is_empty() {
            if !has_content {
                continue;
            }
            start_line = i + 1;
        } else {
            accumulator.push('\n');
        }
        accumulator.push_str(&line);

        if scanner.at_boundary() {
            let op = parse_op(&accumulator, start_line)?;
            entries.push(ScriptEntry { line: start_line, op });
            accumulator.clear();
            scanner = Scanner::default();
        }
    }

    if !accumulator.trim().is_empty() {
        return Err(ScriptError::Parse { line: start_line, message: "unterminated object".to_string() });
    }

    log::debug!("parsed {} script operations", entries.len());
    Ok(entries)
}

/// Tracks nesting across lines so objects can be split where they end.
///
/// Brackets only count outside strings and comments. Strings may be
/// delimited by `"` or `'`; comments are `//` to end of line or `/* */`.
#[derive(Debug, Default)]
struct Scanner {
    depth: i32,
    quote: Option<char>,
    escape_next: bool,
    in_block_comment: bool,
}

impl Scanner {
    /// Feed one line. Returns whether it held anything besides whitespace
    /// and comments.
    fn scan_line(&mut self, line: &str) -> bool {
        let mut has_content = false;
        let mut chars = line.chars().peekable();

        while let Some(ch) = chars.next() {
            if self.in_block_comment {
                if ch == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    self.in_block_comment = false;
                }
                continue;
            }

            if let Some(quote) = self.quote {
                if self.escape_next {
                    self.escape_next = false;
                } else if ch == '\\' {
                    self.escape_next = true;
                } else if ch == quote {
                    self.quote = None;
                }
                continue;
            }

            match ch {
                '/' if chars.peek() == Some(&'/') => break,
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    self.in_block_comment = true;
                }
                '"' | '\'' => {
                    self.quote = Some(ch);
                    has_content = true;
                }
                '{' | '[' => {
                    self.depth += 1;
                    has_content = true;
                }
                '}' | ']' => {
                    self.depth -= 1;
                    has_content = true;
                }
                c if c.is_whitespace() => {}
                _ => has_content = true,
            }
        }
        has_content || self.quote.is_some()
    }

    /// True when everything opened so far has been closed.
    fn at_boundary(&self) -> bool {
        self.depth <= 0 && self.quote.is_none() && !self.in_block_comment
    }
}

/// Run every entry against `session`, stopping at the first error.
pub fn run_script(session: &mut Session, entries: &[ScriptEntry]) -> Result<ScriptSummary, ScriptError> {
    let mut summary = ScriptSummary::default();
    for entry in entries {
        apply(session, entry, &mut summary)?;
        summary.operations += 1;
    }
    Ok(summary)
}

fn apply(session: &mut Session, entry: &ScriptEntry, summary: &mut ScriptSummary) -> Result<(), ScriptError> {
    let line = entry.line;
    match &entry.op {
        ScriptOp::Paint { x, y, layer } => {
            let layer = lookup(session, layer, line)?;
            summary.cells_changed += session.paint(&layer, *x, *y);
        }
        ScriptOp::Erase { x, y, layer } => {
            let layer = lookup(session, layer, line)?;
            summary.cells_changed += session.erase(&layer, *x, *y);
        }
        ScriptOp::Special => session.special(),
        ScriptOp::Undo => {
            if !session.undo() {
                log::warn!("line {}: nothing to undo", line);
                summary.history_misses += 1;
            }
        }
        ScriptOp::Redo => {
            if !session.redo() {
                log::warn!("line {}: nothing to redo", line);
                summary.history_misses += 1;
            }
        }
        ScriptOp::Brush { size, delta } => {
            let grid = session.grid_mut();
            match (size, delta) {
                (Some(size), None) => grid.set_brush_size(*size),
                (None, Some(delta)) => {
                    let target = (grid.brush_size() as i64)
                        .saturating_add(*delta)
                        .clamp(MIN_BRUSH as i64, MAX_BRUSH as i64);
                    grid.set_brush_size(target as usize);
                }
                _ => return Err(ScriptError::InvalidBrush { line }),
            }
        }
    }
    Ok(())
}

fn lookup(session: &Session, name: &str, line: usize) -> Result<Layer, ScriptError> {
    session
        .grid()
        .catalog()
        .get(name)
        .cloned()
        .ok_or_else(|| ScriptError::UnknownLayer { line, name: name.to_string() })
}
