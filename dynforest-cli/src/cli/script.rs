//! Line-oriented edge script parsing.
//!
//! One statement per line; tokens are separated by whitespace. Blank lines and
//! lines whose first non-blank character is `#` are skipped. Line numbers are
//! 1-based and refer to the raw input.

use dynforest_core::NodeId;
use thiserror::Error;

/// A single script statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `insert <a> <b> <weight>`
    Insert {
        /// First endpoint; the forest is everted at this node.
        a: NodeId,
        /// Second endpoint.
        b: NodeId,
        /// Edge weight.
        weight: f64,
    },
    /// `remove <a> <b>`
    Remove {
        /// First endpoint.
        a: NodeId,
        /// Second endpoint.
        b: NodeId,
    },
    /// `count <ids...>` or `count *`
    Count(Selection),
    /// `connected <a> <b>`
    Connected {
        /// First node.
        a: NodeId,
        /// Second node.
        b: NodeId,
    },
    /// `root <a>`
    Root(NodeId),
    /// `dump`
    Dump,
}

/// Nodes selected by a `count` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every allocated node.
    All,
    /// An explicit list, duplicates allowed.
    Nodes(Vec<NodeId>),
}

/// A parsed statement with its 1-based source line.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    /// Line number in the source text.
    pub line: usize,
    /// The statement on that line.
    pub statement: Statement,
}

/// Errors raised while parsing a script.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// The first token is not a known command.
    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand {
        /// Offending line.
        line: usize,
        /// Token that was not recognised.
        command: String,
    },
    /// A command received the wrong number of arguments.
    #[error("line {line}: `{command}` expects {expected}, found {found} argument(s)")]
    Arity {
        /// Offending line.
        line: usize,
        /// Command name.
        command: &'static str,
        /// Human description of the accepted arguments.
        expected: &'static str,
        /// Number of arguments supplied.
        found: usize,
    },
    /// A node id is not a non-negative integer.
    #[error("line {line}: invalid node id `{raw}`")]
    InvalidNode {
        /// Offending line.
        line: usize,
        /// Token that failed to parse.
        raw: String,
    },
    /// A weight is not a number, or is NaN.
    #[error("line {line}: invalid weight `{raw}`")]
    InvalidWeight {
        /// Offending line.
        line: usize,
        /// Token that failed to parse.
        raw: String,
    },
}

impl ScriptError {
    /// Returns the line the error was raised on.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::UnknownCommand { line, .. }
            | Self::Arity { line, .. }
            | Self::InvalidNode { line, .. }
            | Self::InvalidWeight { line, .. } => *line,
        }
    }
}

/// Parses `source` into statements, stopping at the first malformed line.
///
/// # Errors
/// Returns [`ScriptError`] describing the first line that fails to parse.
///
/// # Examples
/// ```
/// use dynforest_cli::cli::{Selection, Statement, parse_script};
///
/// let script = parse_script("# demo\ninsert 0 1 2.5\n\ncount *\n")?;
/// assert_eq!(script.len(), 2);
/// assert_eq!(script[0].line, 2);
/// assert_eq!(script[1].statement, Statement::Count(Selection::All));
/// # Ok::<(), dynforest_cli::cli::ScriptError>(())
/// ```
pub fn parse_script(source: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    source
        .lines()
        .enumerate()
        .filter_map(|(index, text)| {
            let trimmed = text.trim();
            (!trimmed.is_empty() && !trimmed.starts_with('#')).then_some((index + 1, trimmed))
        })
        .map(|(line, text)| {
            parse_statement(line, text).map(|statement| ScriptLine { line, statement })
        })
        .collect()
}

fn parse_statement(line: usize, text: &str) -> Result<Statement, ScriptError> {
    let mut tokens = text.split_whitespace();
    let command = tokens.next().unwrap_or_default();
    let args: Vec<&str> = tokens.collect();

    match (command, args.as_slice()) {
        ("insert", [a, b, weight]) => Ok(Statement::Insert {
            a: parse_node(line, a)?,
            b: parse_node(line, b)?,
            weight: parse_weight(line, weight)?,
        }),
        ("insert", _) => Err(arity(line, "insert", "3 arguments", args.len())),
        ("remove", [a, b]) => Ok(Statement::Remove {
            a: parse_node(line, a)?,
            b: parse_node(line, b)?,
        }),
        ("remove", _) => Err(arity(line, "remove", "2 arguments", args.len())),
        ("connected", [a, b]) => Ok(Statement::Connected {
            a: parse_node(line, a)?,
            b: parse_node(line, b)?,
        }),
        ("connected", _) => Err(arity(line, "connected", "2 arguments", args.len())),
        ("root", [a]) => Ok(Statement::Root(parse_node(line, a)?)),
        ("root", _) => Err(arity(line, "root", "1 argument", args.len())),
        ("count", ["*"]) => Ok(Statement::Count(Selection::All)),
        ("count", []) => Err(arity(line, "count", "`*` or at least 1 node id", 0)),
        ("count", ids) => ids
            .iter()
            .map(|raw| parse_node(line, raw))
            .collect::<Result<Vec<_>, _>>()
            .map(|ids| Statement::Count(Selection::Nodes(ids))),
        ("dump", []) => Ok(Statement::Dump),
        ("dump", _) => Err(arity(line, "dump", "no arguments", args.len())),
        (other, _) => Err(ScriptError::UnknownCommand {
            line,
            command: other.to_owned(),
        }),
    }
}

fn arity(line: usize, command: &'static str, expected: &'static str, found: usize) -> ScriptError {
    ScriptError::Arity {
        line,
        command,
        expected,
        found,
    }
}

fn parse_node(line: usize, raw: &str) -> Result<NodeId, ScriptError> {
    raw.parse::<usize>()
        .map(NodeId::new)
        .map_err(|_| ScriptError::InvalidNode {
            line,
            raw: raw.to_owned(),
        })
}

fn parse_weight(line: usize, raw: &str) -> Result<f64, ScriptError> {
    match raw.parse::<f64>() {
        Ok(weight) if !weight.is_nan() => Ok(weight),
        _ => Err(ScriptError::InvalidWeight {
            line,
            raw: raw.to_owned(),
        }),
    }
}
