//! Command implementations and argument parsing for the `dynforest` CLI.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};
use dynforest_core::{
    EdgeRemoval, Forest, ForestBuilder, ForestError, ForestErrorCode, InsertOutcome, NodeId,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::script::{ScriptError, ScriptLine, Selection, Statement, parse_script};

/// Largest forest the `run` command will allocate.
pub const MAX_NODES: usize = 1 << 24;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "dynforest",
    about = "Replay weighted edge scripts against a maximum spanning forest."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run an edge script and print one result line per statement.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to the edge script.
    pub script: PathBuf,

    /// Number of nodes to allocate; ids run from 0 to N-1.
    #[arg(
        long,
        short = 'n',
        value_parser = RangedU64ValueParser::<usize>::new().range(..=MAX_NODES as u64),
    )]
    pub nodes: usize,

    /// Print the final debug dump after the script completes.
    #[arg(long)]
    pub dump: bool,

    /// Label nodes in dumps as `<prefix><id>` instead of the bare id.
    #[arg(long, value_name = "PREFIX")]
    pub labels: Option<String>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The script file could not be read.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The requested node count exceeds [`MAX_NODES`].
    #[error("cannot allocate {requested} nodes; at most {max} are supported")]
    NodeLimit {
        /// Node count passed to the command.
        requested: usize,
        /// The supported maximum.
        max: usize,
    },
    /// The script is malformed.
    #[error(transparent)]
    Script(#[from] ScriptError),
    /// A statement was rejected by the forest.
    #[error("line {line}: {source}")]
    Forest {
        /// Script line of the rejected statement.
        line: usize,
        /// Error raised by the forest.
        #[source]
        source: ForestError,
    },
}

impl CliError {
    /// Returns the stable forest error code, if the forest rejected a
    /// statement.
    #[must_use]
    pub fn forest_code(&self) -> Option<ForestErrorCode> {
        match self {
            Self::Forest { source, .. } => Some(source.code()),
            Self::Io { .. } | Self::NodeLimit { .. } | Self::Script(_) => None,
        }
    }

    /// Returns the script line the error refers to, if any.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Io { .. } | Self::NodeLimit { .. } => None,
            Self::Script(err) => Some(err.line()),
            Self::Forest { line, .. } => Some(*line),
        }
    }
}

/// Output of a completed script run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionSummary {
    /// Number of nodes the forest was allocated with.
    pub node_count: usize,
    /// One or more lines per statement, in script order.
    pub lines: Vec<String>,
    /// Final debug dump, when requested.
    pub dump: Option<String>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the node count exceeds [`MAX_NODES`], when the
/// script cannot be read or parsed, or when a statement is rejected by the
/// forest.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use dynforest_cli::cli::{Cli, Command, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "insert 0 1 1.0\ncount *\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         script: file.path().to_path_buf(),
///         nodes: 3,
///         dump: false,
///         labels: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.lines, vec!["merged", "2"]);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(script = field::Empty, nodes = command.nodes, statements = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        script,
        nodes,
        dump,
        labels,
    } = command;
    if nodes > MAX_NODES {
        return Err(CliError::NodeLimit {
            requested: nodes,
            max: MAX_NODES,
        });
    }
    let span = Span::current();
    span.record("script", field::display(script.display()));

    let statements = parse_script(&read_script(&script)?)?;
    span.record("statements", statements.len());

    let mut session = Session::new(nodes, labels);
    for statement in &statements {
        session.apply(statement)?;
    }

    info!(
        statements = statements.len(),
        roots = session.forest.roots().count(),
        "script completed"
    );
    Ok(ExecutionSummary {
        node_count: nodes,
        dump: dump.then(|| session.dump()),
        lines: session.lines,
    })
}

#[instrument(name = "cli.read_script", err, fields(path = %path.display()))]
pub(super) fn read_script(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// A forest plus the output produced so far.
struct Session {
    forest: Forest<f64>,
    labels: Option<String>,
    lines: Vec<String>,
}

impl Session {
    fn new(node_count: usize, labels: Option<String>) -> Self {
        Self {
            forest: ForestBuilder::new().with_node_count(node_count).build(),
            labels,
            lines: Vec::new(),
        }
    }

    fn apply(&mut self, script_line: &ScriptLine) -> Result<(), CliError> {
        let line = script_line.line;
        let at_line = move |source| CliError::Forest { line, source };
        let output = match &script_line.statement {
            Statement::Insert { a, b, weight } => {
                match self.forest.insert_edge(*a, *b, *weight).map_err(at_line)? {
                    InsertOutcome::Merged => "merged".to_owned(),
                    InsertOutcome::Replaced { evicted } => {
                        format!("replaced {}-{}", evicted.child(), evicted.parent())
                    }
                    InsertOutcome::Unchanged => "unchanged".to_owned(),
                }
            }
            Statement::Remove { a, b } => match self.forest.remove_edge(*a, *b).map_err(at_line)? {
                EdgeRemoval::DetachedFirst => format!("detached {a}"),
                EdgeRemoval::DetachedSecond => format!("detached {b}"),
                EdgeRemoval::NoEdge => "no-edge".to_owned(),
            },
            Statement::Count(selection) => {
                let count = match selection {
                    Selection::All => self
                        .forest
                        .component_count((0..self.forest.len()).map(NodeId::new)),
                    Selection::Nodes(ids) => self.forest.component_count(ids.iter().copied()),
                };
                count.map_err(at_line)?.to_string()
            }
            Statement::Connected { a, b } => {
                self.forest.is_connected(*a, *b).map_err(at_line)?.to_string()
            }
            Statement::Root(a) => self.forest.find_root(*a).map_err(at_line)?.to_string(),
            Statement::Dump => {
                let dump = self.dump();
                self.lines.extend(dump.lines().map(ToOwned::to_owned));
                return Ok(());
            }
        };
        self.lines.push(output);
        Ok(())
    }

    fn dump(&self) -> String {
        match &self.labels {
            Some(prefix) => self.forest.debug_dump_with(|id| format!("{prefix}{id}")),
            None => self.forest.debug_dump(),
        }
    }
}

/// Renders `summary` to `writer`: the statement output, then the final dump
/// under a `# dump` header when one was requested.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use dynforest_cli::cli::{ExecutionSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     node_count: 2,
///     lines: vec!["merged".into(), "1".into()],
///     dump: Some("id: 1 weight: 1.0, parent: 0 root: 0\n".into()),
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "merged\n1\n# dump\nid: 1 weight: 1.0, parent: 0 root: 0\n",
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    for line in &summary.lines {
        writeln!(writer, "{line}")?;
    }
    if let Some(dump) = &summary.dump {
        writeln!(writer, "# dump")?;
        writer.write_all(dump.as_bytes())?;
    }
    Ok(())
}
