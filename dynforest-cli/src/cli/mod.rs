//! Command-line interface for replaying edge scripts.
//!
//! The `run` command allocates a forest, applies each script statement in
//! order and collects one output line per statement.

mod commands;
mod script;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, MAX_NODES, RunCommand, render_summary, run_cli,
};
pub use script::{ScriptError, ScriptLine, Selection, Statement, parse_script};
