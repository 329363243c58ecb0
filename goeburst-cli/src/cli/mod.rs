//! Command-line interface for building goeBURST trees from delimited
//! profile tables.

mod commands;

pub use commands::{Cli, CliError, ExecutionSummary, StrategyArg, render_tree, run_cli};
