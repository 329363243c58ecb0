//! CLI entry point for the goeburst tool.
//!
//! Parses arguments, builds the spanning tree, writes one edge per line to
//! stdout and maps failures to a non-zero exit code. Logging is initialised
//! first so every later step can emit structured diagnostics.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use goeburst_cli::{
    cli::{Cli, CliError, render_tree, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Parse arguments, run the pipeline, render the tree and flush stdout.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to build the goeBURST tree")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_tree(&summary, &mut writer).context("failed to render tree")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let (code, profile_code) = err
            .downcast_ref::<CliError>()
            .map(|cli_error| match cli_error {
                CliError::Core(core) => (
                    Some(core.code().as_str()),
                    core.profile_code().map(|code| code.as_str()),
                ),
                CliError::Delimited(delimited) => (Some(delimited.code().as_str()), None),
                _ => (None, None),
            })
            .unwrap_or((None, None));

        error!(
            error = %err,
            code = code.map(field::display),
            profile_code = profile_code.map(field::display),
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
