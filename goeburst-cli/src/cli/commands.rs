//! Argument parsing and command execution for the goeburst CLI.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use goeburst_core::{
    DegeneratePolicy, ExecutionStrategy, GoeburstBuilder, GoeburstError, GoeburstResult,
    ProfileSource,
};
use goeburst_providers_delimited::{
    DelimitedFormat, DelimitedProfileProvider, DelimitedProviderError,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "goeburst",
    about = "Build a goeBURST minimum spanning tree from allelic profiles."
)]
pub struct Cli {
    /// Delimited profile table, one profile per line and one locus per column.
    pub input: PathBuf,

    /// Cell delimiter: a single ASCII character, or `tab`.
    #[arg(long, default_value = "\t")]
    pub delimiter: String,

    /// Cell value marking a locus as absent.
    #[arg(long = "absent-sentinel", default_value = "0")]
    pub absent_sentinel: String,

    /// Treat the first non-blank line as locus names.
    #[arg(long)]
    pub header: bool,

    /// Override name for the data source (defaults to the file stem).
    #[arg(long)]
    pub name: Option<String>,

    /// How the distance sweep and the edge sort are executed.
    #[arg(long, value_enum, default_value_t = StrategyArg::Auto)]
    pub strategy: StrategyArg,

    /// Fail instead of treating profiles without a shared locus as identical.
    #[arg(long = "reject-degenerate")]
    pub reject_degenerate: bool,
}

/// Execution strategies selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Let the library choose.
    Auto,
    /// Run everything on the calling thread.
    Serial,
    /// Use the Rayon pool.
    Parallel,
}

impl From<StrategyArg> for ExecutionStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Auto => Self::Auto,
            StrategyArg::Serial => Self::Serial,
            StrategyArg::Parallel => Self::Parallel,
        }
    }
}

/// Errors surfaced while executing the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Opening the input failed.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading the profile table failed.
    #[error(transparent)]
    Delimited(#[from] DelimitedProviderError),
    /// Building the tree failed.
    #[error(transparent)]
    Core(#[from] GoeburstError),
    /// The delimiter argument was not a single ASCII character.
    #[error("delimiter must be a single ASCII character or `tab`, got `{provided}`")]
    InvalidDelimiter {
        /// Raw value supplied by the user.
        provided: String,
    },
}

/// Outcome of one CLI run.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name reported by the profile source.
    pub data_source: String,
    /// Locus names from the header, when present.
    pub locus_names: Option<Vec<String>>,
    /// Spanning tree and supporting histograms.
    pub result: GoeburstResult,
}

/// Loads the profile table named by `cli` and builds its goeBURST tree.
///
/// # Errors
/// Returns [`CliError`] when the arguments are invalid, the input cannot be
/// read, or the pipeline fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::ffi::OsStr;
/// # use clap::Parser;
/// # use goeburst_cli::cli::{Cli, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "A\tB\nA\tC\nX\tC\n")?;
/// let cli = Cli::try_parse_from([OsStr::new("goeburst"), file.path().as_os_str()])?;
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.result.tree().edges().len(), 2);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(path = %cli.input.display(), strategy = ?cli.strategy, profiles = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let format = DelimitedFormat::default()
        .with_delimiter(parse_delimiter(&cli.delimiter)?)
        .with_absent_sentinel(cli.absent_sentinel)
        .with_header(cli.header);
    let policy = if cli.reject_degenerate {
        DegeneratePolicy::Reject
    } else {
        DegeneratePolicy::ZeroDistance
    };
    let goeburst = GoeburstBuilder::new()
        .with_execution_strategy(cli.strategy.into())
        .with_degenerate_policy(policy)
        .build()?;

    let name = derive_data_source_name(&cli.input, cli.name.as_deref());
    let provider = load_profiles(&cli.input, name, &format)?;
    Span::current().record("profiles", provider.len());

    let result = goeburst.run(&provider)?;
    info!(
        data_source = provider.name(),
        edges = result.tree().edges().len(),
        degenerate_pairs = result.degenerate_pairs().len(),
        "command completed"
    );
    Ok(ExecutionSummary {
        data_source: provider.name().to_owned(),
        locus_names: provider.locus_names().map(<[String]>::to_vec),
        result,
    })
}

#[instrument(name = "cli.load_profiles", err, skip(name, format))]
pub(super) fn load_profiles(
    path: &Path,
    name: String,
    format: &DelimitedFormat,
) -> Result<DelimitedProfileProvider, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(DelimitedProfileProvider::try_from_reader(name, file, format)?)
}

pub(super) fn parse_delimiter(raw: &str) -> Result<u8, CliError> {
    if raw.eq_ignore_ascii_case("tab") || raw == "\\t" {
        return Ok(b'\t');
    }
    match raw.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(CliError::InvalidDelimiter {
            provided: raw.to_owned(),
        }),
    }
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "profiles".to_owned(), ToOwned::to_owned)
}

/// Writes one `source<TAB>target<TAB>distance` line per tree edge, in
/// acceptance order.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
pub fn render_tree(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    for edge in summary.result.tree().edges() {
        writeln!(
            writer,
            "{}\t{}\t{}",
            edge.source(),
            edge.target(),
            edge.distance()
        )?;
    }
    Ok(())
}
