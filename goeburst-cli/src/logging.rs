//! Diagnostic output for the goeburst binary.
//!
//! The tree itself is written to stdout, so every diagnostic goes to stderr.
//! Two environment variables shape that output:
//!
//! - `GOEBURST_LOG_FORMAT` selects `human` (default) or `json` lines.
//! - `RUST_LOG` is an [`EnvFilter`] directive; without it only `info` and
//!   above are shown.
//!
//! Records emitted through the `log` facade are forwarded into `tracing`.

use std::{env, str::FromStr};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

const FORMAT_VAR: &str = "GOEBURST_LOG_FORMAT";
const FILTER_VAR: &str = "RUST_LOG";
const DEFAULT_DIRECTIVE: &str = "info";

/// How log records are rendered.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Compact multi-field lines for terminals.
    #[default]
    Human,
    /// One JSON object per record, including the active span list.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalised = raw.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(LoggingError::UnsupportedFormat {
                provided: normalised,
            }),
        }
    }
}

/// Failures while preparing or installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// A logging variable held bytes that are not UTF-8.
    #[error("`{name}` is not valid UTF-8")]
    InvalidUnicode {
        /// Variable name.
        name: &'static str,
    },
    /// `GOEBURST_LOG_FORMAT` named neither `human` nor `json`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Normalised value that was rejected.
        provided: String,
    },
    /// `RUST_LOG` could not be parsed as a filter directive.
    #[error("invalid `RUST_LOG` directive: {source}")]
    InvalidFilter {
        /// Parser error from `tracing_subscriber`.
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    /// The global subscriber slot rejected the new subscriber.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error raised by `tracing_subscriber`.
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Resolved logging configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogSettings {
    format: LogFormat,
    directive: String,
}

impl LogSettings {
    /// Reads `GOEBURST_LOG_FORMAT` and `RUST_LOG`.
    ///
    /// # Errors
    /// Returns [`LoggingError::InvalidUnicode`] for non UTF-8 values and
    /// [`LoggingError::UnsupportedFormat`] for an unknown format.
    pub fn from_env() -> Result<Self, LoggingError> {
        let format = read_var(FORMAT_VAR)?;
        let directive = read_var(FILTER_VAR)?;
        Self::from_values(format.as_deref(), directive.as_deref())
    }

    /// Resolves settings from raw variable values; blank values fall back to
    /// the defaults.
    ///
    /// # Errors
    /// Returns [`LoggingError::UnsupportedFormat`] for an unknown format.
    pub fn from_values(format: Option<&str>, directive: Option<&str>) -> Result<Self, LoggingError> {
        let format = match format.filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };
        let directive = directive
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .unwrap_or(DEFAULT_DIRECTIVE)
            .to_owned();
        Ok(Self { format, directive })
    }

    /// Returns the selected output format.
    #[must_use]
    pub const fn format(&self) -> LogFormat {
        self.format
    }

    /// Returns the filter directive that will be installed.
    #[must_use]
    pub fn directive(&self) -> &str {
        &self.directive
    }

    fn filter(&self) -> Result<EnvFilter, LoggingError> {
        EnvFilter::try_new(&self.directive).map_err(|source| LoggingError::InvalidFilter { source })
    }

    /// Installs these settings as the global subscriber.
    ///
    /// # Errors
    /// Returns [`LoggingError::InvalidFilter`] for a malformed directive and
    /// [`LoggingError::InstallFailed`] when a subscriber is already set.
    pub fn install(&self) -> Result<(), LoggingError> {
        let filter = self.filter()?;
        let output = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_span_events(FmtSpan::CLOSE);
        let output = match self.format {
            LogFormat::Human => output.boxed(),
            LogFormat::Json => output
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .boxed(),
        };

        // Another logger may own the `log` slot; tracing events still flow.
        if LogTracer::init().is_err() {
            tracing::debug!("log facade already bridged");
        }

        tracing_subscriber::registry()
            .with(filter)
            .with(output)
            .try_init()
            .map_err(|source| LoggingError::InstallFailed { source })
    }
}

fn read_var(name: &'static str) -> Result<Option<String>, LoggingError> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode { name }),
    }
}

/// Installs logging from the environment for the binary.
///
/// Calling it when a global subscriber already exists (for example from a
/// test harness) is not an error; the existing subscriber is kept.
///
/// # Errors
/// Returns [`LoggingError`] when the environment holds an unusable format or
/// filter.
pub fn init_logging() -> Result<(), LoggingError> {
    let settings = LogSettings::from_env()?;
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }
    match settings.install() {
        Err(LoggingError::InstallFailed { .. }) => Ok(()),
        other => other,
    }
}
