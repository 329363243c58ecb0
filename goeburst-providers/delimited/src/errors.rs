use goeburst_core::ProfileError;
use thiserror::Error;

/// Errors raised while reading a delimited profile table.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DelimitedProviderError {
    /// The input held no data rows.
    #[error("input contains no profiles")]
    EmptyInput,
    /// A data row had a different number of cells than the first row.
    #[error("line {line} has {found} loci but {expected} were expected")]
    RaggedRow {
        /// One-based physical line number of the offending row.
        line: usize,
        /// Column count established by the header or first data row.
        expected: usize,
        /// Column count found on the offending row.
        found: usize,
    },
    /// A locus held more distinct alleles than the code space allows.
    #[error("locus {locus} has too many distinct alleles")]
    TooManyAlleles {
        /// Zero-based locus column.
        locus: usize,
    },
    /// The configured delimiter is not a single ASCII character.
    #[error("delimiter byte {byte:#04x} is not ASCII")]
    NonAsciiDelimiter {
        /// Rejected delimiter byte.
        byte: u8,
    },
    /// Reading the input failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// The decoded rows were rejected by the profile table.
    #[error("invalid profile table: {0}")]
    Profile(#[from] ProfileError),
}

impl DelimitedProviderError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> DelimitedProviderErrorCode {
        match self {
            Self::EmptyInput => DelimitedProviderErrorCode::EmptyInput,
            Self::RaggedRow { .. } => DelimitedProviderErrorCode::RaggedRow,
            Self::TooManyAlleles { .. } => DelimitedProviderErrorCode::TooManyAlleles,
            Self::NonAsciiDelimiter { .. } => DelimitedProviderErrorCode::NonAsciiDelimiter,
            Self::Io(_) => DelimitedProviderErrorCode::Io,
            Self::Profile(_) => DelimitedProviderErrorCode::Profile,
        }
    }
}

/// Machine-readable codes for [`DelimitedProviderError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum DelimitedProviderErrorCode {
    /// The input held no data rows.
    EmptyInput,
    /// A data row had a different number of cells than the first row.
    RaggedRow,
    /// A locus held more distinct alleles than the code space allows.
    TooManyAlleles,
    /// The configured delimiter is not a single ASCII character.
    NonAsciiDelimiter,
    /// Reading the input failed.
    Io,
    /// The decoded rows were rejected by the profile table.
    Profile,
}

impl DelimitedProviderErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyInput => "DELIMITED_EMPTY_INPUT",
            Self::RaggedRow => "DELIMITED_RAGGED_ROW",
            Self::TooManyAlleles => "DELIMITED_TOO_MANY_ALLELES",
            Self::NonAsciiDelimiter => "DELIMITED_NON_ASCII_DELIMITER",
            Self::Io => "DELIMITED_IO",
            Self::Profile => "DELIMITED_PROFILE",
        }
    }
}
