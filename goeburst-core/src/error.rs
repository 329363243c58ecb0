//! Error types for the goeBURST core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::{builder::ExecutionStrategy, mst::MstError};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while constructing or reading a profile table.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ProfileError {
    /// Requested profile index was outside the table bounds.
    #[error("profile index {index} is out of bounds")]
    OutOfBounds {
        /// The requested row that exceeded the table bounds.
        index: usize,
    },
    /// A row had a different number of loci than the first row.
    #[error("row {row} has {found} loci but {expected} were expected")]
    RaggedRow {
        /// Zero-based row index of the offending profile.
        row: usize,
        /// Locus count established by the first row.
        expected: usize,
        /// Locus count found on the offending row.
        found: usize,
    },
    /// Rows were supplied but none of them carried a locus.
    #[error("profiles must have at least one locus")]
    ZeroLoci,
    /// The locus count cannot be represented by the distance store.
    #[error("{loci} loci exceed the supported maximum")]
    TooManyLoci {
        /// Locus count reported by the source.
        loci: usize,
    },
    /// Two compared profiles had different widths.
    #[error("width mismatch: left={left}, right={right}")]
    WidthMismatch {
        /// Locus count of the left-hand profile.
        left: usize,
        /// Locus count of the right-hand profile.
        right: usize,
    },
    /// A source reported a distance larger than its locus count.
    #[error("distance {distance} between profiles {left} and {right} exceeds {loci} loci")]
    DistanceExceedsLoci {
        /// Index of the left-hand profile.
        left: usize,
        /// Index of the right-hand profile.
        right: usize,
        /// Distance reported by the source.
        distance: usize,
        /// Locus count reported by the source.
        loci: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`ProfileError`] variants.
    enum ProfileErrorCode for ProfileError {
        /// Requested profile index was outside the table bounds.
        OutOfBounds => OutOfBounds { .. } => "PROFILE_OUT_OF_BOUNDS",
        /// A row had a different number of loci than the first row.
        RaggedRow => RaggedRow { .. } => "PROFILE_RAGGED_ROW",
        /// Rows were supplied but none of them carried a locus.
        ZeroLoci => ZeroLoci => "PROFILE_ZERO_LOCI",
        /// The locus count cannot be represented by the distance store.
        TooManyLoci => TooManyLoci { .. } => "PROFILE_TOO_MANY_LOCI",
        /// Two compared profiles had different widths.
        WidthMismatch => WidthMismatch { .. } => "PROFILE_WIDTH_MISMATCH",
        /// A source reported a distance larger than its locus count.
        DistanceExceedsLoci => DistanceExceedsLoci { .. } => "PROFILE_DISTANCE_EXCEEDS_LOCI",
    }
}

/// Error type produced when constructing or running [`crate::Goeburst`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GoeburstError {
    /// The supplied [`crate::ProfileSource`] contained no profiles.
    #[error("profile source `{data_source}` contains no profiles")]
    EmptySource {
        /// Identifier for the empty profile source.
        data_source: Arc<str>,
    },
    /// The requested execution strategy is unavailable in the current build.
    #[error("the requested execution strategy {requested:?} is not available in this build")]
    BackendUnavailable {
        /// Strategy that could not be satisfied by the current build.
        requested: ExecutionStrategy,
    },
    /// Two profiles share no defined locus and the policy rejects such pairs.
    #[error(
        "profiles {left} and {right} of `{data_source}` share no defined locus; \
         their distance is undefined"
    )]
    DegeneratePair {
        /// Identifier for the profile source holding the pair.
        data_source: Arc<str>,
        /// Smaller profile index of the pair.
        left: usize,
        /// Larger profile index of the pair.
        right: usize,
    },
    /// A [`crate::ProfileSource`] operation failed while running the pipeline.
    #[error("profile source `{data_source}` failed: {error}")]
    Profile {
        /// Identifier for the profile source that produced the error.
        data_source: Arc<str>,
        #[source]
        /// Underlying profile error bubbled up by the pipeline.
        error: ProfileError,
    },
    /// Tree construction rejected the ranked edges.
    #[error("spanning tree construction failed: {0}")]
    Mst(#[from] MstError),
}

define_error_codes! {
    /// Stable codes describing [`GoeburstError`] variants.
    enum GoeburstErrorCode for GoeburstError {
        /// The supplied [`crate::ProfileSource`] contained no profiles.
        EmptySource => EmptySource { .. } => "GOEBURST_EMPTY_SOURCE",
        /// The requested execution strategy is unavailable in the current build.
        BackendUnavailable => BackendUnavailable { .. } => "GOEBURST_BACKEND_UNAVAILABLE",
        /// Two profiles share no defined locus and the policy rejects such pairs.
        DegeneratePair => DegeneratePair { .. } => "GOEBURST_DEGENERATE_PAIR",
        /// A [`crate::ProfileSource`] operation failed while running the pipeline.
        ProfileFailure => Profile { .. } => "GOEBURST_PROFILE_FAILURE",
        /// Tree construction rejected the ranked edges.
        MstFailure => Mst { .. } => "GOEBURST_MST_FAILURE",
    }
}

impl GoeburstError {
    /// Retrieve the inner [`ProfileErrorCode`] when the error originated in a
    /// [`crate::ProfileSource`].
    #[must_use]
    pub const fn profile_code(&self) -> Option<ProfileErrorCode> {
        match self {
            Self::Profile { error, .. } => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GoeburstError>;
