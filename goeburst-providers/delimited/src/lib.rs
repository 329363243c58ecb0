//! Delimited-text provider for allelic profile tables.
//!
//! Reads one profile per line, one locus per column, and exposes the result
//! through [`goeburst_core::ProfileSource`].

mod errors;
mod format;
mod intern;
mod provider;

pub use errors::{DelimitedProviderError, DelimitedProviderErrorCode};
pub use format::DelimitedFormat;
pub use provider::DelimitedProfileProvider;
