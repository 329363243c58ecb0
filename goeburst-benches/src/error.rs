//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of `.expect()`.

use goeburst_core::{GoeburstError, MstError, ProfileError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic profile generation was misconfigured.
    #[error("synthetic profile generation failed: {0}")]
    Synthetic(#[from] crate::source::SyntheticError),
    /// The generated rows were rejected by the profile table.
    #[error("profile table construction failed: {0}")]
    Profile(#[from] ProfileError),
    /// Building or running the pipeline failed.
    #[error("goeBURST pipeline failed: {0}")]
    Goeburst(#[from] GoeburstError),
    /// Kruskal rejected the ranked edges.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
}
