//! Benchmark parameter types.

use std::fmt;

/// Parameters for one benchmark input size.
#[derive(Clone, Debug)]
pub struct ProfileBenchParams {
    /// Number of profiles in the table.
    pub profile_count: usize,
    /// Number of loci per profile.
    pub loci: usize,
}

impl fmt::Display for ProfileBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},L={}", self.profile_count, self.loci)
    }
}
