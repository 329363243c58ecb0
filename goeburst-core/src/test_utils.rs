//! Shared test utilities for `goeburst-core`.

use goeburst_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{
    error::ProfileError,
    profile::{Allele, ProfileSource},
};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `GOEBURST_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// [`ProfileSource`] implementation that records distance invocations for
/// tests and can be told to fail on one profile.
#[derive(Clone)]
pub(crate) struct CountingSource {
    rows: Vec<Vec<Allele>>,
    calls: Arc<AtomicUsize>,
    failing: Option<usize>,
}

impl CountingSource {
    /// Creates a counting source over raw allele codes.
    #[must_use]
    pub(crate) fn new(rows: Vec<Vec<u32>>, calls: Arc<AtomicUsize>) -> Self {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Allele::new).collect())
            .collect();
        Self {
            rows,
            calls,
            failing: None,
        }
    }

    /// Creates a counting source whose profile `index` reports out of bounds.
    #[must_use]
    pub(crate) fn failing_at(rows: Vec<Vec<u32>>, index: usize, calls: Arc<AtomicUsize>) -> Self {
        Self {
            failing: Some(index),
            ..Self::new(rows, calls)
        }
    }
}

impl ProfileSource for CountingSource {
    fn len(&self) -> usize {
        self.rows.len()
    }

    fn name(&self) -> &str {
        "counting"
    }

    fn loci(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    fn profile(&self, index: usize) -> Result<&[Allele], ProfileError> {
        if self.failing == Some(index) {
            return Err(ProfileError::OutOfBounds { index });
        }
        self.rows
            .get(index)
            .map(Vec::as_slice)
            .ok_or(ProfileError::OutOfBounds { index })
    }

    fn distance(
        &self,
        left: usize,
        right: usize,
    ) -> Result<crate::distance::ProfileDistance, ProfileError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        crate::distance::allelic_distance(self.profile(left)?, self.profile(right)?)
    }
}
