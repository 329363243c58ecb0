//! Determinism across execution strategies and repeated runs.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::ExecutionStrategy;

use super::helpers::{edge_triples, run_pipeline};
use super::types::ProfileFixture;

/// Number of repeated runs compared against the first.
const REPETITIONS: usize = 3;

/// Runs the determinism property for the given fixture.
pub(super) fn run_determinism_property(fixture: &ProfileFixture) -> TestCaseResult {
    let baseline = run_pipeline(fixture, ExecutionStrategy::Serial)?;
    let expected = edge_triples(&baseline);

    for attempt in 1..REPETITIONS {
        let repeat = run_pipeline(fixture, ExecutionStrategy::Serial)?;
        if edge_triples(&repeat) != expected {
            return Err(TestCaseError::fail(format!(
                "serial run {attempt} diverged from the first (shape={:?})",
                fixture.shape,
            )));
        }
    }

    let auto = run_pipeline(fixture, ExecutionStrategy::Auto)?;
    if auto != baseline {
        return Err(TestCaseError::fail(format!(
            "auto strategy diverged from serial (shape={:?})",
            fixture.shape,
        )));
    }

    #[cfg(feature = "parallel")]
    for attempt in 0..REPETITIONS {
        let parallel = run_pipeline(fixture, ExecutionStrategy::Parallel)?;
        if parallel != baseline {
            return Err(TestCaseError::fail(format!(
                "parallel run {attempt} diverged from serial (shape={:?})",
                fixture.shape,
            )));
        }
    }
    Ok(())
}
