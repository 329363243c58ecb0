//! Shared helpers for goeBURST property tests.

use proptest::test_runner::TestCaseError;

use crate::{ExecutionStrategy, GoeburstBuilder, GoeburstResult};

use super::types::ProfileFixture;

/// Path-halving find over a plain parent vector.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Runs the full pipeline over `fixture`, converting failures into test
/// case errors that carry the fixture context.
pub(super) fn run_pipeline(
    fixture: &ProfileFixture,
    strategy: ExecutionStrategy,
) -> Result<GoeburstResult, TestCaseError> {
    let table = fixture
        .table()
        .map_err(|e| TestCaseError::fail(format!("fixture table failed: {e}")))?;
    let goeburst = GoeburstBuilder::new()
        .with_execution_strategy(strategy)
        .build()
        .map_err(|e| TestCaseError::fail(format!("builder failed: {e}")))?;
    goeburst.run(&table).map_err(|e| {
        TestCaseError::fail(format!(
            "goeburst run failed: {e} (shape={:?}, profiles={}, loci={})",
            fixture.shape,
            fixture.len(),
            fixture.loci(),
        ))
    })
}

/// Returns tree edges as `(source, target, distance)` triples.
pub(super) fn edge_triples(result: &GoeburstResult) -> Vec<(usize, usize, u32)> {
    result
        .tree()
        .edges()
        .iter()
        .map(|edge| (edge.source(), edge.target(), edge.distance()))
        .collect()
}
