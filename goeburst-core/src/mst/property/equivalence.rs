//! Oracle equivalence for the goeBURST tree.
//!
//! The tree must match the relabelling Kruskal run over the explicit-key
//! ordering edge for edge, and its total distance must equal the minimum
//! found by Prim's algorithm.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{DistanceMatrix, ExecutionStrategy, LevelHistograms, candidate_edges};

use super::helpers::{edge_triples, run_pipeline};
use super::oracle::{minimum_total_distance, reference_order, relabelling_kruskal};
use super::types::ProfileFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &ProfileFixture) -> TestCaseResult {
    let result = run_pipeline(fixture, ExecutionStrategy::Serial)?;
    let table = fixture
        .table()
        .map_err(|e| TestCaseError::fail(format!("fixture table failed: {e}")))?;
    let matrix = DistanceMatrix::compute(&table, ExecutionStrategy::Serial)
        .map_err(|e| TestCaseError::fail(format!("matrix failed: {e}")))?;
    let histograms = LevelHistograms::from_matrix(&matrix);

    let ordered = reference_order(&histograms, &candidate_edges(&matrix));
    let expected: Vec<(usize, usize, u32)> = relabelling_kruskal(fixture.len(), &ordered)
        .iter()
        .map(|edge| (edge.source(), edge.target(), edge.distance()))
        .collect();
    let actual = edge_triples(&result);
    if actual != expected {
        return Err(TestCaseError::fail(format!(
            "tree mismatch: actual={actual:?}, oracle={expected:?} (shape={:?}, profiles={})",
            fixture.shape,
            fixture.len(),
        )));
    }

    let minimum = minimum_total_distance(&matrix);
    let total = result.tree().total_distance();
    if total != minimum {
        return Err(TestCaseError::fail(format!(
            "total distance {total} is not minimal ({minimum}) (shape={:?}, profiles={})",
            fixture.shape,
            fixture.len(),
        )));
    }

    if result.histograms() != &histograms {
        return Err(TestCaseError::fail("pipeline histograms differ from matrix histograms"));
    }
    Ok(())
}
