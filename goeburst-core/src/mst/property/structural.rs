//! Structural invariants of goeBURST output.
//!
//! For every fixture: the tree spans all profiles with `N - 1` edges, no
//! edge closes a cycle, edges are canonical and carry the matrix distance,
//! histograms account for every partner exactly once, and the edge
//! comparator behaves as a total order.

use std::cmp::Ordering;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    DistanceMatrix, EdgeRanker, ExecutionStrategy, LevelHistograms, ProfileEdge, candidate_edges,
};

use super::helpers::{find_root, run_pipeline};
use super::types::ProfileFixture;

/// Upper bound on edges fed to the cubic transitivity check.
const MAX_ORDER_SAMPLE: usize = 14;

/// Runs the structural invariants property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &ProfileFixture) -> TestCaseResult {
    let result = run_pipeline(fixture, ExecutionStrategy::Serial)?;
    let table = fixture
        .table()
        .map_err(|e| TestCaseError::fail(format!("fixture table failed: {e}")))?;
    let matrix = DistanceMatrix::compute(&table, ExecutionStrategy::Serial)
        .map_err(|e| TestCaseError::fail(format!("matrix failed: {e}")))?;

    check_tree(fixture, &matrix, result.tree().edges())?;
    if !result.tree().is_tree() {
        return Err(TestCaseError::fail("tree must leave a single component"));
    }
    check_histograms(fixture, result.histograms())?;
    check_total_order(result.histograms(), &matrix)
}

fn check_tree(
    fixture: &ProfileFixture,
    matrix: &DistanceMatrix,
    edges: &[crate::ProfileEdge],
) -> TestCaseResult {
    let n = fixture.len();
    if edges.len() != n - 1 {
        return Err(TestCaseError::fail(format!(
            "expected {} tree edges, found {} (shape={:?})",
            n - 1,
            edges.len(),
            fixture.shape,
        )));
    }

    let mut parent: Vec<usize> = (0..n).collect();
    for edge in edges {
        if edge.source() >= edge.target() {
            return Err(TestCaseError::fail(format!("edge {edge:?} is not canonical")));
        }
        if matrix.get(edge.source(), edge.target()) != Some(edge.distance()) {
            return Err(TestCaseError::fail(format!(
                "edge {edge:?} disagrees with matrix distance {:?}",
                matrix.get(edge.source(), edge.target()),
            )));
        }
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left == right {
            return Err(TestCaseError::fail(format!("edge {edge:?} closes a cycle")));
        }
        parent[right] = left;
    }
    Ok(())
}

fn check_histograms(fixture: &ProfileFixture, histograms: &LevelHistograms) -> TestCaseResult {
    let partners = u32::try_from(fixture.len() - 1)
        .map_err(|_| TestCaseError::fail("fixture too large"))?;
    for profile in 0..fixture.len() {
        let levels = histograms
            .levels(profile)
            .ok_or_else(|| TestCaseError::fail(format!("profile {profile} has no histogram")))?;
        if levels.len() != fixture.loci() {
            return Err(TestCaseError::fail("histogram width differs from locus count"));
        }
        let total: u32 = levels.iter().sum::<u32>() + histograms.zero_distance(profile);
        if total != partners {
            return Err(TestCaseError::fail(format!(
                "profile {profile} accounts for {total} partners, expected {partners}"
            )));
        }
    }
    Ok(())
}

/// Picks at most `MAX_ORDER_SAMPLE` edges spread evenly across the
/// generation order, so rows other than the first are represented.
pub(super) fn order_sample(edges: &[ProfileEdge]) -> Vec<ProfileEdge> {
    let stride = edges.len().div_ceil(MAX_ORDER_SAMPLE).max(1);
    edges.iter().step_by(stride).copied().collect()
}

fn check_total_order(histograms: &LevelHistograms, matrix: &DistanceMatrix) -> TestCaseResult {
    let ranker = EdgeRanker::new(histograms);
    let edges = candidate_edges(matrix);
    let sample = order_sample(&edges);

    for a in &sample {
        for b in &sample {
            let forward = ranker.compare(a, b);
            if forward != ranker.compare(b, a).reverse() {
                return Err(TestCaseError::fail(format!("compare({a:?}, {b:?}) is not antisymmetric")));
            }
            if (forward == Ordering::Equal) != (a == b) {
                return Err(TestCaseError::fail(format!(
                    "distinct edges {a:?} and {b:?} must never compare equal"
                )));
            }
            for c in &sample {
                let chained = forward.is_le() && ranker.compare(b, c).is_le();
                if chained && ranker.compare(a, c).is_gt() {
                    return Err(TestCaseError::fail(format!(
                        "compare is not transitive over {a:?}, {b:?}, {c:?}"
                    )));
                }
            }
        }
    }
    Ok(())
}
