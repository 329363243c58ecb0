//! Reference implementations used as oracles by the property suite.
//!
//! These favour obviousness over speed: Prim's algorithm on the dense matrix
//! for the minimum total distance, an explicit sort key for the goeBURST
//! order, and a relabelling forest for Kruskal.

use std::cmp::Reverse;

use crate::{DistanceMatrix, LevelHistograms, ProfileEdge};

/// Per-level tie-break key: larger counts first, then larger indices.
type LevelKey = (Reverse<u32>, Reverse<u32>, Reverse<usize>, Reverse<usize>);

/// Minimum total distance of a spanning tree over every profile pair.
pub(super) fn minimum_total_distance(matrix: &DistanceMatrix) -> u64 {
    let n = matrix.len();
    if n < 2 {
        return 0;
    }

    let mut in_tree = vec![false; n];
    let mut best = vec![u32::MAX; n];
    best[0] = 0;
    let mut total = 0_u64;

    for _ in 0..n {
        let Some(next) = (0..n)
            .filter(|&node| !in_tree[node])
            .min_by_key(|&node| best[node])
        else {
            break;
        };
        in_tree[next] = true;
        total += u64::from(best[next]);
        for other in (0..n).filter(|&node| !in_tree[node]) {
            let distance = matrix.get(next, other).unwrap_or(u32::MAX);
            best[other] = best[other].min(distance);
        }
    }
    total
}

/// Sorts a copy of `edges` by an explicit goeBURST key.
pub(super) fn reference_order(
    histograms: &LevelHistograms,
    edges: &[ProfileEdge],
) -> Vec<ProfileEdge> {
    let mut ordered = edges.to_vec();
    ordered.sort_by_cached_key(|edge| (edge.distance(), level_keys(histograms, edge)));
    ordered
}

fn level_keys(histograms: &LevelHistograms, edge: &ProfileEdge) -> Vec<LevelKey> {
    (0..histograms.loci())
        .map(|level| {
            let a = histograms.level(edge.source(), level);
            let b = histograms.level(edge.target(), level);
            (
                Reverse(a.max(b)),
                Reverse(a.min(b)),
                Reverse(edge.target()),
                Reverse(edge.source()),
            )
        })
        .collect()
}

/// Kruskal over pre-ordered edges using a component label per node.
pub(super) fn relabelling_kruskal(node_count: usize, ordered: &[ProfileEdge]) -> Vec<ProfileEdge> {
    let mut label: Vec<usize> = (0..node_count).collect();
    let mut accepted = Vec::new();

    for edge in ordered {
        let (keep, drop) = (label[edge.source()], label[edge.target()]);
        if keep == drop {
            continue;
        }
        for value in &mut label {
            if *value == drop {
                *value = keep;
            }
        }
        accepted.push(*edge);
    }
    accepted
}
