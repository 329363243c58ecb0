//! Result types produced by a goeBURST run.

use crate::{histogram::LevelHistograms, mst::SpanningTree};

/// Spanning tree of one run together with the signals used to build it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GoeburstResult {
    tree: SpanningTree,
    histograms: LevelHistograms,
    degenerate_pairs: Vec<(usize, usize)>,
}

impl GoeburstResult {
    pub(crate) fn new(
        tree: SpanningTree,
        histograms: LevelHistograms,
        degenerate_pairs: Vec<(usize, usize)>,
    ) -> Self {
        Self {
            tree,
            histograms,
            degenerate_pairs,
        }
    }

    /// Returns the accepted tree edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn tree(&self) -> &SpanningTree { &self.tree }

    /// Returns the distance-level histograms used to break ties.
    #[must_use]
    #[rustfmt::skip]
    pub fn histograms(&self) -> &LevelHistograms { &self.histograms }

    /// Returns the profile pairs that shared no defined locus and were
    /// treated as distance `0`.
    #[must_use]
    #[rustfmt::skip]
    pub fn degenerate_pairs(&self) -> &[(usize, usize)] { &self.degenerate_pairs }

    /// Consumes the result, returning only the tree.
    #[must_use]
    pub fn into_tree(self) -> SpanningTree {
        self.tree
    }
}
