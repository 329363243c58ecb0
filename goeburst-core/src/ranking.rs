//! goeBURST edge ordering.
//!
//! Candidate edges are ranked by allelic distance first. Ties are broken one
//! distance level at a time, starting with single-locus variants: the edge
//! whose better-connected endpoint has more partners at that level wins, then
//! the edge whose other endpoint does, then the edge with the larger endpoint
//! indices.

use std::cmp::Ordering;

use tracing::instrument;

use crate::{builder::ExecutionStrategy, distance::DistanceMatrix, histogram::LevelHistograms};

/// An undirected edge between two profiles in canonical form
/// (`source < target`), carrying its allelic distance.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ProfileEdge {
    source: usize,
    target: usize,
    distance: u32,
}

impl ProfileEdge {
    /// Creates an edge, ordering the endpoints so that `source <= target`.
    ///
    /// # Examples
    /// ```
    /// use goeburst_core::ProfileEdge;
    ///
    /// let edge = ProfileEdge::new(4, 1, 2);
    /// assert_eq!((edge.source(), edge.target(), edge.distance()), (1, 4, 2));
    /// ```
    #[must_use]
    pub const fn new(left: usize, right: usize, distance: u32) -> Self {
        let (source, target) = if left <= right {
            (left, right)
        } else {
            (right, left)
        };
        Self {
            source,
            target,
            distance,
        }
    }

    /// Returns the smaller endpoint index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the larger endpoint index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the allelic distance between the endpoints.
    #[must_use]
    #[rustfmt::skip]
    pub const fn distance(&self) -> u32 { self.distance }
}

/// Generates the edges of the complete graph over the matrix's profiles, in
/// lexicographic `(source, target)` order.
#[must_use]
pub fn candidate_edges(matrix: &DistanceMatrix) -> Vec<ProfileEdge> {
    let mut edges = Vec::with_capacity(matrix.pair_count());
    edges.extend(
        matrix
            .pairs()
            .map(|(source, target, distance)| ProfileEdge {
                source,
                target,
                distance,
            }),
    );
    edges
}

/// Comparator context for the goeBURST edge order.
///
/// The ranker borrows the histograms of the profile set being clustered so
/// every comparison reads the same precomputed counts.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use goeburst_core::{
///     DistanceMatrix, EdgeRanker, ExecutionStrategy, LevelHistograms, ProfileTable,
///     candidate_edges,
/// };
///
/// let table = ProfileTable::from_codes("demo", [[1, 1], [1, 2], [3, 2]])?;
/// let matrix = DistanceMatrix::compute(&table, ExecutionStrategy::Serial)?;
/// let histograms = LevelHistograms::from_matrix(&matrix);
/// let ranker = EdgeRanker::new(&histograms);
///
/// let mut edges = candidate_edges(&matrix);
/// ranker.rank(&mut edges, ExecutionStrategy::Serial);
/// let order: Vec<(usize, usize)> = edges.iter().map(|e| (e.source(), e.target())).collect();
/// assert_eq!(order, [(1, 2), (0, 1), (0, 2)]);
/// assert_eq!(ranker.compare(&edges[0], &edges[1]), Ordering::Less);
/// # Ok::<(), goeburst_core::ProfileError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct EdgeRanker<'a> {
    histograms: &'a LevelHistograms,
}

impl<'a> EdgeRanker<'a> {
    /// Creates a ranker over the supplied histograms.
    #[must_use]
    pub const fn new(histograms: &'a LevelHistograms) -> Self {
        Self { histograms }
    }

    /// Compares two edges; `Less` means `left` is accepted first.
    ///
    /// Edges with identical endpoints compare `Equal`.
    #[must_use]
    pub fn compare(&self, left: &ProfileEdge, right: &ProfileEdge) -> Ordering {
        left.distance.cmp(&right.distance).then_with(|| {
            (0..self.histograms.loci())
                .map(|level| self.compare_at_level(left, right, level))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }

    fn compare_at_level(&self, left: &ProfileEdge, right: &ProfileEdge, level: usize) -> Ordering {
        let (left_high, left_low) = self.endpoint_counts(left, level);
        let (right_high, right_low) = self.endpoint_counts(right, level);

        // Larger counts and larger indices sort first, hence the reversed operands.
        right_high
            .cmp(&left_high)
            .then_with(|| right_low.cmp(&left_low))
            .then_with(|| right.target.cmp(&left.target))
            .then_with(|| right.source.cmp(&left.source))
    }

    fn endpoint_counts(&self, edge: &ProfileEdge, level: usize) -> (u32, u32) {
        let source = self.histograms.level(edge.source, level);
        let target = self.histograms.level(edge.target, level);
        (source.max(target), source.min(target))
    }

    /// Sorts `edges` into acceptance order.
    ///
    /// The sort is stable in both the serial and the parallel path, so edges
    /// that compare `Equal` keep their generation order.
    #[instrument(name = "core.rank_edges", skip_all, fields(edges = edges.len(), strategy = ?strategy))]
    pub fn rank(&self, edges: &mut [ProfileEdge], strategy: ExecutionStrategy) {
        #[cfg(feature = "parallel")]
        if strategy.runs_parallel() {
            use rayon::slice::ParallelSliceMut;
            edges.par_sort_by(|left, right| self.compare(left, right));
            return;
        }
        #[cfg(not(feature = "parallel"))]
        let _ = strategy;

        edges.sort_by(|left, right| self.compare(left, right));
    }
}
