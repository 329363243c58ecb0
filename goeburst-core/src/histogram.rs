//! Per-profile distance-level histograms.
//!
//! For every profile the histogram counts how many other profiles sit at each
//! distance level `1..=L`: single-locus variants, double-locus variants and so
//! on. Bucket `k` holds the partners at distance `k + 1`. The edge ranker uses
//! these counts to break ties between equally distant edges.
//!
//! Partners at distance `0` (identical or fully degenerate pairs) have no
//! bucket and are tallied separately.

use tracing::instrument;

use crate::{
    builder::ExecutionStrategy,
    distance::DistanceMatrix,
    error::ProfileError,
    profile::ProfileSource,
};

/// Distance-level counts for every profile of one source.
///
/// # Examples
/// ```
/// use goeburst_core::{DistanceMatrix, ExecutionStrategy, LevelHistograms, ProfileTable};
///
/// let table = ProfileTable::from_codes("demo", [[1, 1], [1, 2], [3, 2]])?;
/// let matrix = DistanceMatrix::compute(&table, ExecutionStrategy::Serial)?;
/// let histograms = LevelHistograms::from_matrix(&matrix);
/// assert_eq!(histograms.levels(0), Some(&[1, 1][..]));
/// assert_eq!(histograms.levels(1), Some(&[2, 0][..]));
/// assert_eq!(histograms.level(2, 0), 1);
/// # Ok::<(), goeburst_core::ProfileError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LevelHistograms {
    len: usize,
    loci: usize,
    counts: Vec<u32>,
    zero_distance: Vec<u32>,
}

impl LevelHistograms {
    /// Builds histograms from a precomputed [`DistanceMatrix`].
    #[must_use]
    #[instrument(
        name = "core.histograms",
        skip_all,
        fields(profiles = matrix.len(), loci = matrix.loci()),
    )]
    pub fn from_matrix(matrix: &DistanceMatrix) -> Self {
        let len = matrix.len();
        let loci = matrix.loci();
        let mut counts = vec![0_u32; len.saturating_mul(loci)];
        let mut zero_distance = vec![0_u32; len];

        for (left, right, distance) in matrix.pairs() {
            let Some(bucket) = (distance as usize).checked_sub(1) else {
                for profile in [left, right] {
                    if let Some(tally) = zero_distance.get_mut(profile) {
                        *tally += 1;
                    }
                }
                continue;
            };
            // The matrix rejects distances above `loci`, so `bucket < loci`.
            if bucket >= loci {
                continue;
            }
            for profile in [left, right] {
                if let Some(count) = counts.get_mut(profile * loci + bucket) {
                    *count += 1;
                }
            }
        }

        Self {
            len,
            loci,
            counts,
            zero_distance,
        }
    }

    /// Computes the distance matrix of `source` and derives its histograms.
    ///
    /// # Errors
    /// Propagates any [`ProfileError`] raised while computing distances.
    pub fn from_source<S>(source: &S, strategy: ExecutionStrategy) -> Result<Self, ProfileError>
    where
        S: ProfileSource + Sync + ?Sized,
    {
        let matrix = DistanceMatrix::compute(source, strategy)?;
        Ok(Self::from_matrix(&matrix))
    }

    /// Returns the number of profiles covered.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.len }

    /// Returns `true` when no profile is covered.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Returns the number of distance levels per profile.
    #[must_use]
    #[rustfmt::skip]
    pub fn loci(&self) -> usize { self.loci }

    /// Returns all level counts of `profile`, or `None` when out of range.
    #[must_use]
    pub fn levels(&self, profile: usize) -> Option<&[u32]> {
        if profile >= self.len {
            return None;
        }
        let start = profile * self.loci;
        self.counts.get(start..start + self.loci)
    }

    /// Returns the number of partners of `profile` at distance `level + 1`.
    ///
    /// Out-of-range arguments yield `0`.
    #[must_use]
    pub fn level(&self, profile: usize, level: usize) -> u32 {
        if level >= self.loci {
            return 0;
        }
        self.levels(profile)
            .and_then(|levels| levels.get(level))
            .copied()
            .unwrap_or(0)
    }

    /// Returns the number of partners of `profile` at distance `0`.
    #[must_use]
    pub fn zero_distance(&self, profile: usize) -> u32 {
        self.zero_distance.get(profile).copied().unwrap_or(0)
    }
}
