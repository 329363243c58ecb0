//! Condensed storage for every pairwise profile distance.
//!
//! Distances are computed once, before histograms or ranking, so the edge
//! comparator never has to revisit the profiles. Only the upper triangle is
//! kept; row `i` holds the distances to profiles `i + 1 .. n`.

use tracing::debug;

use crate::{builder::ExecutionStrategy, error::ProfileError, profile::ProfileSource};

struct MatrixRow {
    distances: Vec<u32>,
    degenerate: Vec<usize>,
}

/// Upper-triangular matrix of allelic distances for one profile source.
///
/// # Examples
/// ```
/// use goeburst_core::{DistanceMatrix, ExecutionStrategy, ProfileTable};
///
/// let table = ProfileTable::from_codes("demo", [[1, 1], [1, 2], [3, 2]])?;
/// let matrix = DistanceMatrix::compute(&table, ExecutionStrategy::Serial)?;
/// assert_eq!(matrix.get(0, 1), Some(1));
/// assert_eq!(matrix.get(2, 0), Some(2));
/// assert_eq!(matrix.get(1, 1), Some(0));
/// assert_eq!(matrix.get(0, 3), None);
/// # Ok::<(), goeburst_core::ProfileError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DistanceMatrix {
    len: usize,
    loci: usize,
    row_offsets: Vec<usize>,
    values: Vec<u32>,
    degenerate: Vec<(usize, usize)>,
}

impl DistanceMatrix {
    /// Computes every pairwise distance of `source`.
    ///
    /// With [`ExecutionStrategy::Parallel`] (or `Auto` when the `parallel`
    /// feature is enabled) rows are computed on the Rayon pool. Each row is
    /// computed independently and rows are stitched back in index order, so
    /// the result is identical to the serial sweep.
    ///
    /// # Errors
    /// Returns [`ProfileError::TooManyLoci`] when the locus count does not
    /// fit the `u32` distance store, [`ProfileError::RaggedRow`] when a
    /// profile's width differs from [`ProfileSource::loci`],
    /// [`ProfileError::DistanceExceedsLoci`] when the source reports a
    /// distance above its locus count, and any error raised by
    /// [`ProfileSource::distance`].
    pub fn compute<S>(source: &S, strategy: ExecutionStrategy) -> Result<Self, ProfileError>
    where
        S: ProfileSource + Sync + ?Sized,
    {
        let loci = source.loci();
        u32::try_from(loci).map_err(|_| ProfileError::TooManyLoci { loci })?;

        let rows = compute_rows(source, strategy)?;
        let matrix = Self::assemble(source.len(), loci, rows);
        debug!(
            profiles = matrix.len,
            pairs = matrix.values.len(),
            degenerate = matrix.degenerate.len(),
            "distance matrix computed"
        );
        Ok(matrix)
    }

    fn assemble(len: usize, loci: usize, rows: Vec<MatrixRow>) -> Self {
        let pair_count = len.saturating_mul(len.saturating_sub(1)) / 2;
        let mut row_offsets = Vec::with_capacity(len);
        let mut values = Vec::with_capacity(pair_count);
        let mut degenerate = Vec::new();

        for (row, computed) in rows.into_iter().enumerate() {
            row_offsets.push(values.len());
            values.extend(computed.distances);
            degenerate.extend(computed.degenerate.into_iter().map(|col| (row, col)));
        }

        Self {
            len,
            loci,
            row_offsets,
            values,
            degenerate,
        }
    }

    /// Returns the number of profiles covered by the matrix.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.len }

    /// Returns `true` when the matrix covers no profiles.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Returns the locus count of the profiles the matrix was built from.
    #[must_use]
    #[rustfmt::skip]
    pub fn loci(&self) -> usize { self.loci }

    /// Returns the number of unordered profile pairs stored.
    #[must_use]
    #[rustfmt::skip]
    pub fn pair_count(&self) -> usize { self.values.len() }

    /// Returns the pairs `(i, j)`, `i < j`, that share no defined locus.
    ///
    /// Such pairs are stored with distance `0`.
    #[must_use]
    #[rustfmt::skip]
    pub fn degenerate_pairs(&self) -> &[(usize, usize)] { &self.degenerate }

    /// Returns the distance between two profiles in either argument order.
    ///
    /// Returns `None` when either index is out of range.
    #[must_use]
    pub fn get(&self, left: usize, right: usize) -> Option<u32> {
        if left >= self.len || right >= self.len {
            return None;
        }
        if left == right {
            return Some(0);
        }
        let (low, high) = if left < right {
            (left, right)
        } else {
            (right, left)
        };
        let offset = self.row_offsets.get(low)?;
        self.values.get(offset + (high - low - 1)).copied()
    }

    /// Iterates over `(i, j, distance)` for every pair `i < j` in
    /// lexicographic order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        self.row_offsets
            .iter()
            .enumerate()
            .flat_map(move |(row, &offset)| {
                let width = self.len - row - 1;
                self.values
                    .get(offset..offset + width)
                    .unwrap_or_default()
                    .iter()
                    .enumerate()
                    .map(move |(step, &distance)| (row, row + 1 + step, distance))
            })
    }
}

fn compute_rows<S>(source: &S, strategy: ExecutionStrategy) -> Result<Vec<MatrixRow>, ProfileError>
where
    S: ProfileSource + Sync + ?Sized,
{
    let rows = 0..source.len();

    #[cfg(feature = "parallel")]
    if strategy.runs_parallel() {
        use rayon::prelude::*;
        return rows
            .into_par_iter()
            .map(|row| compute_row(source, row))
            .collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = strategy;

    rows.map(|row| compute_row(source, row)).collect()
}

fn compute_row<S>(source: &S, row: usize) -> Result<MatrixRow, ProfileError>
where
    S: ProfileSource + ?Sized,
{
    let len = source.len();
    let loci = source.loci();
    let width = source.profile(row)?.len();
    if width != loci {
        return Err(ProfileError::RaggedRow {
            row,
            expected: loci,
            found: width,
        });
    }

    let mut distances = Vec::with_capacity(len.saturating_sub(row + 1));
    let mut degenerate = Vec::new();

    for col in (row + 1)..len {
        let distance = source.distance(row, col)?;
        if distance.differences() > loci {
            return Err(ProfileError::DistanceExceedsLoci {
                left: row,
                right: col,
                distance: distance.differences(),
                loci,
            });
        }
        if distance.is_degenerate() {
            degenerate.push(col);
        }
        // Bounded by `loci`, which `compute` has already checked against u32.
        let differences = u32::try_from(distance.differences())
            .map_err(|_| ProfileError::TooManyLoci { loci })?;
        distances.push(differences);
    }

    Ok(MatrixRow {
        distances,
        degenerate,
    })
}
