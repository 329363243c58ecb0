//! Allelic distance between categorical profiles.
//!
//! The distance between two profiles is the number of loci at which both
//! carry a defined allele and those alleles differ. Loci where either side is
//! [`Allele::ABSENT`] are left out of both the comparison and the count of
//! shared loci.

mod matrix;

pub use self::matrix::DistanceMatrix;

use crate::{error::ProfileError, profile::Allele};

/// Outcome of comparing two profiles locus by locus.
///
/// # Examples
/// ```
/// use goeburst_core::{Allele, allelic_distance};
///
/// let left = [Allele::new(1), Allele::new(2), Allele::ABSENT];
/// let right = [Allele::new(1), Allele::new(5), Allele::new(9)];
/// let distance = allelic_distance(&left, &right)?;
/// assert_eq!(distance.differences(), 1);
/// assert_eq!(distance.shared(), 2);
/// assert!(!distance.is_degenerate());
/// # Ok::<(), goeburst_core::ProfileError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ProfileDistance {
    differences: usize,
    shared: usize,
}

impl ProfileDistance {
    /// Creates a distance for sources that compute comparisons themselves.
    #[must_use]
    pub const fn new(differences: usize, shared: usize) -> Self {
        Self {
            differences,
            shared,
        }
    }

    /// Returns the number of jointly defined loci whose alleles differ.
    #[must_use]
    #[rustfmt::skip]
    pub const fn differences(&self) -> usize { self.differences }

    /// Returns the number of loci defined in both profiles.
    #[must_use]
    #[rustfmt::skip]
    pub const fn shared(&self) -> usize { self.shared }

    /// Returns `true` when the profiles share no defined locus.
    ///
    /// A degenerate comparison reports zero differences; callers decide
    /// whether that is acceptable.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_degenerate(&self) -> bool { self.shared == 0 }
}

/// Counts differing alleles among the loci defined in both profiles.
///
/// # Errors
/// Returns [`ProfileError::WidthMismatch`] when the profiles have different
/// lengths.
pub fn allelic_distance(left: &[Allele], right: &[Allele]) -> Result<ProfileDistance, ProfileError> {
    if left.len() != right.len() {
        return Err(ProfileError::WidthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }

    let mut distance = ProfileDistance::default();
    for (a, b) in left.iter().zip(right) {
        if a.is_absent() || b.is_absent() {
            continue;
        }
        distance.shared += 1;
        if a != b {
            distance.differences += 1;
        }
    }
    Ok(distance)
}
