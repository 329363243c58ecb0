//! Profile storage abstractions for the goeBURST pipeline.
//!
//! A profile is a fixed-width row of categorical allele codes. Providers turn
//! whatever their input looks like into a [`ProfileTable`]; the pipeline only
//! ever sees the [`ProfileSource`] trait.

use crate::{
    distance::{ProfileDistance, allelic_distance},
    error::ProfileError,
};

/// A categorical allele call at one locus.
///
/// Code `0` is reserved for "no data at this locus" and is excluded from every
/// distance computation.
///
/// # Examples
/// ```
/// use goeburst_core::Allele;
///
/// assert!(Allele::ABSENT.is_absent());
/// assert!(Allele::new(0).is_absent());
/// assert_eq!(Allele::new(7).code(), 7);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Allele(u32);

impl Allele {
    /// Marker for a locus without a defined value.
    pub const ABSENT: Self = Self(0);

    /// Wraps a raw allele code; `0` yields [`Allele::ABSENT`].
    #[must_use]
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// Returns the raw allele code.
    #[must_use]
    #[rustfmt::skip]
    pub const fn code(self) -> u32 { self.0 }

    /// Returns `true` when the locus carries no data.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_absent(self) -> bool { self.0 == 0 }
}

impl From<u32> for Allele {
    fn from(code: u32) -> Self {
        Self::new(code)
    }
}

/// Abstraction over an indexed, read-only collection of allelic profiles.
///
/// # Examples
/// ```
/// use goeburst_core::{Allele, ProfileError, ProfileSource};
///
/// struct Pair([[Allele; 2]; 2]);
///
/// impl ProfileSource for Pair {
///     fn len(&self) -> usize { 2 }
///     fn name(&self) -> &str { "pair" }
///     fn loci(&self) -> usize { 2 }
///     fn profile(&self, index: usize) -> Result<&[Allele], ProfileError> {
///         self.0
///             .get(index)
///             .map(|row| row.as_slice())
///             .ok_or(ProfileError::OutOfBounds { index })
///     }
/// }
///
/// let pair = Pair([
///     [Allele::new(1), Allele::new(2)],
///     [Allele::new(1), Allele::new(3)],
/// ]);
/// assert_eq!(pair.distance(0, 1)?.differences(), 1);
/// # Ok::<(), ProfileError>(())
/// ```
pub trait ProfileSource {
    /// Returns the number of profiles in the source.
    fn len(&self) -> usize;

    /// Returns whether the source contains no profiles.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a human-readable name.
    fn name(&self) -> &str;

    /// Returns the number of loci every profile carries.
    fn loci(&self) -> usize;

    /// Borrows the allele row of the profile at `index`.
    ///
    /// # Errors
    /// Implementations must return [`ProfileError::OutOfBounds`] for indices
    /// `>= len()`.
    fn profile(&self, index: usize) -> Result<&[Allele], ProfileError>;

    /// Computes the allelic distance between two profiles.
    ///
    /// The default implementation borrows both rows and delegates to
    /// [`allelic_distance`].
    ///
    /// # Errors
    /// Returns any [`ProfileError`] surfaced by [`ProfileSource::profile`] or
    /// by the width check in [`allelic_distance`].
    fn distance(&self, left: usize, right: usize) -> Result<ProfileDistance, ProfileError> {
        allelic_distance(self.profile(left)?, self.profile(right)?)
    }
}

/// Immutable, row-major table of N profiles by L loci.
///
/// Duplicate rows are kept as distinct profiles.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProfileTable {
    name: String,
    loci: usize,
    len: usize,
    alleles: Vec<Allele>,
}

impl ProfileTable {
    /// Builds a table from already-encoded rows.
    ///
    /// # Errors
    /// Returns [`ProfileError::RaggedRow`] when a row differs in width from
    /// the first row and [`ProfileError::ZeroLoci`] when rows carry no loci.
    ///
    /// # Examples
    /// ```
    /// use goeburst_core::{Allele, ProfileSource, ProfileTable};
    ///
    /// let table = ProfileTable::new(
    ///     "demo",
    ///     vec![
    ///         vec![Allele::new(1), Allele::new(2)],
    ///         vec![Allele::new(1), Allele::ABSENT],
    ///     ],
    /// )?;
    /// assert_eq!(table.len(), 2);
    /// assert_eq!(table.loci(), 2);
    /// # Ok::<(), goeburst_core::ProfileError>(())
    /// ```
    pub fn new(name: impl Into<String>, rows: Vec<Vec<Allele>>) -> Result<Self, ProfileError> {
        let loci = rows.first().map_or(0, Vec::len);
        if !rows.is_empty() && loci == 0 {
            return Err(ProfileError::ZeroLoci);
        }

        let len = rows.len();
        let mut alleles = Vec::with_capacity(len.saturating_mul(loci));
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != loci {
                return Err(ProfileError::RaggedRow {
                    row,
                    expected: loci,
                    found: values.len(),
                });
            }
            alleles.extend(values);
        }

        Ok(Self {
            name: name.into(),
            loci,
            len,
            alleles,
        })
    }

    /// Builds a table from raw numeric allele codes, `0` meaning absent.
    ///
    /// # Errors
    /// Propagates the validation errors of [`ProfileTable::new`].
    ///
    /// # Examples
    /// ```
    /// use goeburst_core::{ProfileSource, ProfileTable};
    ///
    /// let table = ProfileTable::from_codes("demo", [[1, 1], [1, 2], [3, 2]])?;
    /// assert_eq!(table.distance(0, 2)?.differences(), 2);
    /// # Ok::<(), goeburst_core::ProfileError>(())
    /// ```
    pub fn from_codes<R, C>(name: impl Into<String>, rows: R) -> Result<Self, ProfileError>
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = u32>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Allele::new).collect())
            .collect();
        Self::new(name, rows)
    }

    /// Iterates over the profile rows in index order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Allele]> + '_ {
        // `chunks` needs a non-zero width; an empty table has no alleles anyway.
        self.alleles.chunks(self.loci.max(1))
    }
}

impl ProfileSource for ProfileTable {
    fn len(&self) -> usize {
        self.len
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn loci(&self) -> usize {
        self.loci
    }

    fn profile(&self, index: usize) -> Result<&[Allele], ProfileError> {
        if index >= self.len {
            return Err(ProfileError::OutOfBounds { index });
        }
        let start = index * self.loci;
        self.alleles
            .get(start..start + self.loci)
            .ok_or(ProfileError::OutOfBounds { index })
    }
}
