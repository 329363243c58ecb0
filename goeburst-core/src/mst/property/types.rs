//! Fixture types for goeBURST property tests.

use test_strategy::Arbitrary;

use crate::{ProfileTable, error::ProfileError};

/// Shape of the allele table produced by the generators.
///
/// Each shape stresses a different part of the pipeline: diverse tables have
/// few distance ties, narrow allele alphabets produce many ties, sparse calls
/// exercise absent loci and degenerate pairs, and duplicated rows exercise
/// zero-distance edges.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum ProfileShape {
    /// Many distinct alleles per locus.
    #[weight(3)]
    Diverse,
    /// Two alleles per locus, so most distances tie.
    #[weight(3)]
    FewAlleles,
    /// Roughly a third of the calls are absent.
    #[weight(2)]
    SparseCalls,
    /// Rows are copies or single-locus variants of a handful of founders.
    #[weight(2)]
    Duplicated,
}

/// Generated allele table plus the shape used to synthesise it.
#[derive(Clone, Debug)]
pub(super) struct ProfileFixture {
    /// Raw allele codes, `0` meaning absent.
    pub rows: Vec<Vec<u32>>,
    /// Shape used during generation.
    pub shape: ProfileShape,
}

impl ProfileFixture {
    /// Number of profiles in the fixture.
    pub(super) fn len(&self) -> usize {
        self.rows.len()
    }

    /// Number of loci per profile.
    pub(super) fn loci(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Converts the fixture into a profile table.
    pub(super) fn table(&self) -> Result<ProfileTable, ProfileError> {
        ProfileTable::from_codes(format!("{:?}", self.shape), self.rows.clone())
    }
}
