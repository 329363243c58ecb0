//! Seeded synthetic allelic profile tables.
//!
//! Profiles descend from a handful of founders: each locus of a descendant
//! keeps the founder's allele unless it mutates to a random one or drops out
//! as absent. This yields the clonal-complex structure goeBURST is built for,
//! with plenty of equal-distance ties.

use goeburst_core::ProfileTable;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Rates are expressed per thousand loci.
const PER_MILLE: u32 = 1_000;

/// Configuration for synthetic profile generation.
#[derive(Clone, Debug)]
pub struct SyntheticProfileConfig {
    /// Number of profiles to generate.
    pub profile_count: usize,
    /// Number of loci per profile.
    pub loci: usize,
    /// Number of founder profiles.
    pub founders: usize,
    /// Number of distinct alleles per locus.
    pub alleles_per_locus: u32,
    /// Chance, per thousand, that a descendant locus mutates.
    pub mutation_per_mille: u32,
    /// Chance, per thousand, that a descendant locus is absent.
    pub absent_per_mille: u32,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

impl SyntheticProfileConfig {
    /// Returns a seven-locus, MLST-like configuration for `profile_count`
    /// profiles.
    #[must_use]
    pub const fn mlst(profile_count: usize, seed: u64) -> Self {
        Self {
            profile_count,
            loci: 7,
            founders: 8,
            alleles_per_locus: 40,
            mutation_per_mille: 120,
            absent_per_mille: 5,
            seed,
        }
    }
}

/// Errors raised by invalid synthetic configurations.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SyntheticError {
    /// Profile count was zero.
    #[error("profile_count must be greater than zero")]
    ZeroProfiles,
    /// Locus count was zero.
    #[error("loci must be greater than zero")]
    ZeroLoci,
    /// Founder count was zero.
    #[error("founders must be greater than zero")]
    ZeroFounders,
    /// Allele alphabet was empty.
    #[error("alleles_per_locus must be greater than zero")]
    ZeroAlleles,
    /// A rate exceeded one thousand per mille.
    #[error("{name} must not exceed {PER_MILLE}, got {value}")]
    RateOutOfRange {
        /// Name of the offending rate.
        name: &'static str,
        /// Supplied value.
        value: u32,
    },
}

/// Generates the raw allele codes described by `config`.
///
/// # Errors
/// Returns [`SyntheticError`] when a count is zero or a rate exceeds 1000.
pub fn generate_rows(config: &SyntheticProfileConfig) -> Result<Vec<Vec<u32>>, SyntheticError> {
    validate(config)?;
    let mut rng = SmallRng::seed_from_u64(config.seed);

    let founders: Vec<Vec<u32>> = (0..config.founders)
        .map(|_| {
            (0..config.loci)
                .map(|_| rng.gen_range(1..=config.alleles_per_locus))
                .collect()
        })
        .collect();

    let mut rows = Vec::with_capacity(config.profile_count);
    for _ in 0..config.profile_count {
        let Some(founder) = founders.get(rng.gen_range(0..founders.len())) else {
            continue;
        };
        let row = founder
            .iter()
            .map(|&allele| {
                if rng.gen_range(0..PER_MILLE) < config.absent_per_mille {
                    0
                } else if rng.gen_range(0..PER_MILLE) < config.mutation_per_mille {
                    rng.gen_range(1..=config.alleles_per_locus)
                } else {
                    allele
                }
            })
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

/// Generates a named [`ProfileTable`] described by `config`.
///
/// # Errors
/// Returns [`crate::error::BenchSetupError`] when the configuration is
/// invalid.
pub fn generate_table(
    config: &SyntheticProfileConfig,
) -> Result<ProfileTable, crate::error::BenchSetupError> {
    let rows = generate_rows(config)?;
    let name = format!("synthetic-{}x{}", config.profile_count, config.loci);
    Ok(ProfileTable::from_codes(name, rows)?)
}

fn validate(config: &SyntheticProfileConfig) -> Result<(), SyntheticError> {
    if config.profile_count == 0 {
        return Err(SyntheticError::ZeroProfiles);
    }
    if config.loci == 0 {
        return Err(SyntheticError::ZeroLoci);
    }
    if config.founders == 0 {
        return Err(SyntheticError::ZeroFounders);
    }
    if config.alleles_per_locus == 0 {
        return Err(SyntheticError::ZeroAlleles);
    }
    for (name, value) in [
        ("mutation_per_mille", config.mutation_per_mille),
        ("absent_per_mille", config.absent_per_mille),
    ] {
        if value > PER_MILLE {
            return Err(SyntheticError::RateOutOfRange { name, value });
        }
    }
    Ok(())
}
