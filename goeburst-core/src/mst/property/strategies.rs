//! Strategy builders for goeBURST property tests.
//!
//! Every generator draws from a seeded [`SmallRng`] so rstest cases can pin a
//! shape and seed while proptest samples both.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{ProfileFixture, ProfileShape};

/// Upper bound on generated profile counts.
const MAX_PROFILES: usize = 24;
/// Upper bound on generated locus counts.
const MAX_LOCI: usize = 7;
/// Probability that a call is absent in [`ProfileShape::SparseCalls`].
const ABSENT_PROBABILITY: f64 = 0.3;

/// Generates fixtures covering every [`ProfileShape`].
pub(super) fn profile_fixture_strategy() -> impl Strategy<Value = ProfileFixture> {
    (any::<ProfileShape>(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

/// Generates a fixture for a specific shape.
pub(super) fn generate_fixture(shape: ProfileShape, rng: &mut SmallRng) -> ProfileFixture {
    let profiles = rng.gen_range(1..=MAX_PROFILES);
    let loci = rng.gen_range(1..=MAX_LOCI);
    let rows = match shape {
        ProfileShape::Diverse => random_rows(rng, profiles, loci, 8, 0.0),
        ProfileShape::FewAlleles => random_rows(rng, profiles, loci, 2, 0.0),
        ProfileShape::SparseCalls => random_rows(rng, profiles, loci, 3, ABSENT_PROBABILITY),
        ProfileShape::Duplicated => founder_rows(rng, profiles, loci),
    };
    ProfileFixture { rows, shape }
}

fn random_rows(
    rng: &mut SmallRng,
    profiles: usize,
    loci: usize,
    alleles: u32,
    absent_probability: f64,
) -> Vec<Vec<u32>> {
    (0..profiles)
        .map(|_| {
            (0..loci)
                .map(|_| {
                    if absent_probability > 0.0 && rng.gen_bool(absent_probability) {
                        0
                    } else {
                        rng.gen_range(1..=alleles)
                    }
                })
                .collect()
        })
        .collect()
}

fn founder_rows(rng: &mut SmallRng, profiles: usize, loci: usize) -> Vec<Vec<u32>> {
    let founder_count = rng.gen_range(1..=4_usize).min(profiles);
    let founders = random_rows(rng, founder_count, loci, 4, 0.0);
    (0..profiles)
        .map(|_| {
            let mut row = founders[rng.gen_range(0..founders.len())].clone();
            if rng.gen_bool(0.4) {
                let locus = rng.gen_range(0..loci);
                row[locus] += 4;
            }
            row
        })
        .collect()
}
