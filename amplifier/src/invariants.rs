//! Core invariant checkers
//!
//! Implements the guarantees an amplification run must uphold:
//! - Monotonicity (the best score never falls below the seed's)
//! - Crossover field membership (child fields come from a parent)
//! - Sampled-case domain validity (exponent cap, magnitude cap, granularity)
//!
//! Checkers return `Err` with a description of the violation, so they can
//! be used both from tests and from the campaign executor after a run.

use crate::case::TestCase;
use crate::fitness::FitnessScore;
use crate::operators::MAX_EXPONENT;
use anyhow::{bail, Result};
use primitive_types::U256;

/// Check that amplification never regressed below the seed's score.
pub fn check_monotonicity(seed_fitness: FitnessScore, best_fitness: FitnessScore) -> Result<()> {
    if best_fitness < seed_fitness {
        bail!(
            "best fitness {} regressed below seed fitness {}",
            best_fitness,
            seed_fitness
        );
    }
    Ok(())
}

/// Check that a crossover child took every field verbatim from a parent.
pub fn check_crossover_fields(a: &TestCase, b: &TestCase, child: &TestCase) -> Result<()> {
    if child.base != a.base && child.base != b.base {
        bail!(
            "crossover interpolated the base: {} is neither {} nor {}",
            child.base,
            a.base,
            b.base
        );
    }
    if child.exponent != a.exponent && child.exponent != b.exponent {
        bail!(
            "crossover interpolated the exponent: {} is neither {} nor {}",
            child.exponent,
            a.exponent,
            b.exponent
        );
    }
    Ok(())
}

/// Check that a sampled case lies inside the sampled domain: exponent at
/// most [`MAX_EXPONENT`], base below 1000 and on the sampler's smallest
/// granularity (0.00001 steps).
pub fn check_sampled_case(case: &TestCase) -> Result<()> {
    if case.exponent > MAX_EXPONENT {
        bail!(
            "sampled exponent {} above the cap {}",
            case.exponent,
            MAX_EXPONENT
        );
    }
    let cap = U256::exp10(21);
    if case.base.atomic() >= cap {
        bail!("sampled base {} at or above the 1000 cap", case.base);
    }
    let granularity = U256::exp10(13);
    if !(case.base.atomic() % granularity).is_zero() {
        bail!("sampled base {} off the 0.00001 granularity", case.base);
    }
    Ok(())
}
