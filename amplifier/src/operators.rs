// File: amplifier/src/operators.rs
//
// Search Operators
//
// Candidate generation for the amplification loop: independent sampling of
// the input domain, per-field crossover of two candidates, and a small
// neighborhood perturbation for genuine local moves.

use crate::case::TestCase;
use crate::decimal::Decimal;
use crate::orchestrator::SearchRng;
use primitive_types::U256;

/// Largest exponent the sampler draws (inclusive).
pub const MAX_EXPONENT: u32 = 19;

// Base granularities, in atomic units. The wide range walks [0, 1000) in
// steps of 0.001; the narrow range walks [0, 0.1) in steps of 0.00001.
const WIDE_RANGE_STEPS: u64 = 1_000_000;
const WIDE_STEP_EXP10: usize = 15;
const NARROW_RANGE_STEPS: u64 = 10_000;
const NARROW_STEP_EXP10: usize = 13;

/// A generator of fresh candidates.
///
/// Sampling is pure generation: it draws a new case from the domain and
/// never inspects existing candidates.
pub trait Sampler<C> {
    /// Draw one fresh candidate.
    fn sample(&mut self, rng: &SearchRng) -> C;
}

impl<C, F> Sampler<C> for F
where
    F: FnMut(&SearchRng) -> C,
{
    fn sample(&mut self, rng: &SearchRng) -> C {
        self(rng)
    }
}

/// Combines two candidates field by field.
pub trait Crossover<C> {
    /// Combine two parents into a child.
    fn combine(&self, a: &C, b: &C, rng: &SearchRng) -> C;
}

impl<C, F> Crossover<C> for F
where
    F: Fn(&C, &C, &SearchRng) -> C,
{
    fn combine(&self, a: &C, b: &C, rng: &SearchRng) -> C {
        self(a, b, rng)
    }
}

/// Uniform independent sampling of the power-function input domain.
///
/// A coin flip selects the base range: wide (`[0, 1000)` at three decimal
/// places) or narrow (`[0, 0.1)` at five decimal places). The exponent is
/// uniform in `[0, MAX_EXPONENT]`. Every sampled case satisfies the same
/// representability constraints as a caller-supplied seed.
pub struct IndependentSampler;

impl Sampler<TestCase> for IndependentSampler {
    fn sample(&mut self, rng: &SearchRng) -> TestCase {
        let base = if rng.coin_flip() {
            let steps = rng.gen_range(0..WIDE_RANGE_STEPS);
            Decimal::from_atomic(U256::from(steps) * U256::exp10(WIDE_STEP_EXP10))
        } else {
            let steps = rng.gen_range(0..NARROW_RANGE_STEPS);
            Decimal::from_atomic(U256::from(steps) * U256::exp10(NARROW_STEP_EXP10))
        };
        let exponent = rng.gen_range(0..=MAX_EXPONENT);
        TestCase::new(base, exponent)
    }
}

/// Per-field crossover: the child's base is exactly one parent's base, and
/// independently the child's exponent is exactly one parent's exponent.
/// Fields are never interpolated.
pub struct FieldCrossover;

impl Crossover<TestCase> for FieldCrossover {
    fn combine(&self, a: &TestCase, b: &TestCase, rng: &SearchRng) -> TestCase {
        let base = if rng.coin_flip() { a.base } else { b.base };
        let exponent = if rng.coin_flip() {
            a.exponent
        } else {
            b.exponent
        };
        TestCase::new(base, exponent)
    }
}

/// A genuine local move: nudges one field of an existing case by a single
/// sampler step while staying inside the sampled domain.
///
/// The amplification loop itself re-samples the whole domain each round;
/// this operator exists for callers that want true neighborhood search on
/// top of it.
pub struct NeighborhoodPerturbation;

impl NeighborhoodPerturbation {
    /// Produce a neighbor of `case`.
    pub fn perturb(&self, case: &TestCase, rng: &SearchRng) -> TestCase {
        if rng.coin_flip() {
            let exponent = if rng.coin_flip() {
                case.exponent.saturating_add(1).min(MAX_EXPONENT)
            } else {
                case.exponent.saturating_sub(1)
            };
            TestCase::new(case.base, exponent)
        } else {
            let step = U256::exp10(WIDE_STEP_EXP10);
            let cap = U256::from(WIDE_RANGE_STEPS - 1) * step;
            let atomic = if rng.coin_flip() {
                case.base.atomic().saturating_add(step).min(cap)
            } else {
                case.base.atomic().saturating_sub(step)
            };
            TestCase::new(Decimal::from_atomic(atomic), case.exponent)
        }
    }
}
