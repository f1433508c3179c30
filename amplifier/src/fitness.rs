// File: amplifier/src/fitness.rs
//
// Fitness Heuristic
//
// Scores how interesting a candidate input is for exposing edge-case
// behavior of the probed function. The search maximizes this score instead
// of enumerating the input space.

use crate::case::TestCase;
use crate::decimal::Decimal;
use crate::error::AmplifierError;
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-negative additive score assigned to a candidate input.
///
/// Bonuses for interesting input classes are summed; there is no upper
/// bound. Comparisons are strict, so ties keep the first-found case.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FitnessScore(u32);

impl FitnessScore {
    /// The empty score.
    pub const ZERO: FitnessScore = FitnessScore(0);

    /// Wrap a raw score value.
    pub fn new(value: u32) -> Self {
        FitnessScore(value)
    }

    /// Raw score value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::ops::AddAssign<u32> for FitnessScore {
    fn add_assign(&mut self, bonus: u32) {
        self.0 = self.0.saturating_add(bonus);
    }
}

impl fmt::Display for FitnessScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A fitness heuristic over candidate inputs.
///
/// Implementations must be deterministic: the same case always maps to the
/// same score. A failure (typically from the probed target behind the
/// heuristic) aborts the amplification run.
pub trait Fitness<C> {
    /// Score one candidate.
    fn score(&mut self, case: &C) -> Result<FitnessScore, AmplifierError>;
}

impl<C, F> Fitness<C> for F
where
    F: FnMut(&C) -> Result<FitnessScore, AmplifierError>,
{
    fn score(&mut self, case: &C) -> Result<FitnessScore, AmplifierError> {
        self(case)
    }
}

/// Bonus for the contested `0^0` input.
pub const ZERO_POW_ZERO_BONUS: u32 = 2;
/// Bonus for a base of exactly one (`1^n` must stay one).
pub const UNIT_BASE_BONUS: u32 = 1;
/// Bonus for a zero base (`0^n` must be zero for n > 0).
pub const ZERO_BASE_BONUS: u32 = 1;
/// Bonus for a zero exponent (`x^0` must be one).
pub const ZERO_EXPONENT_BONUS: u32 = 1;
/// Bonus for the big-number pair `1e15 ^ 100`.
pub const BIG_POWER_BONUS: u32 = 3;
/// Bonus for a base at the uint256 overflow frontier (10^77 atomic units).
pub const OVERFLOW_FRONTIER_BONUS: u32 = 3;
/// Bonus for the small decimal base `0.1`.
pub const SMALL_BASE_BONUS: u32 = 1;
/// Bonus for the tiny decimal base `0.00001`.
pub const TINY_BASE_BONUS: u32 = 1;
/// Bonus for a quadratic exponent (`x^2` has a checkable closed form).
pub const QUADRATIC_EXPONENT_BONUS: u32 = 1;

/// Probe callback invoked on every scored case.
pub type ProbeFn = Box<dyn FnMut(&TestCase) -> anyhow::Result<Decimal>>;

/// The edge-case heuristic used to amplify power-function inputs.
///
/// Sums fixed bonuses for membership in literal interesting classes of the
/// domain: exact zero, exact one, zero exponent, the big-number pair, the
/// uint256 overflow frontier, the small decimal bases and the quadratic
/// exponent. The literals are intentional: they target historically
/// bug-prone inputs of fixed-point exponentiation, and widening them would
/// change what the search amplifies toward.
///
/// The heuristic itself is pure. [`EdgeCaseFitness::probing`] additionally
/// invokes a probe on every scored case and fails fast on probe failure,
/// for targets where every candidate is expected to be a defined input.
pub struct EdgeCaseFitness {
    probe: Option<ProbeFn>,
}

impl EdgeCaseFitness {
    /// Pure heuristic scoring, no probe.
    pub fn heuristic_only() -> Self {
        Self { probe: None }
    }

    /// Heuristic scoring that also probes the target on every case.
    ///
    /// A probe failure aborts the run: a candidate that crashes the target
    /// is a finding, and the search has no business continuing past it.
    pub fn probing<P>(probe: P) -> Self
    where
        P: FnMut(&TestCase) -> anyhow::Result<Decimal> + 'static,
    {
        Self {
            probe: Some(Box::new(probe)),
        }
    }

    fn class_bonuses(case: &TestCase) -> FitnessScore {
        let mut score = FitnessScore::ZERO;

        if case.base.is_zero() && case.exponent == 0 {
            score += ZERO_POW_ZERO_BONUS;
        }
        if case.base == Decimal::ONE {
            score += UNIT_BASE_BONUS;
        }
        if case.base.is_zero() {
            score += ZERO_BASE_BONUS;
        }
        if case.exponent == 0 {
            score += ZERO_EXPONENT_BONUS;
        }
        if case.base == big_base() && case.exponent == 100 {
            score += BIG_POWER_BONUS;
        }
        if case.base.atomic() == overflow_frontier() {
            score += OVERFLOW_FRONTIER_BONUS;
        }
        if case.base == small_base() {
            score += SMALL_BASE_BONUS;
        }
        if case.base == tiny_base() {
            score += TINY_BASE_BONUS;
        }
        if case.exponent == 2 {
            score += QUADRATIC_EXPONENT_BONUS;
        }

        score
    }
}

impl Fitness<TestCase> for EdgeCaseFitness {
    fn score(&mut self, case: &TestCase) -> Result<FitnessScore, AmplifierError> {
        if let Some(probe) = self.probe.as_mut() {
            probe(case).map_err(AmplifierError::Probe)?;
        }
        Ok(Self::class_bonuses(case))
    }
}

// The literal interesting values, in atomic units.

fn big_base() -> Decimal {
    // 1e15 as a decimal value.
    Decimal::from_atomic(U256::exp10(33))
}

fn overflow_frontier() -> U256 {
    U256::exp10(77)
}

fn small_base() -> Decimal {
    // 0.1
    Decimal::from_atomic(U256::exp10(17))
}

fn tiny_base() -> Decimal {
    // 0.00001
    Decimal::from_atomic(U256::exp10(13))
}
