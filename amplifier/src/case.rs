// File: amplifier/src/case.rs
//
// Searched Input Pair
//
// A TestCase is the unit the search manipulates: a fixed-point decimal base
// and an integer exponent for the probed power function.

use crate::decimal::{Decimal, MathError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One candidate input to the probed function.
///
/// Both fields are representable in the probed function's numeric domain by
/// construction: the base is an unsigned 18-decimal fixed-point value and
/// the exponent a non-negative integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TestCase {
    /// Fixed-point base.
    pub base: Decimal,
    /// Integer exponent.
    pub exponent: u32,
}

impl TestCase {
    /// Build a case from already-typed parts.
    pub fn new(base: Decimal, exponent: u32) -> Self {
        Self { base, exponent }
    }

    /// Build a case from a decimal base literal.
    pub fn parse(base: &str, exponent: u32) -> Result<Self, MathError> {
        Ok(Self {
            base: base.parse()?,
            exponent,
        })
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}^{}", self.base, self.exponent)
    }
}
