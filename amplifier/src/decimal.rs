// File: amplifier/src/decimal.rs
//
// Fixed-Point Decimal Domain
//
// 18-decimal fixed-point values stored as U256 atomic units, matching the
// uint256 fixed-point encoding of the contract math probed by the amplifier.

use primitive_types::U256;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of decimal places carried by the fixed-point encoding.
pub const PRECISION: u32 = 18;

// 2^256 has 78 decimal digits; any longer digit string cannot fit.
const MAX_ATOMIC_DIGITS: usize = 78;

/// Error types for fixed-point parsing and arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// The literal is not a decimal number.
    #[error("malformed decimal literal: {0:?}")]
    Malformed(String),

    /// The value does not fit the 18-decimal uint256 encoding.
    #[error("value does not fit the 18-decimal uint256 domain: {0:?}")]
    Unrepresentable(String),

    /// Negative values are outside the probed domain.
    #[error("negative values are outside the probed domain: {0:?}")]
    Negative(String),

    /// Intermediate uint256 overflow while exponentiating.
    #[error("fixed-point overflow computing {base}^{exponent}")]
    Overflow {
        /// Base of the failing exponentiation, as a decimal string.
        base: String,
        /// Exponent of the failing exponentiation.
        exponent: u32,
    },
}

/// An 18-decimal fixed-point value.
///
/// Stored as atomic units: `1.0` is 10^18 units, `0.1` is 10^17 units.
/// Values are unsigned, mirroring the probed contract's uint256 domain.
///
/// # Examples
///
/// ```rust
/// use test_amplifier::decimal::Decimal;
///
/// let half: Decimal = "0.5".parse().unwrap();
/// assert_eq!(half.pow(3).unwrap().to_string(), "0.125");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal(U256);

impl Decimal {
    /// Exactly zero.
    pub const ZERO: Decimal = Decimal(U256([0, 0, 0, 0]));

    /// Exactly one (10^18 atomic units).
    pub const ONE: Decimal = Decimal(U256([1_000_000_000_000_000_000, 0, 0, 0]));

    /// Atomic units per whole number: 10^18.
    pub fn unit() -> U256 {
        U256::exp10(PRECISION as usize)
    }

    /// Wrap a raw atomic-unit value.
    pub fn from_atomic(atomic: U256) -> Self {
        Decimal(atomic)
    }

    /// Raw atomic-unit value.
    pub fn atomic(&self) -> U256 {
        self.0
    }

    /// Whole number as a fixed-point value.
    ///
    /// # Panics
    ///
    /// Never: u64 * 10^18 always fits in 256 bits.
    pub fn from_int(n: u64) -> Self {
        Decimal(U256::from(n) * Self::unit())
    }

    /// True when the value is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Fixed-point exponentiation with the probed contract's `powDecimal`
    /// semantics: the accumulator starts at one and is multiplied by the
    /// base then divided by the unit on every step.
    ///
    /// Intermediate uint256 overflow is an error, mirroring the contract
    /// revert. `0^0` is one, `x^0` is one, `0^n` is zero for `n > 0`.
    pub fn pow(self, exponent: u32) -> Result<Decimal, MathError> {
        let unit = Self::unit();
        let mut acc = unit;
        for _ in 0..exponent {
            acc = acc
                .checked_mul(self.0)
                .ok_or_else(|| MathError::Overflow {
                    base: self.to_string(),
                    exponent,
                })?
                / unit;
        }
        Ok(Decimal(acc))
    }
}

impl FromStr for Decimal {
    type Err = MathError;

    /// Parse a plain (`"0.00001"`) or scientific (`"1e15"`) decimal literal.
    fn from_str(s: &str) -> Result<Self, MathError> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(MathError::Malformed(s.to_string()));
        }
        if raw.starts_with('-') {
            return Err(MathError::Negative(s.to_string()));
        }
        let raw = raw.strip_prefix('+').unwrap_or(raw);

        let (mantissa, exp10) = match raw.split_once(|c| c == 'e' || c == 'E') {
            Some((m, e)) => {
                let exp = e
                    .parse::<i32>()
                    .map_err(|_| MathError::Malformed(s.to_string()))?;
                (m, exp)
            }
            None => (raw, 0),
        };

        let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(MathError::Malformed(s.to_string()));
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(MathError::Malformed(s.to_string()));
        }

        let digits = format!("{int_part}{frac_part}");
        let digits = digits.trim_start_matches('0');
        if digits.is_empty() {
            return Ok(Decimal::ZERO);
        }

        // Position of the atomic-unit decimal point relative to the digits.
        let shift = PRECISION as i64 + exp10 as i64 - frac_part.len() as i64;
        if shift < 0 {
            // Sub-atomic precision, e.g. 1e-19.
            return Err(MathError::Unrepresentable(s.to_string()));
        }
        let shift = shift as usize;
        if shift + digits.len() > MAX_ATOMIC_DIGITS {
            return Err(MathError::Unrepresentable(s.to_string()));
        }

        let value =
            U256::from_dec_str(digits).map_err(|_| MathError::Unrepresentable(s.to_string()))?;
        let scaled = value
            .checked_mul(U256::exp10(shift))
            .ok_or_else(|| MathError::Unrepresentable(s.to_string()))?;
        Ok(Decimal(scaled))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = Self::unit();
        let int = self.0 / unit;
        let frac = self.0 % unit;
        if frac.is_zero() {
            write!(f, "{int}")
        } else {
            let frac = format!("{:0>18}", frac.to_string());
            write!(f, "{}.{}", int, frac.trim_end_matches('0'))
        }
    }
}

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_whole_numbers() {
        assert_eq!(dec("0"), Decimal::ZERO);
        assert_eq!(dec("1"), Decimal::ONE);
        assert_eq!(dec("1000").atomic(), U256::exp10(21));
    }

    #[test]
    fn test_parse_fractions() {
        assert_eq!(dec("0.1").atomic(), U256::exp10(17));
        assert_eq!(dec("0.00001").atomic(), U256::exp10(13));
        assert_eq!(
            dec("999.999").atomic(),
            U256::from(999_999u64) * U256::exp10(15)
        );
    }

    #[test]
    fn test_parse_scientific() {
        assert_eq!(dec("1e15").atomic(), U256::exp10(33));
        assert_eq!(dec("1E2"), dec("100"));
        assert_eq!(dec("2.5e1"), dec("25"));
    }

    #[test]
    fn test_parse_zero_variants() {
        assert_eq!(dec("0.000"), Decimal::ZERO);
        assert_eq!(dec("00"), Decimal::ZERO);
        assert_eq!(dec("0e5"), Decimal::ZERO);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!(
            "abc".parse::<Decimal>(),
            Err(MathError::Malformed(_))
        ));
        assert!(matches!(
            "1.2.3".parse::<Decimal>(),
            Err(MathError::Malformed(_))
        ));
        assert!(matches!("".parse::<Decimal>(), Err(MathError::Malformed(_))));
    }

    #[test]
    fn test_parse_rejects_negative() {
        assert!(matches!(
            "-1".parse::<Decimal>(),
            Err(MathError::Negative(_))
        ));
    }

    #[test]
    fn test_parse_rejects_unrepresentable() {
        // 1e77 needs 10^95 atomic units, past the uint256 ceiling.
        assert!(matches!(
            "1e77".parse::<Decimal>(),
            Err(MathError::Unrepresentable(_))
        ));
        // Sub-atomic precision.
        assert!(matches!(
            "1e-19".parse::<Decimal>(),
            Err(MathError::Unrepresentable(_))
        ));
    }

    #[test]
    fn test_display_round_trip() {
        for s in ["0", "1", "0.1", "0.00001", "999.999", "123.456"] {
            assert_eq!(dec(s).to_string(), s);
        }
    }

    #[test]
    fn test_pow_edge_cases() {
        // Defined behaviors of the probed function.
        assert_eq!(dec("0").pow(0).unwrap(), Decimal::ONE);
        assert_eq!(dec("1").pow(1).unwrap(), Decimal::ONE);
        assert_eq!(dec("0").pow(1).unwrap(), Decimal::ZERO);
        assert_eq!(dec("1").pow(0).unwrap(), Decimal::ONE);
    }

    #[test]
    fn test_pow_fractions() {
        assert_eq!(dec("0.5").pow(3).unwrap(), dec("0.125"));
        assert_eq!(dec("0.1").pow(2).unwrap(), dec("0.01"));
        assert_eq!(dec("0.9").pow(3).unwrap(), dec("0.729"));
    }

    #[test]
    fn test_pow_large_base_small_exponent() {
        let base = dec("1e15");
        assert_eq!(base.pow(1).unwrap(), base);
        assert_eq!(base.pow(2).unwrap().atomic(), U256::exp10(48));
    }

    #[test]
    fn test_pow_overflow_is_an_error() {
        let frontier = Decimal::from_atomic(U256::exp10(77));
        assert!(matches!(
            frontier.pow(2),
            Err(MathError::Overflow { exponent: 2, .. })
        ));
        // A mid-range base still overflows once the exponent climbs.
        assert!(dec("999.999").pow(19).is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let original = dec("0.00001");
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(json, "\"0.00001\"");
        let back: Decimal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }
}
