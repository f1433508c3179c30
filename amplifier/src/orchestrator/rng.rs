// File: amplifier/src/orchestrator/rng.rs
//
// Seeded RNG Handle
//
// A single injectable randomness source for amplification runs. The handle
// records its seed so any run can be replayed bit-for-bit, and uses
// interior mutability so it can be shared by reference between the search
// loop and the operators it drives.

use parking_lot::Mutex;
use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Environment variable that pins the seed for exact replay.
pub const SEED_ENV_VAR: &str = "AMPLIFIER_TEST_SEED";

/// Seeded random number generator for reproducible searches.
///
/// All randomness consumed by a search flows through one `SearchRng`, so
/// two runs with the same seed draw identical sequences and return
/// identical results.
///
/// # Examples
///
/// ```rust
/// use test_amplifier::orchestrator::SearchRng;
///
/// let rng = SearchRng::with_seed(0xdeadbeef);
/// let coin = rng.coin_flip();
/// let exponent: u32 = rng.gen_range(0..=19u32);
/// assert!(exponent <= 19);
/// let _ = coin;
/// ```
pub struct SearchRng {
    seed: u64,
    inner: Mutex<StdRng>,
}

impl SearchRng {
    /// Create a generator with a specific seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            inner: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Create a generator seeded from [`SEED_ENV_VAR`] when set, otherwise
    /// from entropy. Either way the seed is logged so a failing run can be
    /// replayed.
    pub fn new_from_env_or_random() -> Self {
        let seed = match std::env::var(SEED_ENV_VAR) {
            Ok(raw) => match parse_seed(&raw) {
                Some(seed) => {
                    log::info!("{} set, replaying with seed 0x{:016x}", SEED_ENV_VAR, seed);
                    seed
                }
                None => {
                    log::warn!("ignoring unparseable {}={:?}", SEED_ENV_VAR, raw);
                    rand::random()
                }
            },
            Err(_) => rand::random(),
        };
        log::info!("SearchRng seed: 0x{:016x}", seed);
        Self::with_seed(seed)
    }

    /// The seed this generator was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a uniform value from a range.
    pub fn gen_range<T, R>(&self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.inner.lock().gen_range(range)
    }

    /// Draw a boolean that is true with probability `p`.
    pub fn gen_bool(&self, p: f64) -> bool {
        self.inner.lock().gen_bool(p)
    }

    /// Fair coin flip.
    pub fn coin_flip(&self) -> bool {
        self.gen_bool(0.5)
    }

    /// Draw a uniform u64.
    pub fn next_u64(&self) -> u64 {
        self.inner.lock().gen()
    }

    /// Print failure instructions with the replay seed.
    pub fn on_failure(&self) {
        eprintln!("Run failed! Replay with:");
        eprintln!("   {}=0x{:016x} cargo test ...", SEED_ENV_VAR, self.seed);
    }
}

impl fmt::Debug for SearchRng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchRng")
            .field("seed", &format_args!("0x{:016x}", self.seed))
            .finish()
    }
}

/// Parse a seed from its textual form: `0x`-prefixed hex or plain decimal.
pub fn parse_seed(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16).ok()
    } else {
        raw.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_seed_is_deterministic() {
        let a = SearchRng::with_seed(1234);
        let b = SearchRng::with_seed(1234);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let a = SearchRng::with_seed(1);
        let b = SearchRng::with_seed(2);
        let seq_a: Vec<u64> = (0..8).map(|_| a.next_u64()).collect();
        let seq_b: Vec<u64> = (0..8).map(|_| b.next_u64()).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn test_gen_range_stays_in_bounds() {
        let rng = SearchRng::with_seed(99);
        for _ in 0..1000 {
            let v: u32 = rng.gen_range(0..=19u32);
            assert!(v <= 19);
        }
    }

    #[test]
    fn test_parse_seed_forms() {
        assert_eq!(parse_seed("42"), Some(42));
        assert_eq!(parse_seed("0x2a"), Some(42));
        assert_eq!(parse_seed("0X2A"), Some(42));
        assert_eq!(parse_seed(" 7 "), Some(7));
        assert_eq!(parse_seed("nope"), None);
        assert_eq!(parse_seed(""), None);
    }

    #[test]
    fn test_seed_is_recorded() {
        let rng = SearchRng::with_seed(0xdeadbeefcafebabe);
        assert_eq!(rng.seed(), 0xdeadbeefcafebabe);
    }
}
