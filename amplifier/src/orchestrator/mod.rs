// File: amplifier/src/orchestrator/mod.rs
//
// Orchestrator Module - Deterministic Search Infrastructure
//
// This module provides the deterministic environment for amplification
// runs: every source of randomness flows through one seeded, injectable
// handle so that any run can be replayed exactly.

/// Deterministic random number generation for reproducible searches
pub mod rng;

/// Complete deterministic search environment
///
/// Wraps the seeded RNG handle together with its replay plumbing. Every
/// run with the same seed produces identical results, so a failed
/// amplification can be reproduced exactly from its logged seed.
///
/// # Examples
///
/// ```rust
/// use test_amplifier::orchestrator::DeterministicSearchEnv;
///
/// let env = DeterministicSearchEnv::with_seed(42);
/// let a: u64 = env.rng.next_u64();
///
/// let replay = DeterministicSearchEnv::with_seed(42);
/// assert_eq!(replay.rng.next_u64(), a);
/// ```
///
/// When a run fails, `on_failure` prints the command needed to reproduce
/// it:
///
/// ```text
/// Run failed! Replay with:
///    AMPLIFIER_TEST_SEED=0xa3f5c8e1b2d94706 cargo test ...
/// ```
pub struct DeterministicSearchEnv {
    /// Seeded RNG handle for reproducible randomness
    pub rng: rng::SearchRng,
}

impl DeterministicSearchEnv {
    /// Create an environment seeded from `AMPLIFIER_TEST_SEED` when set,
    /// otherwise from entropy (with the chosen seed logged for replay).
    pub fn new_from_env_or_random() -> Self {
        Self {
            rng: rng::SearchRng::new_from_env_or_random(),
        }
    }

    /// Create an environment with a specific seed (for replaying a run).
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: rng::SearchRng::with_seed(seed),
        }
    }

    /// The RNG seed in use.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Print failure instructions with the replay seed.
    pub fn on_failure(&self) {
        self.rng.on_failure();
    }
}

// Re-export key types for convenience
pub use rng::SearchRng;
