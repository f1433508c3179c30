//! # Test Amplifier
//!
//! Search-based test amplification for fixed-point contract math.
//!
//! ## Architecture Overview
//!
//! Given a seed input, a fitness heuristic and a pair of search operators,
//! the amplifier runs randomized hill-climbing to discover high-fitness
//! inputs — the edge cases worth pinning in a regression test:
//!
//! - **orchestrator**: seeded, injectable randomness with exact replay
//! - **decimal / case**: the 18-decimal uint256 fixed-point input domain
//! - **fitness**: additive edge-case scoring over interesting input classes
//! - **operators**: independent sampling, per-field crossover, perturbation
//! - **amplifier**: the hill-climbing loop itself
//! - **invariants**: checkers for the guarantees a run must uphold
//! - **campaign**: YAML-driven runs with artifacts and reports
//!
//! ## Quick Start
//!
//! ```rust
//! use test_amplifier::prelude::*;
//!
//! let rng = SearchRng::with_seed(42);
//! let seed = TestCase::parse("0", 0).unwrap();
//!
//! let state = amplify(
//!     seed,
//!     1000,
//!     &mut EdgeCaseFitness::heuristic_only(),
//!     &mut IndependentSampler,
//!     &FieldCrossover,
//!     &rng,
//! )
//! .unwrap();
//!
//! assert!(state.fitness >= FitnessScore::new(2));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: all randomness flows through one seeded handle;
//!    a run is replayable bit-for-bit from its logged seed
//! 2. **Monotonic**: the best case never regresses, and ties keep the
//!    first-found case
//! 3. **Fail-fast**: a candidate that crashes the probed target aborts the
//!    run — a crash is itself a finding
//! 4. **Single-threaded**: one owned search state per run, no suspension
//!    points, cost bounded only by the iteration budget
//!
//! ## Features
//!
//! - **default**: core amplification toolkit
//! - **chaos**: property-based test battery (proptest)
//! - **full**: all features enabled
//!
//! ## Reproducing Runs
//!
//! Every run logs its seed. Reproduce with:
//!
//! ```bash
//! AMPLIFIER_TEST_SEED=0xa3f5c8e1b2d94706 cargo test test_name
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Core orchestration - seeded RNG and deterministic environment
pub mod orchestrator;

/// Fixed-point decimal domain and the sample probed power function
pub mod decimal;

/// The searched input pair
pub mod case;

/// Fitness scoring of candidate inputs
pub mod fitness;

/// Search operators: sampling, crossover, perturbation
pub mod operators;

/// The amplification loop
pub mod amplifier;

// Core invariant checkers (monotonicity, crossover membership, domain)
pub mod invariants;

// YAML campaign parser and executor
pub mod campaign;

/// Shared utilities: artifacts and replay
pub mod utilities;

/// Error types
pub mod error;


// Convenient re-exports for common usage
pub mod prelude;

// Re-export commonly used types at crate root
pub use amplifier::{amplify, amplify_traced, AmplificationOutcome, SearchState};
pub use case::TestCase;
pub use decimal::Decimal;
pub use error::AmplifierError;
pub use fitness::{EdgeCaseFitness, Fitness, FitnessScore};
pub use operators::{Crossover, FieldCrossover, IndependentSampler, Sampler};
pub use orchestrator::SearchRng;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
