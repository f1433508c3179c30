//! Convenient re-exports for common usage.
//!
//! ```rust
//! use test_amplifier::prelude::*;
//! ```

pub use crate::amplifier::{
    amplify, amplify_traced, AmplificationOutcome, ImprovementRecord, OperatorKind, SearchState,
    CROSSOVER_PROBABILITY,
};
pub use crate::campaign::{
    load_campaign, parse_campaign, CampaignConfig, CampaignExecutor, CampaignReport,
};
pub use crate::case::TestCase;
pub use crate::decimal::{Decimal, MathError};
pub use crate::error::AmplifierError;
pub use crate::fitness::{EdgeCaseFitness, Fitness, FitnessScore};
pub use crate::invariants::{check_crossover_fields, check_monotonicity, check_sampled_case};
pub use crate::operators::{
    Crossover, FieldCrossover, IndependentSampler, NeighborhoodPerturbation, Sampler, MAX_EXPONENT,
};
pub use crate::orchestrator::{DeterministicSearchEnv, SearchRng};
pub use crate::utilities::{
    get_replay_command, load_artifact, print_artifact_summary, validate_artifact,
    ArtifactCollector, SeedArtifact,
};
