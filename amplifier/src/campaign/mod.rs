//! Campaign DSL parser and executor
//!
//! Parses YAML campaign files describing an amplification run and executes
//! them with the standard power-function configuration.
//!
//! ## Example Campaign
//!
//! ```yaml
//! name: "pow_edge_cases"
//! description: "Amplify powDecimal inputs toward edge-case classes"
//! seed:
//!   base: "0"
//!   exponent: 0
//! iterations: 1000
//! rng_seed: 42
//! artifact_dir: "./artifacts"
//! ```

pub mod executor;
pub mod parser;

pub use executor::{CampaignExecutor, CampaignReport};
pub use parser::{load_campaign, parse_campaign, CampaignConfig, SeedSpec};
