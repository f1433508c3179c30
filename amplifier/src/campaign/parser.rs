//! YAML campaign parser
//!
//! Deserializes and validates campaign files. Caller mistakes — a zero
//! iteration budget, a seed outside the probed domain — are rejected here
//! with an explicit invalid-argument error before any search runs.

use crate::case::TestCase;
use crate::error::AmplifierError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Seed case as written in a campaign file.
///
/// The base stays a string in the file (decimal or scientific notation),
/// exactly as it is fed to the probed contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedSpec {
    /// Decimal base literal
    pub base: String,
    /// Integer exponent
    pub exponent: u32,
}

impl SeedSpec {
    /// Parse into a typed case.
    pub fn to_case(&self) -> Result<TestCase, AmplifierError> {
        TestCase::parse(&self.base, self.exponent)
            .map_err(|e| AmplifierError::InvalidArgument(format!("seed base: {e}")))
    }
}

/// A parsed campaign description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignConfig {
    /// Campaign name, used for artifacts and replay
    pub name: String,
    /// Optional free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Starting case for the search
    pub seed: SeedSpec,
    /// Iteration budget (must be positive)
    pub iterations: u64,
    /// Optional fixed RNG seed for reproducible runs
    #[serde(default)]
    pub rng_seed: Option<u64>,
    /// Optional directory to save the regression-seed artifact into
    #[serde(default)]
    pub artifact_dir: Option<PathBuf>,
}

impl CampaignConfig {
    /// Reject caller mistakes before the search starts.
    pub fn validate(&self) -> Result<(), AmplifierError> {
        if self.name.trim().is_empty() {
            return Err(AmplifierError::InvalidArgument(
                "campaign name must not be empty".to_string(),
            ));
        }
        if self.iterations == 0 {
            return Err(AmplifierError::InvalidArgument(
                "iterations must be positive".to_string(),
            ));
        }
        self.seed.to_case()?;
        Ok(())
    }
}

/// Parse a campaign from YAML text.
pub fn parse_campaign(yaml: &str) -> Result<CampaignConfig> {
    let config: CampaignConfig =
        serde_yaml::from_str(yaml).context("Failed to parse campaign YAML")?;
    config.validate()?;
    Ok(config)
}

/// Load and parse a campaign file.
pub fn load_campaign(path: impl AsRef<Path>) -> Result<CampaignConfig> {
    let path = path.as_ref();
    let yaml = fs::read_to_string(path)
        .with_context(|| format!("Failed to read campaign file {:?}", path))?;
    parse_campaign(&yaml)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_CAMPAIGN: &str = r#"
name: "pow_edge_cases"
description: "Amplify powDecimal inputs toward edge-case classes"
seed:
  base: "0"
  exponent: 0
iterations: 1000
rng_seed: 42
artifact_dir: "./artifacts"
"#;

    #[test]
    fn test_parse_full_campaign() {
        let config = parse_campaign(FULL_CAMPAIGN).unwrap();
        assert_eq!(config.name, "pow_edge_cases");
        assert_eq!(config.iterations, 1000);
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.seed.base, "0");
        assert_eq!(config.seed.exponent, 0);
        assert_eq!(config.artifact_dir, Some(PathBuf::from("./artifacts")));
    }

    #[test]
    fn test_optional_fields_default() {
        let yaml = r#"
name: "minimal"
seed:
  base: "0.1"
  exponent: 2
iterations: 10
"#;
        let config = parse_campaign(yaml).unwrap();
        assert!(config.description.is_none());
        assert!(config.rng_seed.is_none());
        assert!(config.artifact_dir.is_none());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let yaml = r#"
name: "no_budget"
seed:
  base: "0"
  exponent: 0
iterations: 0
"#;
        let err = parse_campaign(yaml).unwrap_err();
        let amplifier_err = err.downcast_ref::<AmplifierError>();
        assert!(matches!(
            amplifier_err,
            Some(AmplifierError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_malformed_seed_rejected() {
        let yaml = r#"
name: "bad_seed"
seed:
  base: "not-a-number"
  exponent: 0
iterations: 10
"#;
        assert!(parse_campaign(yaml).is_err());
    }

    #[test]
    fn test_unrepresentable_seed_rejected() {
        let yaml = r#"
name: "huge_seed"
seed:
  base: "1e77"
  exponent: 0
iterations: 10
"#;
        assert!(parse_campaign(yaml).is_err());
    }

    #[test]
    fn test_empty_name_rejected() {
        let yaml = r#"
name: "  "
seed:
  base: "0"
  exponent: 0
iterations: 10
"#;
        assert!(parse_campaign(yaml).is_err());
    }

    #[test]
    fn test_invalid_yaml_rejected() {
        assert!(parse_campaign("name: [unclosed").is_err());
    }
}
