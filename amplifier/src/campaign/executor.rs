//! Campaign execution engine
//!
//! Runs a parsed campaign with the standard power-function configuration:
//! edge-case fitness during the search, a single probe of the winning case
//! afterward (exactly the assertion the amplified regression test will
//! make), invariant re-checks, and optional artifact capture.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_amplifier::campaign::{parse_campaign, CampaignExecutor};
//!
//! let config = parse_campaign(yaml)?;
//! let mut executor = CampaignExecutor::new();
//! let report = executor.execute(&config)?;
//!
//! assert!(report.success);
//! println!("best case: {} (fitness {})", report.best_case, report.best_fitness);
//! ```

use super::parser::CampaignConfig;
use crate::amplifier::{amplify_traced, ImprovementRecord};
use crate::case::TestCase;
use crate::decimal::Decimal;
use crate::fitness::{EdgeCaseFitness, FitnessScore};
use crate::invariants;
use crate::operators::{FieldCrossover, IndependentSampler};
use crate::orchestrator::SearchRng;
use crate::utilities::artifacts::ArtifactCollector;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

/// Structured result of one campaign run.
#[derive(Debug, Clone, Serialize)]
pub struct CampaignReport {
    /// Campaign name
    pub campaign_name: String,
    /// Iteration budget that was run
    pub iterations: u64,
    /// RNG seed the run used (always known, for replay)
    pub rng_seed: u64,
    /// Score of the configured seed case
    pub seed_fitness: FitnessScore,
    /// Winning case
    pub best_case: TestCase,
    /// Winning score
    pub best_fitness: FitnessScore,
    /// Result of probing the winning case
    pub probe_result: Decimal,
    /// Improvement trajectory
    pub improvements: Vec<ImprovementRecord>,
    /// Where the artifact was saved, if capture was configured
    pub artifact_path: Option<PathBuf>,
    /// Whether the run completed with all checks passing
    pub success: bool,
    /// Execution log
    pub log: Vec<String>,
}

/// Campaign executor that runs parsed campaign configurations.
pub struct CampaignExecutor {
    log: Vec<String>,
    artifact_dir_override: Option<PathBuf>,
    rng_seed_override: Option<u64>,
}

impl CampaignExecutor {
    /// Create a new executor.
    pub fn new() -> Self {
        Self {
            log: Vec::new(),
            artifact_dir_override: None,
            rng_seed_override: None,
        }
    }

    /// Save the artifact into `dir` regardless of the campaign file.
    pub fn with_artifact_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.artifact_dir_override = Some(dir.into());
        self
    }

    /// Run with a fixed RNG seed regardless of the campaign file.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed_override = Some(seed);
        self
    }

    /// Execute a complete campaign.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the probed
    /// function rejects the winning case, an invariant check fails, or the
    /// artifact cannot be written.
    pub fn execute(&mut self, config: &CampaignConfig) -> Result<CampaignReport> {
        self.log.clear();
        config.validate()?;

        self.log(format!("Starting campaign: {}", config.name));
        if let Some(desc) = &config.description {
            self.log(format!("Description: {}", desc));
        }

        let seed_case = config.seed.to_case()?;

        let rng = match self.rng_seed_override.or(config.rng_seed) {
            Some(seed) => SearchRng::with_seed(seed),
            None => SearchRng::new_from_env_or_random(),
        };
        self.log(format!("RNG seed: 0x{:016x}", rng.seed()));

        let mut collector = ArtifactCollector::new(config.name.as_str());
        collector.set_rng_seed(rng.seed());
        collector.set_iterations(config.iterations);

        let mut fitness = EdgeCaseFitness::heuristic_only();
        let mut sampler = IndependentSampler;
        let crossover = FieldCrossover;

        let outcome = amplify_traced(
            seed_case,
            config.iterations,
            &mut fitness,
            &mut sampler,
            &crossover,
            &rng,
        )?;

        self.log(format!(
            "Seed case {} scored {}",
            seed_case, outcome.seed_fitness
        ));
        for step in &outcome.improvements {
            self.log(format!(
                "Iteration {} ({}): new best {} with fitness {}",
                step.iteration, step.operator, step.case, step.fitness
            ));
        }
        self.log(format!(
            "Search done: {} candidates evaluated, best {} with fitness {}",
            outcome.candidates_evaluated, outcome.state.best, outcome.state.fitness
        ));

        invariants::check_monotonicity(outcome.seed_fitness, outcome.state.fitness)?;

        // The amplified regression assertion: the winning case must be a
        // defined input of the probed function.
        let best = outcome.state.best;
        let probe_result = best
            .base
            .pow(best.exponent)
            .with_context(|| format!("winning case {} failed the probe", best))?;
        self.log(format!("Probe: {} = {}", best, probe_result));

        collector.record_seed(seed_case, outcome.seed_fitness);
        collector.record_best(best, outcome.state.fitness);
        collector.set_improvements(outcome.improvements.clone());
        for line in &self.log {
            collector.capture_log("INFO", line);
        }

        let artifact_dir = self
            .artifact_dir_override
            .as_ref()
            .or(config.artifact_dir.as_ref());
        let artifact_path = match artifact_dir {
            Some(dir) => {
                let path = collector.save(dir)?;
                self.log(format!("Artifact saved to {:?}", path));
                Some(path)
            }
            None => None,
        };

        self.log("Campaign completed successfully".to_string());

        Ok(CampaignReport {
            campaign_name: config.name.clone(),
            iterations: config.iterations,
            rng_seed: rng.seed(),
            seed_fitness: outcome.seed_fitness,
            best_case: best,
            best_fitness: outcome.state.fitness,
            probe_result,
            improvements: outcome.improvements,
            artifact_path,
            success: true,
            log: self.log.clone(),
        })
    }

    fn log(&mut self, message: String) {
        log::debug!("{}", message);
        self.log.push(message);
    }
}

impl Default for CampaignExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::parser::parse_campaign;

    fn zero_seed_campaign() -> CampaignConfig {
        parse_campaign(
            r#"
name: "pow_edge_cases"
seed:
  base: "0"
  exponent: 0
iterations: 1000
rng_seed: 42
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_execute_zero_seed_campaign() {
        let config = zero_seed_campaign();
        let report = CampaignExecutor::new().execute(&config).unwrap();

        assert!(report.success);
        assert_eq!(report.campaign_name, "pow_edge_cases");
        assert_eq!(report.rng_seed, 42);
        // 0^0 is already the top-scoring class; the seed survives.
        assert_eq!(report.best_case, TestCase::parse("0", 0).unwrap());
        assert_eq!(report.best_fitness, FitnessScore::new(4));
        // 0^0 probes to one.
        assert_eq!(report.probe_result, Decimal::ONE);
        assert!(report.artifact_path.is_none());
    }

    #[test]
    fn test_execute_is_deterministic() {
        let config = zero_seed_campaign();
        let a = CampaignExecutor::new().execute(&config).unwrap();
        let b = CampaignExecutor::new().execute(&config).unwrap();
        assert_eq!(a.best_case, b.best_case);
        assert_eq!(a.best_fitness, b.best_fitness);
        assert_eq!(a.improvements, b.improvements);
    }

    #[test]
    fn test_rng_seed_override_wins() {
        let config = zero_seed_campaign();
        let report = CampaignExecutor::new()
            .with_rng_seed(7)
            .execute(&config)
            .unwrap();
        assert_eq!(report.rng_seed, 7);
    }

    #[test]
    fn test_artifact_capture() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = zero_seed_campaign();
        let report = CampaignExecutor::new()
            .with_artifact_dir(temp_dir.path())
            .execute(&config)
            .unwrap();

        let path = report.artifact_path.expect("artifact should be written");
        assert!(path.exists());

        let artifact = crate::utilities::load_artifact(&path).unwrap();
        assert_eq!(artifact.metadata.campaign_name, "pow_edge_cases");
        assert_eq!(artifact.metadata.rng_seed, Some(42));
        assert_eq!(artifact.best_case, report.best_case);
        crate::utilities::validate_artifact(&artifact).unwrap();
    }

    #[test]
    fn test_low_scoring_seed_improves() {
        let config = parse_campaign(
            r#"
name: "uninteresting_seed"
seed:
  base: "123.456"
  exponent: 7
iterations: 1000
rng_seed: 1
"#,
        )
        .unwrap();
        let report = CampaignExecutor::new().execute(&config).unwrap();
        assert_eq!(report.seed_fitness, FitnessScore::ZERO);
        assert!(report.best_fitness > FitnessScore::ZERO);
        assert!(!report.improvements.is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = zero_seed_campaign();
        config.iterations = 0;
        assert!(CampaignExecutor::new().execute(&config).is_err());
    }
}
