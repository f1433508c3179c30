// File: amplifier/src/utilities/artifacts.rs
//
// Regression-Seed Artifact Collection
//
// This module persists the result of an amplification run as a JSON
// artifact: the winning case, its trajectory, and everything needed to
// replay the run exactly.

use crate::amplifier::ImprovementRecord;
use crate::case::TestCase;
use crate::fitness::FitnessScore;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Campaign metadata for reproduction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignMetadata {
    /// Campaign name
    pub campaign_name: String,
    /// RNG seed used (if recorded)
    pub rng_seed: Option<u64>,
    /// Timestamp when the run finished
    pub timestamp: String,
    /// Run duration (milliseconds)
    pub duration_ms: u64,
    /// Iteration budget of the run
    pub iterations: u64,
}

/// Log entry captured during the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Log level (ERROR, WARN, INFO, DEBUG, TRACE)
    pub level: String,
    /// Log message
    pub message: String,
    /// Timestamp
    pub timestamp: String,
}

/// Complete regression-seed artifact for one amplification run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedArtifact {
    /// Run metadata
    pub metadata: CampaignMetadata,
    /// Caller-supplied seed case
    pub seed_case: TestCase,
    /// The seed case's score
    pub seed_fitness: FitnessScore,
    /// Winning case, for use as a regression-test seed
    pub best_case: TestCase,
    /// The winning case's score
    pub best_fitness: FitnessScore,
    /// Improvement trajectory, in order
    pub improvements: Vec<ImprovementRecord>,
    /// Captured logs
    pub logs: Vec<LogEntry>,
}

/// Artifact collector for capturing an amplification run.
///
/// # Examples
///
/// ```rust,ignore
/// use test_amplifier::utilities::artifacts::ArtifactCollector;
///
/// let mut collector = ArtifactCollector::new("pow_edge_cases");
/// collector.set_rng_seed(0x1234567890abcdef);
/// collector.set_iterations(1000);
///
/// // Run the search...
/// collector.record_seed(seed_case, outcome.seed_fitness);
/// collector.record_best(outcome.state.best, outcome.state.fitness);
/// collector.set_improvements(outcome.improvements);
///
/// let path = collector.save("./artifacts/")?;
/// ```
pub struct ArtifactCollector {
    metadata: CampaignMetadata,
    seed: Option<(TestCase, FitnessScore)>,
    best: Option<(TestCase, FitnessScore)>,
    improvements: Vec<ImprovementRecord>,
    logs: Vec<LogEntry>,
    start_time: std::time::Instant,
}

impl ArtifactCollector {
    /// Create a new collector for a campaign.
    pub fn new(campaign_name: impl Into<String>) -> Self {
        Self {
            metadata: CampaignMetadata {
                campaign_name: campaign_name.into(),
                rng_seed: None,
                timestamp: chrono::Utc::now().to_rfc3339(),
                duration_ms: 0,
                iterations: 0,
            },
            seed: None,
            best: None,
            improvements: Vec::new(),
            logs: Vec::new(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Record the RNG seed used by the run.
    pub fn set_rng_seed(&mut self, seed: u64) {
        self.metadata.rng_seed = Some(seed);
    }

    /// Record the iteration budget of the run.
    pub fn set_iterations(&mut self, iterations: u64) {
        self.metadata.iterations = iterations;
    }

    /// Record the caller-supplied seed case and its score.
    pub fn record_seed(&mut self, case: TestCase, fitness: FitnessScore) {
        self.seed = Some((case, fitness));
    }

    /// Record the winning case and its score.
    pub fn record_best(&mut self, case: TestCase, fitness: FitnessScore) {
        self.best = Some((case, fitness));
    }

    /// Attach the improvement trajectory.
    pub fn set_improvements(&mut self, improvements: Vec<ImprovementRecord>) {
        self.improvements = improvements;
    }

    /// Capture a log entry.
    pub fn capture_log(&mut self, level: impl Into<String>, message: impl Into<String>) {
        self.logs.push(LogEntry {
            level: level.into(),
            message: message.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        });
    }

    /// Save the artifact to disk.
    ///
    /// Creates a pretty-printed JSON file named after the campaign and a
    /// timestamp. Fails if no outcome was recorded.
    ///
    /// # Returns
    ///
    /// Path to the saved artifact file.
    pub fn save(&mut self, output_dir: impl AsRef<Path>) -> Result<PathBuf> {
        let (seed_case, seed_fitness) = self.seed.ok_or_else(|| anyhow!("no seed case recorded"))?;
        let (best_case, best_fitness) =
            self.best.ok_or_else(|| anyhow!("no winning case recorded"))?;

        self.metadata.duration_ms = self.start_time.elapsed().as_millis() as u64;

        let artifact = SeedArtifact {
            metadata: self.metadata.clone(),
            seed_case,
            seed_fitness,
            best_case,
            best_fitness,
            improvements: self.improvements.clone(),
            logs: self.logs.clone(),
        };

        let output_dir = output_dir.as_ref();
        fs::create_dir_all(output_dir).context("Failed to create artifact directory")?;

        let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
        let name: String = self
            .metadata
            .campaign_name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        let filepath = output_dir.join(format!("{}_{}.json", name, timestamp));

        let json =
            serde_json::to_string_pretty(&artifact).context("Failed to serialize artifact")?;
        fs::write(&filepath, json).context("Failed to write artifact file")?;

        if log::log_enabled!(log::Level::Debug) {
            log::debug!("Saved artifact to {:?}", filepath);
        }

        Ok(filepath)
    }

    /// Load an artifact from disk.
    pub fn load(filepath: impl AsRef<Path>) -> Result<SeedArtifact> {
        let filepath = filepath.as_ref();
        let content = fs::read_to_string(filepath).context("Failed to read artifact file")?;
        let artifact: SeedArtifact =
            serde_json::from_str(&content).context("Failed to parse artifact JSON")?;
        Ok(artifact)
    }
}
