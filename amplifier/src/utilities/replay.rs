// File: amplifier/src/utilities/replay.rs
//
// Artifact Replay Utilities
//
// Loading, validating and summarizing regression-seed artifacts so a run
// can be inspected and reproduced.

use super::artifacts::{ArtifactCollector, SeedArtifact};
use crate::orchestrator::rng::SEED_ENV_VAR;
use anyhow::Result;
use std::path::Path;

/// Load an artifact from disk.
pub fn load_artifact(filepath: impl AsRef<Path>) -> Result<SeedArtifact> {
    ArtifactCollector::load(filepath)
}

/// Print an artifact summary to stdout.
///
/// Displays key information from the artifact in a human-readable format.
pub fn print_artifact_summary(artifact: &SeedArtifact) {
    println!("╔════════════════════════════════════════════════════════════════╗");
    println!("║              AMPLIFICATION ARTIFACT SUMMARY                    ║");
    println!("╠════════════════════════════════════════════════════════════════╣");
    println!("║ Campaign:      {:44} ║", artifact.metadata.campaign_name);
    println!("║ Timestamp:     {:44} ║", artifact.metadata.timestamp);
    println!(
        "║ Duration:      {:44} ║",
        format!("{} ms", artifact.metadata.duration_ms)
    );
    println!(
        "║ Iterations:    {:44} ║",
        artifact.metadata.iterations.to_string()
    );

    if let Some(seed) = artifact.metadata.rng_seed {
        println!("║ RNG Seed:      {:44} ║", format!("0x{:016x}", seed));
    } else {
        println!("║ RNG Seed:      {:44} ║", "N/A");
    }

    println!("╠════════════════════════════════════════════════════════════════╣");
    println!(
        "║ Seed Case:     {:44} ║",
        format!("{} (fitness {})", artifact.seed_case, artifact.seed_fitness)
    );
    for line in textwrap::wrap(
        &format!("{} (fitness {})", artifact.best_case, artifact.best_fitness),
        44,
    ) {
        println!("║ Best Case:     {:44} ║", line);
    }
    println!(
        "║ Improvements:  {:44} ║",
        format!("{} recorded", artifact.improvements.len())
    );

    if !artifact.improvements.is_empty() {
        println!("╠════════════════════════════════════════════════════════════════╣");
        println!("║ TRAJECTORY (last 5):                                           ║");
        for step in artifact.improvements.iter().rev().take(5).rev() {
            let line = format!(
                "iter {} via {}: fitness {} ({})",
                step.iteration, step.operator, step.fitness, step.case
            );
            let line = if line.len() > 58 {
                format!("{}...", &line[..55])
            } else {
                line
            };
            println!("║   {:60} ║", line);
        }
    }

    if !artifact.logs.is_empty() {
        println!("╠════════════════════════════════════════════════════════════════╣");
        println!("║ RECENT LOGS (last 5):                                          ║");
        for log in artifact.logs.iter().rev().take(5).rev() {
            let msg = if log.message.len() > 50 {
                format!("{}...", &log.message[..47])
            } else {
                log.message.clone()
            };
            println!("║ [{:5}] {:54} ║", log.level, msg);
        }
    }

    println!("╠════════════════════════════════════════════════════════════════╣");
    println!("║ REPLAY COMMAND:                                                ║");
    let cmd = get_replay_command(artifact);
    for line in textwrap::wrap(&cmd, 62) {
        println!("║ {:62} ║", line);
    }
    println!("╚════════════════════════════════════════════════════════════════╝");
}

/// Extract the replay command from an artifact.
///
/// Returns the shell command that reruns the campaign's regression test
/// with the same seed.
pub fn get_replay_command(artifact: &SeedArtifact) -> String {
    if let Some(seed) = artifact.metadata.rng_seed {
        format!(
            "{}=0x{:016x} cargo test {}",
            SEED_ENV_VAR, seed, artifact.metadata.campaign_name
        )
    } else {
        format!("cargo test {}", artifact.metadata.campaign_name)
    }
}

/// Validate artifact integrity.
///
/// Checks that the artifact has consistent data: the winning score never
/// sits below the seed's, and the recorded trajectory climbs strictly to
/// the winning score within the iteration budget.
pub fn validate_artifact(artifact: &SeedArtifact) -> Result<()> {
    if artifact.metadata.campaign_name.is_empty() {
        anyhow::bail!("Artifact has empty campaign name");
    }
    if artifact.metadata.timestamp.is_empty() {
        anyhow::bail!("Artifact has empty timestamp");
    }

    if artifact.best_fitness < artifact.seed_fitness {
        anyhow::bail!(
            "Artifact fitness regressed: best {} below seed {}",
            artifact.best_fitness,
            artifact.seed_fitness
        );
    }

    let mut last = artifact.seed_fitness;
    for step in &artifact.improvements {
        if step.fitness <= last {
            anyhow::bail!(
                "Trajectory not strictly increasing at iteration {}: {} after {}",
                step.iteration,
                step.fitness,
                last
            );
        }
        if step.iteration >= artifact.metadata.iterations {
            anyhow::bail!(
                "Improvement at iteration {} outside the budget of {}",
                step.iteration,
                artifact.metadata.iterations
            );
        }
        last = step.fitness;
    }

    if last != artifact.best_fitness {
        anyhow::bail!(
            "Trajectory ends at {} but best fitness is {}",
            last,
            artifact.best_fitness
        );
    }

    Ok(())
}
