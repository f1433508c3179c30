//! Amplify - Campaign Runner
//!
//! A lightweight CLI for running amplification campaigns and inspecting
//! their regression-seed artifacts.
//!
//! # Usage
//!
//! ```bash
//! # Run a campaign
//! amplify run --config campaigns/pow_edge_cases.yaml
//!
//! # Pin the RNG seed and capture an artifact
//! amplify run --config campaigns/pow_edge_cases.yaml \
//!     --artifacts ./artifacts --rng-seed 0x2a
//!
//! # Inspect a saved artifact
//! amplify inspect artifacts/pow_edge_cases_20260807_120000.json
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use test_amplifier::campaign::{load_campaign, CampaignExecutor};
use test_amplifier::orchestrator::rng::parse_seed;
use test_amplifier::utilities::{load_artifact, print_artifact_summary, validate_artifact};

/// Amplify - Campaign Runner
#[derive(Parser)]
#[command(name = "amplify")]
#[command(about = "Search-based test amplification for fixed-point contract math")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an amplification campaign
    Run {
        /// Campaign YAML file
        #[arg(short, long)]
        config: PathBuf,

        /// Directory to save the regression-seed artifact into
        #[arg(short, long)]
        artifacts: Option<PathBuf>,

        /// RNG seed (0x-prefixed hex or decimal), overriding the campaign file
        #[arg(long)]
        rng_seed: Option<String>,
    },
    /// Validate and summarize a saved artifact
    Inspect {
        /// Artifact JSON file
        artifact: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run {
            config,
            artifacts,
            rng_seed,
        } => {
            let config = load_campaign(&config)?;
            let mut executor = CampaignExecutor::new();
            if let Some(dir) = artifacts {
                executor = executor.with_artifact_dir(dir);
            }
            if let Some(raw) = rng_seed {
                let seed = parse_seed(&raw)
                    .ok_or_else(|| anyhow::anyhow!("unparseable --rng-seed {:?}", raw))?;
                executor = executor.with_rng_seed(seed);
            }

            let report = executor.execute(&config)?;
            for line in &report.log {
                println!("{}", line);
            }
            println!();
            println!(
                "Best case: {} (fitness {}, up from seed fitness {})",
                report.best_case, report.best_fitness, report.seed_fitness
            );
            println!(
                "Replay: AMPLIFIER_TEST_SEED=0x{:016x} amplify run --config <same campaign>",
                report.rng_seed
            );
            Ok(())
        }
        Commands::Inspect { artifact } => {
            let artifact = load_artifact(&artifact)?;
            validate_artifact(&artifact)?;
            print_artifact_summary(&artifact);
            Ok(())
        }
    }
}
