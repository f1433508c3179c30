// File: amplifier/src/amplifier.rs
//
// Amplification Loop
//
// Randomized hill-climbing over the input domain: independent samples
// challenge the current best, and with probability one half a crossover of
// the best with a fresh sample challenges it again. The best case never
// regresses, and ties keep the first-found case.

use crate::error::AmplifierError;
use crate::fitness::{Fitness, FitnessScore};
use crate::operators::{Crossover, Sampler};
use crate::orchestrator::SearchRng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Probability of attempting a crossover after each sampling round.
pub const CROSSOVER_PROBABILITY: f64 = 0.5;

/// The current best candidate and its score.
///
/// Owned by a single amplification run; replaced wholesale whenever a
/// candidate scores strictly higher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState<C> {
    /// Best case found so far.
    pub best: C,
    /// Its fitness score.
    pub fitness: FitnessScore,
}

/// Which operator produced an improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorKind {
    /// A fresh independent sample beat the previous best.
    IndependentSample,
    /// A crossover of the best with a fresh sample beat the previous best.
    Crossover,
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatorKind::IndependentSample => write!(f, "sample"),
            OperatorKind::Crossover => write!(f, "crossover"),
        }
    }
}

/// One step of the improvement trajectory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovementRecord {
    /// Iteration at which the improvement happened (zero-based).
    pub iteration: u64,
    /// Operator that produced the new best.
    pub operator: OperatorKind,
    /// The new best score.
    pub fitness: FitnessScore,
    /// The new best case, rendered for the record.
    pub case: String,
}

/// Everything a traced amplification run produced.
#[derive(Debug, Clone)]
pub struct AmplificationOutcome<C> {
    /// Final search state.
    pub state: SearchState<C>,
    /// Score of the caller-supplied seed.
    pub seed_fitness: FitnessScore,
    /// Every improvement, in order.
    pub improvements: Vec<ImprovementRecord>,
    /// Number of fitness evaluations, seed included.
    pub candidates_evaluated: u64,
}

/// Amplify a seed case into the highest-fitness case the search can find.
///
/// Runs `iterations` rounds. Each round draws one independent sample and,
/// with probability [`CROSSOVER_PROBABILITY`], one crossover of the current
/// best with a second fresh sample; a candidate replaces the best only when
/// it scores strictly higher.
///
/// Guarantees: the returned score is at least the seed's score, and the
/// best never regresses during the run. `iterations == 0` returns the seed
/// with its score (evaluated once). Randomness is drawn exclusively from
/// `rng`, so a fixed seed makes the run bit-for-bit reproducible.
///
/// # Errors
///
/// Any failure from the fitness heuristic (including the probed target
/// behind it) aborts the run immediately; no partial result is returned.
pub fn amplify<C, F, S, X>(
    seed: C,
    iterations: u64,
    fitness: &mut F,
    sampler: &mut S,
    crossover: &X,
    rng: &SearchRng,
) -> Result<SearchState<C>, AmplifierError>
where
    C: Clone + fmt::Display,
    F: Fitness<C>,
    S: Sampler<C>,
    X: Crossover<C>,
{
    Ok(amplify_traced(seed, iterations, fitness, sampler, crossover, rng)?.state)
}

/// [`amplify`], additionally returning the improvement trajectory.
pub fn amplify_traced<C, F, S, X>(
    seed: C,
    iterations: u64,
    fitness: &mut F,
    sampler: &mut S,
    crossover: &X,
    rng: &SearchRng,
) -> Result<AmplificationOutcome<C>, AmplifierError>
where
    C: Clone + fmt::Display,
    F: Fitness<C>,
    S: Sampler<C>,
    X: Crossover<C>,
{
    let seed_fitness = fitness.score(&seed)?;
    let mut state = SearchState {
        best: seed,
        fitness: seed_fitness,
    };
    let mut improvements = Vec::new();
    let mut candidates_evaluated = 1u64;

    for iteration in 0..iterations {
        let candidate = sampler.sample(rng);
        let score = fitness.score(&candidate)?;
        candidates_evaluated += 1;
        if score > state.fitness {
            log::debug!(
                "iteration {}: sample {} improved fitness {} -> {}",
                iteration,
                candidate,
                state.fitness,
                score
            );
            improvements.push(ImprovementRecord {
                iteration,
                operator: OperatorKind::IndependentSample,
                fitness: score,
                case: candidate.to_string(),
            });
            state = SearchState {
                best: candidate,
                fitness: score,
            };
        }

        if rng.gen_bool(CROSSOVER_PROBABILITY) {
            let partner = sampler.sample(rng);
            let combined = crossover.combine(&state.best, &partner, rng);
            let score = fitness.score(&combined)?;
            candidates_evaluated += 1;
            if score > state.fitness {
                log::debug!(
                    "iteration {}: crossover {} improved fitness {} -> {}",
                    iteration,
                    combined,
                    state.fitness,
                    score
                );
                improvements.push(ImprovementRecord {
                    iteration,
                    operator: OperatorKind::Crossover,
                    fitness: score,
                    case: combined.to_string(),
                });
                state = SearchState {
                    best: combined,
                    fitness: score,
                };
            }
        }
    }

    Ok(AmplificationOutcome {
        state,
        seed_fitness,
        improvements,
        candidates_evaluated,
    })
}
