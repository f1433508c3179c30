// File: amplifier/src/error.rs
//
// Error types for amplification runs.

use thiserror::Error;

/// Error types for amplification runs.
#[derive(Error, Debug)]
pub enum AmplifierError {
    /// Caller-supplied input was rejected before the search started.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The fitness heuristic, or the probed target behind it, failed.
    ///
    /// Aborts the run immediately with no partial result. There are no
    /// retries: a candidate that crashes the probed function is a finding,
    /// not a skip.
    #[error("probe failed: {0}")]
    Probe(#[source] anyhow::Error),
}
