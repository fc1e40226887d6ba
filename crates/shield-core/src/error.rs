//! Error types for the Decision Pipeline.
//!
//! Component degradations (scorer, council) never appear here — they
//! are absorbed into conservative Decisions. Only request-fatal
//! conditions surface as errors, and callers convert them to a generic
//! user-visible failure without echoing internal detail.

use thiserror::Error;

/// Request-fatal pipeline errors.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The response backend failed; the remaining pipeline is aborted.
    #[error("Response backend failure: {0}")]
    Response(#[from] shield_responder::ResponderError),

    /// The response backend did not answer within the deadline.
    #[error("Response backend timed out")]
    ResponseTimeout,

    /// Chaos mode was requested but the operator has not enabled it.
    #[error("Chaos mode is disabled by operator configuration")]
    ChaosModeDisabled,

    /// Configuration could not be turned into a working pipeline.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal invariant violation.
    #[error("Internal error: {0}")]
    Internal(String),
}
