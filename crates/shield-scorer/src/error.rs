//! Error types for the Scoring Client.
//!
//! These errors stay internal to the crate: the [`crate::Scorer`]
//! contract converts all of them into an inconclusive score before the
//! orchestrator sees anything.

use thiserror::Error;

/// Errors that can occur while fetching a confidence score.
#[derive(Debug, Error)]
pub enum ScorerError {
    /// Transport-level failure reaching the scoring service.
    #[error("Scoring service unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Scoring service returned status {0}")]
    Status(u16),

    /// The payload could not be parsed or failed validation.
    #[error("Malformed scoring payload: {0}")]
    MalformedPayload(String),
}
