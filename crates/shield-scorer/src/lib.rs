//! # Scoring Client
//!
//! Fast confidence-scoring pre-filter. Calls an external ML scorer that
//! returns the probability a message is adversarial, and converts that
//! probability into a coarse [`ScoreVerdict`] with fixed thresholds.
//!
//! ## Threshold Policy
//!
//! | Confidence | Verdict |
//! |------------|-----------|
//! | `>= 0.85` | MALICIOUS |
//! | `<= 0.20` | SAFE |
//! | otherwise | UNCERTAIN |
//!
//! Boundary values are inclusive toward their adjacent verdicts.
//!
//! ## Failure Semantics
//!
//! Scoring failures never reach the orchestrator as errors. The
//! [`Scorer`] contract is infallible: a transport failure, non-success
//! status, or malformed payload degrades to [`Score::inconclusive`]
//! (UNCERTAIN, confidence 0), which routes the message into the
//! adjudication stage. The pipeline fails open into adjudication,
//! never into unchecked execution.

mod client;
mod error;
mod verdict;

pub use client::{HttpScorer, ScorerConfig};
pub use error::ScorerError;
pub use verdict::{Score, ScoreVerdict, MALICIOUS_THRESHOLD, SAFE_THRESHOLD};

use async_trait::async_trait;

/// Capability interface for the confidence-scoring service.
///
/// Implementations must not surface failures: anything that prevents a
/// real score from being produced is reported as
/// [`Score::inconclusive`]. Tests substitute deterministic fakes.
#[async_trait]
pub trait Scorer: Send + Sync {
    /// Scores a message for adversarial intent.
    async fn score(&self, message: &str) -> Score;
}

/// Result type for internal scorer operations.
pub type Result<T> = std::result::Result<T, ScorerError>;
