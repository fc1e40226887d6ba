//! # Adjudication Client
//!
//! Boundary to the adversarial dual-agent subsystem: a prober that
//! attacks the message and a defending evaluator that judges it. The
//! subsystem is external; this crate defines the contract it must
//! satisfy and the client that speaks it.
//!
//! ## Contract
//!
//! - Invoked only for UNCERTAIN messages (the pipeline enforces this).
//! - Always terminates with a verdict; the external subsystem bounds
//!   its own turn count, and the orchestrator imposes a timeout on top.
//! - Produces a final [`AdjudicationVerdict`], a human-readable
//!   rationale, an ordered dialogue transcript, and a recommended
//!   [`ToolPolicy`].
//!
//! ## Failure Semantics
//!
//! Unlike the scoring pre-filter, adjudication failures are surfaced
//! as errors so the orchestrator can resolve them conservatively
//! (block, SHUTDOWN policy). This stage is the last line of defense
//! before tool-capable execution; it never fails permissively.

mod client;
mod error;
mod models;

pub use client::{CouncilConfig, HttpAdjudicator};
pub use error::CouncilError;
pub use models::{AdjudicationOutcome, AdjudicationVerdict, DialogueEntry};

pub use shield_registry::ToolPolicy;

use async_trait::async_trait;

/// Capability interface for the dual-agent adjudication subsystem.
///
/// Treated by the orchestrator as a single blocking call with a
/// caller-imposed timeout. Tests substitute deterministic fakes.
#[async_trait]
pub trait Adjudicator: Send + Sync {
    /// Runs the two-role exchange against a message.
    async fn adjudicate(&self, message: &str) -> Result<AdjudicationOutcome>;
}

/// Result type for council operations.
pub type Result<T> = std::result::Result<T, CouncilError>;
