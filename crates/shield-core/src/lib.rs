//! # Prompt Shield Core
//!
//! Decision pipeline for the request-classification gateway. A user
//! message enters, exactly one [`Decision`] leaves.
//!
//! ## Pipeline
//!
//! | Mode | Stages |
//! |------|--------|
//! | `shield` (default) | Scoring pre-filter → (if uncertain) dual-agent adjudication → policy resolution → response |
//! | `guardrail` | Safety instruction + refusal-marker convention, no analysis stages |
//! | `chaos` | No checks, full tool access; operator-gated contrastive baseline |
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      DECISION PIPELINE                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │   message ──► mode dispatch                                     │
//! │                    │                                            │
//! │          ┌─────────┼──────────────┐                             │
//! │          ▼         ▼              ▼                             │
//! │      guardrail   shield         chaos                           │
//! │                    │                                            │
//! │              ┌─────┴─────┐                                      │
//! │              ▼           ▼                                      │
//! │         ┌────────┐  ┌──────────┐   ┌──────────┐  ┌───────────┐  │
//! │         │ Scorer │─►│ Council  │──►│  Policy  │─►│ Responder │  │
//! │         │ (fast) │  │ (slow,   │   │ Resolver │  │ (tool-    │  │
//! │         └────────┘  │ uncertain│   └──────────┘  │  gated)   │  │
//! │                     │  only)   │                 └───────────┘  │
//! │                     └──────────┘                                │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Security Notes
//!
//! - Scoring failures degrade to UNCERTAIN (fail open into
//!   adjudication, never into execution).
//! - Adjudication failures degrade to MALICIOUS with a SHUTDOWN policy
//!   (the last line of defense never fails permissively).
//! - Response failures abort the request; no partial Decision is ever
//!   returned.
//! - The adjudication verdict always overrides the scoring verdict
//!   when both run.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shield_core::{DecisionPipeline, Mode, ShieldConfig};
//!
//! let config = ShieldConfig::default();
//! let pipeline = DecisionPipeline::from_config(&config)?;
//!
//! let decision = pipeline.decide("what's in the catalog?", Mode::Shield).await?;
//! if decision.blocked {
//!     reject(&decision.reason);
//! }
//! ```

mod config;
mod decision;
mod error;
mod pipeline;

pub use config::{GlobalConfig, ShieldConfig};
pub use decision::{Decision, Mode};
pub use error::PipelineError;
pub use pipeline::{DecisionPipeline, BLOCK_MARKER};

// Re-export component types for convenience
pub use shield_council::{Adjudicator, AdjudicationOutcome, AdjudicationVerdict, DialogueEntry};
pub use shield_registry::{RiskLevel, ToolDescriptor, ToolGrant, ToolPolicy, ToolRegistry};
pub use shield_responder::Responder;
pub use shield_scorer::{Score, ScoreVerdict, Scorer};

/// Core result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
