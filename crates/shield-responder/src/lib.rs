//! # Response Client
//!
//! Boundary to the downstream tool-using language model. The client
//! restricts the model's tool-invocation surface to exactly the
//! allowed set the pipeline resolved — enforcement happens here, at
//! the call boundary, never by trusting the model to self-restrict.
//!
//! ## Enforcement
//!
//! - Outbound, only the allowed tool names are ever advertised.
//! - Inbound, any reported invocation of a tool outside the allowed
//!   set rejects the whole response
//!   ([`ResponderError::ToolNotPermitted`]) before the answer is
//!   accepted.
//!
//! ## Failure Semantics
//!
//! Response failures are never degraded locally: they surface to the
//! orchestrator, which aborts the remaining pipeline and produces a
//! generic user-facing failure without echoing internal detail.

mod client;
mod error;

pub use client::{HttpResponder, ResponderConfig};
pub use error::ResponderError;

use async_trait::async_trait;
use std::collections::BTreeSet;

/// Capability interface for the downstream model backend.
///
/// Tests substitute deterministic fakes that record their calls.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Sends a message to the downstream model with an exact allowed
    /// tool set and an optional instruction preamble, returning the
    /// model's final textual answer.
    async fn respond(
        &self,
        message: &str,
        allowed_tools: &BTreeSet<String>,
        instruction: Option<&str>,
    ) -> Result<String>;
}

/// Result type for responder operations.
pub type Result<T> = std::result::Result<T, ResponderError>;
