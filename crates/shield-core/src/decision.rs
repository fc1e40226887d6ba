//! Mode and Decision types.
//!
//! A [`Decision`] is created once per request and never mutated after
//! construction. Serialized field names match the JSON the original
//! dashboard consumes (`mlConfidence`, `dualAgentTriggered`, ...).

use serde::{Deserialize, Serialize};
use shield_council::DialogueEntry;
use shield_registry::{ToolGrant, ToolPolicy};
use shield_scorer::ScoreVerdict;
use std::collections::BTreeSet;
use std::str::FromStr;

/// Top-level behavioral switch selecting which pipeline stages run.
///
/// Ownership of the "current mode" belongs to the caller; the pipeline
/// holds no mode state between requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Two-stage analysis: scoring pre-filter, then adjudication for
    /// uncertain messages. The default.
    #[default]
    Shield,
    /// System-prompt-only guardrail; trusts the embedded instruction.
    Guardrail,
    /// Deliberately unguarded contrastive baseline. Never the default;
    /// must be enabled by the operator.
    Chaos,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shield => write!(f, "shield"),
            Self::Guardrail => write!(f, "guardrail"),
            Self::Chaos => write!(f, "chaos"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shield" => Ok(Self::Shield),
            "guardrail" => Ok(Self::Guardrail),
            "chaos" => Ok(Self::Chaos),
            other => Err(format!("unknown mode: '{other}'")),
        }
    }
}

/// The pipeline's output record.
///
/// # Invariants
///
/// - `blocked == true` implies `response` is `None`.
/// - A blocked decision always carries a non-empty `reason`.
/// - `allowed_tools` and `restricted_tools` are disjoint and together
///   cover the full registry.
///
/// Constructed through [`Decision::block`] / [`Decision::pass`], which
/// keep the first invariant structural.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Whether the request was refused.
    pub blocked: bool,

    /// User-facing reason for the outcome. Never empty when blocked.
    pub reason: String,

    /// Mode the pipeline ran in.
    pub mode: Mode,

    /// Final verdict. Adjudication overrides scoring when both ran;
    /// synthetic for guardrail and chaos modes.
    pub verdict: ScoreVerdict,

    /// Raw scorer confidence, 0.0 when scoring did not run.
    #[serde(rename = "mlConfidence")]
    pub ml_confidence: f64,

    /// Whether the dual-agent stage was invoked.
    #[serde(rename = "dualAgentTriggered")]
    pub dual_agent_triggered: bool,

    /// Operator-facing analysis of how the outcome was reached.
    pub analysis: String,

    /// Tool policy the request was resolved under.
    #[serde(rename = "toolPolicy")]
    pub tool_policy: ToolPolicy,

    /// Tools the downstream model was permitted to invoke.
    #[serde(rename = "allowedTools")]
    pub allowed_tools: BTreeSet<String>,

    /// Tools withheld for this request.
    #[serde(rename = "restrictedTools")]
    pub restricted_tools: BTreeSet<String>,

    /// The model's answer. Always `None` when blocked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,

    /// Adversarial dialogue transcript, empty unless adjudication ran.
    #[serde(rename = "agentDialogue")]
    pub dialogue: Vec<DialogueEntry>,
}

impl Decision {
    /// Creates a blocked decision. `response` is structurally absent.
    #[allow(clippy::too_many_arguments)]
    pub fn block(
        mode: Mode,
        reason: impl Into<String>,
        analysis: impl Into<String>,
        verdict: ScoreVerdict,
        ml_confidence: f64,
        grant: ToolGrant,
        dual_agent_triggered: bool,
        dialogue: Vec<DialogueEntry>,
    ) -> Self {
        let reason = reason.into();
        debug_assert!(!reason.is_empty(), "blocked decisions carry a reason");
        Self {
            blocked: true,
            reason,
            mode,
            verdict,
            ml_confidence,
            dual_agent_triggered,
            analysis: analysis.into(),
            tool_policy: grant.policy,
            allowed_tools: grant.allowed,
            restricted_tools: grant.restricted,
            response: None,
            dialogue,
        }
    }

    /// Creates a passing decision carrying the model's answer.
    #[allow(clippy::too_many_arguments)]
    pub fn pass(
        mode: Mode,
        reason: impl Into<String>,
        analysis: impl Into<String>,
        verdict: ScoreVerdict,
        ml_confidence: f64,
        grant: ToolGrant,
        dual_agent_triggered: bool,
        dialogue: Vec<DialogueEntry>,
        response: String,
    ) -> Self {
        Self {
            blocked: false,
            reason: reason.into(),
            mode,
            verdict,
            ml_confidence,
            dual_agent_triggered,
            analysis: analysis.into(),
            tool_policy: grant.policy,
            allowed_tools: grant.allowed,
            restricted_tools: grant.restricted,
            response: Some(response),
            dialogue,
        }
    }
}
