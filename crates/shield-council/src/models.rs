//! Data models for adjudication outcomes.

use serde::{Deserialize, Serialize};
use shield_registry::ToolPolicy;

/// Final verdict from the dual-agent exchange.
///
/// The council never abstains: the external subsystem is required to
/// terminate with one of these two classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AdjudicationVerdict {
    /// The defender prevailed; the message may proceed.
    Safe,
    /// The prober exposed adversarial intent; block.
    Malicious,
}

impl std::fmt::Display for AdjudicationVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Safe => write!(f, "SAFE"),
            Self::Malicious => write!(f, "MALICIOUS"),
        }
    }
}

/// One entry of the adversarial dialogue transcript.
///
/// Produced entirely by the external adjudicator, in order; consumed
/// read-only by the pipeline and carried into the Decision for audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueEntry {
    /// Speaker role (e.g., "attacker", "defender").
    pub role: String,
    /// What the speaker said.
    pub content: String,
}

impl DialogueEntry {
    /// Creates a transcript entry.
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// Everything the adjudication subsystem returns for one message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjudicationOutcome {
    /// The final verdict.
    pub verdict: AdjudicationVerdict,

    /// Human-readable rationale for the verdict.
    pub analysis: String,

    /// Recommended tool policy for the request.
    pub policy: ToolPolicy,

    /// Ordered transcript of the two-role exchange.
    pub dialogue: Vec<DialogueEntry>,

    /// One-line summary suitable as a user-facing reason.
    pub summary: String,
}

impl AdjudicationOutcome {
    /// Returns true if the council judged the message malicious.
    pub fn is_malicious(&self) -> bool {
        self.verdict == AdjudicationVerdict::Malicious
    }
}
