//! HTTP client for the external dual-agent subsystem.
//!
//! Wire contract: the raw message goes out as the request body;
//! the subsystem answers with
//! `{ verdict, analysis, policy, dialogue[], summary }`.

use crate::error::CouncilError;
use crate::models::{AdjudicationOutcome, AdjudicationVerdict, DialogueEntry};
use crate::{Adjudicator, Result};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shield_registry::ToolPolicy;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for the HTTP adjudication client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouncilConfig {
    /// Adjudication subsystem endpoint.
    pub endpoint: String,

    /// Total request timeout in seconds. The dual-agent exchange is
    /// slower than scoring; budget accordingly.
    pub timeout_secs: u64,
}

impl Default for CouncilConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8002/api/adjudicate".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Deserialize)]
struct WireEntry {
    #[serde(alias = "speaker")]
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct WireOutcome {
    verdict: AdjudicationVerdict,
    analysis: String,
    policy: ToolPolicy,
    #[serde(default)]
    dialogue: Vec<WireEntry>,
    summary: String,
}

impl From<WireOutcome> for AdjudicationOutcome {
    fn from(wire: WireOutcome) -> Self {
        Self {
            verdict: wire.verdict,
            analysis: wire.analysis,
            policy: wire.policy,
            dialogue: wire
                .dialogue
                .into_iter()
                .map(|e| DialogueEntry::new(e.role, e.content))
                .collect(),
            summary: wire.summary,
        }
    }
}

/// Adjudication client backed by the external dual-agent subsystem.
pub struct HttpAdjudicator {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpAdjudicator {
    /// Creates an adjudication client from configuration.
    pub fn new(config: &CouncilConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_else(|e| {
                warn!("HTTP client builder failed, per-service timeouts lost: {e}");
                reqwest::Client::new()
            });
        Self {
            endpoint: config.endpoint.clone(),
            client,
        }
    }
}

#[async_trait]
impl Adjudicator for HttpAdjudicator {
    async fn adjudicate(&self, message: &str) -> Result<AdjudicationOutcome> {
        let resp = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(message.to_string())
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(CouncilError::Status(resp.status().as_u16()));
        }

        let wire: WireOutcome = resp
            .json()
            .await
            .map_err(|e| CouncilError::MalformedPayload(e.to_string()))?;

        let outcome = AdjudicationOutcome::from(wire);
        debug!(
            verdict = %outcome.verdict,
            policy = %outcome.policy,
            turns = outcome.dialogue.len(),
            "adjudication completed"
        );
        Ok(outcome)
    }
}
