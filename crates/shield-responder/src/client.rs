//! HTTP client for the downstream model backend.
//!
//! Wire contract: outbound
//! `{ "message": ..., "allowedTools": [...], "instruction": ... }`.
//! Inbound, the backend either returns a bare plain-text answer or a
//! JSON envelope `{ "answer": ..., "invoked_tools": [...] }`. When the
//! envelope reports invoked tools, every name is checked against the
//! allowed set before the answer is accepted.

use crate::error::ResponderError;
use crate::{Responder, Result};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for the HTTP response client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponderConfig {
    /// Response backend endpoint.
    pub endpoint: String,

    /// Total request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8003/api/respond".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Serialize)]
struct RespondRequest<'a> {
    message: &'a str,
    #[serde(rename = "allowedTools")]
    allowed_tools: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instruction: Option<&'a str>,
}

#[derive(Deserialize)]
struct RespondEnvelope {
    answer: String,
    #[serde(default)]
    invoked_tools: Vec<String>,
}

/// Response client backed by the downstream model.
pub struct HttpResponder {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpResponder {
    /// Creates a response client from configuration.
    pub fn new(config: &ResponderConfig) -> Self {
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

/// Extracts the final answer from a backend body, enforcing the
/// allowed tool set against any reported invocations.
fn extract_answer(body: &str, allowed_tools: &BTreeSet<String>) -> Result<String> {
    match serde_json::from_str::<RespondEnvelope>(body) {
        Ok(envelope) => {
            for tool in &envelope.invoked_tools {
                if !allowed_tools.contains(tool) {
                    return Err(ResponderError::ToolNotPermitted(tool.clone()));
                }
            }
            Ok(envelope.answer)
        }
        // Plain-text backends return the answer as the raw body.
        Err(_) => Ok(body.to_string()),
    }
}

#[async_trait]
impl Responder for HttpResponder {
    async fn respond(
        &self,
        message: &str,
        allowed_tools: &BTreeSet<String>,
        instruction: Option<&str>,
    ) -> Result<String> {
        let request = RespondRequest {
            message,
            allowed_tools: allowed_tools.iter().map(String::as_str).collect(),
            instruction,
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(ResponderError::Status(resp.status().as_u16()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| ResponderError::MalformedPayload(e.to_string()))?;

        let answer = extract_answer(&body, allowed_tools)?;
        debug!(tools = allowed_tools.len(), "response backend answered");
        Ok(answer)
    }
}
