//! HTTP client for the external confidence-scoring service.
//!
//! Wire contract: outbound `{ "message": "..." }`, inbound
//! `{ "confidence_score": f }` with `f` in `[0, 1]`.

use crate::error::ScorerError;
use crate::verdict::Score;
use crate::{Result, Scorer};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for the HTTP scoring client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorerConfig {
    /// Scoring service endpoint.
    pub endpoint: String,

    /// Total request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8001/api/predict".to_string(),
            timeout_secs: 5,
        }
    }
}

#[derive(Serialize)]
struct ScoreRequest<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct ScoreResponse {
    confidence_score: f64,
}

/// Scoring client backed by the external ML service.
pub struct HttpScorer {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpScorer {
    /// Creates a scoring client from configuration.
    pub fn new(config: &ScorerConfig) -> Self {
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

    /// Fetches a score, surfacing failures as errors.
    ///
    /// Kept separate from the [`Scorer`] impl so the degradation point
    /// is a single place and the happy path stays testable.
    async fn try_score(&self, message: &str) -> Result<Score> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&ScoreRequest { message })
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(ScorerError::Status(resp.status().as_u16()));
        }

        let body: ScoreResponse = resp
            .json()
            .await
            .map_err(|e| ScorerError::MalformedPayload(e.to_string()))?;

        parse_confidence(body.confidence_score)
    }
}

/// Validates a raw confidence value and derives the verdict.
fn parse_confidence(confidence: f64) -> Result<Score> {
    if !(0.0..=1.0).contains(&confidence) || confidence.is_nan() {
        return Err(ScorerError::MalformedPayload(format!(
            "confidence_score {confidence} outside [0, 1]"
        )));
    }
    Ok(Score::from_confidence(confidence))
}

#[async_trait]
impl Scorer for HttpScorer {
    async fn score(&self, message: &str) -> Score {
        match self.try_score(message).await {
            Ok(score) => {
                debug!(
                    confidence = score.confidence,
                    verdict = %score.verdict,
                    "scoring service answered"
                );
                score
            }
            Err(e) => {
                // Fail open into adjudication, never into execution.
                warn!("Scoring service unavailable, degrading to UNCERTAIN: {e}");
                Score::inconclusive()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::ScoreVerdict;

    #[test]
    fn test_parse_confidence_valid() {
        let score = parse_confidence(0.5).unwrap();
        assert_eq!(score.verdict, ScoreVerdict::Uncertain);
    }

    #[test]
    fn test_parse_confidence_boundaries() {
        assert_eq!(
            parse_confidence(0.85).unwrap().verdict,
            ScoreVerdict::Malicious
        );
        assert_eq!(parse_confidence(0.2).unwrap().verdict, ScoreVerdict::Safe);
    }

    #[test]
    fn test_parse_confidence_out_of_range() {
        assert!(parse_confidence(1.5).is_err());
        assert!(parse_confidence(-0.1).is_err());
        assert!(parse_confidence(f64::NAN).is_err());
    }

    #[tokio::test]
    async fn test_unreachable_service_degrades_to_inconclusive() {
        // Nothing listens on this port; the client must absorb the
        // failure and answer UNCERTAIN with confidence 0.
        let scorer = HttpScorer::new(&ScorerConfig {
            endpoint: "http://127.0.0.1:9/score".to_string(),
            timeout_secs: 1,
        });

        let score = scorer.score("hello").await;
        assert_eq!(score, Score::inconclusive());
    }
}
