//! Error types for the Adjudication Client.
//!
//! These are surfaced to the orchestrator, which resolves any of them
//! conservatively: blocked, MALICIOUS, SHUTDOWN policy.

use thiserror::Error;

/// Errors that can occur during adjudication.
#[derive(Debug, Error)]
pub enum CouncilError {
    /// Transport-level failure reaching the adjudication subsystem.
    #[error("Adjudication subsystem unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// The subsystem answered with a non-success status.
    #[error("Adjudication subsystem returned status {0}")]
    Status(u16),

    /// The payload could not be parsed or violates the contract.
    #[error("Malformed adjudication payload: {0}")]
    MalformedPayload(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = CouncilError::Status(502);
        assert!(err.to_string().contains("502"));
    }

    #[test]
    fn test_malformed_payload_display() {
        let err = CouncilError::MalformedPayload("missing verdict".to_string());
        assert!(err.to_string().contains("missing verdict"));
    }
}
