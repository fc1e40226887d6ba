//! Error types for the Response Client.

use thiserror::Error;

/// Errors that can occur while fetching a model response.
#[derive(Debug, Error)]
pub enum ResponderError {
    /// Transport-level failure reaching the backend.
    #[error("Response backend unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Response backend returned status {0}")]
    Status(u16),

    /// The payload could not be parsed.
    #[error("Malformed response payload: {0}")]
    MalformedPayload(String),

    /// The backend reported invoking a tool outside the allowed set.
    #[error("Backend invoked tool '{0}' outside the allowed set")]
    ToolNotPermitted(String),
}
