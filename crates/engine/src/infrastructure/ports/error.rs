//! Error types for port operations.

/// Failures of the dialogue model boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LlmError {
    /// No API key configured.
    #[error("Dialogue service is not configured")]
    NotConfigured,
    /// Rejected credentials (401/403).
    #[error("Dialogue service rejected credentials: {0}")]
    Unauthorized(String),
    /// Provider quota hit (429).
    #[error("Dialogue service rate limited: {0}")]
    RateLimited(String),
    #[error("Dialogue request timed out: {0}")]
    Timeout(String),
    #[error("LLM request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    /// The provider answered without any usable text.
    #[error("Dialogue service returned an empty response")]
    EmptyResponse,
}

impl LlmError {
    /// The provider answered, but not with anything a suspect could say.
    pub fn is_unusable_answer(&self) -> bool {
        matches!(self, Self::EmptyResponse | Self::InvalidResponse(_))
    }
}

/// Failures of the session-end hook.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Stats sink unavailable: {0}")]
    Unavailable(String),
}
