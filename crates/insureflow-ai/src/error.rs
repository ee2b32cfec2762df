use crate::outbound::DeliveryChannel;
use thiserror::Error;

/// Failure at the generative-service boundary. Callers are expected to
/// degrade (placeholder text, empty candidate list) rather than abort the
/// session.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("missing api credential (set GEMINI_API_KEY or [ai].api_key)")]
    MissingCredential,
    #[error("generative backend unavailable: {0}")]
    Unavailable(String),
    #[error("transient service error: {0}")]
    Transient(String),
    #[error("permanent service error: {0}")]
    Permanent(String),
    #[error("invalid service response: {0}")]
    InvalidResponse(String),
}

impl AiError {
    /// Whether a retry could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, AiError::Transient(_))
    }
}

pub type Result<T> = std::result::Result<T, AiError>;

#[derive(Debug, Error)]
pub enum OutboundError {
    #[error("no {0} address on file for this lead")]
    MissingAddress(DeliveryChannel),
    #[error("delivery rejected: {0}")]
    Rejected(String),
}
