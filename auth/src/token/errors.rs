use thiserror::Error;

/// Error type for token operations.
///
/// Verification failures are distinct here; callers enforcing the trust
/// boundary (the identity gate) collapse them into a uniform rejection
/// before anything reaches the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Missing required claim: {0}")]
    MissingClaim(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),
}
