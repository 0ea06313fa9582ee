use thiserror::Error;

/// Error type for password hashing.
///
/// Verification has no error type: a malformed stored hash and a mismatched
/// password are both reported as a plain `false`.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
