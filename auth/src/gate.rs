use thiserror::Error;

use crate::token::TokenCodec;
use crate::token::TokenKind;

/// Authenticated principal resolved from a verified access token.
///
/// Transient per request; the auth core never persists it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Subject claim of the verified token
    pub subject: String,
}

/// Uniform rejection returned for every authentication failure.
///
/// A single variant on purpose: missing header, bad scheme, invalid
/// signature, expiry, and wrong token type must be indistinguishable to an
/// unauthenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid credentials")]
pub struct Unauthenticated;

/// The single trust boundary for protected requests.
///
/// Extracts a bearer token from an authorization header, verifies it, and
/// yields the authenticated identity. Every downstream operation that needs
/// "who is calling" goes through here rather than re-parsing tokens.
pub struct IdentityGate {
    codec: TokenCodec,
}

impl IdentityGate {
    /// Create a gate verifying against the given signing secret.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            codec: TokenCodec::new(secret),
        }
    }

    /// Authenticate a request from its `Authorization` header value.
    ///
    /// Malformed headers are rejected before any signature work. A token
    /// that verifies but is not of type `access`, or that carries an empty
    /// subject, is rejected the same way.
    ///
    /// # Errors
    /// * `Unauthenticated` - On every failure, without detail
    pub fn authenticate(&self, authorization: &str) -> Result<Identity, Unauthenticated> {
        let token = extract_bearer(authorization)?;

        let claims = self.codec.verify(token).map_err(|_| Unauthenticated)?;

        if claims.kind != TokenKind::Access {
            return Err(Unauthenticated);
        }
        if claims.sub.is_empty() {
            return Err(Unauthenticated);
        }

        Ok(Identity {
            subject: claims.sub,
        })
    }
}

fn extract_bearer(header: &str) -> Result<&str, Unauthenticated> {
    let token = header.strip_prefix("Bearer ").ok_or(Unauthenticated)?;
    if token.is_empty() {
        return Err(Unauthenticated);
    }
    Ok(token)
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn access_token(subject: &str) -> String {
        TokenCodec::new(SECRET)
            .issue(subject, TokenKind::Access, Duration::minutes(30))
            .expect("Failed to issue token")
    }

    #[test]
    fn test_authenticate_success() {
        let gate = IdentityGate::new(SECRET);
        let header = format!("Bearer {}", access_token("alice"));

        let identity = gate.authenticate(&header).expect("Authentication failed");
        assert_eq!(identity.subject, "alice");
    }

    #[test]
    fn test_missing_bearer_scheme_rejected() {
        let gate = IdentityGate::new(SECRET);
        let token = access_token("alice");

        // Valid token, wrong or absent scheme prefix.
        assert_eq!(gate.authenticate(&token), Err(Unauthenticated));
        assert_eq!(
            gate.authenticate(&format!("Basic {token}")),
            Err(Unauthenticated)
        );
        assert_eq!(gate.authenticate(""), Err(Unauthenticated));
    }

    #[test]
    fn test_empty_credential_rejected() {
        let gate = IdentityGate::new(SECRET);
        assert_eq!(gate.authenticate("Bearer "), Err(Unauthenticated));
    }

    #[test]
    fn test_refresh_token_rejected() {
        let gate = IdentityGate::new(SECRET);
        let codec = TokenCodec::new(SECRET);

        // Passes raw signature and expiry verification, but the kind is
        // wrong for request authentication.
        let token = codec
            .issue("alice", TokenKind::Refresh, Duration::days(7))
            .expect("Failed to issue token");
        assert!(codec.verify(&token).is_ok());

        let header = format!("Bearer {token}");
        assert_eq!(gate.authenticate(&header), Err(Unauthenticated));
    }

    #[test]
    fn test_foreign_secret_rejected() {
        let gate = IdentityGate::new(SECRET);
        let foreign = TokenCodec::new(b"another_secret_key_of_32_bytes!!!");

        let token = foreign
            .issue("alice", TokenKind::Access, Duration::minutes(30))
            .expect("Failed to issue token");

        let header = format!("Bearer {token}");
        assert_eq!(gate.authenticate(&header), Err(Unauthenticated));
    }

    #[test]
    fn test_empty_subject_rejected() {
        let gate = IdentityGate::new(SECRET);
        let header = format!("Bearer {}", access_token(""));

        assert_eq!(gate.authenticate(&header), Err(Unauthenticated));
    }
}
