use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Token type tag.
///
/// `Access` tokens authenticate individual requests; `Refresh` tokens exist
/// only to mint new access tokens and are rejected at the request gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Claims carried by every issued token.
///
/// All fields are required; a token missing any of them fails decoding
/// instead of yielding partial claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (authenticated principal identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Token type tag
    #[serde(rename = "type")]
    pub kind: TokenKind,
}

impl Claims {
    /// Build a claims set for `subject` valid for `ttl` from `now`.
    pub fn new(
        subject: impl Into<String>,
        kind: TokenKind,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            kind,
        }
    }

    /// Check whether the token has expired at `current_timestamp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims() {
        let now = Utc::now();
        let claims = Claims::new("alice", TokenKind::Access, Duration::minutes(30), now);

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp - claims.iat, 30 * 60);
        assert_eq!(claims.kind, TokenKind::Access);
    }

    #[test]
    fn test_is_expired() {
        let now = Utc::now();
        let claims = Claims::new("alice", TokenKind::Access, Duration::seconds(10), now);

        assert!(!claims.is_expired(now.timestamp()));
        assert!(!claims.is_expired(claims.exp)); // exactly at expiration
        assert!(claims.is_expired(claims.exp + 1));
    }

    #[test]
    fn test_kind_serializes_as_type_tag() {
        let now = Utc::now();
        let claims = Claims::new("alice", TokenKind::Refresh, Duration::days(7), now);

        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["type"], "refresh");
        assert_eq!(json["sub"], "alice");
    }
}
