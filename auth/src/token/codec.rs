use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::TokenKind;
use super::errors::TokenError;

/// Clock-skew tolerance applied to `exp` and `iat` checks, in seconds.
const LEEWAY_SECS: u64 = 30;

/// Signs and verifies self-contained authentication tokens.
///
/// Tokens are stateless: the process holds only the signing secret, never
/// individual token records. Uses HS256 (HMAC with SHA-256).
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenCodec {
    /// Create a new codec from the process-wide signing secret.
    ///
    /// The secret should be at least 256 bits (32 bytes) for HS256 and must
    /// not change mid-process; doing so invalidates every issued token.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a signed token for `subject`, valid for `ttl` from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Serialization or signing failed
    pub fn issue(
        &self,
        subject: &str,
        kind: TokenKind,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        self.issue_at(subject, kind, ttl, Utc::now())
    }

    /// Issue a token with an explicit clock.
    ///
    /// Exists so expiry behaviour can be exercised without sleeping; `issue`
    /// delegates here with the real time.
    pub fn issue_at(
        &self,
        subject: &str,
        kind: TokenKind,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = Claims::new(subject, kind, ttl, now);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token's signature and timestamps and return its claims.
    ///
    /// No partial claims are ever returned on failure.
    ///
    /// # Errors
    /// * `InvalidSignature` - Signed with a different secret
    /// * `Expired` - `exp` has passed (beyond leeway)
    /// * `MissingClaim` - A required claim is absent
    /// * `Malformed` - Not a decodable token, wrong algorithm, or an `iat`
    ///   in the future beyond leeway
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = LEEWAY_SECS;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    ErrorKind::MissingRequiredClaim(claim) => {
                        TokenError::MissingClaim(claim.clone())
                    }
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        let claims = token_data.claims;

        // jsonwebtoken does not validate iat; reject tokens claiming to be
        // issued in the future.
        if claims.iat > Utc::now().timestamp() + LEEWAY_SECS as i64 {
            return Err(TokenError::Malformed(
                "issued-at timestamp is in the future".to_string(),
            ));
        }

        Ok(claims)
    }
}
