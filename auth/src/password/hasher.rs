use super::errors::PasswordError;

/// bcrypt work factor. Raising it slows every login.
const COST: u32 = 12;

/// bcrypt only consumes the first 72 bytes of input; anything beyond is
/// truncated, and the same rule must apply at hash and verify time.
const MAX_PASSWORD_BYTES: usize = 72;

/// Password hashing implementation.
///
/// Wraps bcrypt with a fixed cost and explicit input truncation. `Clone` so
/// callers can move it onto a blocking worker thread.
#[derive(Debug, Clone)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password with a random per-call salt.
    ///
    /// Two calls on the same password yield different encoded hashes, both
    /// verifiable against it.
    ///
    /// # Errors
    /// * `HashingFailed` - bcrypt rejected the input or salt generation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        bcrypt::hash(truncated(password), COST)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored bcrypt hash.
    ///
    /// Returns `false` for a mismatch and for a malformed stored hash alike;
    /// callers cannot tell the two apart.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        bcrypt::verify(truncated(password), hash).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

fn truncated(password: &str) -> &[u8] {
    let bytes = password.as_bytes();
    &bytes[..bytes.len().min(MAX_PASSWORD_BYTES)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        let hash = hasher.hash(password).expect("Failed to hash password");

        assert!(hasher.verify(password, &hash));
        assert!(!hasher.verify("wrong_password", &hash));
    }

    #[test]
    fn test_hashing_is_salted() {
        let hasher = PasswordHasher::new();
        let password = "same_password";

        let first = hasher.hash(password).expect("Failed to hash password");
        let second = hasher.hash(password).expect("Failed to hash password");

        assert_ne!(first, second);
        assert!(hasher.verify(password, &first));
        assert!(hasher.verify(password, &second));
    }

    #[test]
    fn test_verify_malformed_hash_is_false() {
        let hasher = PasswordHasher::new();
        assert!(!hasher.verify("password", "not_a_bcrypt_hash"));
        assert!(!hasher.verify("password", ""));
    }

    #[test]
    fn test_truncation_beyond_limit() {
        let hasher = PasswordHasher::new();

        // Identical in the first 72 bytes, differing only beyond them.
        let base = "x".repeat(MAX_PASSWORD_BYTES);
        let long_a = format!("{base}AAAA");
        let long_b = format!("{base}BBBB");

        let hash = hasher.hash(&long_a).expect("Failed to hash password");
        assert!(hasher.verify(&long_a, &hash));
        assert!(hasher.verify(&long_b, &hash));

        // A difference inside the first 72 bytes still matters.
        let mut different = base.clone();
        different.replace_range(0..1, "y");
        assert!(!hasher.verify(&different, &hash));
    }
}
