//! Authentication core library
//!
//! Provides the credential and token infrastructure shared by the services:
//! - Password hashing (bcrypt)
//! - Signed token issuance and verification (JWT, HS256)
//! - Request authentication via bearer tokens
//!
//! Each service constructs these from its own configuration at startup; the
//! signing secret is process-wide and read-only after that. Nothing in this
//! crate performs I/O.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{TokenCodec, TokenKind};
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let token = codec
//!     .issue("alice", TokenKind::Access, Duration::minutes(30))
//!     .unwrap();
//! let claims = codec.verify(&token).unwrap();
//! assert_eq!(claims.sub, "alice");
//! ```
//!
//! ## Request Authentication
//! ```
//! use auth::{IdentityGate, TokenCodec, TokenKind};
//! use chrono::Duration;
//!
//! let secret = b"secret_key_at_least_32_bytes_long!";
//! let codec = TokenCodec::new(secret);
//! let gate = IdentityGate::new(secret);
//!
//! let token = codec
//!     .issue("alice", TokenKind::Access, Duration::minutes(30))
//!     .unwrap();
//! let identity = gate.authenticate(&format!("Bearer {token}")).unwrap();
//! assert_eq!(identity.subject, "alice");
//! ```

pub mod gate;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use gate::Identity;
pub use gate::IdentityGate;
pub use gate::Unauthenticated;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenError;
pub use token::TokenKind;
