//! Authentication utilities library
//!
//! Provides the authentication primitives for the catalog service:
//! - Salted password hashing (Argon2id)
//! - Access token issuance and verification (HS256)
//! - Authentication coordination
//!
//! The service defines its own authorization traits and adapts these
//! implementations, keeping HTTP and storage concerns out of this crate.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let salt = hasher.generate_salt();
//! let hash = hasher.hash("my_password", &salt).unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{AccessClaims, TokenCodec};
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = AccessClaims::for_client("a@x.com", None);
//! let token = codec.issue(&claims).unwrap();
//! let decoded = codec.verify(&token).unwrap();
//! assert_eq!(decoded.email, "a@x.com");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{AccessClaims, Authenticator};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: salt and hash the password
//! let credential = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue a token
//! let claims = AccessClaims::for_client("a@x.com", None);
//! let result = auth
//!     .authenticate("password123", &credential.hash, &claims)
//!     .unwrap();
//!
//! // Per request: verify the bearer token
//! let decoded = auth.verify_token(&result.access_token).unwrap();
//! assert_eq!(decoded.email, "a@x.com");
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use authenticator::HashedCredential;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::AccessClaims;
pub use token::TokenCodec;
pub use token::TokenError;
