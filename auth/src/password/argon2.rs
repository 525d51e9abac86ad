use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Salted password hashing implementation.
///
/// Each credential gets its own random salt; the digest is Argon2id over the
/// salted password. Plaintext passwords are never stored or logged.
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Generate a fresh random salt for a credential.
    ///
    /// Salts come from a cryptographically secure source, so uniqueness
    /// across credentials holds with overwhelming probability.
    ///
    /// # Returns
    /// Base64-encoded salt string
    pub fn generate_salt(&self) -> String {
        SaltString::generate(&mut OsRng).to_string()
    }

    /// Hash a plaintext password under the given salt.
    ///
    /// Deterministic for identical password and salt, one-way otherwise.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    /// * `salt` - Base64-encoded salt from `generate_salt`
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `InvalidSalt` - Salt is not valid base64
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str, salt: &str) -> Result<String, PasswordError> {
        let salt =
            SaltString::from_b64(salt).map_err(|e| PasswordError::InvalidSalt(e.to_string()))?;
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a candidate password against a stored hash.
    ///
    /// Recomputes the digest under the hash's salt and compares in constant
    /// time, so mismatches do not leak through timing.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash in PHC string format
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `VerificationFailed` - Hash format is invalid
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        let argon2 = Argon2::default();

        Ok(argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
