use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::AccessClaims;
use crate::token::TokenCodec;
use crate::token::TokenError;

/// Authentication coordinator combining password verification and token
/// issuance.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
}

/// Salted password hash ready for storage.
pub struct HashedCredential {
    /// Salt the hash was derived under
    pub salt: String,
    /// PHC string format hash
    pub hash: String,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `token_secret` - Secret key for token signing
    pub fn new(token_secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_codec: TokenCodec::new(token_secret),
        }
    }

    /// Salt and hash a password for storage.
    ///
    /// # Arguments
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Fresh salt and the hash derived under it
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<HashedCredential, PasswordError> {
        let salt = self.password_hasher.generate_salt();
        let hash = self.password_hasher.hash(password, &salt)?;
        Ok(HashedCredential { salt, hash })
    }

    /// Verify credentials and issue an access token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `claims` - Claims to encode in the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Password verification failed
    /// * `TokenError` - Token issuance failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        claims: &AccessClaims,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_codec.issue(claims)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue an access token without password verification.
    ///
    /// Used at registration, where the credential was just created.
    ///
    /// # Errors
    /// * `TokenError` - Token issuance failed
    pub fn issue_token(&self, claims: &AccessClaims) -> Result<String, TokenError> {
        self.token_codec.issue(claims)
    }

    /// Verify and decode an access token.
    ///
    /// # Errors
    /// * `TokenError` - Token verification or decoding failed
    pub fn verify_token(&self, token: &str) -> Result<AccessClaims, TokenError> {
        self.token_codec.verify(token)
    }
}
