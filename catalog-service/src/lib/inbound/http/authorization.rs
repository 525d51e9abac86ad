use std::sync::Arc;

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use thiserror::Error;

use auth::TokenCodec;
use auth::TokenError;

use crate::client::errors::ClientError;
use crate::client::models::AuthenticatedClient;
use crate::client::models::EmailAddress;
use crate::client::ports::ClientRepository;

/// Authorization failures, each mapping to a distinct rejection at the HTTP
/// boundary. All are terminal for the current request and never fatal for
/// the process.
#[derive(Debug, Error)]
pub enum AuthorizationError {
    #[error("Authentication required")]
    MissingCredentials,

    #[error("Invalid authorization type")]
    InvalidScheme,

    #[error("Could not validate credentials")]
    InvalidToken(#[source] TokenError),

    #[error("Client not found: {0}")]
    ClientNotFound(String),

    #[error("Store lookup failed: {0}")]
    Store(#[from] ClientError),
}

/// Per-request authorization gate.
///
/// One pass per request: extract the bearer token from the `Authorization`
/// header, verify it with the token codec, resolve the identity claim
/// against the client store, and materialize an [`AuthenticatedClient`].
/// Holds no cross-request state beyond the read-only codec and the store
/// handle.
pub struct ClientAuthorizer<CR>
where
    CR: ClientRepository,
{
    repository: Arc<CR>,
    token_codec: TokenCodec,
    token_prefix: String,
}

impl<CR> ClientAuthorizer<CR>
where
    CR: ClientRepository,
{
    /// Create a new authorizer.
    ///
    /// # Arguments
    /// * `repository` - Client store used to resolve identity claims
    /// * `token_codec` - Codec configured with the process-wide secret
    /// * `token_prefix` - Expected Authorization header prefix, e.g. "Token"
    pub fn new(repository: Arc<CR>, token_codec: TokenCodec, token_prefix: String) -> Self {
        Self {
            repository,
            token_codec,
            token_prefix,
        }
    }

    /// Demand a valid principal.
    ///
    /// # Errors
    /// * `MissingCredentials` - No Authorization header
    /// * `InvalidScheme` - Header prefix does not match the configured one
    /// * `InvalidToken` - Signature, format, or expiry failure
    /// * `ClientNotFound` - Token valid but identity no longer resolvable
    pub async fn require_authenticated(
        &self,
        headers: &HeaderMap,
    ) -> Result<AuthenticatedClient, AuthorizationError> {
        match self.resolve(headers, true).await? {
            Some(client) => Ok(client),
            // Unreachable in required mode, but harmless to map.
            None => Err(AuthorizationError::MissingCredentials),
        }
    }

    /// Yield a principal when credentials were supplied, `None` when the
    /// header is absent. Supplied-but-invalid credentials still fail hard.
    pub async fn optional_authenticated(
        &self,
        headers: &HeaderMap,
    ) -> Result<Option<AuthenticatedClient>, AuthorizationError> {
        self.resolve(headers, false).await
    }

    async fn resolve(
        &self,
        headers: &HeaderMap,
        required: bool,
    ) -> Result<Option<AuthenticatedClient>, AuthorizationError> {
        let token = match self.extract_token(headers)? {
            Some(token) => token,
            None if required => return Err(AuthorizationError::MissingCredentials),
            None => return Ok(None),
        };

        let claims = self
            .token_codec
            .verify(token)
            .map_err(AuthorizationError::InvalidToken)?;

        // A signed token with an unparseable identity claim is still a bad token.
        let email = EmailAddress::new(claims.email)
            .map_err(|e| AuthorizationError::InvalidToken(TokenError::InvalidToken(e.to_string())))?;

        let client = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AuthorizationError::ClientNotFound(email.to_string()))?;

        Ok(Some(AuthenticatedClient::new(&client, token)))
    }

    fn extract_token<'h>(
        &self,
        headers: &'h HeaderMap,
    ) -> Result<Option<&'h str>, AuthorizationError> {
        let header = match headers.get(AUTHORIZATION) {
            Some(header) => header,
            None => return Ok(None),
        };

        let header = header
            .to_str()
            .map_err(|_| AuthorizationError::InvalidScheme)?;

        let (prefix, token) = header
            .split_once(' ')
            .ok_or(AuthorizationError::InvalidScheme)?;

        if prefix != self.token_prefix {
            return Err(AuthorizationError::InvalidScheme);
        }

        Ok(Some(token))
    }
}
