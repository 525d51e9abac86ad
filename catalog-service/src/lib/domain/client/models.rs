use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::client::errors::EmailError;

/// Client aggregate entity.
///
/// Owns the stored credential: the password hash is always derived from the
/// salt plus the plaintext password, and the plaintext is never persisted.
#[derive(Debug, Clone)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub email: EmailAddress,
    pub salt: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(pub Uuid);

impl ClientId {
    /// Generate a new random client ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// The identity key for clients and the identity claim carried by access
/// tokens. Validates email format using an RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Arguments
    /// * `email` - Raw email string
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Authenticated principal for the duration of one request.
///
/// Built fresh per request from a decoded token plus a store lookup, never
/// cached across requests. Carries the original token so handlers can echo
/// it back in responses.
#[derive(Debug, Clone)]
pub struct AuthenticatedClient {
    pub id: ClientId,
    pub name: String,
    pub email: EmailAddress,
    pub token: String,
}

impl AuthenticatedClient {
    /// Materialize a principal from a resolved client and its bearer token.
    pub fn new(client: &Client, token: impl ToString) -> Self {
        Self {
            id: client.id,
            name: client.name.clone(),
            email: client.email.clone(),
            token: token.to_string(),
        }
    }
}

/// Command to register a new client with domain types
#[derive(Debug)]
pub struct RegisterClientCommand {
    pub name: String,
    pub email: EmailAddress,
    pub password: String,
}

impl RegisterClientCommand {
    /// Construct a new register command.
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `email` - Validated email address
    /// * `password` - Plain text password (will be salted and hashed by the service)
    pub fn new(name: String, email: EmailAddress, password: String) -> Self {
        Self {
            name,
            email,
            password,
        }
    }
}

/// Command to update an existing client with optional validated fields.
///
/// All fields are optional to support partial updates.
/// Only provided fields will be updated.
#[derive(Debug)]
pub struct UpdateClientCommand {
    pub name: Option<String>,
    pub email: Option<EmailAddress>,
    pub password: Option<String>,
}
