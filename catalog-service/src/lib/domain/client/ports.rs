use async_trait::async_trait;

use crate::client::errors::ClientError;
use crate::client::models::Client;
use crate::client::models::EmailAddress;
use crate::client::models::RegisterClientCommand;
use crate::client::models::UpdateClientCommand;

/// Port for client domain service operations.
#[async_trait]
pub trait ClientServicePort: Send + Sync + 'static {
    /// Register a new client with a salted, hashed credential.
    ///
    /// # Arguments
    /// * `command` - Validated command containing name, email, and password
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Password` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register_client(&self, command: RegisterClientCommand)
        -> Result<Client, ClientError>;

    /// Retrieve a client by its identity key.
    ///
    /// # Arguments
    /// * `email` - Email address to search for
    ///
    /// # Errors
    /// * `NotFound` - No client with this email
    /// * `DatabaseError` - Database operation failed
    async fn get_client_by_email(&self, email: &EmailAddress) -> Result<Client, ClientError>;

    /// Update an existing client with optional fields.
    ///
    /// # Arguments
    /// * `email` - Identity key of the client to update
    /// * `command` - Command with optional name, email, and password fields
    ///
    /// # Errors
    /// * `NotFound` - Client does not exist
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn update_client(
        &self,
        email: &EmailAddress,
        command: UpdateClientCommand,
    ) -> Result<Client, ClientError>;
}

/// Persistence operations for the client aggregate.
///
/// This is the store contract the authorization gate depends on: resolving
/// an identity claim only needs `find_by_email`.
#[async_trait]
pub trait ClientRepository: Send + Sync + 'static {
    /// Retrieve a client by email address.
    ///
    /// # Returns
    /// Optional client entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Client>, ClientError>;

    /// Persist a new client to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn insert(&self, client: Client) -> Result<Client, ClientError>;

    /// Update the client stored under the given identity key.
    ///
    /// # Arguments
    /// * `email` - Identity key the client is currently stored under
    /// * `client` - Client entity with updated fields
    ///
    /// # Errors
    /// * `NotFound` - Client does not exist
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn update_by_email(
        &self,
        email: &EmailAddress,
        client: Client,
    ) -> Result<Client, ClientError>;
}
