use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::client::errors::ClientError;
use crate::client::models::Client;
use crate::client::models::ClientId;
use crate::client::models::EmailAddress;
use crate::client::models::RegisterClientCommand;
use crate::client::models::UpdateClientCommand;
use crate::client::ports::ClientRepository;
use crate::client::ports::ClientServicePort;

/// Domain service implementation for client operations.
///
/// Concrete implementation of ClientServicePort with dependency injection.
pub struct ClientService<CR>
where
    CR: ClientRepository,
{
    repository: Arc<CR>,
    password_hasher: auth::PasswordHasher,
}

impl<CR> ClientService<CR>
where
    CR: ClientRepository,
{
    /// Create a new client service with an injected repository.
    pub fn new(repository: Arc<CR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }

    /// Fail when the email is already taken by another client.
    async fn check_free_email(&self, email: &EmailAddress) -> Result<(), ClientError> {
        if self.repository.find_by_email(email).await?.is_some() {
            return Err(ClientError::EmailAlreadyExists(email.to_string()));
        }
        Ok(())
    }

    fn salt_and_hash(&self, password: &str) -> Result<(String, String), ClientError> {
        let salt = self.password_hasher.generate_salt();
        let hash = self.password_hasher.hash(password, &salt)?;
        Ok((salt, hash))
    }
}

#[async_trait]
impl<CR> ClientServicePort for ClientService<CR>
where
    CR: ClientRepository,
{
    async fn register_client(
        &self,
        command: RegisterClientCommand,
    ) -> Result<Client, ClientError> {
        self.check_free_email(&command.email).await?;

        let (salt, password_hash) = self.salt_and_hash(&command.password)?;

        let now = Utc::now();
        let client = Client {
            id: ClientId::new(),
            name: command.name,
            email: command.email,
            salt,
            password_hash,
            created_at: now,
            updated_at: now,
        };

        self.repository.insert(client).await
    }

    async fn get_client_by_email(&self, email: &EmailAddress) -> Result<Client, ClientError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| ClientError::NotFound(email.to_string()))
    }

    async fn update_client(
        &self,
        email: &EmailAddress,
        command: UpdateClientCommand,
    ) -> Result<Client, ClientError> {
        let mut client = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| ClientError::NotFound(email.to_string()))?;

        if let Some(new_email) = command.email {
            // Keeping the same address is not a conflict.
            if new_email != client.email {
                self.check_free_email(&new_email).await?;
                client.email = new_email;
            }
        }

        if let Some(new_name) = command.name {
            client.name = new_name;
        }

        if let Some(new_password) = command.password {
            let (salt, password_hash) = self.salt_and_hash(&new_password)?;
            client.salt = salt;
            client.password_hash = password_hash;
        }

        client.updated_at = Utc::now();

        self.repository.update_by_email(email, client).await
    }
}
