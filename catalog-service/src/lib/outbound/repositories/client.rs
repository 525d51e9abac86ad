use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::client::errors::ClientError;
use crate::client::models::Client;
use crate::client::models::ClientId;
use crate::client::models::EmailAddress;
use crate::client::ports::ClientRepository;

pub struct PostgresClientRepository {
    pool: PgPool,
}

impl PostgresClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Raw clients row; mapped into the domain entity at the store boundary.
#[derive(sqlx::FromRow)]
struct ClientRow {
    id: Uuid,
    name: String,
    email: String,
    salt: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ClientRow {
    fn into_client(self) -> Result<Client, ClientError> {
        Ok(Client {
            id: ClientId(self.id),
            name: self.name,
            email: EmailAddress::new(self.email)?,
            salt: self.salt,
            password_hash: self.password_hash,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

const SELECT_CLIENT: &str = r#"
    SELECT id, name, email, salt, password_hash, created_at, updated_at
    FROM clients
    WHERE email = $1
"#;

#[async_trait]
impl ClientRepository for PostgresClientRepository {
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Client>, ClientError> {
        let row = sqlx::query_as::<_, ClientRow>(SELECT_CLIENT)
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ClientError::DatabaseError(e.to_string()))?;

        row.map(ClientRow::into_client).transpose()
    }

    async fn insert(&self, client: Client) -> Result<Client, ClientError> {
        sqlx::query(
            r#"
            INSERT INTO clients (id, name, email, salt, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(client.id.0)
        .bind(&client.name)
        .bind(client.email.as_str())
        .bind(&client.salt)
        .bind(&client.password_hash)
        .bind(client.created_at)
        .bind(client.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("clients_email_key")
                {
                    return ClientError::EmailAlreadyExists(client.email.to_string());
                }
            }
            ClientError::DatabaseError(e.to_string())
        })?;

        Ok(client)
    }

    async fn update_by_email(
        &self,
        email: &EmailAddress,
        client: Client,
    ) -> Result<Client, ClientError> {
        let result = sqlx::query(
            r#"
            UPDATE clients
            SET name = $2, email = $3, salt = $4, password_hash = $5, updated_at = $6
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .bind(&client.name)
        .bind(client.email.as_str())
        .bind(&client.salt)
        .bind(&client.password_hash)
        .bind(client.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("clients_email_key")
                {
                    return ClientError::EmailAlreadyExists(client.email.to_string());
                }
            }
            ClientError::DatabaseError(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Err(ClientError::NotFound(email.to_string()));
        }

        Ok(client)
    }
}
