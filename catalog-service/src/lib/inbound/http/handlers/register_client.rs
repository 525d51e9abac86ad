use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Duration;
use serde::Deserialize;
use thiserror::Error;

use super::login::ClientData;
use super::ApiError;
use super::ApiSuccess;
use crate::client::errors::EmailError;
use crate::client::models::EmailAddress;
use crate::client::models::RegisterClientCommand;
use crate::client::ports::ClientServicePort;
use crate::inbound::http::router::AppState;

pub async fn register_client(
    State(state): State<AppState>,
    Json(body): Json<RegisterClientRequest>,
) -> Result<ApiSuccess<ClientData>, ApiError> {
    let client = state
        .client_service
        .register_client(body.try_into_command()?)
        .await
        .map_err(ApiError::from)?;

    // A fresh registration is also a login: issue a token right away.
    let claims = auth::AccessClaims::for_client(
        client.email.as_str(),
        Some(Duration::minutes(state.token_ttl_minutes)),
    );
    let token = state
        .authenticator
        .issue_token(&claims)
        .map_err(|e| ApiError::InternalServerError(format!("Token issuance failed: {}", e)))?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        ClientData {
            name: client.name,
            email: client.email.as_str().to_string(),
            token,
        },
    ))
}

/// HTTP request body for registering a client (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterClientRequest {
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterClientRequestError {
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
}

impl RegisterClientRequest {
    fn try_into_command(self) -> Result<RegisterClientCommand, ParseRegisterClientRequestError> {
        let email = EmailAddress::new(self.email)?;
        Ok(RegisterClientCommand::new(self.name, email, self.password))
    }
}

impl From<ParseRegisterClientRequestError> for ApiError {
    fn from(err: ParseRegisterClientRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
