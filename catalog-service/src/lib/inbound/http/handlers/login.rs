use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Duration;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::client::errors::ClientError;
use crate::client::models::EmailAddress;
use crate::client::ports::ClientServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<ClientData>, ApiError> {
    // An unparseable email cannot belong to any stored credential.
    let email = EmailAddress::new(body.email)
        .map_err(|_| ApiError::Unauthorized("Incorrect email or password".to_string()))?;

    let client = state
        .client_service
        .get_client_by_email(&email)
        .await
        .map_err(|e| match e {
            ClientError::NotFound(_) => {
                ApiError::Unauthorized("Incorrect email or password".to_string())
            }
            _ => ApiError::from(e),
        })?;

    let claims = auth::AccessClaims::for_client(
        client.email.as_str(),
        Some(Duration::minutes(state.token_ttl_minutes)),
    );

    // Verify the password and issue a token in one step. An unknown email and
    // a wrong password are indistinguishable to the caller.
    let result = state
        .authenticator
        .authenticate(&body.password, &client.password_hash, &claims)
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => {
                ApiError::Unauthorized("Incorrect email or password".to_string())
            }
            auth::AuthenticationError::PasswordError(err) => {
                ApiError::InternalServerError(format!("Password verification failed: {}", err))
            }
            auth::AuthenticationError::TokenError(err) => {
                ApiError::InternalServerError(format!("Token issuance failed: {}", err))
            }
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ClientData {
            name: client.name,
            email: client.email.as_str().to_string(),
            token: result.access_token,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}

/// Client profile plus the bearer token it may present on later requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientData {
    pub name: String,
    pub email: String,
    pub token: String,
}
