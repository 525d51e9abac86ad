use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::login::ClientData;
use super::ApiError;
use super::ApiSuccess;
use crate::client::errors::ClientError;
use crate::client::models::EmailAddress;
use crate::client::models::UpdateClientCommand;
use crate::client::ports::ClientServicePort;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating the current client (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateClientRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UpdateClientRequest {
    fn try_into_command(self) -> Result<UpdateClientCommand, ClientError> {
        let email = self.email.map(EmailAddress::new).transpose()?;

        Ok(UpdateClientCommand {
            name: self.name,
            email,
            password: self.password,
        })
    }
}

pub async fn update_current_client(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<UpdateClientRequest>,
) -> Result<ApiSuccess<ClientData>, ApiError> {
    let principal = state.authorizer.require_authenticated(&headers).await?;

    let command = body.try_into_command()?;

    let client = state
        .client_service
        .update_client(&principal.email, command)
        .await
        .map_err(ApiError::from)?;

    // The token was issued for the identity at login time; it stays valid
    // for its lifetime even when the email changes.
    Ok(ApiSuccess::new(
        StatusCode::OK,
        ClientData {
            name: client.name,
            email: client.email.as_str().to_string(),
            token: principal.token,
        },
    ))
}
