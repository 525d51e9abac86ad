use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;

use super::login::ClientData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_current_client(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<ApiSuccess<ClientData>, ApiError> {
    let principal = state.authorizer.require_authenticated(&headers).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ClientData {
            name: principal.name,
            email: principal.email.as_str().to_string(),
            token: principal.token,
        },
    ))
}
