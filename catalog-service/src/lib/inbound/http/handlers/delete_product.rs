use axum::extract::Path;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::product::models::Slug;
use crate::product::ports::ProductServicePort;

pub async fn delete_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    state.authorizer.require_authenticated(&headers).await?;

    state
        .product_service
        .delete_product(&Slug::from_raw(slug))
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
