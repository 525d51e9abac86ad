use axum::extract::Path;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;

use super::get_product::ProductData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::product::models::Slug;
use crate::product::ports::ProductServicePort;

pub async fn favorite_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    let principal = state.authorizer.require_authenticated(&headers).await?;

    state
        .product_service
        .favorite_product(&Slug::from_raw(slug), &principal.email)
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::OK, product.into()))
}
