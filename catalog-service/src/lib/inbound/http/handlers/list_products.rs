use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use serde::Serialize;

use super::get_product::ProductData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::product::ports::ProductServicePort;

pub async fn list_products(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<ApiSuccess<ListProductsResponseData>, ApiError> {
    let principal = state.authorizer.optional_authenticated(&headers).await?;
    let viewer = principal.as_ref().map(|p| &p.email);

    let products = state
        .product_service
        .list_products(viewer)
        .await
        .map_err(ApiError::from)?;

    let products: Vec<ProductData> = products.iter().map(ProductData::from).collect();
    let products_count = products.len();

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ListProductsResponseData {
            products,
            products_count,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListProductsResponseData {
    pub products: Vec<ProductData>,
    pub products_count: usize,
}
