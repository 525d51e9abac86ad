use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::get_product::ProductData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::product::models::CreateProductCommand;
use crate::product::ports::ProductServicePort;

pub async fn create_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CreateProductRequest>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    state.authorizer.require_authenticated(&headers).await?;

    state
        .product_service
        .create_product(body.into_command())
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::CREATED, product.into()))
}

/// HTTP request body for creating a product (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateProductRequest {
    title: String,
    brand: String,
    image: String,
    price: String,
    review_score: String,
}

impl CreateProductRequest {
    fn into_command(self) -> CreateProductCommand {
        CreateProductCommand {
            title: self.title,
            brand: self.brand,
            image: self.image,
            price: self.price,
            review_score: self.review_score,
        }
    }
}
