use axum::extract::Path;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::get_product::ProductData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::product::models::Slug;
use crate::product::models::UpdateProductCommand;
use crate::product::ports::ProductServicePort;

/// HTTP request body for updating a product (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub title: Option<String>,
    pub brand: Option<String>,
    pub image: Option<String>,
    pub price: Option<String>,
    pub review_score: Option<String>,
}

impl UpdateProductRequest {
    fn into_command(self) -> UpdateProductCommand {
        UpdateProductCommand {
            title: self.title,
            brand: self.brand,
            image: self.image,
            price: self.price,
            review_score: self.review_score,
        }
    }
}

pub async fn update_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
    Json(body): Json<UpdateProductRequest>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    state.authorizer.require_authenticated(&headers).await?;

    state
        .product_service
        .update_product(&Slug::from_raw(slug), body.into_command())
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::OK, product.into()))
}
