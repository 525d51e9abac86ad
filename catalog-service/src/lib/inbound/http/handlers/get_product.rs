use axum::extract::Path;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::product::models::Product;
use crate::product::models::Slug;
use crate::product::ports::ProductServicePort;

pub async fn get_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    // Anonymous viewers are fine here; the favorited flag is just false.
    let principal = state.authorizer.optional_authenticated(&headers).await?;
    let viewer = principal.as_ref().map(|p| &p.email);

    state
        .product_service
        .get_product(&Slug::from_raw(slug), viewer)
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::OK, product.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductData {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub brand: String,
    pub image: String,
    pub price: String,
    pub review_score: String,
    pub favorited: bool,
    pub favorites_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Product> for ProductData {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            slug: product.slug.as_str().to_string(),
            title: product.title.clone(),
            brand: product.brand.clone(),
            image: product.image.clone(),
            price: product.price.clone(),
            review_score: product.review_score.clone(),
            favorited: product.favorited,
            favorites_count: product.favorites_count,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
