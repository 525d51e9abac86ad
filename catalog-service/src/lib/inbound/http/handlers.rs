use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::client::errors::ClientError;
use crate::inbound::http::authorization::AuthorizationError;
use crate::product::errors::ProductError;

pub mod create_product;
pub mod delete_product;
pub mod favorite_product;
pub mod get_current_client;
pub mod get_product;
pub mod list_products;
pub mod login;
pub mod register_client;
pub mod unfavorite_product;
pub mod update_current_client;
pub mod update_product;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ClientError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            ClientError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            ClientError::InvalidEmail(_) => ApiError::UnprocessableEntity(err.to_string()),
            ClientError::Password(_) | ClientError::DatabaseError(_) | ClientError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) | ProductError::EmptyCatalog => {
                ApiError::NotFound(err.to_string())
            }
            ProductError::SlugAlreadyExists(_) => ApiError::UnprocessableEntity(err.to_string()),
            ProductError::AlreadyFavorited | ProductError::NotFavorited => {
                ApiError::BadRequest(err.to_string())
            }
            ProductError::DatabaseError(_) | ProductError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<AuthorizationError> for ApiError {
    fn from(err: AuthorizationError) -> Self {
        match err {
            AuthorizationError::MissingCredentials => {
                ApiError::Unauthorized("Authentication required".to_string())
            }
            AuthorizationError::InvalidScheme => {
                ApiError::Forbidden("Invalid authorization type".to_string())
            }
            AuthorizationError::InvalidToken(e) => {
                tracing::warn!("Token verification failed: {}", e);
                ApiError::Forbidden("Could not validate credentials".to_string())
            }
            AuthorizationError::ClientNotFound(_) => {
                ApiError::NotFound("Client not found".to_string())
            }
            AuthorizationError::Store(e) => ApiError::from(e),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}
