use thiserror::Error;

/// Top-level error for all product-related operations
#[derive(Debug, Clone, Error)]
pub enum ProductError {
    #[error("Product with slug '{0}' not found")]
    NotFound(String),

    #[error("No products found")]
    EmptyCatalog,

    #[error("Product with slug '{0}' already exists")]
    SlugAlreadyExists(String),

    #[error("You already added this product to favorites")]
    AlreadyFavorited,

    #[error("You don't have this product in favorites")]
    NotFavorited,

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for ProductError {
    fn from(err: anyhow::Error) -> Self {
        ProductError::Unknown(err.to_string())
    }
}
