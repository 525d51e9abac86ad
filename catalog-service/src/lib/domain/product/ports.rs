use async_trait::async_trait;

use crate::client::models::EmailAddress;
use crate::product::errors::ProductError;
use crate::product::models::CreateProductCommand;
use crate::product::models::Product;
use crate::product::models::Slug;
use crate::product::models::UpdateProductCommand;

/// Port for product domain service operations.
///
/// Operations taking a `viewer` load favorite state relative to that client;
/// `None` means an anonymous viewer, for whom `favorited` is always false.
#[async_trait]
pub trait ProductServicePort: Send + Sync + 'static {
    /// List all products.
    ///
    /// # Errors
    /// * `EmptyCatalog` - No products exist
    /// * `DatabaseError` - Database operation failed
    async fn list_products(
        &self,
        viewer: Option<&EmailAddress>,
    ) -> Result<Vec<Product>, ProductError>;

    /// Retrieve a product by slug.
    ///
    /// # Errors
    /// * `NotFound` - No product with this slug
    /// * `DatabaseError` - Database operation failed
    async fn get_product(
        &self,
        slug: &Slug,
        viewer: Option<&EmailAddress>,
    ) -> Result<Product, ProductError>;

    /// Create a new product; the slug is derived from the title.
    ///
    /// # Errors
    /// * `SlugAlreadyExists` - A product with the derived slug exists
    /// * `DatabaseError` - Database operation failed
    async fn create_product(&self, command: CreateProductCommand)
        -> Result<Product, ProductError>;

    /// Update an existing product; a new title regenerates the slug.
    ///
    /// # Errors
    /// * `NotFound` - No product with this slug
    /// * `DatabaseError` - Database operation failed
    async fn update_product(
        &self,
        slug: &Slug,
        command: UpdateProductCommand,
    ) -> Result<Product, ProductError>;

    /// Delete a product by slug.
    ///
    /// # Errors
    /// * `NotFound` - No product with this slug
    /// * `DatabaseError` - Database operation failed
    async fn delete_product(&self, slug: &Slug) -> Result<(), ProductError>;

    /// Add a product to the viewer's favorites.
    ///
    /// # Errors
    /// * `NotFound` - No product with this slug
    /// * `AlreadyFavorited` - The viewer already favorited this product
    /// * `DatabaseError` - Database operation failed
    async fn favorite_product(
        &self,
        slug: &Slug,
        viewer: &EmailAddress,
    ) -> Result<Product, ProductError>;

    /// Remove a product from the viewer's favorites.
    ///
    /// # Errors
    /// * `NotFound` - No product with this slug
    /// * `NotFavorited` - The viewer has not favorited this product
    /// * `DatabaseError` - Database operation failed
    async fn unfavorite_product(
        &self,
        slug: &Slug,
        viewer: &EmailAddress,
    ) -> Result<Product, ProductError>;
}

/// Persistence operations for the product aggregate and favorites.
///
/// The viewer parameters carry a named lifetime so the mock generated for
/// tests can name it too.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Retrieve a product by slug, with favorite state for the viewer.
    ///
    /// # Returns
    /// Optional product entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_slug<'a>(
        &self,
        slug: &Slug,
        viewer: Option<&'a EmailAddress>,
    ) -> Result<Option<Product>, ProductError>;

    /// Retrieve all products, with favorite state for the viewer.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all<'a>(
        &self,
        viewer: Option<&'a EmailAddress>,
    ) -> Result<Vec<Product>, ProductError>;

    /// Persist a new product to storage.
    ///
    /// # Errors
    /// * `SlugAlreadyExists` - Slug is already taken
    /// * `DatabaseError` - Database operation failed
    async fn insert(&self, product: Product) -> Result<Product, ProductError>;

    /// Update the product stored under the given slug.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_by_slug(&self, slug: &Slug, product: Product)
        -> Result<Product, ProductError>;

    /// Remove a product from storage.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_by_slug(&self, slug: &Slug) -> Result<(), ProductError>;

    /// Record the viewer's favorite for a product.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn add_favorite(&self, slug: &Slug, viewer: &EmailAddress)
        -> Result<(), ProductError>;

    /// Remove the viewer's favorite for a product.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn remove_favorite(
        &self,
        slug: &Slug,
        viewer: &EmailAddress,
    ) -> Result<(), ProductError>;
}
