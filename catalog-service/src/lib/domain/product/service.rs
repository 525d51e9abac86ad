use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::client::models::EmailAddress;
use crate::product::errors::ProductError;
use crate::product::models::CreateProductCommand;
use crate::product::models::Product;
use crate::product::models::ProductId;
use crate::product::models::Slug;
use crate::product::models::UpdateProductCommand;
use crate::product::ports::ProductRepository;
use crate::product::ports::ProductServicePort;

/// Domain service implementation for product operations.
pub struct ProductService<PR>
where
    PR: ProductRepository,
{
    repository: Arc<PR>,
}

impl<PR> ProductService<PR>
where
    PR: ProductRepository,
{
    /// Create a new product service with an injected repository.
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }

    async fn get_or_not_found(
        &self,
        slug: &Slug,
        viewer: Option<&EmailAddress>,
    ) -> Result<Product, ProductError> {
        self.repository
            .find_by_slug(slug, viewer)
            .await?
            .ok_or_else(|| ProductError::NotFound(slug.to_string()))
    }
}

#[async_trait]
impl<PR> ProductServicePort for ProductService<PR>
where
    PR: ProductRepository,
{
    async fn list_products(
        &self,
        viewer: Option<&EmailAddress>,
    ) -> Result<Vec<Product>, ProductError> {
        let products = self.repository.list_all(viewer).await?;
        if products.is_empty() {
            return Err(ProductError::EmptyCatalog);
        }
        Ok(products)
    }

    async fn get_product(
        &self,
        slug: &Slug,
        viewer: Option<&EmailAddress>,
    ) -> Result<Product, ProductError> {
        self.get_or_not_found(slug, viewer).await
    }

    async fn create_product(
        &self,
        command: CreateProductCommand,
    ) -> Result<Product, ProductError> {
        let slug = Slug::from_title(&command.title);

        if self.repository.find_by_slug(&slug, None).await?.is_some() {
            return Err(ProductError::SlugAlreadyExists(slug.to_string()));
        }

        let now = Utc::now();
        let product = Product {
            id: ProductId::new(),
            slug,
            title: command.title,
            brand: command.brand,
            image: command.image,
            price: command.price,
            review_score: command.review_score,
            favorited: false,
            favorites_count: 0,
            created_at: now,
            updated_at: now,
        };

        self.repository.insert(product).await
    }

    async fn update_product(
        &self,
        slug: &Slug,
        command: UpdateProductCommand,
    ) -> Result<Product, ProductError> {
        let mut product = self.get_or_not_found(slug, None).await?;

        if let Some(new_title) = command.title {
            product.slug = Slug::from_title(&new_title);
            product.title = new_title;
        }
        if let Some(new_brand) = command.brand {
            product.brand = new_brand;
        }
        if let Some(new_image) = command.image {
            product.image = new_image;
        }
        if let Some(new_price) = command.price {
            product.price = new_price;
        }
        if let Some(new_review_score) = command.review_score {
            product.review_score = new_review_score;
        }

        product.updated_at = Utc::now();

        self.repository.update_by_slug(slug, product).await
    }

    async fn delete_product(&self, slug: &Slug) -> Result<(), ProductError> {
        self.repository.delete_by_slug(slug).await
    }

    async fn favorite_product(
        &self,
        slug: &Slug,
        viewer: &EmailAddress,
    ) -> Result<Product, ProductError> {
        let mut product = self.get_or_not_found(slug, Some(viewer)).await?;

        if product.favorited {
            return Err(ProductError::AlreadyFavorited);
        }

        self.repository.add_favorite(slug, viewer).await?;

        product.favorited = true;
        product.favorites_count += 1;
        Ok(product)
    }

    async fn unfavorite_product(
        &self,
        slug: &Slug,
        viewer: &EmailAddress,
    ) -> Result<Product, ProductError> {
        let mut product = self.get_or_not_found(slug, Some(viewer)).await?;

        if !product.favorited {
            return Err(ProductError::NotFavorited);
        }

        self.repository.remove_favorite(slug, viewer).await?;

        product.favorited = false;
        product.favorites_count -= 1;
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ports::MockProductRepository;

    fn test_product(title: &str, favorited: bool, favorites_count: i64) -> Product {
        Product {
            id: ProductId::new(),
            slug: Slug::from_title(title),
            title: title.to_string(),
            brand: "Acme".to_string(),
            image: "https://img.example.com/p.png".to_string(),
            price: "1999.90".to_string(),
            review_score: "4.5".to_string(),
            favorited,
            favorites_count,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn viewer() -> EmailAddress {
        EmailAddress::new("ada@example.com".to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_list_products() {
        let mut repository = MockProductRepository::new();

        repository
            .expect_list_all()
            .times(1)
            .returning(|_| Ok(vec![test_product("Blender", false, 0)]));

        let service = ProductService::new(Arc::new(repository));

        let products = service.list_products(None).await.unwrap();
        assert_eq!(products.len(), 1);
    }

    #[tokio::test]
    async fn test_list_products_empty_catalog() {
        let mut repository = MockProductRepository::new();

        repository
            .expect_list_all()
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = ProductService::new(Arc::new(repository));

        let result = service.list_products(None).await;
        assert!(matches!(result, Err(ProductError::EmptyCatalog)));
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let mut repository = MockProductRepository::new();

        repository
            .expect_find_by_slug()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = ProductService::new(Arc::new(repository));

        let result = service
            .get_product(&Slug::from_raw("missing".to_string()), None)
            .await;
        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_product_derives_slug() {
        let mut repository = MockProductRepository::new();

        repository
            .expect_find_by_slug()
            .withf(|slug, _| slug.as_str() == "blender-pro-3000")
            .times(1)
            .returning(|_, _| Ok(None));

        repository
            .expect_insert()
            .withf(|product| {
                product.slug.as_str() == "blender-pro-3000"
                    && !product.favorited
                    && product.favorites_count == 0
            })
            .times(1)
            .returning(|product| Ok(product));

        let service = ProductService::new(Arc::new(repository));

        let command = CreateProductCommand {
            title: "Blender Pro 3000".to_string(),
            brand: "Acme".to_string(),
            image: "https://img.example.com/b.png".to_string(),
            price: "349.00".to_string(),
            review_score: "4.8".to_string(),
        };

        let product = service.create_product(command).await.unwrap();
        assert_eq!(product.slug.as_str(), "blender-pro-3000");
    }

    #[tokio::test]
    async fn test_create_product_slug_collision() {
        let mut repository = MockProductRepository::new();

        repository
            .expect_find_by_slug()
            .times(1)
            .returning(|_, _| Ok(Some(test_product("Blender Pro 3000", false, 0))));

        repository.expect_insert().times(0);

        let service = ProductService::new(Arc::new(repository));

        let command = CreateProductCommand {
            title: "Blender Pro 3000".to_string(),
            brand: "Acme".to_string(),
            image: "https://img.example.com/b.png".to_string(),
            price: "349.00".to_string(),
            review_score: "4.8".to_string(),
        };

        let result = service.create_product(command).await;
        assert!(matches!(result, Err(ProductError::SlugAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_update_product_retitle_regenerates_slug() {
        let mut repository = MockProductRepository::new();

        repository
            .expect_find_by_slug()
            .times(1)
            .returning(|_, _| Ok(Some(test_product("Blender", false, 0))));

        repository
            .expect_update_by_slug()
            .withf(|slug, product| {
                slug.as_str() == "blender"
                    && product.slug.as_str() == "super-blender"
                    && product.title == "Super Blender"
            })
            .times(1)
            .returning(|_, product| Ok(product));

        let service = ProductService::new(Arc::new(repository));

        let command = UpdateProductCommand {
            title: Some("Super Blender".to_string()),
            brand: None,
            image: None,
            price: None,
            review_score: None,
        };

        let product = service
            .update_product(&Slug::from_raw("blender".to_string()), command)
            .await
            .unwrap();
        assert_eq!(product.slug.as_str(), "super-blender");
    }

    #[tokio::test]
    async fn test_favorite_product_success() {
        let mut repository = MockProductRepository::new();

        repository
            .expect_find_by_slug()
            .times(1)
            .returning(|_, _| Ok(Some(test_product("Blender", false, 2))));

        repository
            .expect_add_favorite()
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ProductService::new(Arc::new(repository));

        let product = service
            .favorite_product(&Slug::from_raw("blender".to_string()), &viewer())
            .await
            .unwrap();
        assert!(product.favorited);
        assert_eq!(product.favorites_count, 3);
    }

    #[tokio::test]
    async fn test_favorite_product_already_favorited() {
        let mut repository = MockProductRepository::new();

        repository
            .expect_find_by_slug()
            .times(1)
            .returning(|_, _| Ok(Some(test_product("Blender", true, 2))));

        repository.expect_add_favorite().times(0);

        let service = ProductService::new(Arc::new(repository));

        let result = service
            .favorite_product(&Slug::from_raw("blender".to_string()), &viewer())
            .await;
        assert!(matches!(result, Err(ProductError::AlreadyFavorited)));
    }

    #[tokio::test]
    async fn test_unfavorite_product_success() {
        let mut repository = MockProductRepository::new();

        repository
            .expect_find_by_slug()
            .times(1)
            .returning(|_, _| Ok(Some(test_product("Blender", true, 2))));

        repository
            .expect_remove_favorite()
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ProductService::new(Arc::new(repository));

        let product = service
            .unfavorite_product(&Slug::from_raw("blender".to_string()), &viewer())
            .await
            .unwrap();
        assert!(!product.favorited);
        assert_eq!(product.favorites_count, 1);
    }

    #[tokio::test]
    async fn test_unfavorite_product_not_favorited() {
        let mut repository = MockProductRepository::new();

        repository
            .expect_find_by_slug()
            .times(1)
            .returning(|_, _| Ok(Some(test_product("Blender", false, 2))));

        repository.expect_remove_favorite().times(0);

        let service = ProductService::new(Arc::new(repository));

        let result = service
            .unfavorite_product(&Slug::from_raw("blender".to_string()), &viewer())
            .await;
        assert!(matches!(result, Err(ProductError::NotFavorited)));
    }

    #[tokio::test]
    async fn test_delete_product_not_found() {
        let mut repository = MockProductRepository::new();

        repository
            .expect_delete_by_slug()
            .times(1)
            .returning(|slug| Err(ProductError::NotFound(slug.to_string())));

        let service = ProductService::new(Arc::new(repository));

        let result = service
            .delete_product(&Slug::from_raw("missing".to_string()))
            .await;
        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }
}
