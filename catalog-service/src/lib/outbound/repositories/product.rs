use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::client::models::EmailAddress;
use crate::product::errors::ProductError;
use crate::product::models::Product;
use crate::product::models::ProductId;
use crate::product::models::Slug;
use crate::product::ports::ProductRepository;

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Raw products row with favorite state computed relative to the viewer.
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    slug: String,
    title: String,
    brand: String,
    image: String,
    price: String,
    review_score: String,
    favorited: bool,
    favorites_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProductRow {
    fn into_product(self) -> Product {
        Product {
            id: ProductId(self.id),
            slug: Slug::from_raw(self.slug),
            title: self.title,
            brand: self.brand,
            image: self.image,
            price: self.price,
            review_score: self.review_score,
            favorited: self.favorited,
            favorites_count: self.favorites_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

// The viewer email binds as NULL for anonymous viewers, making the EXISTS
// subquery (and so `favorited`) false.
const SELECT_PRODUCT: &str = r#"
    SELECT
        p.id, p.slug, p.title, p.brand, p.image, p.price, p.review_score,
        p.created_at, p.updated_at,
        (SELECT count(*) FROM favorites f WHERE f.product_id = p.id) AS favorites_count,
        EXISTS (
            SELECT 1
            FROM favorites f
            JOIN clients c ON c.id = f.client_id
            WHERE f.product_id = p.id AND c.email = $1
        ) AS favorited
    FROM products p
"#;

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn find_by_slug<'a>(
        &self,
        slug: &Slug,
        viewer: Option<&'a EmailAddress>,
    ) -> Result<Option<Product>, ProductError> {
        let query = format!("{} WHERE p.slug = $2", SELECT_PRODUCT);

        let row = sqlx::query_as::<_, ProductRow>(&query)
            .bind(viewer.map(EmailAddress::as_str))
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        Ok(row.map(ProductRow::into_product))
    }

    async fn list_all<'a>(
        &self,
        viewer: Option<&'a EmailAddress>,
    ) -> Result<Vec<Product>, ProductError> {
        let query = format!("{} ORDER BY p.created_at DESC", SELECT_PRODUCT);

        let rows = sqlx::query_as::<_, ProductRow>(&query)
            .bind(viewer.map(EmailAddress::as_str))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }

    async fn insert(&self, product: Product) -> Result<Product, ProductError> {
        sqlx::query(
            r#"
            INSERT INTO products (id, slug, title, brand, image, price, review_score, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(product.id.0)
        .bind(product.slug.as_str())
        .bind(&product.title)
        .bind(&product.brand)
        .bind(&product.image)
        .bind(&product.price)
        .bind(&product.review_score)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("products_slug_key")
                {
                    return ProductError::SlugAlreadyExists(product.slug.to_string());
                }
            }
            ProductError::DatabaseError(e.to_string())
        })?;

        Ok(product)
    }

    async fn update_by_slug(
        &self,
        slug: &Slug,
        product: Product,
    ) -> Result<Product, ProductError> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET slug = $2, title = $3, brand = $4, image = $5, price = $6,
                review_score = $7, updated_at = $8
            WHERE slug = $1
            "#,
        )
        .bind(slug.as_str())
        .bind(product.slug.as_str())
        .bind(&product.title)
        .bind(&product.brand)
        .bind(&product.image)
        .bind(&product.price)
        .bind(&product.review_score)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("products_slug_key")
                {
                    return ProductError::SlugAlreadyExists(product.slug.to_string());
                }
            }
            ProductError::DatabaseError(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Err(ProductError::NotFound(slug.to_string()));
        }

        Ok(product)
    }

    async fn delete_by_slug(&self, slug: &Slug) -> Result<(), ProductError> {
        let result = sqlx::query("DELETE FROM products WHERE slug = $1")
            .bind(slug.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ProductError::NotFound(slug.to_string()));
        }

        Ok(())
    }

    async fn add_favorite(
        &self,
        slug: &Slug,
        viewer: &EmailAddress,
    ) -> Result<(), ProductError> {
        sqlx::query(
            r#"
            INSERT INTO favorites (client_id, product_id)
            VALUES (
                (SELECT id FROM clients WHERE email = $2),
                (SELECT id FROM products WHERE slug = $1)
            )
            "#,
        )
        .bind(slug.as_str())
        .bind(viewer.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn remove_favorite(
        &self,
        slug: &Slug,
        viewer: &EmailAddress,
    ) -> Result<(), ProductError> {
        sqlx::query(
            r#"
            DELETE FROM favorites
            WHERE
                product_id = (SELECT id FROM products WHERE slug = $1)
                AND
                client_id = (SELECT id FROM clients WHERE email = $2)
            "#,
        )
        .bind(slug.as_str())
        .bind(viewer.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
