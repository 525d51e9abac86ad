use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

/// Product aggregate entity.
///
/// `favorited` is relative to the viewer the product was loaded for; it is
/// always false for anonymous viewers. `favorites_count` is derived from the
/// favorites table, never stored on the product row.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub slug: Slug,
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

/// Product unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(pub Uuid);

impl ProductId {
    /// Generate a new random product ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// URL-safe product identifier derived from the title.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Derive a slug from a product title.
    pub fn from_title(title: &str) -> Self {
        Self(slug::slugify(title))
    }

    /// Wrap an already slugified string, e.g. from a URL path.
    pub fn from_raw(slug: String) -> Self {
        Self(slug)
    }

    /// Get the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new product.
#[derive(Debug)]
pub struct CreateProductCommand {
    pub title: String,
    pub brand: String,
    pub image: String,
    pub price: String,
    pub review_score: String,
}

/// Command to update an existing product with optional fields.
///
/// A new title regenerates the slug. Only provided fields are updated.
#[derive(Debug)]
pub struct UpdateProductCommand {
    pub title: Option<String>,
    pub brand: Option<String>,
    pub image: Option<String>,
    pub price: Option<String>,
    pub review_score: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_from_title() {
        assert_eq!(Slug::from_title("Blender Pro 3000").as_str(), "blender-pro-3000");
        assert_eq!(Slug::from_title("Café & Chá!").as_str(), "cafe-cha");
    }
}
