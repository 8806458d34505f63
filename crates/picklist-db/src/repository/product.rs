//! # Product Repository
//!
//! Database operations for catalog products.

use picklist_core::{Product, ProductId};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
/// let name = repo.name(10).await?; // Some("Widget")
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Returns the display name of a product.
    ///
    /// ## Returns
    /// * `Ok(Some(name))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn name(&self, id: ProductId) -> DbResult<Option<String>> {
        debug!(id, "Fetching product name");

        let name: Option<String> = sqlx::query_scalar("SELECT name FROM products WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(name)
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// * `Err(DbError::UniqueViolation)` - ID already exists
    pub async fn insert(&self, product: &Product) -> DbResult<()> {
        debug!(id = product.id, name = %product.name, "Inserting product");

        sqlx::query("INSERT INTO products (id, name) VALUES (?1, ?2)")
            .bind(product.id)
            .bind(&product.name)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Counts total products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::{Database, DbConfig};

    fn widget() -> Product {
        Product {
            id: 10,
            name: "Widget".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_lookup() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let products = db.products();

        products.insert(&widget()).await.unwrap();

        assert_eq!(products.name(10).await.unwrap().as_deref(), Some("Widget"));
        assert_eq!(products.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_unknown_product_is_none() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        assert_eq!(db.products().name(404).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.products().insert(&widget()).await.unwrap();

        let err = db.products().insert(&widget()).await.unwrap_err();

        assert!(matches!(err, DbError::UniqueViolation { .. }));
        assert_eq!(err.to_string(), "Duplicate products.id");
    }
}
