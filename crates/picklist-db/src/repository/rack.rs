//! # Rack Repository
//!
//! Database operations for racks and product-rack assignments.
//!
//! ## Assignment Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  racks                    product_racks                                │
//! │  ┌────┬──────┐            ┌────┬────────────┬─────────┬─────────┐      │
//! │  │ id │ name │            │ id │ product_id │ rack_id │ is_main │      │
//! │  ├────┼──────┤            ├────┼────────────┼─────────┼─────────┤      │
//! │  │ 1  │ A    │◄───────────│ 1  │ 10         │ 1       │ 1       │      │
//! │  │ 2  │ B    │◄───────────│ 2  │ 20         │ 2       │ 1       │      │
//! │  │ 3  │ C    │◄───────────│ 3  │ 20         │ 3       │ 0       │      │
//! │  └────┴──────┘            └────┴────────────┴─────────┴─────────┘      │
//! │                                                                         │
//! │  main_rack(20)       → B                                               │
//! │  secondary_racks(20) → [C]   (assignment order)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use picklist_core::{ProductId, Rack, RackId};
use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::error::DbResult;

/// Repository for rack database operations.
#[derive(Debug, Clone)]
pub struct RackRepository {
    pool: SqlitePool,
}

impl RackRepository {
    /// Creates a new RackRepository.
    pub fn new(pool: SqlitePool) -> Self {
        RackRepository { pool }
    }

    /// Returns the rack marked as main for a product.
    ///
    /// Uniqueness of the main flag is not enforced by the schema. When a
    /// product has several main assignments the earliest one wins.
    pub async fn main_rack(&self, product_id: ProductId) -> DbResult<Option<Rack>> {
        debug!(product_id, "Fetching main rack");

        let mut racks = self.assigned(product_id, true).await?;

        if racks.len() > 1 {
            warn!(
                product_id,
                count = racks.len(),
                "Product has several main racks, using the first assignment"
            );
        }

        if racks.is_empty() {
            Ok(None)
        } else {
            Ok(Some(racks.swap_remove(0)))
        }
    }

    /// Returns the product's secondary racks in assignment order.
    pub async fn secondary_racks(&self, product_id: ProductId) -> DbResult<Vec<Rack>> {
        debug!(product_id, "Fetching secondary racks");

        self.assigned(product_id, false).await
    }

    async fn assigned(&self, product_id: ProductId, is_main: bool) -> DbResult<Vec<Rack>> {
        let racks = sqlx::query_as::<_, Rack>(
            r#"
            SELECT
                r.id,
                r.name,
                pr.is_main
            FROM product_racks pr
            INNER JOIN racks r ON r.id = pr.rack_id
            WHERE pr.product_id = ?1
            AND pr.is_main = ?2
            ORDER BY pr.id
            "#,
        )
        .bind(product_id)
        .bind(is_main)
        .fetch_all(&self.pool)
        .await?;

        Ok(racks)
    }

    /// Inserts a new rack.
    ///
    /// ## Returns
    /// * `Err(DbError::UniqueViolation)` - ID already exists
    pub async fn insert(&self, id: RackId, name: &str) -> DbResult<()> {
        debug!(id, name, "Inserting rack");

        sqlx::query("INSERT INTO racks (id, name) VALUES (?1, ?2)")
            .bind(id)
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Records that a product is stocked on a rack.
    ///
    /// ## Returns
    /// * `Err(DbError::UniqueViolation)` - rack already assigned to the product
    /// * `Err(DbError::ForeignKeyViolation)` - product or rack doesn't exist
    pub async fn assign(&self, product_id: ProductId, rack_id: RackId, is_main: bool) -> DbResult<()> {
        debug!(product_id, rack_id, is_main, "Assigning rack");

        sqlx::query("INSERT INTO product_racks (product_id, rack_id, is_main) VALUES (?1, ?2, ?3)")
            .bind(product_id)
            .bind(rack_id)
            .bind(is_main)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Counts racks (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM racks")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
