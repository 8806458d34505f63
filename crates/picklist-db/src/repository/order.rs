//! # Order Repository
//!
//! Database operations for order lines.
//!
//! ## Lookup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  line_items([101, 102])                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SELECT order_id, product_id, quantity FROM order_items                │
//! │  WHERE order_id IN (SELECT value FROM json_each('[101,102]'))          │
//! │  ORDER BY order_id, id          ← insertion order inside an order      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  [LineItem{101,10,3}, LineItem{101,11,1}, LineItem{102,20,1}]          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use picklist_core::{LineItem, OrderId};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

/// Repository for order line operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Fetches all lines of the given orders.
    ///
    /// The ID list is bound as a single JSON array parameter, so batch size
    /// is not capped by SQLite's host parameter limit.
    ///
    /// ## Returns
    /// Lines sorted by order ID, then by insertion order. Unknown order IDs
    /// simply contribute no rows.
    pub async fn line_items(&self, order_ids: &[OrderId]) -> DbResult<Vec<LineItem>> {
        if order_ids.is_empty() {
            return Ok(Vec::new());
        }

        debug!(orders = order_ids.len(), "Fetching order lines");

        let ids = serde_json::to_string(order_ids)?;

        let items = sqlx::query_as::<_, LineItem>(
            r#"
            SELECT order_id, product_id, quantity
            FROM order_items
            WHERE order_id IN (SELECT value FROM json_each(?1))
            ORDER BY order_id, id
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = items.len(), "Fetched order lines");
        Ok(items)
    }

    /// Appends a line to an order.
    ///
    /// ## Returns
    /// * `Err(DbError::ForeignKeyViolation)` - product doesn't exist
    /// * `Err(DbError::QueryFailed)` - quantity is not positive
    pub async fn insert_line(&self, item: &LineItem) -> DbResult<()> {
        debug!(
            order_id = item.order_id,
            product_id = item.product_id,
            quantity = item.quantity,
            "Inserting order line"
        );

        sqlx::query("INSERT INTO order_items (order_id, product_id, quantity) VALUES (?1, ?2, ?3)")
            .bind(item.order_id)
            .bind(item.product_id)
            .bind(item.quantity)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Counts distinct orders (for diagnostics).
    pub async fn count_orders(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(DISTINCT order_id) FROM order_items")
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
    use picklist_core::Product;

    async fn setup() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        for (id, name) in [(10, "Widget"), (20, "Gadget"), (30, "Gizmo")] {
            db.products()
                .insert(&Product {
                    id,
                    name: name.to_string(),
                })
                .await
                .unwrap();
        }
        db
    }

    #[tokio::test]
    async fn test_line_items_keep_insertion_order_within_order() {
        let db = setup().await;
        let orders = db.orders();
        orders.insert_line(&LineItem::new(2, 30, 1)).await.unwrap();
        orders.insert_line(&LineItem::new(1, 20, 5)).await.unwrap();
        orders.insert_line(&LineItem::new(1, 10, 2)).await.unwrap();

        let items = orders.line_items(&[2, 1]).await.unwrap();

        assert_eq!(
            items,
            vec![
                LineItem::new(1, 20, 5),
                LineItem::new(1, 10, 2),
                LineItem::new(2, 30, 1),
            ]
        );
    }

    #[tokio::test]
    async fn test_line_items_filters_requested_orders() {
        let db = setup().await;
        let orders = db.orders();
        orders.insert_line(&LineItem::new(1, 10, 1)).await.unwrap();
        orders.insert_line(&LineItem::new(2, 20, 1)).await.unwrap();

        let items = orders.line_items(&[2, 404]).await.unwrap();

        assert_eq!(items, vec![LineItem::new(2, 20, 1)]);
        assert!(orders.line_items(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_line_items_beyond_sqlite_parameter_limit() {
        let db = setup().await;
        let orders = db.orders();
        orders.insert_line(&LineItem::new(7, 10, 1)).await.unwrap();
        orders.insert_line(&LineItem::new(39_999, 20, 2)).await.unwrap();

        let ids: Vec<OrderId> = (1..=40_000).collect();
        let items = orders.line_items(&ids).await.unwrap();

        assert_eq!(
            items,
            vec![LineItem::new(7, 10, 1), LineItem::new(39_999, 20, 2)]
        );
    }

    #[tokio::test]
    async fn test_insert_line_rejects_unknown_product() {
        let db = setup().await;

        let err = db
            .orders()
            .insert_line(&LineItem::new(1, 999, 1))
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    #[tokio::test]
    async fn test_insert_line_rejects_non_positive_quantity() {
        let db = setup().await;

        let result = db.orders().insert_line(&LineItem::new(1, 10, 0)).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_count_orders() {
        let db = setup().await;
        let orders = db.orders();
        orders.insert_line(&LineItem::new(1, 10, 1)).await.unwrap();
        orders.insert_line(&LineItem::new(1, 20, 1)).await.unwrap();
        orders.insert_line(&LineItem::new(3, 20, 1)).await.unwrap();

        assert_eq!(orders.count_orders().await.unwrap(), 2);
    }
}
