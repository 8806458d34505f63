//! # Warehouse Repository
//!
//! The narrow storage boundary the aggregator reads through.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PickContext (aggregator)                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  WarehouseRepository (THIS TRAIT)                                      │
//! │  ├── line_items(order_ids)      orders → line items                    │
//! │  ├── product_name(product_id)   product → display name                 │
//! │  ├── main_rack(product_id)      product → primary rack                 │
//! │  └── secondary_racks(product_id) product → overflow racks              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  picklist-db::SqliteWarehouse (one implementation per backend)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Absence is not an error at this level: missing products and racks come
//! back as `None`, and the aggregator decides what is fatal.

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{OrderId, Orders, ProductId, Rack};

/// Read-only access to orders, products and rack assignments.
#[async_trait]
pub trait WarehouseRepository: Send + Sync {
    /// Fetches the line items of the given orders, grouped by order.
    ///
    /// Orders without rows may be missing from the result. Items inside an
    /// order must keep their storage order.
    async fn line_items(&self, order_ids: &[OrderId]) -> CoreResult<Orders>;

    /// Returns the display name of a product, `None` if it doesn't exist.
    async fn product_name(&self, product_id: ProductId) -> CoreResult<Option<String>>;

    /// Returns the rack marked as main for the product.
    async fn main_rack(&self, product_id: ProductId) -> CoreResult<Option<Rack>>;

    /// Returns the product's secondary racks in assignment order.
    async fn secondary_racks(&self, product_id: ProductId) -> CoreResult<Vec<Rack>>;
}
