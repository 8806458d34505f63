//! # SQLite Warehouse
//!
//! Adapts the order, product and rack repositories to the
//! [`WarehouseRepository`] boundary consumed by the aggregator.

use async_trait::async_trait;
use picklist_core::{CoreResult, OrderId, Orders, ProductId, Rack, WarehouseRepository};

use crate::repository::order::OrderRepository;
use crate::repository::product::ProductRepository;
use crate::repository::rack::RackRepository;

/// [`WarehouseRepository`] backed by the SQLite repositories.
#[derive(Debug, Clone)]
pub struct SqliteWarehouse {
    orders: OrderRepository,
    products: ProductRepository,
    racks: RackRepository,
}

impl SqliteWarehouse {
    pub fn new(orders: OrderRepository, products: ProductRepository, racks: RackRepository) -> Self {
        SqliteWarehouse {
            orders,
            products,
            racks,
        }
    }
}

#[async_trait]
impl WarehouseRepository for SqliteWarehouse {
    async fn line_items(&self, order_ids: &[OrderId]) -> CoreResult<Orders> {
        let mut orders = Orders::new();

        for item in self.orders.line_items(order_ids).await? {
            orders.entry(item.order_id).or_default().push(item);
        }

        Ok(orders)
    }

    async fn product_name(&self, product_id: ProductId) -> CoreResult<Option<String>> {
        Ok(self.products.name(product_id).await?)
    }

    async fn main_rack(&self, product_id: ProductId) -> CoreResult<Option<Rack>> {
        Ok(self.racks.main_rack(product_id).await?)
    }

    async fn secondary_racks(&self, product_id: ProductId) -> CoreResult<Vec<Rack>> {
        Ok(self.racks.secondary_racks(product_id).await?)
    }
}
