//! In-memory repository used by the unit tests of this crate.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::{CoreError, CoreResult};
use crate::repository::WarehouseRepository;
use crate::types::{LineItem, OrderId, Orders, ProductId, Rack, RackId};

/// Builder-style fake warehouse that counts lookups.
#[derive(Default)]
pub(crate) struct StubWarehouse {
    items: Vec<LineItem>,
    products: HashMap<ProductId, String>,
    racks: HashMap<ProductId, Vec<Rack>>,
    fail: bool,
    product_name_calls: AtomicUsize,
    main_rack_calls: AtomicUsize,
    secondary_rack_calls: AtomicUsize,
}

impl StubWarehouse {
    pub(crate) fn new() -> Self {
        StubWarehouse::default()
    }

    pub(crate) fn with_product(mut self, id: ProductId, name: &str) -> Self {
        self.products.insert(id, name.to_string());
        self
    }

    pub(crate) fn with_rack(
        mut self,
        product_id: ProductId,
        rack_id: RackId,
        name: &str,
        is_main: bool,
    ) -> Self {
        self.racks.entry(product_id).or_default().push(Rack {
            id: rack_id,
            name: name.to_string(),
            is_main,
        });
        self
    }

    pub(crate) fn with_line(mut self, order_id: OrderId, product_id: ProductId, quantity: i64) -> Self {
        self.items.push(LineItem::new(order_id, product_id, quantity));
        self
    }

    /// Makes every order lookup fail like a dropped connection.
    pub(crate) fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub(crate) fn product_name_calls(&self) -> usize {
        self.product_name_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn main_rack_calls(&self) -> usize {
        self.main_rack_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn secondary_rack_calls(&self) -> usize {
        self.secondary_rack_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WarehouseRepository for StubWarehouse {
    async fn line_items(&self, order_ids: &[OrderId]) -> CoreResult<Orders> {
        if self.fail {
            return Err(CoreError::Repository("connection reset".to_string()));
        }

        let mut orders = Orders::new();
        for item in self.items.iter().filter(|i| order_ids.contains(&i.order_id)) {
            orders.entry(item.order_id).or_default().push(item.clone());
        }
        Ok(orders)
    }

    async fn product_name(&self, product_id: ProductId) -> CoreResult<Option<String>> {
        self.product_name_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.products.get(&product_id).cloned())
    }

    async fn main_rack(&self, product_id: ProductId) -> CoreResult<Option<Rack>> {
        self.main_rack_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .racks
            .get(&product_id)
            .and_then(|racks| racks.iter().find(|r| r.is_main).cloned()))
    }

    async fn secondary_racks(&self, product_id: ProductId) -> CoreResult<Vec<Rack>> {
        self.secondary_rack_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .racks
            .get(&product_id)
            .map(|racks| racks.iter().filter(|r| !r.is_main).cloned().collect())
            .unwrap_or_default())
    }
}

/// Order 1: product 10 ×3 on rack A.
/// Order 2: product 20 ×1 on rack B, overflow on rack C.
pub(crate) fn scenario_warehouse() -> StubWarehouse {
    StubWarehouse::new()
        .with_product(10, "Widget")
        .with_product(20, "Gadget")
        .with_rack(10, 1, "A", true)
        .with_rack(20, 2, "B", true)
        .with_rack(20, 3, "C", false)
        .with_line(1, 10, 3)
        .with_line(2, 20, 1)
}
