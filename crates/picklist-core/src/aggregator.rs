//! # Aggregator
//!
//! Turns fetched orders into a pick list bucketed by main rack name.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Pick List Aggregation                               │
//! │                                                                         │
//! │  Orders { 1: [p10 ×3], 2: [p20 ×1] }                                   │
//! │       │                                                                 │
//! │       │  for each order (ascending id), each item (fetch order)        │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────────┐                     │
//! │  │ PickContext (per-run caches)                  │                     │
//! │  │  product_names   p10 → "Widget"               │                     │
//! │  │  main_racks      p10 → A         ─── miss? ───┼──► RackNotFound     │
//! │  │  secondary_racks p20 → [C]                    │     (abort run)     │
//! │  └───────────────────────────────────────────────┘                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PickList { "A": [p10 order 1], "B": [p20 order 2, +C] }               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The caches live only as long as the [`PickContext`]. A long-lived
//! process gets fresh lookups by building a new context per report.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::error::{CoreError, CoreResult};
use crate::repository::WarehouseRepository;
use crate::types::{OrderId, Orders, PickEntry, PickList, Product, ProductId, Rack};
use crate::validation::validate_quantity;

// =============================================================================
// Pick Context
// =============================================================================

/// Per-run lookup state for one picking report.
///
/// ## Usage
/// ```rust,ignore
/// let mut ctx = PickContext::new(&warehouse);
/// let orders = ctx.resolve_orders(&[101, 102]).await?;
/// let pick_list = ctx.aggregate(&orders).await?;
/// ```
pub struct PickContext<'a, R: ?Sized> {
    repo: &'a R,
    product_names: HashMap<ProductId, String>,
    main_racks: HashMap<ProductId, Rack>,
    secondary_racks: HashMap<ProductId, Vec<Rack>>,
}

impl<'a, R> PickContext<'a, R>
where
    R: WarehouseRepository + ?Sized,
{
    /// Creates a context with empty caches.
    pub fn new(repo: &'a R) -> Self {
        PickContext {
            repo,
            product_names: HashMap::new(),
            main_racks: HashMap::new(),
            secondary_racks: HashMap::new(),
        }
    }

    /// Fetches the line items of the requested orders.
    ///
    /// Every requested ID is present in the result. An order the repository
    /// knows nothing about maps to an empty list.
    pub async fn resolve_orders(&self, order_ids: &[OrderId]) -> CoreResult<Orders> {
        debug!(count = order_ids.len(), "Resolving orders");

        let mut orders = self.repo.line_items(order_ids).await?;

        for &order_id in order_ids {
            orders.entry(order_id).or_insert_with(|| {
                warn!(order_id, "Order has no line items");
                Vec::new()
            });
        }

        Ok(orders)
    }

    /// Returns the product's display name, hitting the repository at most
    /// once per product.
    pub async fn resolve_product_name(&mut self, product_id: ProductId) -> CoreResult<String> {
        if let Some(name) = self.product_names.get(&product_id) {
            return Ok(name.clone());
        }

        let name = self
            .repo
            .product_name(product_id)
            .await?
            .ok_or(CoreError::ProductNotFound(product_id))?;

        self.product_names.insert(product_id, name.clone());
        Ok(name)
    }

    /// Returns the product's main rack.
    ///
    /// ## Errors
    /// `CoreError::RackNotFound` when no assignment is marked main.
    pub async fn resolve_main_rack(&mut self, product_id: ProductId) -> CoreResult<Rack> {
        if let Some(rack) = self.main_racks.get(&product_id) {
            return Ok(rack.clone());
        }

        let rack = self
            .repo
            .main_rack(product_id)
            .await?
            .ok_or(CoreError::RackNotFound { product_id })?;

        self.main_racks.insert(product_id, rack.clone());
        Ok(rack)
    }

    /// Returns the product's secondary racks, possibly empty.
    pub async fn resolve_secondary_racks(&mut self, product_id: ProductId) -> CoreResult<Vec<Rack>> {
        if let Some(racks) = self.secondary_racks.get(&product_id) {
            return Ok(racks.clone());
        }

        let racks = self.repo.secondary_racks(product_id).await?;

        self.secondary_racks.insert(product_id, racks.clone());
        Ok(racks)
    }

    /// Buckets every line item under its main rack name.
    ///
    /// Stops at the first failing lookup; nothing is returned for a partial
    /// run.
    pub async fn aggregate(&mut self, orders: &Orders) -> CoreResult<PickList> {
        let mut pick_list = PickList::new();

        for (&order_id, items) in orders {
            for item in items {
                validate_quantity(item.quantity)?;

                let name = self.resolve_product_name(item.product_id).await?;
                let main_rack = self.resolve_main_rack(item.product_id).await?;
                let secondary = self.resolve_secondary_racks(item.product_id).await?;

                let entry = PickEntry {
                    order_id,
                    product: Product {
                        id: item.product_id,
                        name,
                    },
                    quantity: item.quantity,
                    secondary_racks: secondary.into_iter().map(|rack| rack.name).collect(),
                };

                pick_list.push(main_rack.name, entry);
            }
        }

        info!(
            racks = pick_list.rack_count(),
            entries = pick_list.entry_count(),
            products = self.product_names.len(),
            "Pick list aggregated"
        );

        Ok(pick_list)
    }
}

/// Resolves the orders and aggregates them with a fresh [`PickContext`].
pub async fn build_pick_list<R>(repo: &R, order_ids: &[OrderId]) -> CoreResult<PickList>
where
    R: WarehouseRepository + ?Sized,
{
    let mut ctx = PickContext::new(repo);
    let orders = ctx.resolve_orders(order_ids).await?;
    ctx.aggregate(&orders).await
}

// =============================================================================
// Unit Tests
// =============================================================================
