//! # Domain Types
//!
//! Core domain types used throughout the picking-list pipeline.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │     Product     │   │      Rack       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  order_id       │   │  id             │   │  id             │       │
//! │  │  product_id     │   │  name           │   │  name           │       │
//! │  │  quantity       │   └─────────────────┘   │  is_main        │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! │           │                                                             │
//! │           ▼  aggregator                                                 │
//! │  ┌─────────────────┐   ┌──────────────────────────────────────┐        │
//! │  │   PickEntry     │──►│  PickList: rack name → [PickEntry]   │        │
//! │  └─────────────────┘   └──────────────────────────────────────┘        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

// =============================================================================
// Identifiers
// =============================================================================

/// Order identifier as stored in the database.
pub type OrderId = i64;

/// Product identifier.
pub type ProductId = i64;

/// Rack identifier.
pub type RackId = i64;

// =============================================================================
// Line Item
// =============================================================================

/// One product line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct LineItem {
    pub order_id: OrderId,
    pub product_id: ProductId,
    /// Units to pick. Always positive.
    pub quantity: i64,
}

impl LineItem {
    pub fn new(order_id: OrderId, product_id: ProductId, quantity: i64) -> Self {
        LineItem {
            order_id,
            product_id,
            quantity,
        }
    }
}

/// Line items grouped by order, in ascending order ID.
///
/// Items inside an order keep the order they were fetched in.
pub type Orders = BTreeMap<OrderId, Vec<LineItem>>;

// =============================================================================
// Product
// =============================================================================

/// A catalog product as shown on the picking list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    pub id: ProductId,
    pub name: String,
}

// =============================================================================
// Rack
// =============================================================================

/// A storage rack as seen from one product.
///
/// `is_main` describes the product-rack assignment, not the rack itself:
/// the same rack can be main for one product and secondary for another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Rack {
    pub id: RackId,
    pub name: String,
    pub is_main: bool,
}

// =============================================================================
// Pick Entry
// =============================================================================

/// A rendering-ready line of the picking list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickEntry {
    pub order_id: OrderId,
    pub product: Product,
    pub quantity: i64,
    /// Names of overflow racks, in the order the repository returned them.
    pub secondary_racks: Vec<String>,
}

impl PickEntry {
    /// Checks if the product is also stocked on overflow racks.
    #[inline]
    pub fn has_secondary_racks(&self) -> bool {
        !self.secondary_racks.is_empty()
    }
}

// =============================================================================
// Pick List
// =============================================================================

/// Pick entries bucketed by main rack name.
///
/// Buckets are keyed by the rack's display name, so two racks with
/// different IDs but the same name share a bucket. The map itself has no
/// iteration order; use [`PickList::rack_names`] for the report order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickList {
    racks: HashMap<String, Vec<PickEntry>>,
}

impl PickList {
    /// Creates an empty pick list.
    pub fn new() -> Self {
        PickList::default()
    }

    /// Appends an entry to the bucket of `rack_name`.
    pub fn push(&mut self, rack_name: impl Into<String>, entry: PickEntry) {
        self.racks.entry(rack_name.into()).or_default().push(entry);
    }

    /// Rack names in ascending ordinal (byte-wise, case-sensitive) order.
    pub fn rack_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.racks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Entries of one rack, in insertion order.
    pub fn entries(&self, rack_name: &str) -> &[PickEntry] {
        self.racks
            .get(rack_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of distinct rack buckets.
    pub fn rack_count(&self) -> usize {
        self.racks.len()
    }

    /// Total number of entries across all racks.
    pub fn entry_count(&self) -> usize {
        self.racks.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.racks.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(order_id: OrderId, product_id: ProductId) -> PickEntry {
        PickEntry {
            order_id,
            product: Product {
                id: product_id,
                name: format!("Product {product_id}"),
            },
            quantity: 1,
            secondary_racks: Vec::new(),
        }
    }

    #[test]
    fn test_rack_names_sorted_ordinally() {
        let mut list = PickList::new();
        list.push("b", entry(1, 1));
        list.push("B", entry(1, 2));
        list.push("A", entry(1, 3));
        list.push("a", entry(1, 4));

        // Uppercase sorts before lowercase in ordinal order
        assert_eq!(list.rack_names(), vec!["A", "B", "a", "b"]);
    }

    #[test]
    fn test_push_keeps_insertion_order_within_rack() {
        let mut list = PickList::new();
        list.push("A", entry(2, 20));
        list.push("A", entry(1, 10));

        let ids: Vec<ProductId> = list.entries("A").iter().map(|e| e.product.id).collect();
        assert_eq!(ids, vec![20, 10]);
        assert_eq!(list.rack_count(), 1);
        assert_eq!(list.entry_count(), 2);
    }

    #[test]
    fn test_entries_of_unknown_rack_is_empty() {
        let list = PickList::new();
        assert!(list.entries("Z").is_empty());
        assert!(list.is_empty());
    }

    #[test]
    fn test_has_secondary_racks() {
        let mut e = entry(1, 1);
        assert!(!e.has_secondary_racks());
        e.secondary_racks.push("C".to_string());
        assert!(e.has_secondary_racks());
    }
}
