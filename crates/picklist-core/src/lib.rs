//! # picklist-core: Pure Picking-List Logic
//!
//! This crate is the **heart** of the rack picklist. It turns order line
//! items into a rack-grouped picking sheet without touching any I/O itself.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Rack Picklist Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/picklist-cli (`picklist 101,102`)          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ picklist-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐  ┌────────────┐  ┌────────────┐  ┌─────────┐  │   │
//! │  │   │ validation │─►│ aggregator │─►│   report   │  │  types  │  │   │
//! │  │   │ order ids  │  │ PickContext│  │  render()  │  │ PickList│  │   │
//! │  │   └────────────┘  └─────┬──────┘  └────────────┘  └─────────┘  │   │
//! │  │                         │ WarehouseRepository (trait)          │   │
//! │  └─────────────────────────┼───────────────────────────────────────┘   │
//! │                            │                                            │
//! │  ┌─────────────────────────▼───────────────────────────────────────┐   │
//! │  │                 picklist-db (SQLite implementation)             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LineItem, Rack, PickEntry, PickList)
//! - [`error`] - Domain error types
//! - [`validation`] - Order-ID parsing and quantity checks
//! - [`repository`] - The storage boundary trait
//! - [`aggregator`] - Per-run lookups and rack grouping
//! - [`report`] - Deterministic text rendering
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use picklist_core::{build_pick_list, report, validation::parse_order_ids};
//!
//! let order_ids = parse_order_ids("101,102")?;
//! let pick_list = build_pick_list(&warehouse, &order_ids).await?;
//! print!("{}", report::render(&pick_list));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod aggregator;
pub mod error;
pub mod report;
pub mod repository;
pub mod types;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use aggregator::{build_pick_list, PickContext};
pub use error::{CoreError, CoreResult, ValidationError};
pub use repository::WarehouseRepository;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Separator of the order-ID list accepted on the command line.
pub const ORDER_ID_SEPARATOR: char = ',';
