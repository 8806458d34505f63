//! # Repository Module
//!
//! Database repository implementations for the picklist.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Layout                                    │
//! │                                                                         │
//! │  PickContext (picklist-core)                                           │
//! │       │                                                                 │
//! │       │  WarehouseRepository trait                                     │
//! │       ▼                                                                 │
//! │  SqliteWarehouse                                                       │
//! │  ├── OrderRepository    order_items                                    │
//! │  ├── ProductRepository  products                                       │
//! │  └── RackRepository     racks + product_racks                          │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`order::OrderRepository`] - Order line lookup and insert
//! - [`product::ProductRepository`] - Product names
//! - [`rack::RackRepository`] - Racks and assignments
//! - [`warehouse::SqliteWarehouse`] - The aggregator-facing adapter

pub mod order;
pub mod product;
pub mod rack;
pub mod warehouse;
