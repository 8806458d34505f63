//! # Seed Data Generator
//!
//! Populates a database with a small demo warehouse for development.
//!
//! ## Usage
//! ```bash
//! # Seed ./picklist.db (default)
//! cargo run -p picklist-db --bin seed
//!
//! # Specify database path
//! cargo run -p picklist-db --bin seed -- --db ./data/picklist.db
//!
//! # Then print a picking list
//! cargo run -p picklist-cli -- 101,102,103
//! ```
//!
//! ## Generated Data
//! - Racks A-01 … C-02 plus an overflow rack
//! - Products, each with one main rack and some with secondary racks
//! - Orders 101–105

use clap::Parser;
use picklist_core::{LineItem, Product};
use picklist_db::{Database, DbConfig};

/// Racks: (id, name)
const RACKS: &[(i64, &str)] = &[
    (1, "A-01"),
    (2, "A-02"),
    (3, "B-01"),
    (4, "B-02"),
    (5, "C-01"),
    (6, "C-02"),
    (7, "Overflow"),
];

/// Products: (id, name, main rack, secondary racks)
const PRODUCTS: &[(i64, &str, i64, &[i64])] = &[
    (10, "Laptop", 1, &[]),
    (11, "Monitor", 1, &[7]),
    (12, "Keyboard", 2, &[]),
    (13, "Mouse", 2, &[5]),
    (14, "Headphones", 3, &[]),
    (15, "Webcam", 4, &[6, 7]),
    (16, "USB Cable", 5, &[]),
    (17, "Docking Station", 6, &[3]),
];

/// Order lines: (order id, product id, quantity)
const ORDER_LINES: &[(i64, i64, i64)] = &[
    (101, 10, 1),
    (101, 13, 2),
    (101, 16, 3),
    (102, 11, 2),
    (102, 12, 1),
    (103, 15, 1),
    (103, 10, 2),
    (103, 17, 1),
    (104, 14, 4),
    (105, 16, 10),
    (105, 11, 1),
];

/// Demo warehouse seeder
#[derive(Parser)]
#[command(name = "seed")]
#[command(about = "Fill a picklist database with demo racks, products and orders", long_about = None)]
struct Args {
    /// Database file path
    #[arg(short, long, default_value = "./picklist.db")]
    db: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    println!("Picklist Seed Data Generator");
    println!("============================");
    println!("Database: {}", args.db);
    println!();

    let db = Database::new(DbConfig::new(&args.db)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    for &(id, name) in RACKS {
        db.racks().insert(id, name).await?;
    }
    println!("✓ Inserted {} racks", RACKS.len());

    for &(id, name, main_rack, secondary) in PRODUCTS {
        db.products()
            .insert(&Product {
                id,
                name: name.to_string(),
            })
            .await?;

        db.racks().assign(id, main_rack, true).await?;
        for &rack_id in secondary {
            db.racks().assign(id, rack_id, false).await?;
        }
    }
    println!("✓ Inserted {} products with rack assignments", PRODUCTS.len());

    for &(order_id, product_id, quantity) in ORDER_LINES {
        db.orders()
            .insert_line(&LineItem::new(order_id, product_id, quantity))
            .await?;
    }
    println!(
        "✓ Inserted {} order lines across {} orders",
        ORDER_LINES.len(),
        db.orders().count_orders().await?
    );

    db.close().await;

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
