//! Whole-command runs: argument handling, database selection and output.

use std::path::Path;

use picklist_cli::cli::Cli;
use picklist_cli::config::AppConfig;
use picklist_cli::run_with_output;
use picklist_core::{LineItem, Product};
use picklist_db::{Database, DbConfig};

// =============================================================================
// Fixtures
// =============================================================================

fn cli(order_ids: &str, db: Option<&Path>) -> Cli {
    Cli {
        order_ids: order_ids.to_string(),
        db: db.map(Path::to_path_buf),
        verbose: 0,
    }
}

fn config(db_source: &Path) -> AppConfig {
    AppConfig::from_lookup(|_| None)
        .unwrap()
        .with_db_source(db_source)
}

/// File database with product 10 on rack A (order 1) and an unracked
/// product 30 (order 3).
async fn seed_file(path: &Path) {
    let db = Database::new(DbConfig::new(path)).await.unwrap();
    for (id, name) in [(10, "Widget"), (30, "Orphan")] {
        db.products()
            .insert(&Product {
                id,
                name: name.to_string(),
            })
            .await
            .unwrap();
    }
    db.racks().insert(1, "A").await.unwrap();
    db.racks().assign(10, 1, true).await.unwrap();
    db.orders().insert_line(&LineItem::new(1, 10, 3)).await.unwrap();
    db.orders().insert_line(&LineItem::new(3, 30, 1)).await.unwrap();
    db.close().await;
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn malformed_list_fails_before_opening_database() {
    let dir = tempfile::tempdir().unwrap();
    let never = dir.path().join("never.db");
    let mut out = Vec::new();

    let result = run_with_output(cli("1,abc", None), config(&never), &mut out).await;

    assert!(result.is_err());
    assert!(out.is_empty());
    assert!(!never.exists());
}

#[tokio::test]
async fn db_flag_overrides_configured_source() {
    let dir = tempfile::tempdir().unwrap();
    let seeded = dir.path().join("seeded.db");
    let configured = dir.path().join("configured.db");
    seed_file(&seeded).await;
    let mut out = Vec::new();

    run_with_output(cli("1", Some(&seeded)), config(&configured), &mut out)
        .await
        .unwrap();

    let report = String::from_utf8(out).unwrap();
    assert_eq!(report, "=+=+=+=\n===Rack A\nWidget (id=10)\norder 1, 3 pcs\n\n");
    assert!(!configured.exists());
}

#[tokio::test]
async fn missing_rack_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let seeded = dir.path().join("seeded.db");
    seed_file(&seeded).await;
    let mut out = Vec::new();

    let err = run_with_output(cli("1,3", None), config(&seeded), &mut out)
        .await
        .unwrap_err();

    assert!(out.is_empty());
    assert!(format!("{err:#}").contains("product 30"));
}

#[tokio::test]
async fn in_memory_source_prints_banner_for_unknown_orders() {
    let mut out = Vec::new();

    run_with_output(cli("5,6", None), config(Path::new(":memory:")), &mut out)
        .await
        .unwrap();

    assert_eq!(out, b"=+=+=+=\n");
}
