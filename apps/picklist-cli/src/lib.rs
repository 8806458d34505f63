//! # picklist-cli: Picking Report Command
//!
//! Wires configuration, logging and the database into one run:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          picklist run                                   │
//! │                                                                         │
//! │  "101,102"  ──► parse_order_ids ──► [101, 102]                         │
//! │                                        │                                │
//! │  AppConfig  ──► Database::new ──► health_check                         │
//! │                                        │                                │
//! │                                        ▼                                │
//! │                        build_pick_list (SqliteWarehouse)               │
//! │                                        │                                │
//! │                                        ▼                                │
//! │                             report::render ──► stdout                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing reaches stdout unless the whole report was built.

pub mod cli;
pub mod config;
pub mod logging;

use std::io::Write;

use anyhow::{bail, Context};
use picklist_core::validation::parse_order_ids;
use picklist_core::{build_pick_list, report, CoreResult, OrderId};
use picklist_db::{migrations, Database};
use tracing::{debug, info, warn};

use crate::cli::Cli;
use crate::config::AppConfig;

/// Builds the rendered report for `order_ids` against an open database.
pub async fn generate_report(db: &Database, order_ids: &[OrderId]) -> CoreResult<String> {
    let pick_list = build_pick_list(&db.warehouse(), order_ids).await?;
    Ok(report::render(&pick_list))
}

/// Executes one picking-report run, printing the report to stdout.
pub async fn run(cli: Cli, config: AppConfig) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_output(cli, config, &mut out).await
}

/// Executes one picking-report run against any output sink.
///
/// `out` receives a single write of the full report, or nothing at all.
pub async fn run_with_output<W: Write>(cli: Cli, config: AppConfig, out: &mut W) -> anyhow::Result<()> {
    // Bad input never touches the database
    let order_ids = parse_order_ids(&cli.order_ids).context("invalid order id list")?;

    let config = match cli.db {
        Some(path) => config.with_db_source(path),
        None => config,
    };

    if config.is_development() {
        info!(app_env = %config.app_env, "Running in development mode");
    }

    info!(
        orders = order_ids.len(),
        db = %config.db_source.display(),
        "Generating picking report"
    );

    let db = Database::new(config.db_config())
        .await
        .context("failed to open database")?;

    if !db.health_check().await {
        db.close().await;
        bail!("database health check failed");
    }

    match migrations::migration_status(db.pool()).await {
        Ok((total, applied)) => debug!(total, applied, "Migration status"),
        Err(e) => warn!(error = %e, "Could not read migration status"),
    }

    let result = generate_report(&db, &order_ids).await;
    db.close().await;
    let rendered = result.context("failed to build picking report")?;

    out.write_all(rendered.as_bytes())
        .and_then(|_| out.flush())
        .context("failed to write report")?;

    info!("Picking report written");
    Ok(())
}
