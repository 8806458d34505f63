//! CLI argument structures

use clap::Parser;
use std::path::PathBuf;

/// Print a rack-sorted picking list for a batch of orders
#[derive(Debug, Parser)]
#[command(name = "picklist")]
#[command(about = "picklist - Print a rack-sorted picking list for a batch of orders", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Comma-separated order IDs, e.g. 101,102,103
    #[arg(value_name = "ORDER_IDS")]
    pub order_ids: String,

    /// Database file path (overrides DB_SOURCE)
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
