//! # picklist
//!
//! Prints a rack-sorted picking list for a comma-separated batch of orders.
//!
//! ```bash
//! picklist 101,102,103
//! picklist --db ./data/picklist.db -v 104
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use picklist_cli::cli::Cli;
use picklist_cli::config::AppConfig;
use picklist_cli::{logging, run};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    logging::init(config.log_format, cli.verbose);

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{e:#}"), "Picking report failed");
            ExitCode::FAILURE
        }
    }
}
