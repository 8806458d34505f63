//! Logging configuration and initialization
//!
//! Logs always go to stderr so stdout carries nothing but the report.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogFormat;

/// Filter applied when `RUST_LOG` is unset and no `-v` flag was given.
pub const DEFAULT_FILTER: &str = "info,sqlx=warn";

/// Default filter directive for a verbosity count.
pub fn filter_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => DEFAULT_FILTER,
        1 => "debug,sqlx=warn",
        _ => "trace",
    }
}

/// Initialize tracing for the application.
///
/// `RUST_LOG` wins over the verbosity flag when set.
pub fn init(format: LogFormat, verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for(verbosity)));

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2);

    // A subscriber may already be installed (tests, embedding)
    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}
