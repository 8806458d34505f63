//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CoreError::Repository ← What the aggregator sees                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CLI logs the error and exits non-zero                                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use picklist_core::CoreError;
use thiserror::Error;

/// Errors raised by the SQLite layer.
///
/// Constraint failures are split out so seed and insert callers can tell a
/// duplicate apart from a dangling reference. Everything else is a query or
/// connection problem that aborts the run.
#[derive(Debug, Error)]
pub enum DbError {
    /// A row with the same key already exists.
    ///
    /// `constraint` is the column list SQLite reports, e.g. `products.id`
    /// or `product_racks.product_id, product_racks.rack_id`.
    #[error("Duplicate {constraint}")]
    UniqueViolation { constraint: String },

    /// A row points at a product or rack that doesn't exist.
    #[error("Foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// The pool could not be opened, or was already closed.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// SQLite rejected the statement (CHECK constraint, missing table, ...).
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A bound parameter could not be encoded.
    #[error("Failed to encode query parameter: {0}")]
    Encoding(#[from] serde_json::Error),

    /// No connection became free within the acquire timeout.
    #[error("Connection pool exhausted")]
    PoolExhausted,

    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Convert sqlx errors to DbError.
///
/// ```text
/// Database "UNIQUE constraint failed: t.c"  → UniqueViolation { "t.c" }
/// Database "FOREIGN KEY constraint failed"  → ForeignKeyViolation
/// Database (anything else)                  → QueryFailed
/// PoolTimedOut                              → PoolExhausted
/// PoolClosed                                → ConnectionFailed
/// Other                                     → Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => classify_database_error(db_err.message()),

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

/// Maps a SQLite error message onto a constraint-aware variant.
fn classify_database_error(message: &str) -> DbError {
    const UNIQUE: &str = "UNIQUE constraint failed: ";

    if let Some(constraint) = message.strip_prefix(UNIQUE) {
        DbError::UniqueViolation {
            constraint: constraint.to_string(),
        }
    } else if message.contains("FOREIGN KEY constraint failed") {
        DbError::ForeignKeyViolation {
            message: message.to_string(),
        }
    } else {
        DbError::QueryFailed(message.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Storage failures reach the aggregator as repository errors.
impl From<DbError> for CoreError {
    fn from(err: DbError) -> Self {
        CoreError::Repository(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
