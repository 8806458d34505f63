//! # Error Types
//!
//! Domain-specific error types for picklist-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  picklist-core errors (this file)                                      │
//! │  ├── CoreError        - Lookup and grouping failures                   │
//! │  └── ValidationError  - Order-ID list and quantity checks              │
//! │                                                                         │
//! │  picklist-db errors (separate crate)                                   │
//! │  └── DbError          - Database failures, become CoreError::Repository│
//! │                                                                         │
//! │  CLI (apps/picklist-cli)                                               │
//! │  └── anyhow::Error    - Logged, process exits non-zero                 │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → anyhow → exit status              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product ID, offending token)
//! 3. Every variant is fatal for a report run: there is no recovery path

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while building a picking list.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A line item references a product that has no catalog row.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The product has no rack marked as its main storage location.
    ///
    /// ## When This Occurs
    /// - Product was never assigned a rack
    /// - All of its rack assignments are secondary
    ///
    /// Aborts the whole report; no partial list is produced.
    #[error("No main rack assigned to product {product_id}")]
    RackNotFound { product_id: ProductId },

    /// The storage backend failed (query error, lost connection, ...).
    #[error("Repository error: {0}")]
    Repository(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the order-ID parser before any repository call is made, and
/// by the aggregator for line items that break the data model.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. a non-numeric order ID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::RackNotFound { product_id: 42 };
        assert_eq!(err.to_string(), "No main rack assigned to product 42");

        let err = CoreError::ProductNotFound(7);
        assert_eq!(err.to_string(), "Product not found: 7");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "order ids".to_string(),
        };
        assert_eq!(err.to_string(), "order ids is required");

        let err = ValidationError::InvalidFormat {
            field: "order id".to_string(),
            reason: "'abc' is not an integer".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "order id has invalid format: 'abc' is not an integer"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
