//! # Validation Module
//!
//! Input validation for the picking-list pipeline.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI argument "101,102,103"                                   │
//! │  └── THIS MODULE: parse_order_ids (before any database work)           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Aggregator                                                   │
//! │  └── THIS MODULE: validate_quantity on every fetched line item         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── CHECK (quantity > 0)                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use picklist_core::validation::parse_order_ids;
//!
//! let ids = parse_order_ids("101, 102,103").unwrap();
//! assert_eq!(ids, vec![101, 102, 103]);
//!
//! assert!(parse_order_ids("101,abc").is_err());
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::types::OrderId;
use crate::ORDER_ID_SEPARATOR;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Order IDs
// =============================================================================

/// Parses a comma-separated order-ID list.
///
/// ## Rules
/// - The list must not be empty
/// - Whitespace around each token is ignored
/// - Every token must be a positive integer; an empty token (`"1,,2"`) or a
///   non-numeric token is rejected rather than read as zero
/// - Duplicates are dropped, keeping the first occurrence
///
/// ## Example
/// ```rust
/// use picklist_core::validation::parse_order_ids;
///
/// assert_eq!(parse_order_ids("3,1,3").unwrap(), vec![3, 1]);
/// assert!(parse_order_ids("").is_err());
/// assert!(parse_order_ids("0").is_err());
/// ```
pub fn parse_order_ids(input: &str) -> ValidationResult<Vec<OrderId>> {
    if input.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "order ids".to_string(),
        });
    }

    let mut seen = HashSet::new();
    let mut ids = Vec::new();

    for token in input.split(ORDER_ID_SEPARATOR) {
        let id = parse_order_id(token)?;
        if seen.insert(id) {
            ids.push(id);
        }
    }

    Ok(ids)
}

/// Parses one token of the order-ID list.
fn parse_order_id(token: &str) -> ValidationResult<OrderId> {
    let token = token.trim();

    if token.is_empty() {
        return Err(ValidationError::InvalidFormat {
            field: "order id".to_string(),
            reason: "empty entry in list".to_string(),
        });
    }

    let id: OrderId = token.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "order id".to_string(),
        reason: format!("'{token}' is not an integer"),
    })?;

    validate_order_id(id)?;
    Ok(id)
}

/// Validates an order ID.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_order_id(id: OrderId) -> ValidationResult<()> {
    if id <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "order id".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line-item quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - No upper bound
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_order_ids() {
        assert_eq!(parse_order_ids("1").unwrap(), vec![1]);
        assert_eq!(parse_order_ids("101,102,103").unwrap(), vec![101, 102, 103]);
        assert_eq!(parse_order_ids(" 7 , 8 ").unwrap(), vec![7, 8]);
    }

    #[test]
    fn test_parse_order_ids_dedups_keeping_first() {
        assert_eq!(parse_order_ids("5,2,5,2,9").unwrap(), vec![5, 2, 9]);
    }

    #[test]
    fn test_parse_order_ids_rejects_malformed() {
        assert!(matches!(
            parse_order_ids(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_order_ids("   "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_order_ids("1,,2"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_order_ids("1,2,"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_order_ids("12a"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_order_ids("1.5"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_parse_order_ids_rejects_non_positive() {
        assert!(matches!(
            parse_order_ids("0"),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            parse_order_ids("4,-1"),
            Err(ValidationError::MustBePositive { .. })
        ));
    }

    #[test]
    fn test_invalid_token_named_in_error() {
        let err = parse_order_ids("10,abc").unwrap_err();
        assert!(err.to_string().contains("'abc'"));
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(1_000_000).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
    }
}
