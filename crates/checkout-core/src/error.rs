//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  checkout-core errors (this file)                                      │
//! │  ├── CoreError        - Catalog, pricing and checkout failures         │
//! │  └── ValidationError  - Field format failures (SKU shape)              │
//! │                                                                         │
//! │  checkout-cli errors (separate crate)                                  │
//! │  └── CliError         - Config, IO and core errors at the edge         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → exit code              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (SKU, name, price)
//! 3. Errors are enum variants, never String
//! 4. Every failure is synchronous and fail-fast; nothing here is retried

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// A failed operation never leaves partial state behind: a rejected product
/// is never built, a rejected catalog insert leaves the catalog untouched and
/// a rejected scan leaves the cart untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Product name is empty or only whitespace.
    #[error("Product name is required (SKU: {sku})")]
    InvalidName { sku: String },

    /// Product price is zero, negative or not a finite number.
    #[error("{name} must have a positive price, got {price}")]
    InvalidPrice { name: String, price: String },

    /// A product with this SKU is already in the catalog.
    ///
    /// ## When This Occurs
    /// - Loading a configuration file that lists a SKU twice
    /// - Calling `Catalog::add` with a SKU that was seeded already
    #[error("Catalog already has {name} (SKU: {sku})")]
    DuplicateSku { sku: String, name: String },

    /// Scanned SKU is not in the catalog.
    #[error("Product not found for SKU: {0}")]
    UnknownSku(String),

    /// The cart already holds `u32::MAX` units of this SKU.
    #[error("Quantity limit of {max} reached for SKU: {sku}")]
    QuantityLimit { sku: String, max: u32 },

    /// A pricing rule was configured with parameters that cannot produce a
    /// sensible discount.
    #[error("Invalid pricing rule {rule}: {reason}")]
    InvalidRule { rule: String, reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Builds an `InvalidPrice` error for a price already in cents.
    pub(crate) fn invalid_price(name: &str, price: Money) -> Self {
        CoreError::InvalidPrice {
            name: name.to_string(),
            price: price.to_string(),
        }
    }

    pub(crate) fn invalid_rule(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        CoreError::InvalidRule {
            rule: rule.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when an identifier doesn't meet format requirements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., illegal characters in a SKU).
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
        let err = CoreError::DuplicateSku {
            sku: "atv".to_string(),
            name: "Apple TV".to_string(),
        };
        assert_eq!(err.to_string(), "Catalog already has Apple TV (SKU: atv)");

        let err = CoreError::UnknownSku("xyz".to_string());
        assert_eq!(err.to_string(), "Product not found for SKU: xyz");

        let err = CoreError::invalid_price("Test Product", Money::from_cents(-1000));
        assert_eq!(
            err.to_string(),
            "Test Product must have a positive price, got -$10.00"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "sku".to_string(),
        };
        assert_eq!(err.to_string(), "sku is required");

        let err = ValidationError::TooLong {
            field: "sku".to_string(),
            max: 50,
        };
        assert_eq!(err.to_string(), "sku must be at most 50 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "sku".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
