//! # Validation Module
//!
//! Input validation for catalog data.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: checkout-cli (config.rs)                                     │
//! │  └── TOML deserialization (types, required fields)                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── SKU shape                                                         │
//! │  ├── Product name present                                              │
//! │  └── Price strictly positive                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog                                                      │
//! │  └── SKU uniqueness                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::validation::{validate_sku, validate_product_name};
//!
//! assert!(validate_sku("ipd").is_ok());
//! assert!(validate_product_name("ipd", "Super iPad").is_ok());
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::MAX_SKU_LENGTH;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a SKU (Stock Keeping Unit).
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 50 characters
/// - Should contain only alphanumeric characters, hyphens, underscores
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_sku;
///
/// assert!(validate_sku("mbp").is_ok());
/// assert!(validate_sku("").is_err());
/// assert!(validate_sku("A".repeat(100).as_str()).is_err());
/// ```
pub fn validate_sku(sku: &str) -> Result<(), ValidationError> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    if sku.chars().count() > MAX_SKU_LENGTH {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: MAX_SKU_LENGTH,
        });
    }

    if !sku
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// Must not be empty or whitespace only (`InvalidName`). Length is not
/// limited.
pub fn validate_product_name(sku: &str, name: &str) -> CoreResult<()> {
    if name.trim().is_empty() {
        return Err(CoreError::InvalidName {
            sku: sku.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be strictly positive: free or negatively priced products are
///   rejected with `InvalidPrice`
pub fn validate_price(name: &str, price: Money) -> CoreResult<()> {
    if !price.is_positive() {
        return Err(CoreError::invalid_price(name, price));
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
    fn test_validate_sku() {
        // Valid SKUs
        assert!(validate_sku("ipd").is_ok());
        assert!(validate_sku("COKE-330").is_ok());
        assert!(validate_sku("product_1").is_ok());

        // Invalid SKUs
        assert!(validate_sku("").is_err());
        assert!(validate_sku("   ").is_err());
        assert!(validate_sku("has space").is_err());
        assert!(validate_sku(&"A".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("ipd", "Super iPad").is_ok());
        assert_eq!(
            validate_product_name("ipd", ""),
            Err(CoreError::InvalidName {
                sku: "ipd".to_string()
            })
        );
        assert!(matches!(
            validate_product_name("ipd", " \t "),
            Err(CoreError::InvalidName { .. })
        ));
        assert!(validate_product_name("ipd", &"A".repeat(300)).is_ok());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("Apple TV", Money::from_cents(10950)).is_ok());
        assert!(validate_price("Penny", Money::from_cents(1)).is_ok());

        assert!(matches!(
            validate_price("Freebie", Money::zero()),
            Err(CoreError::InvalidPrice { .. })
        ));
        assert!(matches!(
            validate_price("Refund", Money::from_cents(-1000)),
            Err(CoreError::InvalidPrice { .. })
        ));
    }
}
