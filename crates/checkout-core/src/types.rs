//! # Domain Types
//!
//! Core domain types used throughout the checkout.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │      Sku        │   │    Product      │                              │
//! │  │  ─────────────  │   │  ─────────────  │                              │
//! │  │  "ipd", "mbp"   │◄──│  sku            │                              │
//! │  │  opaque string  │   │  name           │                              │
//! │  │  value equality │   │  price (Money)  │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both types are immutable once built. Every constructor validates, so a
//! `Product` in hand always has a non-blank name and a positive price.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_price, validate_product_name, validate_sku};

// =============================================================================
// SKU
// =============================================================================

/// Stock Keeping Unit, the code scanned at the register.
///
/// Compared by value. Surrounding whitespace is trimmed on construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sku(String);

impl Sku {
    /// Creates a SKU after validating its format.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::Sku;
    ///
    /// let sku = Sku::new(" atv ").unwrap();
    /// assert_eq!(sku.as_str(), "atv");
    /// assert!(Sku::new("").is_err());
    /// ```
    pub fn new(sku: impl Into<String>) -> Result<Self, ValidationError> {
        let sku = sku.into();
        validate_sku(&sku)?;
        Ok(Sku(sku.trim().to_string()))
    }

    /// Builds a SKU from a compile-time constant known to be well formed.
    pub(crate) fn from_static(sku: &'static str) -> Self {
        Sku(sku.to_string())
    }

    /// Returns the SKU as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Sku {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Sku {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Sku {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Sku::new(value)
    }
}

impl TryFrom<&str> for Sku {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Sku::new(value)
    }
}

impl From<Sku> for String {
    fn from(sku: Sku) -> Self {
        sku.0
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// ## Invariants
/// - `name` is never blank
/// - `price` is strictly positive and, being whole cents, always equal to
///   itself rounded to 2 decimal places
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    sku: Sku,
    name: String,
    price: Money,
}

impl Product {
    /// Creates a product from a price already in cents.
    ///
    /// ## Errors
    /// - `InvalidName` when the name is empty or whitespace only
    /// - `InvalidPrice` when the price is zero or negative
    pub fn new(sku: Sku, name: impl Into<String>, price: Money) -> CoreResult<Self> {
        let name = name.into();
        validate_product_name(sku.as_str(), &name)?;
        validate_price(&name, price)?;

        Ok(Product { sku, name, price })
    }

    /// Creates a product from a decimal price, rounding it to the cent.
    ///
    /// Validation happens after rounding, so `0.001` is rejected as a zero
    /// price.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::{Product, Sku};
    ///
    /// let product = Product::from_decimal(Sku::new("test").unwrap(), "Test", 10.999).unwrap();
    /// assert_eq!(product.price().cents(), 1100); // $11.00
    /// ```
    pub fn from_decimal(sku: Sku, name: impl Into<String>, price: f64) -> CoreResult<Self> {
        let name = name.into();
        let price = Money::from_decimal(price).ok_or_else(|| CoreError::InvalidPrice {
            name: name.clone(),
            price: price.to_string(),
        })?;

        Product::new(sku, name, price)
    }

    /// Builds one of the launch products from compile-time constants.
    pub(crate) fn seeded(sku: &'static str, name: &'static str, price_cents: i64) -> Self {
        Product {
            sku: Sku::from_static(sku),
            name: name.to_string(),
            price: Money::from_cents(price_cents),
        }
    }

    /// Returns the product's SKU.
    #[inline]
    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    /// Returns the display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price, rounded to 2 decimal places.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sku(s: &str) -> Sku {
        Sku::new(s).unwrap()
    }

    #[test]
    fn test_creates_product_with_all_fields() {
        let laptop = Product::from_decimal(sku("test"), "Gaming Laptop", 999.99).unwrap();

        assert_eq!(laptop.sku().as_str(), "test");
        assert_eq!(laptop.name(), "Gaming Laptop");
        assert_eq!(laptop.price(), Money::from_cents(99999));
    }

    #[test]
    fn test_rejects_blank_names() {
        assert!(matches!(
            Product::from_decimal(sku("test"), "", 10.0),
            Err(CoreError::InvalidName { .. })
        ));
        assert!(matches!(
            Product::from_decimal(sku("test"), "   ", 10.0),
            Err(CoreError::InvalidName { .. })
        ));
    }

    #[test]
    fn test_accepts_long_names() {
        let name = "A".repeat(201);
        let product = Product::from_decimal(sku("x"), name.clone(), 10.0).unwrap();
        assert_eq!(product.name(), name);
    }

    #[test]
    fn test_rejects_non_positive_prices() {
        let err = Product::from_decimal(sku("test"), "Test Product", -10.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Test Product must have a positive price, got -$10.00"
        );

        assert!(matches!(
            Product::new(sku("test"), "Test Product", Money::zero()),
            Err(CoreError::InvalidPrice { .. })
        ));
        // Rounds to zero cents
        assert!(matches!(
            Product::from_decimal(sku("test"), "Test Product", 0.001),
            Err(CoreError::InvalidPrice { .. })
        ));
        assert!(matches!(
            Product::from_decimal(sku("test"), "Test Product", f64::NAN),
            Err(CoreError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_price_is_rounded_to_two_decimals() {
        let product = Product::from_decimal(sku("test"), "Test", 10.999).unwrap();
        assert_eq!(product.price(), Money::from_cents(1100));
        assert_eq!(product.price().to_string(), "$11.00");
    }

    #[test]
    fn test_sku_equality_is_by_value() {
        assert_eq!(sku("atv"), sku(" atv"));
        assert_ne!(sku("atv"), sku("ATV"));
    }

    #[test]
    fn test_sku_deserialize_validates() {
        let ok: Sku = serde_json::from_str("\"vga\"").unwrap();
        assert_eq!(ok.as_str(), "vga");

        let err = serde_json::from_str::<Sku>("\"has space\"");
        assert!(err.is_err());
    }
}
