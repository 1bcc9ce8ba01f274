//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    549.99 × 5 − 499.99 × 5 = 250.00000000000023  ❌ WRONG!              │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    54999 × 5 − 49999 × 5 = 25000 cents = $250.00                        │
//! │    Prices are rounded ONCE at the boundary, then every subtotal,       │
//! │    discount and total is exact.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(10950); // $109.50
//!
//! // Decimal input is rounded to the cent exactly once
//! let rounded = Money::from_decimal(10.999).unwrap();
//! assert_eq!(rounded.cents(), 1100);
//!
//! // Arithmetic operations
//! let doubled = price * 2u32;
//! assert_eq!(doubled.cents(), 21900);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

/// Largest decimal amount accepted by [`Money::from_decimal`].
///
/// Beyond 2^53 cents an `f64` can no longer represent every cent.
const MAX_DECIMAL_AMOUNT: f64 = 90_071_992_547_409.91;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows intermediate negative values (a misconfigured
///   discount) without wrapping
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serde transparent**: serializes as the raw cent count
/// - **Saturating arithmetic**: `+`, `-` and `×` clamp at `i64::MIN` and
///   `i64::MAX` instead of overflowing
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► unit price × quantity ──► subtotal
///                                                │
/// PricingRule::calculate_discount ──► discount ──┤
///                                                ▼
///                                   total = subtotal − discounts
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let price = Money::from_cents(54999); // Represents $549.99
    /// assert_eq!(price.cents(), 54999);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a decimal amount to Money, rounding to 2 decimal places.
    ///
    /// Rounding is half away from zero (`f64::round`), so `10.999` becomes
    /// `$11.00` and `0.125` becomes `$0.13`. Returns `None` for NaN, infinite
    /// or out-of-range input.
    ///
    /// ## Note
    /// This is the ONLY place a float enters the money domain. Decimal
    /// literals that are not exactly representable (`1.005`) round according
    /// to their binary value.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(549.99).unwrap().cents(), 54999);
    /// assert_eq!(Money::from_decimal(10.999).unwrap().cents(), 1100);
    /// assert!(Money::from_decimal(f64::NAN).is_none());
    /// ```
    pub fn from_decimal(amount: f64) -> Option<Self> {
        if !amount.is_finite() || amount.abs() > MAX_DECIMAL_AMOUNT {
            return None;
        }
        Some(Money((amount * 100.0).round() as i64))
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Clamps negative values to zero.
    ///
    /// Discounts pass through this so a misconfigured rule can never
    /// increase the price.
    #[inline]
    pub const fn non_negative(&self) -> Self {
        if self.0 < 0 {
            Money(0)
        } else {
            *self
        }
    }

    /// Multiplies money by a quantity, saturating at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(10950); // $109.50
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 32850); // $328.50
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money as `$1234.56`.
///
/// ## Note
/// Currency symbol is cosmetic; the checkout is currency-agnostic.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

/// Multiplication by a cart quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
