//! # Checkout
//!
//! Scans items into a cart and prices it against the pricing rules.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Operations                                  │
//! │                                                                         │
//! │  scan("atv") ──► catalog lookup ──► cart[atv] += 1                      │
//! │                     │                                                   │
//! │                     └── unknown? → UnknownSku (cart untouched)          │
//! │                                                                         │
//! │  total() ──► subtotal = Σ unit_price × qty                              │
//! │          ──► discount = Σ rule.calculate_discount(cart, subset)         │
//! │          ──► subtotal − discount                                        │
//! │                                                                         │
//! │  There is no "closed" state: total() is a read-only query and may be   │
//! │  interleaved with further scans.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::{default_rules, RuleSet};

/// A single customer's checkout.
///
/// The catalog is shared and read only; the cart belongs to this checkout
/// alone. Scanning needs `&mut self`, so concurrent mutation requires the
/// caller to wrap the checkout in a lock.
#[derive(Debug)]
pub struct Checkout {
    catalog: Arc<Catalog>,
    rules: RuleSet,
    cart: Cart,
}

impl Checkout {
    /// Creates a checkout with the launch promotions.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Checkout {
            catalog,
            rules: default_rules(),
            cart: Cart::new(),
        }
    }

    /// Creates a checkout with a custom ordered rule set.
    ///
    /// ## Errors
    /// `InvalidRule` if any rule's parameters don't fit the catalog, e.g. a
    /// bulk price that is not below the catalog price.
    pub fn with_rules(catalog: Arc<Catalog>, rules: RuleSet) -> CoreResult<Self> {
        for rule in &rules {
            rule.validate(&catalog)?;
        }

        Ok(Checkout {
            catalog,
            rules,
            cart: Cart::new(),
        })
    }

    /// Scans one unit of a product.
    ///
    /// The SKU must match a catalog entry exactly; it is not trimmed or
    /// case-folded.
    ///
    /// ## Errors
    /// The cart is unchanged on error.
    /// - `UnknownSku` if the SKU is not in the catalog
    /// - `QuantityLimit` if `u32::MAX` units of it are already scanned
    pub fn scan(&mut self, sku: &str) -> CoreResult<()> {
        let product = self
            .catalog
            .get(sku)
            .ok_or_else(|| CoreError::UnknownSku(sku.to_string()))?;

        let quantity = self
            .cart
            .add_one(product.sku().clone())
            .ok_or_else(|| CoreError::QuantityLimit {
                sku: sku.to_string(),
                max: u32::MAX,
            })?;
        debug!(sku = %product.sku(), quantity, "Item scanned");

        Ok(())
    }

    /// Sum of unit price × quantity, before discounts.
    pub fn subtotal(&self) -> Money {
        self.cart
            .iter()
            .filter_map(|(sku, qty)| self.catalog.get(sku).map(|p| p.price() * qty))
            .sum()
    }

    /// Price to pay: subtotal minus every rule's discount.
    ///
    /// Amounts are whole cents throughout, so the result is already rounded
    /// to 2 decimal places. Calling this twice without a scan in between
    /// returns the same value.
    pub fn total(&self) -> Money {
        let discount: Money = self
            .applied_discounts()
            .iter()
            .map(|applied| applied.amount)
            .sum();
        let total = self.subtotal() - discount;

        debug!(%total, %discount, items = self.cart.item_count(), "Checkout total computed");
        total
    }

    /// Full price breakdown. Only rules that granted a discount are listed.
    pub fn summary(&self) -> CheckoutSummary {
        let discounts: Vec<AppliedDiscount> = self
            .applied_discounts()
            .into_iter()
            .filter(|applied| !applied.amount.is_zero())
            .collect();
        let discount_total: Money = discounts.iter().map(|applied| applied.amount).sum();
        let subtotal = self.subtotal();

        CheckoutSummary {
            item_count: self.cart.item_count(),
            total_quantity: self.cart.total_quantity(),
            subtotal,
            discounts,
            discount_total,
            total: subtotal - discount_total,
        }
    }

    /// Empties the cart. Catalog and rules are kept.
    pub fn clear(&mut self) {
        self.cart.clear();
    }

    /// Returns the scanned quantities.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Returns the catalog this checkout prices against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Runs every rule against the cart and the catalog subset for the
    /// SKUs in it.
    fn applied_discounts(&self) -> Vec<AppliedDiscount> {
        let products = self.catalog.subset(self.cart.skus());

        self.rules
            .iter()
            .map(|rule| AppliedDiscount {
                rule: rule.name(),
                amount: rule.calculate_discount(&self.cart, &products).non_negative(),
            })
            .collect()
    }
}

/// One rule's contribution to a checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedDiscount {
    pub rule: String,
    pub amount: Money,
}

/// Checkout totals summary for display and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub item_count: usize,
    pub total_quantity: u64,
    pub subtotal: Money,
    pub discounts: Vec<AppliedDiscount>,
    pub discount_total: Money,
    pub total: Money,
}
