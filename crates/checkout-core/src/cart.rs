//! # Cart
//!
//! Quantities of each scanned SKU for a single checkout.
//!
//! The cart only knows SKUs and counts. Prices stay in the [`Catalog`] so a
//! rule always sees the current unit price.
//!
//! [`Catalog`]: crate::catalog::Catalog

use std::borrow::Borrow;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::Sku;

/// Scanned quantities keyed by SKU.
///
/// ## Invariants
/// - Every stored quantity is > 0
/// - Iteration is in SKU order, so totals are computed in a fixed order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    quantities: BTreeMap<Sku, u32>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Increments the quantity for a SKU by one and returns the new quantity.
    ///
    /// Returns `None`, leaving the cart unchanged, when the quantity is
    /// already `u32::MAX`.
    pub fn add_one(&mut self, sku: Sku) -> Option<u32> {
        let qty = self.quantities.entry(sku).or_insert(0);
        *qty = qty.checked_add(1)?;
        Some(*qty)
    }

    /// Returns the quantity for a SKU, zero if never scanned.
    pub fn quantity<Q>(&self, sku: &Q) -> u32
    where
        Sku: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.quantities.get(sku).copied().unwrap_or(0)
    }

    /// Iterates `(sku, quantity)` pairs in SKU order.
    pub fn iter(&self) -> impl Iterator<Item = (&Sku, u32)> {
        self.quantities.iter().map(|(sku, qty)| (sku, *qty))
    }

    /// Iterates the SKUs present in the cart.
    pub fn skus(&self) -> impl Iterator<Item = &Sku> {
        self.quantities.keys()
    }

    /// Returns the number of distinct SKUs.
    pub fn item_count(&self) -> usize {
        self.quantities.len()
    }

    /// Returns the total number of scanned units.
    pub fn total_quantity(&self) -> u64 {
        self.quantities.values().map(|&q| u64::from(q)).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.quantities.clear();
    }
}

/// Builds a cart from `(sku, quantity)` pairs. Zero quantities are dropped
/// and repeated SKUs accumulate.
impl FromIterator<(Sku, u32)> for Cart {
    fn from_iter<I: IntoIterator<Item = (Sku, u32)>>(iter: I) -> Self {
        let mut cart = Cart::new();
        for (sku, qty) in iter.into_iter().filter(|(_, qty)| *qty > 0) {
            let entry = cart.quantities.entry(sku).or_insert(0);
            *entry = entry.saturating_add(qty);
        }
        cart
    }
}
