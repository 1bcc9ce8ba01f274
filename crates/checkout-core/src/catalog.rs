//! # Product Catalog
//!
//! Lookup table from SKU to [`Product`].
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Lifecycle                                    │
//! │                                                                         │
//! │  Startup                     Running                                    │
//! │  ───────                     ───────                                    │
//! │  Catalog::create_default()                                              │
//! │  or config file ───► Arc<Catalog> ───► Checkout #1  (read only)         │
//! │                            │                                            │
//! │                            └─────────► Checkout #2  (read only)         │
//! │                                                                         │
//! │  Writes (`add`) happen only while the catalog is still owned, before   │
//! │  it is shared. Once inside an `Arc` it can no longer change.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult};
use crate::types::{Product, Sku};

/// Launch day product line-up: (sku, name, price in cents).
const DEFAULT_PRODUCTS: [(&str, &str, i64); 4] = [
    ("ipd", "Super iPad", 54999),
    ("mbp", "MacBook Pro", 139999),
    ("atv", "Apple TV", 10950),
    ("vga", "VGA adapter", 3000),
];

static SHARED_DEFAULT: OnceLock<Arc<Catalog>> = OnceLock::new();

/// Products available for sale, keyed by SKU.
///
/// ## Invariants
/// - Each SKU appears at most once
/// - A rejected insert leaves the catalog unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    products: BTreeMap<Sku, Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Builds a catalog from a list of products, failing on the first
    /// duplicate SKU.
    pub fn try_from_products(products: impl IntoIterator<Item = Product>) -> CoreResult<Self> {
        let mut catalog = Catalog::new();
        for product in products {
            catalog.add(product)?;
        }
        Ok(catalog)
    }

    /// Creates the catalog with the launch products.
    ///
    /// ## Launch Products
    /// | SKU | Name        | Price    |
    /// |-----|-------------|----------|
    /// | ipd | Super iPad  | 549.99   |
    /// | mbp | MacBook Pro | 1399.99  |
    /// | atv | Apple TV    | 109.50   |
    /// | vga | VGA adapter | 30.00    |
    pub fn create_default() -> Self {
        let mut catalog = Catalog::new();
        catalog.seed(
            DEFAULT_PRODUCTS
                .iter()
                .map(|&(sku, name, cents)| Product::seeded(sku, name, cents)),
        );
        catalog
    }

    /// Returns the process-wide default catalog.
    ///
    /// Initialized once on first call and immutable afterwards. Prefer
    /// passing an explicit `Arc<Catalog>` in code that needs a custom
    /// product set.
    pub fn shared_default() -> Arc<Catalog> {
        SHARED_DEFAULT
            .get_or_init(|| Arc::new(Catalog::create_default()))
            .clone()
    }

    /// Adds a product.
    ///
    /// ## Errors
    /// `DuplicateSku` if a product with the same SKU exists. The existing
    /// entry is kept.
    pub fn add(&mut self, product: Product) -> CoreResult<()> {
        if self.products.contains_key(product.sku()) {
            return Err(CoreError::DuplicateSku {
                sku: product.sku().to_string(),
                name: product.name().to_string(),
            });
        }

        debug!(sku = %product.sku(), name = product.name(), "Product added to catalog");
        self.products.insert(product.sku().clone(), product);
        Ok(())
    }

    /// Looks up a product by SKU.
    pub fn get<Q>(&self, sku: &Q) -> Option<&Product>
    where
        Sku: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.products.get(sku)
    }

    /// Checks whether a SKU is in the catalog.
    pub fn contains<Q>(&self, sku: &Q) -> bool
    where
        Sku: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.products.contains_key(sku)
    }

    /// Returns the number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterates products in SKU order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Returns a catalog restricted to the given SKUs.
    ///
    /// Unknown SKUs are skipped.
    pub fn subset<'a>(&self, skus: impl IntoIterator<Item = &'a Sku>) -> Catalog {
        let products = skus
            .into_iter()
            .filter_map(|sku| self.products.get_key_value(sku))
            .map(|(sku, product)| (sku.clone(), product.clone()))
            .collect();

        Catalog { products }
    }

    /// Bootstrap insert that tolerates duplicate SKUs.
    ///
    /// Only the default catalog goes through here; `add` stays strict for
    /// every other caller. Returns the number of products inserted.
    fn seed(&mut self, products: impl IntoIterator<Item = Product>) -> usize {
        let mut inserted = 0;
        for product in products {
            match self.add(product) {
                Ok(()) => inserted += 1,
                Err(e) => warn!(error = %e, "Skipping product while seeding catalog"),
            }
        }
        inserted
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
