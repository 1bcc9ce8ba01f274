//! # checkout-core: Pricing Engine for the Checkout
//!
//! This crate is the **heart** of the checkout. It contains the catalog,
//! the cart and the promotional pricing rules as pure code with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 checkout-cli (apps/checkout-cli)                │   │
//! │  │     args / TOML config ──► scan SKUs ──► print totals          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ checkout-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │  types   │ │ catalog  │ │   cart   │ │     pricing      │  │   │
//! │  │   │ Sku      │ │ Catalog  │ │ Cart     │ │ BuyXGetYFree     │  │   │
//! │  │   │ Product  │ │ defaults │ │          │ │ BulkDiscount     │  │   │
//! │  │   │          │ │          │ │          │ │ BundleFree       │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL MUTABLE STATE • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Sku, Product)
//! - [`money`] - Money type with integer arithmetic
//! - [`catalog`] - Product lookup and the launch catalog
//! - [`cart`] - Scanned quantities
//! - [`pricing`] - Pricing rule trait and the promotions
//! - [`checkout`] - Scanning and totals
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{Catalog, Checkout, Money};
//!
//! let mut checkout = Checkout::new(Catalog::shared_default());
//! for sku in ["atv", "atv", "atv", "vga"] {
//!     checkout.scan(sku).unwrap();
//! }
//!
//! // 3 for 2 on Apple TVs
//! assert_eq!(checkout.total(), Money::from_cents(24900));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use catalog::Catalog;
pub use checkout::{AppliedDiscount, Checkout, CheckoutSummary};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{
    default_rules, rules_from_config, BulkDiscount, BundleFree, BuyXGetYFree, PricingRule,
    RuleConfig, RuleSet,
};
pub use types::{Product, Sku};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum SKU length in characters.
pub const MAX_SKU_LENGTH: usize = 50;
