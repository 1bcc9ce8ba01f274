//! # Pricing Rules
//!
//! Promotional discount strategies applied at checkout.
//!
//! ## How Rules Compose
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Discount Pipeline                                    │
//! │                                                                         │
//! │   Cart (sku → qty) ──┬──► BuyXGetYFree(atv, 3, 1)   ──► $109.50 ─┐      │
//! │   Catalog subset ────┼──► BulkDiscount(ipd, 4, 499.99) ─► $0.00 ─┼─► Σ  │
//! │                      └──► BundleFree(mbp, vga)      ──► $30.00 ──┘      │
//! │                                                                         │
//! │   Every rule is a pure function of (cart, catalog).                     │
//! │   Discounts are summed unconditionally: no ordering, no exclusivity.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A rule whose product is missing from the catalog contributes nothing
//! rather than failing, so `Checkout::total` can never error.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Sku;

/// Ordered set of rules owned by a checkout.
pub type RuleSet = Vec<Box<dyn PricingRule>>;

// =============================================================================
// PricingRule Trait
// =============================================================================

/// A discount strategy.
///
/// Implementations hold only their fixed parameters and must not keep any
/// state between calls.
pub trait PricingRule: fmt::Debug + Send + Sync {
    /// Short human-readable description, used in checkout summaries.
    fn name(&self) -> String;

    /// Computes the discount for the current cart.
    ///
    /// `products` holds at least every product in the cart. The returned
    /// amount is never negative.
    fn calculate_discount(&self, cart: &Cart, products: &Catalog) -> Money;

    /// Checks the rule's parameters against the catalog it will run with.
    fn validate(&self, _catalog: &Catalog) -> CoreResult<()> {
        Ok(())
    }
}

// =============================================================================
// Buy X Get Y Free
// =============================================================================

/// Multi-buy deal: for every `buy_quantity` units scanned, `free_quantity`
/// of them are free ("3 for 2" is `buy 3, free 1`).
///
/// The free units are counted inside each set of `buy_quantity`, so
/// [`BuyXGetYFree::new`] requires `0 < free_quantity < buy_quantity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyXGetYFree {
    sku: Sku,
    buy_quantity: u32,
    free_quantity: u32,
}

impl BuyXGetYFree {
    /// Creates the rule.
    ///
    /// ## Errors
    /// `InvalidRule` unless `0 < free_quantity < buy_quantity`.
    pub fn new(sku: Sku, buy_quantity: u32, free_quantity: u32) -> CoreResult<Self> {
        let rule = BuyXGetYFree {
            sku,
            buy_quantity,
            free_quantity,
        };

        if buy_quantity == 0 {
            return Err(CoreError::invalid_rule(rule.name(), "buy quantity must be positive"));
        }
        if free_quantity == 0 {
            return Err(CoreError::invalid_rule(rule.name(), "free quantity must be positive"));
        }
        if free_quantity >= buy_quantity {
            return Err(CoreError::invalid_rule(
                rule.name(),
                "free quantity must be smaller than buy quantity",
            ));
        }

        Ok(rule)
    }
}

impl PricingRule for BuyXGetYFree {
    fn name(&self) -> String {
        format!(
            "buy {} get {} free ({})",
            self.buy_quantity, self.free_quantity, self.sku
        )
    }

    fn calculate_discount(&self, cart: &Cart, products: &Catalog) -> Money {
        let quantity = cart.quantity(&self.sku);
        if quantity < self.buy_quantity {
            return Money::zero();
        }

        let Some(product) = products.get(&self.sku) else {
            return Money::zero();
        };

        let sets = i64::from(quantity / self.buy_quantity);
        let free_items = sets * i64::from(self.free_quantity);

        product.price() * free_items
    }
}

// =============================================================================
// Bulk Discount
// =============================================================================

/// Bulk price drop: buying strictly more than `min_quantity` units reprices
/// every unit at `discounted_price`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkDiscount {
    sku: Sku,
    min_quantity: u32,
    discounted_price: Money,
}

impl BulkDiscount {
    /// Creates the rule. The threshold is exclusive.
    ///
    /// ## Errors
    /// `InvalidRule` if `discounted_price` is not positive.
    pub fn new(sku: Sku, min_quantity: u32, discounted_price: Money) -> CoreResult<Self> {
        let rule = BulkDiscount {
            sku,
            min_quantity,
            discounted_price,
        };

        if !discounted_price.is_positive() {
            return Err(CoreError::invalid_rule(
                rule.name(),
                "discounted price must be positive",
            ));
        }

        Ok(rule)
    }
}

impl PricingRule for BulkDiscount {
    fn name(&self) -> String {
        format!(
            "more than {} at {} each ({})",
            self.min_quantity, self.discounted_price, self.sku
        )
    }

    fn calculate_discount(&self, cart: &Cart, products: &Catalog) -> Money {
        let quantity = cart.quantity(&self.sku);
        if quantity <= self.min_quantity {
            return Money::zero();
        }

        let Some(product) = products.get(&self.sku) else {
            return Money::zero();
        };

        ((product.price() - self.discounted_price) * quantity).non_negative()
    }

    /// The discounted price has to undercut the catalog price.
    fn validate(&self, catalog: &Catalog) -> CoreResult<()> {
        match catalog.get(&self.sku) {
            Some(product) if self.discounted_price >= product.price() => {
                Err(CoreError::invalid_rule(
                    self.name(),
                    format!(
                        "discounted price must be below the catalog price {}",
                        product.price()
                    ),
                ))
            }
            _ => Ok(()),
        }
    }
}

// =============================================================================
// Bundle Free
// =============================================================================

/// Each unit of `trigger` makes one unit of `bundled` free, capped by how
/// many bundled units were actually scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleFree {
    trigger: Sku,
    bundled: Sku,
}

impl BundleFree {
    /// Creates the rule.
    ///
    /// ## Errors
    /// `InvalidRule` if both SKUs are the same.
    pub fn new(trigger: Sku, bundled: Sku) -> CoreResult<Self> {
        let rule = BundleFree { trigger, bundled };

        if rule.trigger == rule.bundled {
            return Err(CoreError::invalid_rule(
                rule.name(),
                "trigger and bundled SKU must differ",
            ));
        }

        Ok(rule)
    }
}

impl PricingRule for BundleFree {
    fn name(&self) -> String {
        format!("free {} with every {}", self.bundled, self.trigger)
    }

    fn calculate_discount(&self, cart: &Cart, products: &Catalog) -> Money {
        let trigger_quantity = cart.quantity(&self.trigger);
        if trigger_quantity == 0 {
            return Money::zero();
        }

        let Some(bundled) = products.get(&self.bundled) else {
            return Money::zero();
        };

        let free_items = trigger_quantity.min(cart.quantity(&self.bundled));

        bundled.price() * free_items
    }
}

// =============================================================================
// Declarative Configuration
// =============================================================================

/// Serializable description of a rule, as written in a config file.
///
/// ## Example (TOML)
/// ```toml
/// [[rules]]
/// kind = "buy_x_get_y_free"
/// sku = "atv"
/// buy_quantity = 3
/// free_quantity = 1
///
/// [[rules]]
/// kind = "bulk_discount"
/// sku = "ipd"
/// min_quantity = 4
/// discounted_price = 499.99
///
/// [[rules]]
/// kind = "bundle_free"
/// trigger_sku = "mbp"
/// bundled_sku = "vga"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleConfig {
    BuyXGetYFree {
        sku: Sku,
        buy_quantity: u32,
        free_quantity: u32,
    },
    BulkDiscount {
        sku: Sku,
        min_quantity: u32,
        discounted_price: f64,
    },
    BundleFree {
        trigger_sku: Sku,
        bundled_sku: Sku,
    },
}

impl RuleConfig {
    /// Builds the rule described by this config.
    pub fn into_rule(self) -> CoreResult<Box<dyn PricingRule>> {
        let rule: Box<dyn PricingRule> = match self {
            RuleConfig::BuyXGetYFree {
                sku,
                buy_quantity,
                free_quantity,
            } => Box::new(BuyXGetYFree::new(sku, buy_quantity, free_quantity)?),
            RuleConfig::BulkDiscount {
                sku,
                min_quantity,
                discounted_price,
            } => {
                let price = Money::from_decimal(discounted_price).ok_or_else(|| {
                    CoreError::invalid_rule(
                        format!("bulk discount ({sku})"),
                        format!("discounted price {discounted_price} is not a valid amount"),
                    )
                })?;
                Box::new(BulkDiscount::new(sku, min_quantity, price)?)
            }
            RuleConfig::BundleFree {
                trigger_sku,
                bundled_sku,
            } => Box::new(BundleFree::new(trigger_sku, bundled_sku)?),
        };

        Ok(rule)
    }
}

/// Builds every rule in order, failing on the first invalid one.
pub fn rules_from_config(configs: impl IntoIterator<Item = RuleConfig>) -> CoreResult<RuleSet> {
    configs.into_iter().map(RuleConfig::into_rule).collect()
}

// =============================================================================
// Launch Promotions
// =============================================================================

/// The launch promotions.
///
/// - 3 for 2 on Apple TVs
/// - Super iPad drops to 499.99 each when buying more than 4
/// - Free VGA adapter with every MacBook Pro
pub fn default_rules() -> RuleSet {
    vec![
        Box::new(BuyXGetYFree {
            sku: Sku::from_static("atv"),
            buy_quantity: 3,
            free_quantity: 1,
        }),
        Box::new(BulkDiscount {
            sku: Sku::from_static("ipd"),
            min_quantity: 4,
            discounted_price: Money::from_cents(49999),
        }),
        Box::new(BundleFree {
            trigger: Sku::from_static("mbp"),
            bundled: Sku::from_static("vga"),
        }),
    ]
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

    fn cart(items: &[(&str, u32)]) -> Cart {
        items.iter().map(|&(s, q)| (sku(s), q)).collect()
    }

    fn apple_tv_deal() -> BuyXGetYFree {
        BuyXGetYFree::new(sku("atv"), 3, 1).unwrap()
    }

    fn ipad_bulk() -> BulkDiscount {
        BulkDiscount::new(sku("ipd"), 4, Money::from_cents(49999)).unwrap()
    }

    fn vga_bundle() -> BundleFree {
        BundleFree::new(sku("mbp"), sku("vga")).unwrap()
    }

    #[test]
    fn test_buy_x_get_y_free() {
        let catalog = Catalog::create_default();
        let rule = apple_tv_deal();

        assert_eq!(rule.calculate_discount(&cart(&[("atv", 2)]), &catalog), Money::zero());
        assert_eq!(
            rule.calculate_discount(&cart(&[("atv", 3)]), &catalog),
            Money::from_cents(10950)
        );
        assert_eq!(
            rule.calculate_discount(&cart(&[("atv", 5)]), &catalog),
            Money::from_cents(10950)
        );
        assert_eq!(
            rule.calculate_discount(&cart(&[("atv", 6)]), &catalog),
            Money::from_cents(21900)
        );
    }

    #[test]
    fn test_buy_x_get_y_free_inert_without_product() {
        let rule = apple_tv_deal();
        let discount = rule.calculate_discount(&cart(&[("atv", 9)]), &Catalog::new());
        assert_eq!(discount, Money::zero());
    }

    #[test]
    fn test_buy_x_get_y_free_rejects_bad_quantities() {
        assert!(BuyXGetYFree::new(sku("atv"), 0, 1).is_err());
        assert!(BuyXGetYFree::new(sku("atv"), 3, 0).is_err());
        assert!(BuyXGetYFree::new(sku("atv"), 2, 2).is_err());
    }

    #[test]
    fn test_bulk_discount_threshold_is_exclusive() {
        let catalog = Catalog::create_default();
        let rule = ipad_bulk();

        assert_eq!(rule.calculate_discount(&cart(&[("ipd", 4)]), &catalog), Money::zero());
        // 5 × (549.99 − 499.99)
        assert_eq!(
            rule.calculate_discount(&cart(&[("ipd", 5)]), &catalog),
            Money::from_cents(25000)
        );
    }

    #[test]
    fn test_bulk_discount_inert_without_product() {
        let rule = ipad_bulk();
        let discount = rule.calculate_discount(&cart(&[("ipd", 10)]), &Catalog::new());
        assert_eq!(discount, Money::zero());
    }

    #[test]
    fn test_bulk_discount_validate_against_catalog() {
        let catalog = Catalog::create_default();
        assert!(ipad_bulk().validate(&catalog).is_ok());

        let too_expensive = BulkDiscount::new(sku("ipd"), 4, Money::from_cents(54999)).unwrap();
        assert!(matches!(
            too_expensive.validate(&catalog),
            Err(CoreError::InvalidRule { .. })
        ));
        // Misconfigured rules still never produce a negative discount
        assert_eq!(
            too_expensive.calculate_discount(&cart(&[("ipd", 5)]), &catalog),
            Money::zero()
        );

        assert!(BulkDiscount::new(sku("ipd"), 4, Money::zero()).is_err());
    }

    #[test]
    fn test_bundle_free() {
        let catalog = Catalog::create_default();
        let rule = vga_bundle();

        assert_eq!(
            rule.calculate_discount(&cart(&[("mbp", 1), ("vga", 1)]), &catalog),
            Money::from_cents(3000)
        );
        assert_eq!(rule.calculate_discount(&cart(&[("mbp", 1)]), &catalog), Money::zero());
        assert_eq!(
            rule.calculate_discount(&cart(&[("mbp", 2), ("vga", 1)]), &catalog),
            Money::from_cents(3000)
        );
        assert_eq!(rule.calculate_discount(&cart(&[("vga", 3)]), &catalog), Money::zero());
    }

    #[test]
    fn test_bundle_free_rejects_self_bundle() {
        assert!(BundleFree::new(sku("mbp"), sku("mbp")).is_err());
    }

    #[test]
    fn test_default_rules_match_validated_constructors() {
        let rules = default_rules();
        assert_eq!(rules.len(), 3);

        let expected = [
            apple_tv_deal().name(),
            ipad_bulk().name(),
            vga_bundle().name(),
        ];
        let names: Vec<String> = rules.iter().map(|r| r.name()).collect();
        assert_eq!(names, expected);

        let catalog = Catalog::create_default();
        for rule in &rules {
            assert!(rule.validate(&catalog).is_ok());
        }
    }

    #[test]
    fn test_rule_config_from_toml_shape() {
        let json = r#"[
            {"kind": "buy_x_get_y_free", "sku": "atv", "buy_quantity": 3, "free_quantity": 1},
            {"kind": "bulk_discount", "sku": "ipd", "min_quantity": 4, "discounted_price": 499.99},
            {"kind": "bundle_free", "trigger_sku": "mbp", "bundled_sku": "vga"}
        ]"#;
        let configs: Vec<RuleConfig> = serde_json::from_str(json).unwrap();
        let rules = rules_from_config(configs).unwrap();

        let catalog = Catalog::create_default();
        let five_ipads = cart(&[("ipd", 5)]);
        assert_eq!(
            rules[1].calculate_discount(&five_ipads, &catalog),
            Money::from_cents(25000)
        );
    }

    #[test]
    fn test_rule_config_rejects_invalid_rules() {
        let config = RuleConfig::BulkDiscount {
            sku: sku("ipd"),
            min_quantity: 4,
            discounted_price: f64::NAN,
        };
        assert!(matches!(config.into_rule(), Err(CoreError::InvalidRule { .. })));

        let config = RuleConfig::BuyXGetYFree {
            sku: sku("atv"),
            buy_quantity: 0,
            free_quantity: 1,
        };
        assert!(config.into_rule().is_err());
    }
}
