//! Checkout CLI configuration.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. --config <PATH> (highest priority)                                 │
//! │  2. CHECKOUT_CONFIG environment variable                               │
//! │  3. Built-in launch catalog and promotions (lowest priority)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # checkout.toml
//! [[products]]
//! sku = "ipd"
//! name = "Super iPad"
//! price = 549.99
//!
//! [[rules]]
//! kind = "bulk_discount"
//! sku = "ipd"
//! min_quantity = 4
//! discounted_price = 499.99
//! ```
//!
//! Omitting `products` keeps the launch catalog; omitting `rules` keeps the
//! launch promotions. `rules = []` disables promotions.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use checkout_core::{default_rules, rules_from_config, Catalog, Product, RuleConfig, RuleSet, Sku};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "CHECKOUT_CONFIG";

/// A catalog entry as written in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub sku: Sku,
    pub name: String,
    pub price: f64,
}

/// Catalog and promotion overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Replaces the launch catalog when present.
    #[serde(default)]
    pub products: Option<Vec<ProductEntry>>,

    /// Replaces the launch promotions when present.
    #[serde(default)]
    pub rules: Option<Vec<RuleConfig>>,
}

impl CheckoutConfig {
    /// Loads configuration from the given path, falling back to
    /// `CHECKOUT_CONFIG`, then to the built-in defaults.
    pub fn load(config_path: Option<PathBuf>) -> CliResult<Self> {
        let path = config_path.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        match path {
            Some(path) => Self::from_file(&path),
            None => {
                debug!("No config file given, using launch catalog and promotions");
                Ok(Self::default())
            }
        }
    }

    /// Reads and parses a TOML config file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        info!(?path, "Loading checkout config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parses a TOML document.
    pub fn from_toml_str(contents: &str) -> CliResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Builds the catalog. Duplicate SKUs in the file are an error.
    pub fn catalog(&self) -> CliResult<Arc<Catalog>> {
        let Some(entries) = &self.products else {
            return Ok(Arc::new(Catalog::create_default()));
        };

        let products = entries
            .iter()
            .map(|entry| Product::from_decimal(entry.sku.clone(), entry.name.clone(), entry.price))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Arc::new(Catalog::try_from_products(products)?))
    }

    /// Builds a fresh rule set. Each checkout owns its own rules.
    pub fn rules(&self) -> CliResult<RuleSet> {
        match &self.rules {
            Some(configs) => Ok(rules_from_config(configs.iter().cloned())?),
            None => Ok(default_rules()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkout_core::{Checkout, CoreError, Money};

    const SAMPLE: &str = r#"
        [[products]]
        sku = "hdp"
        name = "Wireless Headphones"
        price = 199.99

        [[products]]
        sku = "cbl"
        name = "USB-C cable"
        price = 19.5

        [[rules]]
        kind = "bundle_free"
        trigger_sku = "hdp"
        bundled_sku = "cbl"
    "#;

    #[test]
    fn test_default_config_uses_launch_setup() {
        let config = CheckoutConfig::default();
        assert_eq!(config.catalog().unwrap().len(), 4);
        assert_eq!(config.rules().unwrap().len(), 3);
    }

    #[test]
    fn test_parses_products_and_rules() {
        let config = CheckoutConfig::from_toml_str(SAMPLE).unwrap();
        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.get("cbl").unwrap().price(), Money::from_cents(1950));

        let mut checkout = Checkout::with_rules(catalog, config.rules().unwrap()).unwrap();
        for sku in ["hdp", "cbl"] {
            checkout.scan(sku).unwrap();
        }
        assert_eq!(checkout.total(), Money::from_cents(19999));
    }

    #[test]
    fn test_empty_rules_disable_promotions() {
        let config = CheckoutConfig::from_toml_str("rules = []").unwrap();
        assert!(config.rules().unwrap().is_empty());
        assert_eq!(config.catalog().unwrap().len(), 4);
    }

    #[test]
    fn test_duplicate_products_rejected() {
        let toml = r#"
            [[products]]
            sku = "atv"
            name = "Apple TV"
            price = 109.5

            [[products]]
            sku = "atv"
            name = "Apple TV again"
            price = 99.0
        "#;
        let config = CheckoutConfig::from_toml_str(toml).unwrap();
        assert!(matches!(
            config.catalog(),
            Err(CliError::Core(CoreError::DuplicateSku { .. }))
        ));
    }

    #[test]
    fn test_invalid_product_price_rejected() {
        let toml = r#"
            [[products]]
            sku = "atv"
            name = "Apple TV"
            price = 0.0
        "#;
        let config = CheckoutConfig::from_toml_str(toml).unwrap();
        assert!(matches!(
            config.catalog(),
            Err(CliError::Core(CoreError::InvalidPrice { .. }))
        ));
    }

    #[test]
    fn test_malformed_sku_fails_to_parse() {
        let toml = r#"
            [[products]]
            sku = "bad sku"
            name = "Broken"
            price = 1.0
        "#;
        assert!(matches!(
            CheckoutConfig::from_toml_str(toml),
            Err(CliError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let path = std::env::temp_dir().join("checkout-cli-missing-config.toml");
        let err = CheckoutConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, CliError::ConfigRead { .. }));
        assert!(err.to_string().contains("checkout-cli-missing-config.toml"));
    }
}
