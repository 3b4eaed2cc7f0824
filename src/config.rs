//! Generation parameters.
//!
//! The defaults are the canonical dataset: running with `GeneratorConfig::default()`
//! always produces the same database. A YAML file may override the numeric
//! parameters; the category list and the table layout are fixed.

use crate::error::{Result, ShopgenError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_SEED: u64 = 100;
pub const NUM_CUSTOMERS: usize = 1000;
pub const NUM_PRODUCTS: usize = 300;
pub const NUM_ORDERS: usize = 1400;

pub const PRICE_MIN: f64 = 5.0;
pub const PRICE_MAX: f64 = 1000.0;

pub const MISSING_CONTACT_RATE: f64 = 0.02;
pub const DUPLICATE_CUSTOMER_RATE: f64 = 0.01;
pub const DUPLICATE_ORDER_RATE: f64 = 0.01;
pub const SHIPMENT_RATE: f64 = 0.8;

/// Default output file name.
pub const DB_FILENAME: &str = "ecommerce.db";

/// Birth dates are counted back from this day instead of the wall clock.
pub const REFERENCE_DATE: (i32, u32, u32) = (2025, 1, 1);

/// Tunable parameters of a generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub seed: u64,
    pub customers: usize,
    pub products: usize,
    pub orders: usize,
    pub price_min: f64,
    pub price_max: f64,
    pub missing_contact_rate: f64,
    pub duplicate_customer_rate: f64,
    pub duplicate_order_rate: f64,
    pub shipment_rate: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            seed: DEFAULT_SEED,
            customers: NUM_CUSTOMERS,
            products: NUM_PRODUCTS,
            orders: NUM_ORDERS,
            price_min: PRICE_MIN,
            price_max: PRICE_MAX,
            missing_contact_rate: MISSING_CONTACT_RATE,
            duplicate_customer_rate: DUPLICATE_CUSTOMER_RATE,
            duplicate_order_rate: DUPLICATE_ORDER_RATE,
            shipment_rate: SHIPMENT_RATE,
        }
    }
}

impl GeneratorConfig {
    /// Load overrides from a YAML file. Keys that are absent keep their defaults.
    ///
    /// # Example
    /// ```ignore
    /// let config = GeneratorConfig::load_from_file("shopgen.yaml")?;
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_yaml(&contents)?;
        tracing::debug!("Loaded generator config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config: GeneratorConfig = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject parameters that would produce an empty or inconsistent dataset.
    pub fn validate(&self) -> Result<()> {
        if self.customers == 0 || self.products == 0 || self.orders == 0 {
            return Err(ShopgenError::Config(
                "customers, products and orders must all be greater than zero".to_string(),
            ));
        }
        let finite = self.price_min.is_finite() && self.price_max.is_finite();
        if !(finite && self.price_min >= 0.0 && self.price_min <= self.price_max) {
            return Err(ShopgenError::Config(format!(
                "price bounds must be finite with 0 <= price_min <= price_max, got [{}, {}]",
                self.price_min, self.price_max
            )));
        }

        let rates = [
            ("missing_contact_rate", self.missing_contact_rate),
            ("duplicate_customer_rate", self.duplicate_customer_rate),
            ("duplicate_order_rate", self.duplicate_order_rate),
            ("shipment_rate", self.shipment_rate),
        ];
        for (name, rate) in rates {
            if !(0.0..=1.0).contains(&rate) {
                return Err(ShopgenError::Config(format!(
                    "{} must be within [0, 1], got {}",
                    name, rate
                )));
            }
        }

        Ok(())
    }

    /// Customers that lose one contact field.
    pub fn missing_contact_count(&self) -> usize {
        (self.missing_contact_rate * self.customers as f64).floor() as usize
    }

    /// Customers whose identity is overwritten by another row's.
    pub fn duplicate_customer_count(&self) -> usize {
        (self.duplicate_customer_rate * self.customers as f64).floor() as usize
    }

    /// Near-duplicate orders appended after the base batch; always at least one.
    pub fn duplicate_order_count(&self) -> usize {
        ((self.duplicate_order_rate * self.orders as f64).round() as usize).max(1)
    }

    pub fn reference_date(&self) -> NaiveDate {
        let (year, month, day) = REFERENCE_DATE;
        NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_counts() {
        let config = GeneratorConfig::default();
        assert_eq!(config.missing_contact_count(), 20);
        assert_eq!(config.duplicate_customer_count(), 10);
        assert_eq!(config.duplicate_order_count(), 14);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_duplicate_orders_at_least_one() {
        let config = GeneratorConfig {
            orders: 10,
            ..GeneratorConfig::default()
        };
        assert_eq!(config.duplicate_order_count(), 1);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = GeneratorConfig::from_yaml("seed: 7\ncustomers: 50\n").unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.customers, 50);
        assert_eq!(config.products, NUM_PRODUCTS);
        assert_eq!(config.price_max, PRICE_MAX);
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let result = GeneratorConfig::from_yaml("categories: 20\n");
        assert!(matches!(result, Err(ShopgenError::Yaml(_))));
    }

    #[test]
    fn test_rejects_bad_values() {
        let inverted = GeneratorConfig::from_yaml("price_min: 50\nprice_max: 10\n");
        assert!(matches!(inverted, Err(ShopgenError::Config(_))));

        let unbounded = GeneratorConfig::from_yaml("price_max: .inf\n");
        assert!(matches!(unbounded, Err(ShopgenError::Config(_))));

        let nan = GeneratorConfig::from_yaml("price_min: .nan\n");
        assert!(matches!(nan, Err(ShopgenError::Config(_))));

        let rate = GeneratorConfig::from_yaml("shipment_rate: 1.5\n");
        assert!(matches!(rate, Err(ShopgenError::Config(_))));

        let empty = GeneratorConfig::from_yaml("orders: 0\n");
        assert!(matches!(empty, Err(ShopgenError::Config(_))));
    }
}
