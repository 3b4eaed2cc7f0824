//! In-memory dataset generation.
//!
//! Each stage takes the run's generator explicitly and consumes the output of
//! the stages before it:
//!
//! 1. categories (fixed list, no randomness)
//! 2. products
//! 3. customers, with missing-contact and duplicate-identity noise
//! 4. orders and order items, with near-duplicate orders appended
//! 5. shipments
//!
//! Nothing touches the database here; see [`crate::pipeline`] for persistence.

pub mod categories;
pub mod customers;
pub mod orders;
pub mod products;
pub mod shipments;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::models::{Category, Customer, Order, OrderItem, Product, Shipment};
use crate::random::seeded;
use rand::Rng;

pub use categories::{reference_categories, CATEGORY_NAMES};
pub use customers::generate_customers;
pub use orders::{generate_orders, OrderBatch};
pub use products::generate_products;
pub use shipments::{generate_shipments, DelayModel};

/// All rows of one run, each table in id order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub customers: Vec<Customer>,
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
    pub shipments: Vec<Shipment>,
}

impl Dataset {
    /// Run every stage with a generator seeded from `config.seed`.
    pub fn generate(config: &GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = seeded(config.seed);
        Self::generate_with(&mut rng, config)
    }

    /// Run every stage with a caller-supplied generator.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, config: &GeneratorConfig) -> Result<Self> {
        let categories = reference_categories();
        let products = generate_products(rng, config);
        let customers = generate_customers(rng, config)?;
        let OrderBatch { orders, items } = generate_orders(rng, config, &products)?;
        let shipments = generate_shipments(rng, config, &orders)?;

        let dataset = Dataset {
            categories,
            products,
            customers,
            orders,
            order_items: items,
            shipments,
        };
        tracing::info!(
            "Generated dataset: {} products, {} customers, {} orders, {} items, {} shipments",
            dataset.products.len(),
            dataset.customers.len(),
            dataset.orders.len(),
            dataset.order_items.len(),
            dataset.shipments.len()
        );
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_dataset() {
        let config = GeneratorConfig::default();
        let first = Dataset::generate(&config).unwrap();
        let second = Dataset::generate(&config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seed_different_dataset() {
        let first = Dataset::generate(&GeneratorConfig::default()).unwrap();
        let second = Dataset::generate(&GeneratorConfig {
            seed: 101,
            ..GeneratorConfig::default()
        })
        .unwrap();
        assert_ne!(first.customers, second.customers);
    }

    #[test]
    fn test_foreign_keys_resolve_in_memory() {
        let dataset = Dataset::generate(&GeneratorConfig::default()).unwrap();
        let customers = dataset.customers.len() as i32;
        let products = dataset.products.len() as i32;
        let orders = dataset.orders.len() as i32;

        assert!(dataset.products.iter().all(|p| (1..=12).contains(&p.category_id)));
        assert!(dataset.orders.iter().all(|o| (1..=customers).contains(&o.customer_id)));
        assert!(dataset
            .order_items
            .iter()
            .all(|i| (1..=orders).contains(&i.order_id) && (1..=products).contains(&i.product_id)));
        assert!(dataset.shipments.iter().all(|s| (1..=orders).contains(&s.order_id)));
    }

    #[test]
    fn test_invalid_config_rejected_before_generation() {
        let config = GeneratorConfig {
            customers: 0,
            ..GeneratorConfig::default()
        };
        assert!(Dataset::generate(&config).is_err());
    }
}
