//! Product catalog.

use super::categories::CATEGORY_NAMES;
use crate::config::GeneratorConfig;
use crate::faker;
use crate::models::Product;
use crate::random::round2;
use rand::Rng;

pub const MAX_STOCK: i32 = 500;

/// Build the catalog with ids `1..=config.products`. Later stages sample
/// line items from the returned slice.
pub fn generate_products<R: Rng + ?Sized>(rng: &mut R, config: &GeneratorConfig) -> Vec<Product> {
    let category_count = CATEGORY_NAMES.len() as i32;

    let products: Vec<Product> = (1..=config.products as i32)
        .map(|id| {
            let category_id = rng.gen_range(1..=category_count);
            let name = faker::product_name(rng);
            let price = round2(rng.gen_range(config.price_min..=config.price_max));
            let stock = rng.gen_range(0..=MAX_STOCK);
            Product {
                id,
                name,
                category_id,
                price,
                stock,
            }
        })
        .collect();

    tracing::debug!("Generated {} products", products.len());
    products
}
