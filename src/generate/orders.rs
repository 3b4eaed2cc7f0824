//! Orders, their line items, and the near-duplicate resubmissions.

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::models::{Order, OrderItem, Product};
use crate::random::{round2, uniform_date_in_years};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

pub const ORDER_YEARS: (i32, i32) = (2021, 2024);

/// Three of the six slots carry no promo code.
pub const PROMO_CODES: [Option<&str>; 6] = [
    None,
    Some("NEW10"),
    Some("FREESHIP"),
    Some("SUMMER20"),
    None,
    None,
];

/// Line counts `1..=4` and their weights.
pub const ITEM_COUNT_WEIGHTS: [f64; 4] = [0.6, 0.25, 0.1, 0.05];

/// Half of all lines are undiscounted.
pub const DISCOUNTS: [f64; 4] = [0.0, 0.0, 0.05, 0.1];

pub const MAX_QUANTITY: i32 = 5;

/// Orders and items of one run, both in id order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderBatch {
    pub orders: Vec<Order>,
    pub items: Vec<OrderItem>,
}

impl OrderBatch {
    pub fn items_of(&self, order_id: i32) -> impl Iterator<Item = &OrderItem> {
        self.items.iter().filter(move |item| item.order_id == order_id)
    }
}

/// Generate `config.orders` base orders followed by
/// `config.duplicate_order_count()` near-duplicates, ids continuing in one
/// sequence from 1.
pub fn generate_orders<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GeneratorConfig,
    products: &[Product],
) -> Result<OrderBatch> {
    let item_counts = WeightedIndex::new(ITEM_COUNT_WEIGHTS)?;
    let (first_year, last_year) = ORDER_YEARS;
    let mut batch = OrderBatch::default();
    let mut next_id = 1;

    for _ in 0..config.orders {
        let order_id = next_id;
        next_id += 1;

        let customer_id = rng.gen_range(1..=config.customers as i32);
        let order_date = uniform_date_in_years(rng, first_year, last_year);
        let promo_code = PROMO_CODES[rng.gen_range(0..PROMO_CODES.len())].map(str::to_string);
        let n_items = item_counts.sample(rng) + 1;

        let mut order_total = 0.0;
        for item_no in 1..=n_items as i32 {
            let product = &products[rng.gen_range(0..products.len())];
            let quantity = rng.gen_range(1..=MAX_QUANTITY);
            let discount = DISCOUNTS[rng.gen_range(0..DISCOUNTS.len())];
            let line_total = round2(product.price * quantity as f64 * (1.0 - discount));
            order_total += line_total;

            batch.items.push(OrderItem {
                order_id,
                item_no,
                product_id: product.id,
                quantity,
                unit_price: product.price,
                line_total,
            });
        }

        batch.orders.push(Order {
            id: order_id,
            customer_id,
            order_date,
            order_total: round2(order_total),
            promo_code,
        });
    }

    for _ in 0..config.duplicate_order_count() {
        let order_id = next_id;
        next_id += 1;
        let (order, item) = near_duplicate(rng, &batch.orders, products, order_id);
        batch.orders.push(order);
        batch.items.push(item);
    }

    tracing::debug!(
        "Generated {} orders ({} near-duplicates) with {} items",
        batch.orders.len(),
        config.duplicate_order_count(),
        batch.items.len()
    );
    Ok(batch)
}

/// Resubmission of a random earlier order: same customer, date and promo code,
/// one undiscounted unit of a freshly drawn product.
fn near_duplicate<R: Rng + ?Sized>(
    rng: &mut R,
    existing: &[Order],
    products: &[Product],
    order_id: i32,
) -> (Order, OrderItem) {
    let source = &existing[rng.gen_range(0..existing.len())];
    let product = &products[rng.gen_range(0..products.len())];
    let line_total = round2(product.price);

    let order = Order {
        id: order_id,
        customer_id: source.customer_id,
        order_date: source.order_date,
        order_total: line_total,
        promo_code: source.promo_code.clone(),
    };
    let item = OrderItem {
        order_id,
        item_no: 1,
        product_id: product.id,
        quantity: 1,
        unit_price: product.price,
        line_total,
    };
    (order, item)
}
