//! Shipment records and the shipping delay model.

use crate::config::GeneratorConfig;
use crate::entity::Carrier;
use crate::error::Result;
use crate::faker;
use crate::models::{Order, Shipment};
use chrono::{Duration, NaiveDate};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

/// Delay buckets: on time, late, lost.
pub const DELAY_WEIGHTS: [f64; 3] = [0.8, 0.15, 0.05];
pub const ON_TIME_DAYS: (i64, i64) = (0, 10);
pub const LATE_DAYS: (i64, i64) = (11, 20);

/// Moves a date forward by a random shipping delay, or loses it.
#[derive(Debug, Clone)]
pub struct DelayModel {
    buckets: WeightedIndex<f64>,
}

impl DelayModel {
    pub fn new() -> Result<Self> {
        Ok(DelayModel {
            buckets: WeightedIndex::new(DELAY_WEIGHTS)?,
        })
    }

    /// `None` when the parcel is lost at this step.
    pub fn apply<R: Rng + ?Sized>(&self, rng: &mut R, from: NaiveDate) -> Option<NaiveDate> {
        let (low, high) = match self.buckets.sample(rng) {
            0 => ON_TIME_DAYS,
            1 => LATE_DAYS,
            _ => return None,
        };
        Some(from + Duration::days(rng.gen_range(low..=high)))
    }
}

/// Attach at most one shipment to each order, in order-id sequence.
///
/// Shipment ids are sequential from 1. The delivery date is the delay model
/// applied to the shipped date, so it is never earlier and is absent whenever
/// the shipped date is.
pub fn generate_shipments<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GeneratorConfig,
    orders: &[Order],
) -> Result<Vec<Shipment>> {
    let delays = DelayModel::new()?;
    let mut shipments = Vec::new();

    for order in orders {
        if !rng.gen_bool(config.shipment_rate) {
            continue;
        }

        let shipped_date = delays.apply(rng, order.order_date);
        let delivery_date = shipped_date.and_then(|shipped| delays.apply(rng, shipped));
        let carrier = Carrier::ALL[rng.gen_range(0..Carrier::ALL.len())];
        let tracking_number = faker::tracking_number(rng);

        shipments.push(Shipment {
            id: shipments.len() as i32 + 1,
            order_id: order.id,
            shipped_date,
            delivery_date,
            carrier,
            tracking_number,
        });
    }

    tracing::debug!(
        "Generated {} shipments for {} orders",
        shipments.len(),
        orders.len()
    );
    Ok(shipments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{seeded, ymd};

    fn orders(count: i32) -> Vec<Order> {
        (1..=count)
            .map(|id| Order {
                id,
                customer_id: 1,
                order_date: ymd(2023, 3, 1),
                order_total: 10.0,
                promo_code: None,
            })
            .collect()
    }

    #[test]
    fn test_delay_model_ranges() {
        let model = DelayModel::new().unwrap();
        let mut rng = seeded(4);
        let start = ymd(2022, 1, 1);
        let mut lost = 0;
        for _ in 0..10_000 {
            match model.apply(&mut rng, start) {
                Some(date) => {
                    let days = (date - start).num_days();
                    assert!((0..=20).contains(&days));
                }
                None => lost += 1,
            }
        }
        assert!((350..650).contains(&lost), "lost = {}", lost);
    }

    #[test]
    fn test_shipment_dates_are_ordered() {
        let config = GeneratorConfig::default();
        let mut rng = seeded(config.seed);
        let orders = orders(2_000);
        let shipments = generate_shipments(&mut rng, &config, &orders).unwrap();

        for (idx, shipment) in shipments.iter().enumerate() {
            assert_eq!(shipment.id, idx as i32 + 1);
            if let Some(delivered) = shipment.delivery_date {
                let shipped = shipment.shipped_date.expect("delivery without shipping");
                assert!(delivered >= shipped);
            }
            if let Some(shipped) = shipment.shipped_date {
                assert!(shipped >= ymd(2023, 3, 1));
            }
        }
    }

    #[test]
    fn test_at_most_one_shipment_per_order() {
        let config = GeneratorConfig::default();
        let mut rng = seeded(8);
        let orders = orders(2_000);
        let shipments = generate_shipments(&mut rng, &config, &orders).unwrap();

        let mut order_ids: Vec<i32> = shipments.iter().map(|s| s.order_id).collect();
        let total = order_ids.len();
        order_ids.dedup();
        assert_eq!(order_ids.len(), total);
        assert!((1_500..1_700).contains(&total), "shipments = {}", total);
    }

    #[test]
    fn test_shipment_rate_extremes() {
        let orders = orders(100);
        let mut rng = seeded(1);

        let never = GeneratorConfig {
            shipment_rate: 0.0,
            ..GeneratorConfig::default()
        };
        assert!(generate_shipments(&mut rng, &never, &orders).unwrap().is_empty());

        let always = GeneratorConfig {
            shipment_rate: 1.0,
            ..GeneratorConfig::default()
        };
        assert_eq!(generate_shipments(&mut rng, &always, &orders).unwrap().len(), 100);
    }
}
