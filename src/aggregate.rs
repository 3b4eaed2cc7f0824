//! Customer spend aggregation.
//!
//! `Customers.total_spent` is written as 0 and later rewritten from the stored
//! orders, so the value always reflects what is actually in the database.

use crate::diesel_runtime::DbConnection;
use crate::error::Result;
use crate::random::round2;
use crate::schema::{customers, orders};
use diesel::dsl::sum;
use diesel::prelude::*;

/// Sum `order_total` per customer and write the rounded result back.
///
/// Customers without orders are left at their stored value (0 after a fresh
/// run). Returns the number of customers updated.
pub fn recompute_total_spent(conn: &mut DbConnection) -> Result<usize> {
    let totals: Vec<(i32, Option<f64>)> = orders::table
        .group_by(orders::customer_id)
        .select((orders::customer_id, sum(orders::order_total)))
        .load(conn)?;

    let updated = conn.transaction::<_, diesel::result::Error, _>(|conn| {
        let mut updated = 0;
        for (customer_id, total) in &totals {
            updated += diesel::update(customers::table.find(customer_id))
                .set(customers::total_spent.eq(round2(total.unwrap_or(0.0))))
                .execute(conn)?;
        }
        Ok(updated)
    })?;

    tracing::info!("Updated total_spent for {} customers", updated);
    Ok(updated)
}
