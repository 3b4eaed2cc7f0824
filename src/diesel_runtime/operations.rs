//! Bulk insert for the store row types.

use super::database::DbConnection;
use crate::entity::Entity;
use crate::models::{Category, Customer, Order, OrderItem, Product, Shipment};
use crate::schema;
use diesel::prelude::*;
use diesel::result::Error as DieselError;

/// Rows per INSERT statement.
pub const BATCH_SIZE: usize = 500;

/// Insert many rows of one table.
pub trait BulkInsert: Entity + Sized {
    /// Insert `rows` with a single statement.
    fn insert_batch(conn: &mut DbConnection, rows: &[Self]) -> Result<usize, DieselError>;

    /// Insert all `rows` in chunks of [`BATCH_SIZE`] inside one transaction.
    /// Any failing chunk rolls back the whole table.
    fn bulk_insert(conn: &mut DbConnection, rows: &[Self]) -> Result<usize, DieselError> {
        conn.transaction(|conn| {
            let mut inserted = 0;
            for chunk in rows.chunks(BATCH_SIZE) {
                inserted += Self::insert_batch(conn, chunk)?;
            }
            tracing::debug!("Inserted {} rows into {}", inserted, Self::NAME);
            Ok(inserted)
        })
    }
}

macro_rules! impl_bulk_insert {
    ($($model:ty => $table:path),+ $(,)?) => {
        $(
            impl BulkInsert for $model {
                fn insert_batch(conn: &mut DbConnection, rows: &[Self]) -> Result<usize, DieselError> {
                    diesel::insert_into($table).values(rows).execute(conn)
                }
            }
        )+
    };
}

impl_bulk_insert! {
    Category => schema::categories::table,
    Product => schema::products::table,
    Customer => schema::customers::table,
    Order => schema::orders::table,
    OrderItem => schema::order_items::table,
    Shipment => schema::shipments::table,
}
