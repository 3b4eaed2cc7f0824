//! End-to-end run: generate, persist in dependency order, aggregate, count.

use crate::aggregate::recompute_total_spent;
use crate::config::GeneratorConfig;
use crate::dependency_graph::{insertion_order, store_tables};
use crate::diesel_runtime::{BulkInsert, Database, DbConnection};
use crate::entity::Entity;
use crate::error::{Result, ShopgenError};
use crate::generate::Dataset;
use crate::models::{Category, Customer, Order, OrderItem, Product, Shipment};
use crate::schema;
use diesel::prelude::*;
use indexmap::IndexMap;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Outcome of a run: row count per table (in insertion order) and the file written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub database: PathBuf,
    pub row_counts: IndexMap<String, i64>,
}

impl RunSummary {
    pub fn count(&self, table: &str) -> Option<i64> {
        self.row_counts.get(table).copied()
    }
}

/// Insert every table of `dataset` in foreign-key order, then rewrite
/// `Customers.total_spent` from the stored orders.
///
/// The first failing table aborts the run; tables written before it stay
/// committed.
pub fn write_dataset(conn: &mut DbConnection, dataset: &Dataset) -> Result<()> {
    for table in insertion_order(&store_tables())? {
        let inserted = match table {
            Category::NAME => Category::bulk_insert(conn, &dataset.categories)?,
            Product::NAME => Product::bulk_insert(conn, &dataset.products)?,
            Customer::NAME => Customer::bulk_insert(conn, &dataset.customers)?,
            Order::NAME => Order::bulk_insert(conn, &dataset.orders)?,
            OrderItem::NAME => OrderItem::bulk_insert(conn, &dataset.order_items)?,
            Shipment::NAME => Shipment::bulk_insert(conn, &dataset.shipments)?,
            other => {
                return Err(ShopgenError::Config(format!(
                    "no rows are generated for table {}",
                    other
                )))
            }
        };
        tracing::info!("Wrote {} rows to {}", inserted, table);
    }

    recompute_total_spent(conn)?;
    Ok(())
}

/// Row count of every store table, in insertion order.
pub fn row_counts(conn: &mut DbConnection) -> Result<IndexMap<String, i64>> {
    let mut counts = IndexMap::new();
    for table in insertion_order(&store_tables())? {
        let rows: i64 = match table {
            Category::NAME => schema::categories::table.count().get_result(conn)?,
            Product::NAME => schema::products::table.count().get_result(conn)?,
            Customer::NAME => schema::customers::table.count().get_result(conn)?,
            Order::NAME => schema::orders::table.count().get_result(conn)?,
            OrderItem::NAME => schema::order_items::table.count().get_result(conn)?,
            Shipment::NAME => schema::shipments::table.count().get_result(conn)?,
            _ => continue,
        };
        counts.insert(table.to_string(), rows);
    }
    Ok(counts)
}

/// Generate the dataset described by `config` and write it to a fresh
/// database at `output`.
pub fn run<P: AsRef<Path>>(config: &GeneratorConfig, output: P) -> Result<RunSummary> {
    let output = output.as_ref();
    tracing::info!("Generating store dataset with seed {}", config.seed);

    let dataset = Dataset::generate(config)?;
    let db = Database::create(output)?;
    let mut conn = db.get_connection()?;

    write_dataset(&mut conn, &dataset)?;
    let row_counts = row_counts(&mut conn)?;

    tracing::info!("Database generated: {}", db.path().display());
    Ok(RunSummary {
        database: db.path().to_path_buf(),
        row_counts,
    })
}
