//! Database connection management and schema creation
//!
//! This module provides the Diesel SQLite connection pool used by the
//! persistence writer. Every pooled connection has foreign-key enforcement
//! switched on before it is handed out.

use crate::error::{Result, ShopgenError};
use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection};
use diesel::sqlite::SqliteConnection;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub type DbConnection = SqliteConnection;
pub type Pool = r2d2::Pool<ConnectionManager<DbConnection>>;
pub type PooledConnection = r2d2::PooledConnection<ConnectionManager<DbConnection>>;

/// DDL for the store tables, in dependency order.
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE Categories (
    category_id INTEGER PRIMARY KEY,
    category_name TEXT NOT NULL
);

CREATE TABLE Products (
    product_id INTEGER PRIMARY KEY,
    product_name TEXT NOT NULL,
    category_id INTEGER NOT NULL,
    price REAL NOT NULL CHECK(price >= 0),
    stock INTEGER NOT NULL CHECK(stock >= 0),
    FOREIGN KEY(category_id) REFERENCES Categories(category_id) ON DELETE RESTRICT
);

CREATE TABLE Customers (
    customer_id INTEGER PRIMARY KEY,
    customer_name TEXT NOT NULL,
    gender TEXT,
    date_of_birth TEXT,
    email TEXT,
    phone_number TEXT,
    address TEXT,
    customer_tier TEXT,  -- ordinal
    registration_date TEXT,
    total_spent REAL DEFAULT 0 CHECK(total_spent >= 0)
);

CREATE TABLE Orders (
    order_id INTEGER PRIMARY KEY,
    customer_id INTEGER NOT NULL,
    order_date TEXT,
    order_total REAL CHECK(order_total >= 0),
    promo_code TEXT,
    FOREIGN KEY(customer_id) REFERENCES Customers(customer_id) ON DELETE CASCADE
);

CREATE TABLE Order_Items (
    order_id INTEGER,
    item_no INTEGER,
    product_id INTEGER,
    quantity INTEGER CHECK(quantity >= 0),
    unit_price REAL CHECK(unit_price >= 0),
    line_total REAL CHECK(line_total >= 0),
    PRIMARY KEY(order_id, item_no),
    FOREIGN KEY(order_id) REFERENCES Orders(order_id) ON DELETE CASCADE,
    FOREIGN KEY(product_id) REFERENCES Products(product_id) ON DELETE RESTRICT
);

CREATE TABLE Shipments (
    shipment_id INTEGER PRIMARY KEY,
    order_id INTEGER NOT NULL,
    shipped_date TEXT,
    delivery_date TEXT,
    carrier TEXT,
    tracking_number TEXT,
    FOREIGN KEY(order_id) REFERENCES Orders(order_id) ON DELETE CASCADE
);
"#;

/// Turns on foreign-key enforcement for each new connection.
#[derive(Debug, Clone, Copy)]
struct ForeignKeys;

impl CustomizeConnection<DbConnection, r2d2::Error> for ForeignKeys {
    fn on_acquire(&self, conn: &mut DbConnection) -> std::result::Result<(), r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = ON;")
            .map_err(r2d2::Error::QueryError)
    }
}

/// SQLite database file with a connection pool
pub struct Database {
    pool: Pool,
    path: PathBuf,
}

impl Database {
    /// Create a fresh database at `path`: any existing file is removed and the
    /// store tables are created.
    ///
    /// # Example
    /// ```ignore
    /// let db = Database::create("ecommerce.db")?;
    /// let mut conn = db.get_connection()?;
    /// ```
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            tracing::info!("Removing existing database {}", path.display());
            fs::remove_file(path)?;
        }

        let db = Self::open(path)?;
        let mut conn = db.get_connection()?;
        ensure_tables(&mut conn)?;
        Ok(db)
    }

    /// Open an existing (or empty) database file without touching its schema
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_config(path, DatabaseConfig::default())
    }

    /// Open a database with custom pool configuration
    pub fn open_with_config<P: AsRef<Path>>(path: P, config: DatabaseConfig) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let manager = ConnectionManager::<DbConnection>::new(path.to_string_lossy());

        let pool = r2d2::Pool::builder()
            .max_size(config.max_connections)
            .connection_timeout(Duration::from_secs(config.connection_timeout_secs))
            .connection_customizer(Box::new(ForeignKeys))
            .build(manager)?;

        tracing::debug!("Opened database {}", path.display());
        Ok(Database { pool, path })
    }

    /// Get a connection from the pool
    pub fn get_connection(&self) -> Result<PooledConnection> {
        self.pool.get().map_err(ShopgenError::from)
    }

    /// Test database connectivity
    pub fn test_connection(&self) -> Result<()> {
        let mut conn = self.get_connection()?;
        conn.batch_execute("SELECT 1")?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Database configuration options
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub max_connections: u32,
    pub connection_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            max_connections: 1,          // One writer, one pass
            connection_timeout_secs: 30, // Wait up to 30s for connection
        }
    }
}

/// Create the store tables on an empty database.
pub fn ensure_tables(conn: &mut DbConnection) -> Result<()> {
    tracing::info!("Creating store tables");
    conn.batch_execute(SCHEMA_SQL)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::prelude::*;
    use diesel::sql_types::BigInt;

    #[derive(QueryableByName)]
    struct Count {
        #[diesel(sql_type = BigInt)]
        n: i64,
    }

    #[test]
    fn test_create_builds_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.db");
        let db = Database::create(&path).unwrap();
        db.test_connection().unwrap();
        assert_eq!(db.path(), path.as_path());

        let mut conn = db.get_connection().unwrap();
        let tables: Count = diesel::sql_query(
            "SELECT COUNT(*) AS n FROM sqlite_master WHERE type = 'table' AND name IN \
             ('Categories', 'Products', 'Customers', 'Orders', 'Order_Items', 'Shipments')",
        )
        .get_result(&mut *conn)
        .unwrap();
        assert_eq!(tables.n, 6);
    }

    #[test]
    fn test_foreign_keys_enforced() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::create(dir.path().join("store.db")).unwrap();
        let mut conn = db.get_connection().unwrap();

        let dangling = conn.batch_execute(
            "INSERT INTO Products (product_id, product_name, category_id, price, stock) \
             VALUES (1, 'Orphan X 100', 99, 10.0, 1)",
        );
        assert!(dangling.is_err());
    }

    #[test]
    fn test_check_constraints_enforced() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::create(dir.path().join("store.db")).unwrap();
        let mut conn = db.get_connection().unwrap();

        conn.batch_execute("INSERT INTO Categories VALUES (1, 'Books')").unwrap();
        let negative = conn.batch_execute(
            "INSERT INTO Products (product_id, product_name, category_id, price, stock) \
             VALUES (1, 'Broken X 100', 1, -1.0, 1)",
        );
        assert!(negative.is_err());
    }

    #[test]
    fn test_create_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.db");
        {
            let db = Database::create(&path).unwrap();
            let mut conn = db.get_connection().unwrap();
            conn.batch_execute("INSERT INTO Categories VALUES (1, 'Books')").unwrap();
        }

        let db = Database::create(&path).unwrap();
        let mut conn = db.get_connection().unwrap();
        let rows: Count = diesel::sql_query("SELECT COUNT(*) AS n FROM Categories")
            .get_result(&mut *conn)
            .unwrap();
        assert_eq!(rows.n, 0);
    }
}
