//! Diesel ORM runtime infrastructure
//!
//! This module provides the SQLite connection pool, the store schema DDL and
//! the bulk insert trait implemented by every row type.

pub mod database;
pub mod operations;

// Re-export key types
pub use database::{ensure_tables, Database, DatabaseConfig, DbConnection, Pool, PooledConnection, SCHEMA_SQL};
pub use operations::{BulkInsert, BATCH_SIZE};
