//! # Shopgen: Synthetic E-commerce Dataset Generator
//!
//! Shopgen builds a realistic, internally consistent sample database for an
//! online retail store and writes it to a SQLite file.
//!
//! ## Features
//!
//! - **Five related tables** plus a category reference list: products,
//!   customers, orders, order items (composite key) and shipments
//! - **Referential integrity**: rows are written in foreign-key order with
//!   enforcement switched on
//! - **Derived fields**: order totals from line items, customer spend from
//!   stored orders
//! - **Controlled noise**: missing contact fields, duplicated customer
//!   identities, near-duplicate orders, delayed and lost shipments
//! - **Reproducible**: one seeded ChaCha8 stream drives the whole run, so a
//!   seed always yields the same database
//!
//! ## Example
//!
//! ```ignore
//! use shopgen::{pipeline, GeneratorConfig};
//!
//! let summary = pipeline::run(&GeneratorConfig::default(), "ecommerce.db")?;
//! assert_eq!(summary.count("Orders"), Some(1414));
//! ```

// Core modules
pub mod config;
pub mod entity;
pub mod error;
pub mod faker;
pub mod models;
pub mod random;
pub mod schema;

// Generation stages
pub mod generate;

// Diesel ORM runtime infrastructure
pub mod diesel_runtime;

// Persistence and post-processing
pub mod aggregate;
pub mod dependency_graph;
pub mod pipeline;
pub mod verify;

// Re-export key types
pub use config::GeneratorConfig;
pub use entity::{Carrier, Entity, Gender, Tier};
pub use error::{Result, ShopgenError};
pub use generate::Dataset;
pub use models::{Category, Customer, Order, OrderItem, Product, Shipment};
pub use pipeline::{run, RunSummary};
pub use verify::{check_integrity, IntegrityReport};

// Re-export diesel_runtime types
pub use diesel_runtime::{BulkInsert, Database, DatabaseConfig};
