//! Error type shared by the generator pipeline.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShopgenError>;

#[derive(Debug, Error)]
pub enum ShopgenError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Database pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Database error: {0}")]
    Query(#[from] diesel::result::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid sampling weights: {0}")]
    Weights(#[from] rand::distributions::WeightedError),

    #[error("Circular table dependency involving: {0:?}")]
    DependencyCycle(Vec<String>),

    #[error("Integrity check failed: {0}")]
    Integrity(String),
}
