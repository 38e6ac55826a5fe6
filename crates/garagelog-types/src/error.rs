//! Error types for garagelog

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// Store-related errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store entry not found")]
    NotFound,

    #[error("Store data corrupted: {0}")]
    Corrupted(String),

    #[error("Store IO error: {0}")]
    IoError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),

    #[error("Ambiguous vehicle reference '{0}' matches more than one vehicle")]
    AmbiguousVehicle(String),

    #[error("Unknown service type: {0}")]
    UnknownServiceType(String),

    #[error("CSV import error: {0}")]
    CsvImport(String),
}

pub type Result<T> = std::result::Result<T, Error>;
