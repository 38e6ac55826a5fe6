//! Application service layer - use cases, config, catalog, import

pub mod catalog;
pub mod config;
pub mod import;
pub mod repository;
pub mod service_log;
pub mod status;
