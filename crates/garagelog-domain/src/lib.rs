//! Domain layer for garagelog: models, repository traits, and the
//! maintenance status calculation services.

pub mod model;
pub mod repository;
pub mod service;
