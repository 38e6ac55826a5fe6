//! Built-in service type catalog
//!
//! Interval defaults follow common manufacturer guidance; tasks with an
//! interval of 0 on one axis are tracked on the other axis only.

use garagelog_domain::model::ServiceTypeDef;

/// All built-in service types with their interval rules
pub fn default_catalog() -> Vec<ServiceTypeDef> {
    vec![
        ServiceTypeDef::new("Oil Change", 5_000, 6),
        ServiceTypeDef::new("Tire Rotation", 10_000, 12),
        ServiceTypeDef::new("Brake Inspection", 20_000, 12),
        ServiceTypeDef::new("Insurance Renewal", 0, 12),
        ServiceTypeDef::new("General Service", 15_000, 12),
        ServiceTypeDef::new("Battery Check", 0, 24),
        ServiceTypeDef::new("Coolant Flush", 40_000, 24),
    ]
}

/// Look up a service type by name (case-insensitive)
pub fn get_service_type(name: &str) -> Option<ServiceTypeDef> {
    default_catalog()
        .into_iter()
        .find(|s| s.name.eq_ignore_ascii_case(name))
}
