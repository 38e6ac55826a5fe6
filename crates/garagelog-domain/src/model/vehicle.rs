//! Registered vehicle type definitions

use serde::{Deserialize, Serialize};

/// A registered vehicle with its current odometer reading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Stable identifier (UUID v4 string)
    pub id: String,
    /// Manufacturer (e.g., "Toyota")
    pub make: String,
    /// Model name (e.g., "Corolla")
    pub model: String,
    /// Model year
    pub year: i32,
    /// Current odometer reading in km
    pub mileage_km: u32,
    pub color: Option<String>,
    pub license_plate: Option<String>,
    pub vin: Option<String>,
}

impl Vehicle {
    /// Display label, e.g. "2020 Toyota Corolla"
    pub fn label(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}
