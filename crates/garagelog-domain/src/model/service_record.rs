//! Logged maintenance record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single logged maintenance event for a vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Stable identifier (UUID v4 string)
    pub id: String,
    pub vehicle_id: String,
    pub service_type: String,
    /// Date the service was performed
    pub date: NaiveDate,
    /// Odometer reading at time of service, in km
    pub mileage_km: u32,
    pub cost: Option<f64>,
    pub provider: Option<String>,
    pub notes: Option<String>,
}
