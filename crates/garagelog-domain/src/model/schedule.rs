//! Per-vehicle, per-service-type maintenance schedule record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// When a service type was last performed on a vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub vehicle_id: String,
    pub service_type: String,
    /// Odometer reading at last service; 0 when never performed
    #[serde(default)]
    pub last_performed_km: u32,
    /// Date of last service; absent when never performed
    #[serde(default)]
    pub last_performed_date: Option<NaiveDate>,
}

impl ScheduleRecord {
    /// Fresh schedule for a service type that has never been performed
    pub fn never_performed(vehicle_id: impl Into<String>, service_type: impl Into<String>) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            service_type: service_type.into(),
            last_performed_km: 0,
            last_performed_date: None,
        }
    }
}
