//! Log-service use case
//!
//! Logging a service appends a history record, resets the matching
//! maintenance schedule to the record's mileage/date, and rolls the
//! vehicle odometer forward if the record reads higher.

use chrono::NaiveDate;
use uuid::Uuid;

use garagelog_domain::model::{ScheduleRecord, ServiceRecord, Vehicle};
use garagelog_domain::repository::{
    ScheduleRepository, ServiceRecordRepository, VehicleRepository,
};
use garagelog_types::{Error, Result};

use crate::catalog;

/// Input for logging a single service event
#[derive(Debug, Clone)]
pub struct LogServiceInput {
    pub service_type: String,
    pub date: NaiveDate,
    pub mileage_km: u32,
    pub cost: Option<f64>,
    pub provider: Option<String>,
    pub notes: Option<String>,
}

/// Log a service for a vehicle, returning the stored record
pub fn log_service<V, R, S>(
    vehicles: &mut V,
    records: &mut R,
    schedules: &mut S,
    vehicle: &Vehicle,
    input: LogServiceInput,
) -> Result<ServiceRecord>
where
    V: VehicleRepository,
    R: ServiceRecordRepository,
    S: ScheduleRepository,
{
    let service_type = catalog::get_service_type(&input.service_type)
        .ok_or_else(|| Error::UnknownServiceType(input.service_type.clone()))?;

    let record = ServiceRecord {
        id: Uuid::new_v4().to_string(),
        vehicle_id: vehicle.id.clone(),
        service_type: service_type.name.clone(),
        date: input.date,
        mileage_km: input.mileage_km,
        cost: input.cost,
        provider: input.provider,
        notes: input.notes,
    };
    records.save(&record)?;

    schedules.save(&ScheduleRecord {
        vehicle_id: vehicle.id.clone(),
        service_type: service_type.name,
        last_performed_km: record.mileage_km,
        last_performed_date: Some(record.date),
    })?;

    if record.mileage_km > vehicle.mileage_km {
        let mut updated = vehicle.clone();
        updated.mileage_km = record.mileage_km;
        vehicles.save(&updated)?;
    }

    Ok(record)
}
