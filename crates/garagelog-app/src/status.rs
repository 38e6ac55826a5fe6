//! Status query use case: join vehicles, the service catalog, and the
//! maintenance schedules, run the status calculator per pair, and sort
//! the board by urgency.

use chrono::NaiveDate;

use garagelog_domain::model::{ScheduleRecord, Vehicle};
use garagelog_domain::repository::{ScheduleRepository, VehicleRepository};
use garagelog_domain::service::{calculate_service_status, sort_by_urgency, ScheduleStatus};
use garagelog_types::Result;

use crate::catalog;

/// Status rows for one vehicle across the whole catalog, sorted DUE first
pub fn vehicle_status<S>(
    vehicle: &Vehicle,
    schedules: &S,
    today: NaiveDate,
) -> Result<Vec<ScheduleStatus>>
where
    S: ScheduleRepository,
{
    let mut rows = Vec::new();
    for service_type in catalog::default_catalog() {
        let schedule = schedules
            .find(&vehicle.id, &service_type.name)?
            .unwrap_or_else(|| ScheduleRecord::never_performed(&vehicle.id, &service_type.name));
        let result =
            calculate_service_status(&service_type, &schedule, vehicle.mileage_km, today);
        rows.push(ScheduleStatus::new(vehicle, result));
    }
    sort_by_urgency(&mut rows);
    Ok(rows)
}

/// Status rows for every registered vehicle, sorted DUE first
pub fn garage_status<V, S>(vehicles: &V, schedules: &S, today: NaiveDate) -> Result<Vec<ScheduleStatus>>
where
    V: VehicleRepository,
    S: ScheduleRepository,
{
    let mut rows = Vec::new();
    for vehicle in vehicles.find_all()? {
        for service_type in catalog::default_catalog() {
            let schedule = schedules
                .find(&vehicle.id, &service_type.name)?
                .unwrap_or_else(|| {
                    ScheduleRecord::never_performed(&vehicle.id, &service_type.name)
                });
            let result =
                calculate_service_status(&service_type, &schedule, vehicle.mileage_km, today);
            rows.push(ScheduleStatus::new(&vehicle, result));
        }
    }
    sort_by_urgency(&mut rows);
    Ok(rows)
}
