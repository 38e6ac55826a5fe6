//! Repository trait definitions for data persistence

use crate::model::{ScheduleRecord, ServiceRecord, Vehicle};
use garagelog_types::Error;

/// Repository for registered vehicles
pub trait VehicleRepository {
    /// Save (insert or replace) a vehicle
    fn save(&mut self, vehicle: &Vehicle) -> Result<(), Error>;

    /// Find a vehicle by ID
    fn find_by_id(&self, id: &str) -> Result<Option<Vehicle>, Error>;

    /// Find a vehicle by license plate
    fn find_by_plate(&self, plate: &str) -> Result<Option<Vehicle>, Error>;

    /// Find all vehicles
    fn find_all(&self) -> Result<Vec<Vehicle>, Error>;
}

/// Repository for logged service records
pub trait ServiceRecordRepository {
    /// Save a service record
    fn save(&mut self, record: &ServiceRecord) -> Result<(), Error>;

    /// Find all records for a vehicle, newest first
    fn find_by_vehicle(&self, vehicle_id: &str) -> Result<Vec<ServiceRecord>, Error>;

    /// Find all records, newest first
    fn find_all(&self) -> Result<Vec<ServiceRecord>, Error>;
}

/// Repository for per-vehicle maintenance schedules
pub trait ScheduleRepository {
    /// Save (insert or replace) a schedule record
    fn save(&mut self, schedule: &ScheduleRecord) -> Result<(), Error>;

    /// Find the schedule for one (vehicle, service type) pair
    fn find(&self, vehicle_id: &str, service_type: &str) -> Result<Option<ScheduleRecord>, Error>;

    /// Find all schedules for a vehicle
    fn find_by_vehicle(&self, vehicle_id: &str) -> Result<Vec<ScheduleRecord>, Error>;
}
