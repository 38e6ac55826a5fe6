//! Store-opening helpers for the persistence layer

use std::path::PathBuf;

use garagelog_store::{ScheduleStore, ServiceRecordStore, VehicleStore};
use garagelog_types::Result;

use crate::config::Config;

/// Open the vehicle store in the configured data directory
pub fn open_vehicle_store(config: &Config) -> Result<VehicleStore> {
    VehicleStore::open(config.data_dir()?)
}

/// Open the service record store in the configured data directory
pub fn open_record_store(config: &Config) -> Result<ServiceRecordStore> {
    ServiceRecordStore::open(config.data_dir()?)
}

/// Open the schedule store in the configured data directory
pub fn open_schedule_store(config: &Config) -> Result<ScheduleStore> {
    ScheduleStore::open(config.data_dir()?)
}

/// Open all three stores at a custom directory
pub fn open_stores_at(dir: PathBuf) -> Result<(VehicleStore, ServiceRecordStore, ScheduleStore)> {
    Ok((
        VehicleStore::open(dir.clone())?,
        ServiceRecordStore::open(dir.clone())?,
        ScheduleStore::open(dir)?,
    ))
}
