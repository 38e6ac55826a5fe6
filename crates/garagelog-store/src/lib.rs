//! Persistent JSON file stores backing the domain repository traits

mod records;
mod schedules;
mod vehicles;

pub use records::ServiceRecordStore;
pub use schedules::ScheduleStore;
pub use vehicles::VehicleStore;
