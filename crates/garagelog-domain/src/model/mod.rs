//! Domain model types

pub mod schedule;
pub mod service_record;
pub mod service_type;
pub mod vehicle;

pub use schedule::ScheduleRecord;
pub use service_record::ServiceRecord;
pub use service_type::ServiceTypeDef;
pub use vehicle::Vehicle;
