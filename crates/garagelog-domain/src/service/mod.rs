//! Domain services

pub mod status_calculator;
pub mod status_report;

pub use status_calculator::{
    calculate_service_status, group_thousands, MaintenanceStatus, StatusResult,
    UPCOMING_DAYS_THRESHOLD, UPCOMING_KM_THRESHOLD,
};
pub use status_report::{generate_status_report, sort_by_urgency, ScheduleStatus};
