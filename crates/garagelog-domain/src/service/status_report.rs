//! Status board assembly and plain-text reporting

use serde::{Deserialize, Serialize};

use crate::model::Vehicle;
use crate::service::status_calculator::{MaintenanceStatus, StatusResult};

/// One row of the status board: a vehicle paired with a computed result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleStatus {
    pub vehicle_id: String,
    pub vehicle_label: String,
    /// Odometer reading the status was computed against
    pub current_km: u32,
    pub result: StatusResult,
}

impl ScheduleStatus {
    pub fn new(vehicle: &Vehicle, result: StatusResult) -> Self {
        Self {
            vehicle_id: vehicle.id.clone(),
            vehicle_label: vehicle.label(),
            current_km: vehicle.mileage_km,
            result,
        }
    }
}

/// Sort rows DUE first, then UPCOMING, then OK; ties keep fetch order
pub fn sort_by_urgency(rows: &mut [ScheduleStatus]) {
    rows.sort_by_key(|r| r.result.status);
}

/// Render a plain-text maintenance status report
pub fn generate_status_report(rows: &[ScheduleStatus]) -> String {
    let total = rows.len();
    let due_count = count(rows, MaintenanceStatus::Due);
    let upcoming_count = count(rows, MaintenanceStatus::Upcoming);
    let tracked = rows.iter().filter(|r| !r.result.reason.is_empty()).count();

    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("           Maintenance Status Report              \n");
    report.push_str("==================================================\n\n");
    report.push_str("Summary\n");
    report.push_str(&format!("  Tasks:     {} ({} tracked)\n", total, tracked));
    report.push_str(&format!("  Due:       {}\n", due_count));
    report.push_str(&format!("  Upcoming:  {}\n", upcoming_count));
    report.push('\n');

    if due_count + upcoming_count > 0 {
        report.push_str("Needs attention\n");
        report.push_str("-".repeat(70).as_str());
        report.push('\n');
        report.push_str(&format!(
            "{:<10} {:<24} {:<18} {}\n",
            "Status", "Vehicle", "Service", "Reason"
        ));
        report.push_str("-".repeat(70).as_str());
        report.push('\n');
        for row in rows
            .iter()
            .filter(|r| r.result.status != MaintenanceStatus::Ok)
        {
            report.push_str(&format!(
                "{:<10} {:<24} {:<18} {}\n",
                row.result.status.label(),
                truncate_str(&row.vehicle_label, 23),
                truncate_str(&row.result.service_name, 17),
                row.result.reason
            ));
        }
        report.push('\n');
    } else {
        report.push_str("All tracked maintenance is up to date.\n\n");
    }

    let ok_rows: Vec<_> = rows
        .iter()
        .filter(|r| r.result.status == MaintenanceStatus::Ok && !r.result.reason.is_empty())
        .collect();
    if !ok_rows.is_empty() {
        report.push_str("OK\n");
        report.push_str("-".repeat(70).as_str());
        report.push('\n');
        for row in ok_rows {
            report.push_str(&format!(
                "{:<10} {:<24} {:<18} {}\n",
                "OK",
                truncate_str(&row.vehicle_label, 23),
                truncate_str(&row.result.service_name, 17),
                row.result.reason
            ));
        }
        report.push('\n');
    }

    report.push_str("==================================================\n");
    report
}

fn count(rows: &[ScheduleStatus], status: MaintenanceStatus) -> usize {
    rows.iter().filter(|r| r.result.status == status).count()
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
