//! Maintenance status calculation
//!
//! Pure derivation of DUE / UPCOMING / OK for one (vehicle, service type)
//! pair from the interval rules, the last-performed record, the current
//! odometer reading, and an injected evaluation date.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::{ScheduleRecord, ServiceTypeDef};

/// Distance remaining at or under which a distance rule reports UPCOMING, in km
pub const UPCOMING_KM_THRESHOLD: i64 = 1000;

/// Days remaining at or under which a time rule reports UPCOMING
pub const UPCOMING_DAYS_THRESHOLD: i64 = 30;

/// Urgency classification for a maintenance task
///
/// Ordering is by urgency: sorting ascending yields DUE, UPCOMING, OK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MaintenanceStatus {
    Due,
    Upcoming,
    Ok,
}

impl MaintenanceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MaintenanceStatus::Due => "DUE",
            MaintenanceStatus::Upcoming => "UPCOMING",
            MaintenanceStatus::Ok => "OK",
        }
    }
}

impl std::fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Computed status for one (vehicle, service type) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResult {
    pub service_name: String,
    pub status: MaintenanceStatus,
    /// Human-readable explanation; empty when the service type defines no rule
    pub reason: String,
    /// Next firing date of the time rule, if one is evaluable
    pub due_date: Option<NaiveDate>,
    /// Odometer reading at which the distance rule fires, if one is defined
    pub due_km: Option<u32>,
}

/// Derive the maintenance status for one service type on one vehicle.
///
/// `today` is the evaluation date; callers pass the wall-clock date at the
/// boundary so the computation itself stays deterministic and testable.
///
/// Rules: the distance rule fires at `last_performed_km + interval_km`,
/// the time rule at `last_performed_date + interval_months` (calendar month
/// addition, day-of-month clamped to the end of shorter months). Either
/// sub-status reaching DUE makes the overall status DUE, else either
/// reaching UPCOMING makes it UPCOMING. The distance sub-status supplies
/// the reason text whenever it matches the final status.
pub fn calculate_service_status(
    service_type: &ServiceTypeDef,
    schedule: &ScheduleRecord,
    current_km: u32,
    today: NaiveDate,
) -> StatusResult {
    // Distance rule
    let mut km_status = MaintenanceStatus::Ok;
    let mut due_km: Option<u32> = None;
    let mut km_remaining: Option<i64> = None;

    if service_type.interval_km > 0 {
        let due = schedule.last_performed_km as i64 + service_type.interval_km as i64;
        let remaining = due - current_km as i64;

        km_status = if remaining <= 0 {
            MaintenanceStatus::Due
        } else if remaining <= UPCOMING_KM_THRESHOLD {
            MaintenanceStatus::Upcoming
        } else {
            MaintenanceStatus::Ok
        };
        due_km = u32::try_from(due).ok();
        km_remaining = Some(remaining);
    }

    // Time rule; unevaluable without a last-performed date
    let mut time_status = MaintenanceStatus::Ok;
    let mut due_date: Option<NaiveDate> = None;
    let mut days_remaining: Option<i64> = None;

    if service_type.interval_months > 0 {
        if let Some(last) = schedule.last_performed_date {
            if let Some(due) = last.checked_add_months(Months::new(service_type.interval_months)) {
                let remaining = (due - today).num_days();

                time_status = if remaining <= 0 {
                    MaintenanceStatus::Due
                } else if remaining <= UPCOMING_DAYS_THRESHOLD {
                    MaintenanceStatus::Upcoming
                } else {
                    MaintenanceStatus::Ok
                };
                due_date = Some(due);
                days_remaining = Some(remaining);
            }
        }
    }

    // Combined status (DUE > UPCOMING > OK); the distance sub-status wins
    // the reason text at the chosen severity.
    let (status, reason) = if km_status == MaintenanceStatus::Due
        || time_status == MaintenanceStatus::Due
    {
        let reason = if km_status == MaintenanceStatus::Due {
            format!(
                "Overdue by {} km",
                group_thousands(km_remaining.unwrap_or(0).abs())
            )
        } else {
            format!("Overdue by {} days", days_remaining.unwrap_or(0).abs())
        };
        (MaintenanceStatus::Due, reason)
    } else if km_status == MaintenanceStatus::Upcoming
        || time_status == MaintenanceStatus::Upcoming
    {
        let reason = if km_status == MaintenanceStatus::Upcoming {
            format!("Due in {} km", group_thousands(km_remaining.unwrap_or(0)))
        } else {
            format!("Due in {} days", days_remaining.unwrap_or(0))
        };
        (MaintenanceStatus::Upcoming, reason)
    } else {
        let reason = match (km_remaining, days_remaining) {
            (Some(km), _) => format!("{} km left", group_thousands(km)),
            (None, Some(days)) => format!("{} days left", days),
            (None, None) => String::new(),
        };
        (MaintenanceStatus::Ok, reason)
    };

    StatusResult {
        service_name: service_type.name.clone(),
        status,
        reason,
        due_date,
        due_km,
    }
}

/// Format an integer with comma grouping ("12345" -> "12,345")
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oil_change() -> ServiceTypeDef {
        ServiceTypeDef::new("Oil Change", 5000, 6)
    }

    fn schedule(last_km: u32, last_date: Option<NaiveDate>) -> ScheduleRecord {
        ScheduleRecord {
            vehicle_id: "v1".to_string(),
            service_type: "Oil Change".to_string(),
            last_performed_km: last_km,
            last_performed_date: last_date,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_fresh_service_is_ok() {
        let today = date(2026, 3, 1);
        let result =
            calculate_service_status(&oil_change(), &schedule(50_000, Some(today)), 50_000, today);
        assert_eq!(result.status, MaintenanceStatus::Ok);
        assert_eq!(result.reason, "5,000 km left");
        assert_eq!(result.due_km, Some(55_000));
        assert_eq!(result.due_date, Some(date(2026, 9, 1)));
    }

    #[test]
    fn test_overdue_by_distance() {
        let today = date(2026, 3, 1);
        let result =
            calculate_service_status(&oil_change(), &schedule(50_000, Some(today)), 56_000, today);
        assert_eq!(result.status, MaintenanceStatus::Due);
        assert_eq!(result.reason, "Overdue by 1,000 km");
    }

    #[test]
    fn test_upcoming_by_distance() {
        let today = date(2026, 3, 1);
        let result =
            calculate_service_status(&oil_change(), &schedule(50_000, Some(today)), 54_500, today);
        assert_eq!(result.status, MaintenanceStatus::Upcoming);
        assert_eq!(result.reason, "Due in 500 km");
    }

    #[test]
    fn test_reset_after_logging() {
        let today = date(2026, 3, 1);
        let result =
            calculate_service_status(&oil_change(), &schedule(56_000, Some(today)), 56_000, today);
        assert_eq!(result.status, MaintenanceStatus::Ok);
        assert_eq!(result.reason, "5,000 km left");
    }

    #[test]
    fn test_distance_boundary_exactly_zero_is_due() {
        let today = date(2026, 3, 1);
        let result =
            calculate_service_status(&oil_change(), &schedule(50_000, Some(today)), 55_000, today);
        assert_eq!(result.status, MaintenanceStatus::Due);
        assert_eq!(result.reason, "Overdue by 0 km");
    }

    #[test]
    fn test_distance_boundary_exactly_threshold_is_upcoming() {
        let today = date(2026, 3, 1);
        let result =
            calculate_service_status(&oil_change(), &schedule(50_000, Some(today)), 54_000, today);
        assert_eq!(result.status, MaintenanceStatus::Upcoming);
        assert_eq!(result.reason, "Due in 1,000 km");
    }

    #[test]
    fn test_distance_just_past_threshold_is_ok() {
        let today = date(2026, 3, 1);
        let result =
            calculate_service_status(&oil_change(), &schedule(50_000, Some(today)), 53_999, today);
        assert_eq!(result.status, MaintenanceStatus::Ok);
        assert_eq!(result.reason, "1,001 km left");
    }

    #[test]
    fn test_overdue_by_time_only() {
        let service = ServiceTypeDef::new("Insurance Renewal", 0, 12);
        let today = date(2026, 3, 1);
        let result = calculate_service_status(
            &service,
            &schedule(0, Some(date(2025, 2, 1))),
            10_000,
            today,
        );
        assert_eq!(result.status, MaintenanceStatus::Due);
        assert_eq!(result.reason, "Overdue by 28 days");
        assert_eq!(result.due_date, Some(date(2026, 2, 1)));
        assert_eq!(result.due_km, None);
    }

    #[test]
    fn test_time_boundary_due_today() {
        let service = ServiceTypeDef::new("Insurance Renewal", 0, 12);
        let today = date(2026, 2, 1);
        let result = calculate_service_status(
            &service,
            &schedule(0, Some(date(2025, 2, 1))),
            10_000,
            today,
        );
        assert_eq!(result.status, MaintenanceStatus::Due);
        assert_eq!(result.reason, "Overdue by 0 days");
    }

    #[test]
    fn test_time_boundary_thirty_days_is_upcoming() {
        let service = ServiceTypeDef::new("Insurance Renewal", 0, 12);
        let today = date(2026, 1, 2);
        let result = calculate_service_status(
            &service,
            &schedule(0, Some(date(2025, 2, 1))),
            10_000,
            today,
        );
        assert_eq!(result.status, MaintenanceStatus::Upcoming);
        assert_eq!(result.reason, "Due in 30 days");
    }

    #[test]
    fn test_time_thirty_one_days_is_ok() {
        let service = ServiceTypeDef::new("Insurance Renewal", 0, 12);
        let today = date(2026, 1, 1);
        let result = calculate_service_status(
            &service,
            &schedule(0, Some(date(2025, 2, 1))),
            10_000,
            today,
        );
        assert_eq!(result.status, MaintenanceStatus::Ok);
        assert_eq!(result.reason, "31 days left");
    }

    #[test]
    fn test_month_addition_clamps_to_end_of_february() {
        let service = ServiceTypeDef::new("Monthly Check", 0, 1);
        let today = date(2026, 1, 1);
        let result = calculate_service_status(
            &service,
            &schedule(0, Some(date(2026, 1, 31))),
            0,
            today,
        );
        // 2026 is not a leap year; Jan 31 + 1 month clamps to Feb 28
        assert_eq!(result.due_date, Some(date(2026, 2, 28)));
    }

    #[test]
    fn test_month_addition_clamps_in_leap_year() {
        let service = ServiceTypeDef::new("Monthly Check", 0, 1);
        let today = date(2028, 1, 1);
        let result = calculate_service_status(
            &service,
            &schedule(0, Some(date(2028, 1, 31))),
            0,
            today,
        );
        assert_eq!(result.due_date, Some(date(2028, 2, 29)));
    }

    #[test]
    fn test_due_dominates_upcoming() {
        // Distance UPCOMING, time DUE: overall DUE, reason from the time rule
        let today = date(2026, 3, 1);
        let result = calculate_service_status(
            &oil_change(),
            &schedule(50_000, Some(date(2025, 8, 1))),
            54_500,
            today,
        );
        assert_eq!(result.status, MaintenanceStatus::Due);
        assert_eq!(result.reason, "Overdue by 28 days");
    }

    #[test]
    fn test_distance_reason_wins_when_both_due() {
        let today = date(2026, 3, 1);
        let result = calculate_service_status(
            &oil_change(),
            &schedule(50_000, Some(date(2025, 1, 1))),
            56_000,
            today,
        );
        assert_eq!(result.status, MaintenanceStatus::Due);
        assert_eq!(result.reason, "Overdue by 1,000 km");
    }

    #[test]
    fn test_distance_reason_wins_when_both_upcoming() {
        let today = date(2026, 3, 1);
        // Time due 2026-03-15 (14 days), distance due in 500 km
        let result = calculate_service_status(
            &oil_change(),
            &schedule(50_000, Some(date(2025, 9, 15))),
            54_500,
            today,
        );
        assert_eq!(result.status, MaintenanceStatus::Upcoming);
        assert_eq!(result.reason, "Due in 500 km");
    }

    #[test]
    fn test_no_rules_is_untracked() {
        let service = ServiceTypeDef::new("Detailing", 0, 0);
        let today = date(2026, 3, 1);
        let result =
            calculate_service_status(&service, &schedule(0, Some(today)), 80_000, today);
        assert_eq!(result.status, MaintenanceStatus::Ok);
        assert_eq!(result.reason, "");
        assert_eq!(result.due_date, None);
        assert_eq!(result.due_km, None);
    }

    #[test]
    fn test_time_rule_without_date_is_ok() {
        let today = date(2026, 3, 1);
        let result = calculate_service_status(&oil_change(), &schedule(50_000, None), 50_000, today);
        assert_eq!(result.status, MaintenanceStatus::Ok);
        assert_eq!(result.due_date, None);
        // Distance rule still evaluates normally
        assert_eq!(result.due_km, Some(55_000));
        assert_eq!(result.reason, "5,000 km left");
    }

    #[test]
    fn test_odometer_regression_yields_ok() {
        let today = date(2026, 3, 1);
        let result =
            calculate_service_status(&oil_change(), &schedule(50_000, Some(today)), 48_000, today);
        assert_eq!(result.status, MaintenanceStatus::Ok);
        assert_eq!(result.reason, "7,000 km left");
    }

    #[test]
    fn test_idempotent_for_identical_inputs() {
        let today = date(2026, 3, 1);
        let sched = schedule(50_000, Some(date(2025, 12, 1)));
        let a = calculate_service_status(&oil_change(), &sched, 54_200, today);
        let b = calculate_service_status(&oil_change(), &sched, 54_200, today);
        assert_eq!(a, b);
    }

    #[test]
    fn test_status_ordering_due_first() {
        let mut statuses = vec![
            MaintenanceStatus::Ok,
            MaintenanceStatus::Due,
            MaintenanceStatus::Upcoming,
        ];
        statuses.sort();
        assert_eq!(
            statuses,
            vec![
                MaintenanceStatus::Due,
                MaintenanceStatus::Upcoming,
                MaintenanceStatus::Ok
            ]
        );
    }

    #[test]
    fn test_status_serializes_uppercase() {
        let json = serde_json::to_string(&MaintenanceStatus::Upcoming).unwrap();
        assert_eq!(json, "\"UPCOMING\"");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(500), "500");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(56000), "56,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-1000), "-1,000");
    }
}
