//! Output formatting module

use garagelog_domain::model::{ServiceRecord, ServiceTypeDef, Vehicle};
use garagelog_domain::service::{group_thousands, ScheduleStatus};
use garagelog_types::{OutputFormat, Result};

pub fn output_status(output_format: OutputFormat, rows: &[ScheduleStatus]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(rows)?;
        println!("{}", content);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No vehicles registered.");
        return Ok(());
    }

    println!("\nMaintenance Status");
    println!("==================");
    println!(
        "{:<10} {:<24} {:<18} {:<12} {:<10} {}",
        "Status", "Vehicle", "Service", "Due date", "Due km", "Reason"
    );
    println!("{}", "-".repeat(95));
    for row in rows {
        let due_date = row
            .result
            .due_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        let due_km = row
            .result
            .due_km
            .map(|km| group_thousands(km as i64))
            .unwrap_or_else(|| "-".to_string());
        let reason = if row.result.reason.is_empty() {
            "not tracked"
        } else {
            row.result.reason.as_str()
        };
        println!(
            "{:<10} {:<24} {:<18} {:<12} {:<10} {}",
            row.result.status.label(),
            truncate_str(&row.vehicle_label, 23),
            truncate_str(&row.result.service_name, 17),
            due_date,
            due_km,
            reason
        );
    }

    Ok(())
}

pub fn output_vehicles(output_format: OutputFormat, vehicles: &[&Vehicle]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(vehicles)?;
        println!("{}", content);
        return Ok(());
    }

    if vehicles.is_empty() {
        println!("No vehicles registered.");
        return Ok(());
    }

    println!("\nVehicles");
    println!("========");
    println!(
        "{:<10} {:<24} {:>10}  {:<10} {}",
        "ID", "Vehicle", "Odometer", "Plate", "Color"
    );
    println!("{}", "-".repeat(70));
    for vehicle in vehicles {
        println!(
            "{:<10} {:<24} {:>7} km  {:<10} {}",
            short_id(&vehicle.id),
            truncate_str(&vehicle.label(), 23),
            group_thousands(vehicle.mileage_km as i64),
            vehicle.license_plate.as_deref().unwrap_or("-"),
            vehicle.color.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}

pub fn output_history(output_format: OutputFormat, records: &[ServiceRecord]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(records)?;
        println!("{}", content);
        return Ok(());
    }

    if records.is_empty() {
        println!("No service records.");
        return Ok(());
    }

    println!("\nService History");
    println!("===============");
    println!(
        "{:<12} {:<18} {:>10}  {:>8}  {}",
        "Date", "Service", "Odometer", "Cost", "Notes"
    );
    println!("{}", "-".repeat(70));
    for record in records {
        let cost = record
            .cost
            .map(|c| format!("{:.2}", c))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<12} {:<18} {:>7} km  {:>8}  {}",
            record.date,
            truncate_str(&record.service_type, 17),
            group_thousands(record.mileage_km as i64),
            cost,
            record.notes.as_deref().unwrap_or("")
        );
    }

    Ok(())
}

pub fn output_catalog(output_format: OutputFormat, catalog: &[ServiceTypeDef]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(catalog)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nService Catalog");
    println!("===============");
    println!("{:<20} {:>12} {:>10}", "Service", "Interval km", "Months");
    println!("{}", "-".repeat(45));
    for service in catalog {
        let km = if service.interval_km > 0 {
            group_thousands(service.interval_km as i64)
        } else {
            "-".to_string()
        };
        let months = if service.interval_months > 0 {
            service.interval_months.to_string()
        } else {
            "-".to_string()
        };
        println!("{:<20} {:>12} {:>10}", service.name, km, months);
    }

    Ok(())
}

pub fn output_logged_record(
    output_format: OutputFormat,
    vehicle: &Vehicle,
    record: &ServiceRecord,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(record)?;
        println!("{}", content);
        return Ok(());
    }

    println!(
        "Logged {} for {} at {} km on {}",
        record.service_type,
        vehicle.label(),
        group_thousands(record.mileage_km as i64),
        record.date
    );
    Ok(())
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

/// Leading characters of an ID for display
fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}
