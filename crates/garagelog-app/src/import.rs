//! CSV import of service history
//!
//! Expected header: service_type,date,mileage_km[,cost][,provider][,notes]
//! Dates are YYYY-MM-DD. Rows are applied oldest first so the schedule
//! ends up on the newest entry.

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use garagelog_domain::model::Vehicle;
use garagelog_domain::repository::{
    ScheduleRepository, ServiceRecordRepository, VehicleRepository,
};
use garagelog_types::{Error, Result};

use crate::service_log::{log_service, LogServiceInput};

#[derive(Debug, Deserialize)]
struct ImportRow {
    service_type: String,
    date: String,
    mileage_km: u32,
    #[serde(default)]
    cost: Option<f64>,
    #[serde(default)]
    provider: Option<String>,
    #[serde(default)]
    notes: Option<String>,
}

/// Outcome of an import run
#[derive(Debug)]
pub struct ImportSummary {
    pub parsed: usize,
    pub imported: usize,
    pub dry_run: bool,
}

/// Parse a history CSV into log inputs, oldest first
pub fn parse_history_csv(path: &Path) -> Result<Vec<LogServiceInput>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .map_err(|e| Error::CsvImport(e.to_string()))?;

    let mut inputs = Vec::new();
    for row in reader.deserialize::<ImportRow>() {
        let row = row.map_err(|e| Error::CsvImport(e.to_string()))?;
        let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d")
            .map_err(|_| Error::InvalidDate(row.date.clone()))?;
        inputs.push(LogServiceInput {
            service_type: row.service_type,
            date,
            mileage_km: row.mileage_km,
            cost: row.cost,
            provider: row.provider,
            notes: row.notes,
        });
    }
    inputs.sort_by_key(|i| (i.date, i.mileage_km));
    Ok(inputs)
}

/// Import a history CSV for one vehicle; `dry_run` parses without writing
pub fn import_history<V, R, S>(
    vehicles: &mut V,
    records: &mut R,
    schedules: &mut S,
    vehicle: &Vehicle,
    path: &Path,
    dry_run: bool,
) -> Result<ImportSummary>
where
    V: VehicleRepository,
    R: ServiceRecordRepository,
    S: ScheduleRepository,
{
    let inputs = parse_history_csv(path)?;
    let parsed = inputs.len();

    if dry_run {
        return Ok(ImportSummary {
            parsed,
            imported: 0,
            dry_run: true,
        });
    }

    let mut imported = 0;
    let mut current = vehicle.clone();
    for input in inputs {
        let record = log_service(vehicles, records, schedules, &current, input)?;
        if record.mileage_km > current.mileage_km {
            current.mileage_km = record.mileage_km;
        }
        imported += 1;
    }

    Ok(ImportSummary {
        parsed,
        imported,
        dry_run: false,
    })
}
