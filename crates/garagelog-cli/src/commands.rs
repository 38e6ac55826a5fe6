//! Command handlers

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use uuid::Uuid;

use garagelog_app::catalog;
use garagelog_app::config::Config;
use garagelog_app::import::import_history;
use garagelog_app::repository::{open_record_store, open_schedule_store, open_vehicle_store};
use garagelog_app::service_log::{log_service, LogServiceInput};
use garagelog_app::status::{garage_status, vehicle_status};
use garagelog_domain::model::Vehicle;
use garagelog_domain::repository::{ServiceRecordRepository, VehicleRepository};
use garagelog_types::{Error, OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref dir) = cli.data_dir {
        config.data_dir = Some(dir.clone());
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::AddVehicle {
            make,
            model,
            year,
            mileage,
            color,
            plate,
            vin,
        } => cmd_add_vehicle(
            &config,
            make.clone(),
            model.clone(),
            *year,
            *mileage,
            color.clone(),
            plate.clone(),
            vin.clone(),
        ),

        Commands::Vehicles => cmd_vehicles(&config, output_format),

        Commands::UpdateVehicle {
            vehicle,
            mileage,
            make,
            model,
            year,
            color,
            plate,
            vin,
        } => cmd_update_vehicle(
            &config,
            vehicle,
            VehicleUpdate {
                mileage_km: *mileage,
                make: make.clone(),
                model: model.clone(),
                year: *year,
                color: color.clone(),
                license_plate: plate.clone(),
                vin: vin.clone(),
            },
        ),

        Commands::RemoveVehicle { vehicle } => cmd_remove_vehicle(&config, vehicle),

        Commands::Log {
            vehicle,
            service_type,
            mileage,
            date,
            cost,
            provider,
            notes,
        } => cmd_log(
            &config,
            output_format,
            vehicle,
            service_type.clone(),
            *mileage,
            date.as_deref(),
            *cost,
            provider.clone(),
            notes.clone(),
        ),

        Commands::Status { vehicle, as_of } => {
            cmd_status(&config, output_format, vehicle.as_deref(), as_of.as_deref())
        }

        Commands::History { vehicle, limit } => {
            cmd_history(&config, output_format, vehicle.as_deref(), *limit)
        }

        Commands::Catalog => cmd_catalog(output_format),

        Commands::Import {
            vehicle,
            csv,
            dry_run,
        } => cmd_import(&config, vehicle, csv.clone(), *dry_run),

        Commands::Config {
            show,
            set_output,
            set_data_dir,
            reset,
        } => cmd_config(*show, *set_output, set_data_dir.clone(), *reset),
    }
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| Error::InvalidDate(s.to_string()))
}

fn parse_date_or_today(s: Option<&str>) -> Result<NaiveDate> {
    match s {
        Some(s) => parse_date(s),
        None => Ok(Local::now().date_naive()),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_add_vehicle(
    config: &Config,
    make: String,
    model: String,
    year: i32,
    mileage_km: u32,
    color: Option<String>,
    license_plate: Option<String>,
    vin: Option<String>,
) -> Result<()> {
    let mut vehicles = open_vehicle_store(config)?;
    let vehicle = Vehicle {
        id: Uuid::new_v4().to_string(),
        make,
        model,
        year,
        mileage_km,
        color,
        license_plate,
        vin,
    };
    let label = vehicle.label();
    let id = vehicles.add_vehicle(vehicle)?;
    println!("Registered {} ({})", label, id);
    Ok(())
}

fn cmd_vehicles(config: &Config, output_format: OutputFormat) -> Result<()> {
    let vehicles = open_vehicle_store(config)?;
    output::output_vehicles(output_format, &vehicles.all_vehicles())
}

/// Field changes for an update-vehicle command; None leaves a field as is
struct VehicleUpdate {
    mileage_km: Option<u32>,
    make: Option<String>,
    model: Option<String>,
    year: Option<i32>,
    color: Option<String>,
    license_plate: Option<String>,
    vin: Option<String>,
}

fn cmd_update_vehicle(config: &Config, vehicle_ref: &str, update: VehicleUpdate) -> Result<()> {
    let mut vehicles = open_vehicle_store(config)?;
    let mut vehicle = vehicles.resolve(vehicle_ref)?;

    if let Some(mileage_km) = update.mileage_km {
        vehicle.mileage_km = mileage_km;
    }
    if let Some(make) = update.make {
        vehicle.make = make;
    }
    if let Some(model) = update.model {
        vehicle.model = model;
    }
    if let Some(year) = update.year {
        vehicle.year = year;
    }
    if let Some(color) = update.color {
        vehicle.color = Some(color);
    }
    if let Some(plate) = update.license_plate {
        vehicle.license_plate = Some(plate);
    }
    if let Some(vin) = update.vin {
        vehicle.vin = Some(vin);
    }

    vehicles.save(&vehicle)?;
    println!("Updated {} ({})", vehicle.label(), vehicle.id);
    Ok(())
}

fn cmd_remove_vehicle(config: &Config, vehicle_ref: &str) -> Result<()> {
    let mut vehicles = open_vehicle_store(config)?;
    let vehicle = vehicles.resolve(vehicle_ref)?;
    vehicles.remove_vehicle(&vehicle.id)?;
    println!("Removed {} ({})", vehicle.label(), vehicle.id);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_log(
    config: &Config,
    output_format: OutputFormat,
    vehicle_ref: &str,
    service_type: String,
    mileage_km: u32,
    date: Option<&str>,
    cost: Option<f64>,
    provider: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    let mut vehicles = open_vehicle_store(config)?;
    let mut records = open_record_store(config)?;
    let mut schedules = open_schedule_store(config)?;
    let vehicle = vehicles.resolve(vehicle_ref)?;

    let record = log_service(
        &mut vehicles,
        &mut records,
        &mut schedules,
        &vehicle,
        LogServiceInput {
            service_type,
            date: parse_date_or_today(date)?,
            mileage_km,
            cost,
            provider,
            notes,
        },
    )?;

    output::output_logged_record(output_format, &vehicle, &record)
}

fn cmd_status(
    config: &Config,
    output_format: OutputFormat,
    vehicle_ref: Option<&str>,
    as_of: Option<&str>,
) -> Result<()> {
    let vehicles = open_vehicle_store(config)?;
    let schedules = open_schedule_store(config)?;
    let today = parse_date_or_today(as_of)?;

    let rows = match vehicle_ref {
        Some(reference) => {
            let vehicle = vehicles.resolve(reference)?;
            vehicle_status(&vehicle, &schedules, today)?
        }
        None => garage_status(&vehicles, &schedules, today)?,
    };

    output::output_status(output_format, &rows)
}

fn cmd_history(
    config: &Config,
    output_format: OutputFormat,
    vehicle_ref: Option<&str>,
    limit: Option<usize>,
) -> Result<()> {
    let vehicles = open_vehicle_store(config)?;
    let records = open_record_store(config)?;

    let mut history = match vehicle_ref {
        Some(reference) => {
            let vehicle = vehicles.resolve(reference)?;
            records.find_by_vehicle(&vehicle.id)?
        }
        None => records.find_all()?,
    };
    if let Some(limit) = limit {
        history.truncate(limit);
    }

    output::output_history(output_format, &history)
}

fn cmd_catalog(output_format: OutputFormat) -> Result<()> {
    output::output_catalog(output_format, &catalog::default_catalog())
}

fn cmd_import(config: &Config, vehicle_ref: &str, csv: PathBuf, dry_run: bool) -> Result<()> {
    let mut vehicles = open_vehicle_store(config)?;
    let mut records = open_record_store(config)?;
    let mut schedules = open_schedule_store(config)?;
    let vehicle = vehicles.resolve(vehicle_ref)?;

    let summary = import_history(
        &mut vehicles,
        &mut records,
        &mut schedules,
        &vehicle,
        &csv,
        dry_run,
    )?;

    if summary.dry_run {
        println!("Parsed {} records (dry run, nothing written)", summary.parsed);
    } else {
        println!("Imported {} of {} records", summary.imported, summary.parsed);
    }
    Ok(())
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_data_dir: Option<PathBuf>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }
    if let Some(dir) = set_data_dir {
        config.data_dir = Some(dir);
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !changed {
        print!("{}", config);
    }
    Ok(())
}
