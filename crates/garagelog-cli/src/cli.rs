//! CLI definition using clap

use clap::{Parser, Subcommand};
use garagelog_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "garagelog")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Personal vehicle maintenance tracker")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Data directory override
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a new vehicle
    AddVehicle {
        /// Manufacturer (e.g., "Toyota")
        #[arg(long)]
        make: String,

        /// Model name (e.g., "Corolla")
        #[arg(long)]
        model: String,

        /// Model year
        #[arg(long)]
        year: i32,

        /// Current odometer reading in km
        #[arg(long)]
        mileage: u32,

        /// Color
        #[arg(long)]
        color: Option<String>,

        /// License plate
        #[arg(long, short = 'p')]
        plate: Option<String>,

        /// Vehicle identification number
        #[arg(long)]
        vin: Option<String>,
    },

    /// List registered vehicles
    Vehicles,

    /// Update a registered vehicle's details
    UpdateVehicle {
        /// Vehicle (ID, unique ID prefix, or license plate)
        vehicle: String,

        /// New odometer reading in km
        #[arg(long)]
        mileage: Option<u32>,

        /// Manufacturer
        #[arg(long)]
        make: Option<String>,

        /// Model name
        #[arg(long)]
        model: Option<String>,

        /// Model year
        #[arg(long)]
        year: Option<i32>,

        /// Color
        #[arg(long)]
        color: Option<String>,

        /// License plate
        #[arg(long, short = 'p')]
        plate: Option<String>,

        /// Vehicle identification number
        #[arg(long)]
        vin: Option<String>,
    },

    /// Remove a vehicle from the garage
    RemoveVehicle {
        /// Vehicle (ID, unique ID prefix, or license plate)
        vehicle: String,
    },

    /// Log a performed service
    Log {
        /// Vehicle (ID, unique ID prefix, or license plate)
        vehicle: String,

        /// Service type name (see `catalog`)
        service_type: String,

        /// Odometer reading at time of service, in km
        #[arg(long)]
        mileage: u32,

        /// Service date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<String>,

        /// Cost
        #[arg(long)]
        cost: Option<f64>,

        /// Service provider
        #[arg(long)]
        provider: Option<String>,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Show the maintenance status board, most urgent first
    Status {
        /// Restrict to one vehicle (ID, unique ID prefix, or license plate)
        vehicle: Option<String>,

        /// Evaluation date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Show service history, newest first
    History {
        /// Restrict to one vehicle (ID, unique ID prefix, or license plate)
        vehicle: Option<String>,

        /// Maximum number of records to show
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// List the service type catalog with interval rules
    Catalog,

    /// Import service history from a CSV file
    Import {
        /// Vehicle (ID, unique ID prefix, or license plate)
        vehicle: String,

        /// Path to CSV file (service_type,date,mileage_km[,cost][,provider][,notes])
        csv: PathBuf,

        /// Parse and report without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set data directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
