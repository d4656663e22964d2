//! CLI definition using clap

use clap::{Parser, Subcommand};
use sicetac_types::{OutputFormat, TravelMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sicetac")]
#[command(version)]
#[command(about = "Freight transport cost estimation from the SICETAC reference tables")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the lookup table CSV files. Uses config value if not specified.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate the cost of one trip
    Quote {
        /// Origin municipality (name or DANE code variation)
        origin: String,

        /// Destination municipality
        destination: String,

        /// Vehicle configuration (e.g. C3S3). Uses config value if not specified.
        #[arg(long, short = 'v')]
        vehicle: Option<String>,

        /// Month code (e.g. 202601). Latest month on file if not specified.
        #[arg(long, short = 'm')]
        month: Option<u32>,

        /// Body type (e.g. GENERAL, ESTACAS)
        #[arg(long, short = 'b')]
        body: Option<String>,

        /// Travel mode (cargado, vacio)
        #[arg(long, default_value = "cargado", ignore_case = true)]
        mode: TravelMode,

        /// Manual toll total, used when the route has no registered tolls
        #[arg(long, default_value_t = 0.0)]
        toll: f64,

        /// Explicit logistics hours fed straight to the engine
        #[arg(long)]
        hours: Option<f64>,

        /// Requested load/unload hours; time beyond 8 h is billed as stand-by
        #[arg(long)]
        custom_hours: Option<f64>,

        /// Stand-by rate per extra hour. Uses config value if not specified.
        #[arg(long)]
        standby_rate: Option<f64>,

        /// Compute the three logistics-time scenarios
        #[arg(long)]
        scenarios: bool,

        /// Flat-terrain km, for routes not in the route table
        #[arg(long, default_value_t = 0.0)]
        km_flat: f64,

        /// Rolling-terrain km
        #[arg(long, default_value_t = 0.0)]
        km_rolling: f64,

        /// Mountain-terrain km
        #[arg(long, default_value_t = 0.0)]
        km_mountain: f64,

        /// Urban km
        #[arg(long, default_value_t = 0.0)]
        km_urban: f64,

        /// Unpaved km
        #[arg(long, default_value_t = 0.0)]
        km_unpaved: f64,
    },

    /// Resolve a place name to its DANE code
    Resolve {
        /// Place name to look up
        name: String,
    },

    /// List the known vehicle configurations
    Vehicles,

    /// Show lookup table status
    Tables {
        /// Reload the tables from disk
        #[arg(long)]
        refresh: bool,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the lookup table directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Set the default vehicle configuration
        #[arg(long)]
        set_vehicle: Option<String>,

        /// Set the default stand-by rate
        #[arg(long)]
        set_standby_rate: Option<f64>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
