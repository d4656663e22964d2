//! Command handlers

use std::path::PathBuf;

use sicetac_app::{Config, QuoteRequest, QuoteService};
use sicetac_domain::repository::{PlaceResolver, TableStore};
use sicetac_infra::{CsvTableStore, SnapshotPlaceResolver};
use sicetac_types::{Error, OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output::{output_quote, output_tables, output_vehicles};

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Quote {
            origin,
            destination,
            vehicle,
            month,
            body,
            mode,
            toll,
            hours,
            custom_hours,
            standby_rate,
            scenarios,
            km_flat,
            km_rolling,
            km_mountain,
            km_urban,
            km_unpaved,
        } => {
            let mut request = QuoteRequest::new(origin.clone(), destination.clone());
            request.vehicle = vehicle.clone().unwrap_or_else(|| config.default_vehicle.clone());
            request.month = *month;
            request.body_type = body.clone();
            request.travel_mode = *mode;
            request.manual_toll = *toll;
            request.logistics_hours = *hours;
            request.custom_logistics_hours = *custom_hours;
            request.standby_rate = standby_rate.unwrap_or(config.default_standby_rate);
            request.scenario_mode = *scenarios;
            request.flat_km = *km_flat;
            request.rolling_km = *km_rolling;
            request.mountain_km = *km_mountain;
            request.urban_km = *km_urban;
            request.unpaved_km = *km_unpaved;

            cmd_quote(&config, cli.data_dir.clone(), format, request)
        }

        Commands::Resolve { name } => cmd_resolve(&config, cli.data_dir.clone(), format, name),

        Commands::Vehicles => cmd_vehicles(&config, cli.data_dir.clone(), format),

        Commands::Tables { refresh } => cmd_tables(&config, cli.data_dir.clone(), format, *refresh),

        Commands::Config {
            show,
            set_data_dir,
            set_vehicle,
            set_standby_rate,
            set_output,
            reset,
        } => cmd_config(
            *show,
            set_data_dir.clone(),
            set_vehicle.clone(),
            *set_standby_rate,
            *set_output,
            *reset,
        ),
    }
}

fn open_store(config: &Config, data_dir: Option<PathBuf>) -> Result<CsvTableStore> {
    let dir = match data_dir {
        Some(dir) => dir,
        None => config.data_dir()?,
    };
    if !dir.is_dir() {
        return Err(Error::TablesUnavailable(format!(
            "table directory not found: {}",
            dir.display()
        )));
    }
    Ok(CsvTableStore::new(dir))
}

fn cmd_quote(
    config: &Config,
    data_dir: Option<PathBuf>,
    format: OutputFormat,
    request: QuoteRequest,
) -> Result<()> {
    let service = QuoteService::new(open_store(config, data_dir)?);
    let response = service.compute(&request)?;
    output_quote(format, &response)
}

fn cmd_resolve(
    config: &Config,
    data_dir: Option<PathBuf>,
    format: OutputFormat,
    name: &str,
) -> Result<()> {
    let store = open_store(config, data_dir)?;
    let snapshot = store.snapshot()?;
    let place = SnapshotPlaceResolver::new(snapshot)
        .resolve(name)
        .ok_or_else(|| Error::PlaceNotFound(name.to_string()))?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&place)?);
    } else {
        println!("Place:       {}", place.display_name);
        println!("DANE code:   {}", place.code);
        if let Some(ref department) = place.department {
            println!("Department:  {}", department);
        }
    }
    Ok(())
}

fn cmd_vehicles(config: &Config, data_dir: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let store = open_store(config, data_dir)?;
    let snapshot = store.snapshot()?;
    output_vehicles(format, &snapshot)
}

fn cmd_tables(
    config: &Config,
    data_dir: Option<PathBuf>,
    format: OutputFormat,
    refresh: bool,
) -> Result<()> {
    let store = open_store(config, data_dir)?;
    let snapshot = store.refresh(refresh)?;
    output_tables(format, &snapshot)
}

fn cmd_config(
    show: bool,
    set_data_dir: Option<PathBuf>,
    set_vehicle: Option<String>,
    set_standby_rate: Option<f64>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults.");
        println!();
        print!("{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(dir) = set_data_dir {
        config.data_dir = Some(dir);
        changed = true;
    }
    if let Some(vehicle) = set_vehicle {
        config.default_vehicle = vehicle.trim().to_uppercase();
        changed = true;
    }
    if let Some(rate) = set_standby_rate {
        if rate < 0.0 {
            return Err(Error::InvalidRequest(
                "stand-by rate must not be negative".to_string(),
            ));
        }
        config.default_standby_rate = rate;
        changed = true;
    }
    if let Some(output) = set_output {
        config.output_format = output;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration updated.");
        println!();
        print!("{}", config);
    } else if show {
        print!("{}", config);
    } else {
        println!("No option given. Use --show to display the configuration.");
    }
    Ok(())
}
