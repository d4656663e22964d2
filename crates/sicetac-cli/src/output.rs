//! Output formatting module

use sicetac_domain::model::{Quote, QuoteResponse, ScenarioSet, TableSnapshot, Terrain};
use sicetac_types::{OutputFormat, Result};

pub fn output_quote(output_format: OutputFormat, response: &QuoteResponse) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(response)?;
        println!("{}", content);
        return Ok(());
    }

    // Table format
    println!("\nCost Estimate ({})", response.travel_mode);
    println!("==============================");

    match response.sicetac {
        Some(ref quote) => print_quote(quote),
        None => println!("No primary estimate could be computed."),
    }

    if let Some(ref scenarios) = response.scenarios {
        print_scenarios(scenarios);
    }

    if let Some(ref variants) = response.variants {
        println!("\nRoute variants");
        println!("--------------");
        for variant in variants {
            let name = variant.route_name.as_deref().unwrap_or("(unnamed)");
            match variant.result {
                Some(ref quote) => println!(
                    "  [{}] {:<40} $ {:>15.2}",
                    variant.route_id,
                    name,
                    quote.effective_total()
                ),
                None => println!("  [{}] {:<40} (not computable)", variant.route_id, name),
            }
        }
    }

    Ok(())
}

fn print_quote(quote: &Quote) {
    let b = &quote.breakdown;

    println!("Origin:          {}", b.origin);
    println!("Destination:     {}", b.destination);
    println!("Vehicle:         {}", b.vehicle_type);
    println!("Body type:       {}", b.body_type);
    println!("Month:           {}", b.month);

    println!("\n--- Trip profile ---");
    for terrain in Terrain::ALL {
        let detail = b.detail.get(terrain);
        if detail.km > 0.0 {
            println!(
                "  {:<15} {:>8.1} km  {:>6.2} h  {:>7.2} gal",
                terrain.label(),
                detail.km,
                detail.hours,
                detail.gallons
            );
        }
    }
    println!("Travel hours:    {:.2}", b.travel_hours);
    println!("Logistics hours: {:.2}", b.logistics_hours);
    println!("Trips per month: {:.4}", b.trips_per_month);

    println!("\n--- Costs (COP) ---");
    println!("Fixed cost:      $ {:>15.2}", b.fixed_cost);
    println!("Fuel:            $ {:>15.2}", b.fuel_cost);
    println!("Tolls:           $ {:>15.2}", b.tolls);
    println!("Maintenance:     $ {:>15.2}", b.variable_cost);
    println!("Contingency:     $ {:>15.2}", b.contingency);
    println!("Overhead:        $ {:>15.2}", b.overhead);
    println!("Trip total:      $ {:>15.2}", b.total);

    if let Some(ref standby) = quote.standby {
        println!("\n--- Stand-by ---");
        println!("Requested hours: {:.2}", standby.user_hours);
        println!("Base hours:      {:.2}", standby.base_hours);
        println!("Extra hours:     {:.2}", standby.extra_hours);
        println!("Rate per hour:   $ {:>15.2}", standby.standby_rate);
        println!("Stand-by cost:   $ {:>15.2}", standby.standby_cost);
        println!("Adjusted total:  $ {:>15.2}", standby.adjusted_total);
    }
}

fn print_scenarios(scenarios: &ScenarioSet) {
    println!("\nLogistics-time scenarios");
    println!("------------------------");
    print_scenario_line("Mobilization (0 h)", &scenarios.mobilization);
    print_scenario_line("SICETAC default", &scenarios.sicetac_default);
    print_scenario_line("Custom hours", &scenarios.custom);
}

fn print_scenario_line(label: &str, quote: &Option<Quote>) {
    match quote {
        Some(quote) => println!(
            "  {:<20} {:>6.2} h  $ {:>15.2}",
            label,
            quote.breakdown.logistics_hours,
            quote.effective_total()
        ),
        None => println!("  {:<20} (not computable)", label),
    }
}

pub fn output_vehicles(output_format: OutputFormat, snapshot: &TableSnapshot) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&snapshot.vehicles)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nVehicle Configurations");
    println!("======================");
    for vehicle in &snapshot.vehicles {
        println!(
            "  {:<8} axles {:<6} {}",
            vehicle.vehicle_type,
            vehicle.axle_config,
            vehicle.description.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

pub fn output_tables(output_format: OutputFormat, snapshot: &TableSnapshot) -> Result<()> {
    let counts = [
        ("municipios", snapshot.municipalities.len()),
        ("configuracion_vehicular", snapshot.vehicles.len()),
        ("parametros", snapshot.parameters.len()),
        ("costos_fijos", snapshot.fixed_costs.len()),
        ("peajes", snapshot.tolls.len()),
        ("rutas", snapshot.routes.len()),
    ];

    if output_format == OutputFormat::Json {
        let value = serde_json::json!({
            "loaded_at": snapshot.loaded_at.to_rfc3339(),
            "rows": counts
                .iter()
                .map(|(name, n)| (name.to_string(), *n))
                .collect::<std::collections::BTreeMap<_, _>>(),
            "months": snapshot.months(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("\nLookup Tables");
    println!("=============");
    println!("Loaded at: {}", snapshot.loaded_at.to_rfc3339());
    println!();
    for (name, n) in counts {
        println!("  {:<24} {:>7} rows", name, n);
    }
    let months = snapshot.months();
    if let (Some(first), Some(last)) = (months.first(), months.last()) {
        println!();
        println!("Months on file: {} ({} to {})", months.len(), first, last);
    }
    Ok(())
}
