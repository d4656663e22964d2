//! SICETAC cost model engine
//!
//! Deterministic pipeline from route distances and lookup rows to a full
//! trip cost breakdown. The loaded and empty variants are two
//! implementations of the same [`CostModel`] capability, selected by
//! travel mode at the call site.

use sicetac_types::{Error, Result, TravelMode};

use crate::model::{
    CostBreakdown, DistanceProfile, RouteRow, TableSnapshot, Terrain, TerrainBreakdown,
    TerrainDetail,
};

/// Available operating hours per month; fixed policy constant
pub const OPERATING_HOURS_PER_MONTH: f64 = 288.0;

/// Contingency share of the variable cost (7.5%)
pub const CONTINGENCY_RATE: f64 = 0.075;

/// Administrative/insurance loading on fixed + variable cost
pub const OVERHEAD_RATE: f64 = 0.199824;

/// Round to 2 decimal places; each aggregate in the breakdown is rounded
/// independently, the intermediate roundings are part of the contract.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Round to 4 decimal places (trips per month)
pub fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

/// Load/unload time allowance when the caller supplies none:
/// 4 hours for short trips, 8 for trips of 8 travel hours or more.
pub fn default_logistics_hours(travel_hours: f64) -> f64 {
    if travel_hours < 8.0 {
        4.0
    } else {
        8.0
    }
}

/// One engine invocation
#[derive(Clone, Copy, Debug)]
pub struct ModelInput<'a> {
    pub origin: &'a str,
    pub destination: &'a str,
    /// Canonical vehicle type as spelled in the tables
    pub vehicle_type: &'a str,
    pub month: u32,
    pub distances: &'a DistanceProfile,
    /// Used only when no official route row is given
    pub manual_toll: f64,
    pub body_type: Option<&'a str>,
    /// Official route whose id keys the toll table
    pub toll_route: Option<&'a RouteRow>,
    /// Explicit logistics hours; `None` applies the 4/8-hour policy
    pub logistics_hours: Option<f64>,
}

/// The cost model capability; one implementation per travel mode
pub trait CostModel {
    fn mode(&self) -> TravelMode;

    fn compute(&self, snapshot: &TableSnapshot, input: &ModelInput) -> Result<CostBreakdown> {
        compute_breakdown(snapshot, input, self.mode())
    }
}

/// Engine variant for a loaded trip (CARGADO parameter columns)
pub struct LoadedModel;

/// Engine variant for the unladen return trip (VACIO parameter columns)
pub struct EmptyModel;

impl CostModel for LoadedModel {
    fn mode(&self) -> TravelMode {
        TravelMode::Loaded
    }
}

impl CostModel for EmptyModel {
    fn mode(&self) -> TravelMode {
        TravelMode::Empty
    }
}

static LOADED: LoadedModel = LoadedModel;
static EMPTY: EmptyModel = EmptyModel;

/// Engine selection as a pure function of the requested mode
pub fn model_for(mode: TravelMode) -> &'static dyn CostModel {
    match mode {
        TravelMode::Loaded => &LOADED,
        TravelMode::Empty => &EMPTY,
    }
}

fn compute_breakdown(
    snapshot: &TableSnapshot,
    input: &ModelInput,
    mode: TravelMode,
) -> Result<CostBreakdown> {
    input
        .distances
        .validate()
        .map_err(Error::InvalidRequest)?;

    let param = snapshot
        .parameter(input.vehicle_type, input.month)
        .ok_or_else(|| Error::ParameterNotFound {
            vehicle: input.vehicle_type.to_string(),
            month: input.month,
        })?;
    let rates = param.rates(mode);

    // Hours and fuel by terrain; a zero rate contributes zero, not an error
    let mut detail = TerrainBreakdown::default();
    let mut travel_hours = 0.0;
    let mut total_gallons = 0.0;
    for terrain in Terrain::ALL {
        let km = input.distances.km(terrain);
        let r = rates.get(terrain);
        let hours = if r.speed_kmh > 0.0 { km / r.speed_kmh } else { 0.0 };
        let gallons = if r.km_per_gallon > 0.0 {
            km / r.km_per_gallon
        } else {
            0.0
        };
        travel_hours += hours;
        total_gallons += gallons;
        detail.set(
            terrain,
            TerrainDetail {
                km,
                hours,
                gallons,
            },
        );
    }

    let logistics_hours = input
        .logistics_hours
        .unwrap_or_else(|| default_logistics_hours(travel_hours));
    let cycle_hours = travel_hours + logistics_hours;
    if cycle_hours <= 0.0 {
        return Err(Error::Computation(
            "total cycle hours is zero; nothing to estimate".to_string(),
        ));
    }
    let trips_per_month = round4(OPERATING_HOURS_PER_MONTH / cycle_hours).max(1.0);

    let body_type = input
        .body_type
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "GENERAL".to_string());
    let fixed_row = snapshot
        .fixed_cost(input.vehicle_type, input.month, &body_type)
        .ok_or_else(|| Error::FixedCostNotFound {
            vehicle: input.vehicle_type.to_string(),
            month: input.month,
            body_type: body_type.clone(),
        })?;
    let fixed_cost = round2(fixed_row.monthly_cost / trips_per_month);

    let fuel_cost = round2(total_gallons * param.fuel_price_per_gallon);

    let toll_value = match input.toll_route {
        Some(route) => {
            let config = snapshot.vehicle(input.vehicle_type).ok_or_else(|| {
                Error::UnknownVehicle {
                    vehicle: input.vehicle_type.to_string(),
                    valid: snapshot.vehicle_types(),
                }
            })?;
            snapshot
                .toll(&route.route_id, &config.axle_config)
                .map(|t| t.value)
                .unwrap_or(0.0)
        }
        None => input.manual_toll,
    };

    let total_km = input.distances.total_km();
    let variable_cost = round2(total_km * param.variable_cost(mode));
    let contingency = round2(variable_cost * CONTINGENCY_RATE);
    let total_variable = round2(fuel_cost + toll_value + variable_cost + contingency);

    let overhead = round2((fixed_cost + total_variable) * OVERHEAD_RATE);
    let total = round2(fixed_cost + total_variable + overhead);

    Ok(CostBreakdown {
        origin: input.origin.to_string(),
        destination: input.destination.to_string(),
        vehicle_type: input.vehicle_type.to_string(),
        body_type,
        month: input.month,
        travel_hours: round2(travel_hours),
        logistics_hours,
        trips_per_month,
        fixed_cost,
        fuel_cost,
        tolls: toll_value,
        variable_cost,
        contingency,
        overhead,
        total,
        detail,
    })
}
