//! Lookup table row types

use serde::{Deserialize, Serialize};
use sicetac_types::TravelMode;

use super::distance::Terrain;

/// Speed and fuel consumption for one terrain type
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TerrainRates {
    /// Average speed in km/h; 0 means the terrain contributes no hours
    pub speed_kmh: f64,
    /// Fuel yield in km per gallon; 0 means the terrain consumes no fuel
    pub km_per_gallon: f64,
}

/// Rates for all five terrain types
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TerrainRateSet {
    pub flat: TerrainRates,
    pub rolling: TerrainRates,
    pub mountain: TerrainRates,
    pub urban: TerrainRates,
    pub unpaved: TerrainRates,
}

impl TerrainRateSet {
    pub fn get(&self, terrain: Terrain) -> TerrainRates {
        match terrain {
            Terrain::Flat => self.flat,
            Terrain::Rolling => self.rolling,
            Terrain::Mountain => self.mountain,
            Terrain::Urban => self.urban,
            Terrain::Unpaved => self.unpaved,
        }
    }
}

/// Per-vehicle operating parameters for one month
///
/// Carries both the loaded (CARGADO) and the empty (VACIO) column families
/// of the parameter matrix; the engine picks one by travel mode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleParamRow {
    pub vehicle_type: String,
    pub month: u32,
    pub loaded: TerrainRateSet,
    pub empty: TerrainRateSet,
    pub fuel_price_per_gallon: f64,
    pub variable_cost_per_km: f64,
    pub empty_variable_cost_per_km: f64,
}

impl VehicleParamRow {
    pub fn rates(&self, mode: TravelMode) -> &TerrainRateSet {
        match mode {
            TravelMode::Loaded => &self.loaded,
            TravelMode::Empty => &self.empty,
        }
    }

    pub fn variable_cost(&self, mode: TravelMode) -> f64 {
        match mode {
            TravelMode::Loaded => self.variable_cost_per_km,
            TravelMode::Empty => self.empty_variable_cost_per_km,
        }
    }
}

/// Monthly fixed cost for a vehicle type and body type
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FixedCostRow {
    pub vehicle_type: String,
    pub month: u32,
    /// Uppercased and trimmed at load time
    pub body_type: String,
    pub monthly_cost: f64,
}

/// Toll total for a SICE route and axle configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TollRow {
    pub route_id: String,
    pub axle_config: String,
    pub value: f64,
}

/// Vehicle configuration metadata
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleConfig {
    pub vehicle_type: String,
    /// Axle configuration used as the toll lookup key
    pub axle_config: String,
    pub description: Option<String>,
}

impl VehicleConfig {
    /// Lenient spelling used when matching user input: uppercased with the
    /// leading "C" removed, so "C3S3" and "3S3" are the same vehicle.
    pub fn normalized_type(&self) -> String {
        normalize_vehicle_type(&self.vehicle_type)
    }
}

/// Normalize a vehicle type string for comparison
pub fn normalize_vehicle_type(s: &str) -> String {
    s.trim().to_uppercase().replace('C', "")
}
