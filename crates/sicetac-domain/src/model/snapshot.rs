//! Immutable snapshot of the six lookup tables

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::route::{Municipality, RouteRow};
use super::tables::{FixedCostRow, TollRow, VehicleConfig, VehicleParamRow};

/// Read-only bundle of every lookup table, with keyed indexes built once.
///
/// A snapshot is never mutated after construction; the table store swaps a
/// whole `Arc<TableSnapshot>` on refresh so readers observe either the old
/// or the new tables, never a mix.
#[derive(Debug)]
pub struct TableSnapshot {
    pub municipalities: Vec<Municipality>,
    pub vehicles: Vec<VehicleConfig>,
    pub parameters: Vec<VehicleParamRow>,
    pub fixed_costs: Vec<FixedCostRow>,
    pub tolls: Vec<TollRow>,
    pub routes: Vec<RouteRow>,
    pub loaded_at: DateTime<Utc>,

    param_index: HashMap<(String, u32), usize>,
    fixed_index: HashMap<(String, u32, String), usize>,
    toll_index: HashMap<(String, String), usize>,
    vehicle_index: HashMap<String, usize>,
    route_index: HashMap<(String, String), Vec<usize>>,
}

impl TableSnapshot {
    pub fn new(
        municipalities: Vec<Municipality>,
        vehicles: Vec<VehicleConfig>,
        parameters: Vec<VehicleParamRow>,
        fixed_costs: Vec<FixedCostRow>,
        tolls: Vec<TollRow>,
        routes: Vec<RouteRow>,
    ) -> Self {
        let param_index = parameters
            .iter()
            .enumerate()
            .map(|(i, p)| ((p.vehicle_type.clone(), p.month), i))
            .collect();
        let fixed_index = fixed_costs
            .iter()
            .enumerate()
            .map(|(i, c)| ((c.vehicle_type.clone(), c.month, c.body_type.clone()), i))
            .collect();
        let toll_index = tolls
            .iter()
            .enumerate()
            .map(|(i, t)| ((t.route_id.clone(), t.axle_config.clone()), i))
            .collect();
        let vehicle_index = vehicles
            .iter()
            .enumerate()
            .map(|(i, v)| (v.vehicle_type.clone(), i))
            .collect();
        let mut route_index: HashMap<(String, String), Vec<usize>> = HashMap::new();
        for (i, r) in routes.iter().enumerate() {
            route_index
                .entry((r.origin_code.clone(), r.destination_code.clone()))
                .or_default()
                .push(i);
        }

        Self {
            municipalities,
            vehicles,
            parameters,
            fixed_costs,
            tolls,
            routes,
            loaded_at: Utc::now(),
            param_index,
            fixed_index,
            toll_index,
            vehicle_index,
            route_index,
        }
    }

    pub fn parameter(&self, vehicle_type: &str, month: u32) -> Option<&VehicleParamRow> {
        self.param_index
            .get(&(vehicle_type.to_string(), month))
            .map(|&i| &self.parameters[i])
    }

    pub fn fixed_cost(&self, vehicle_type: &str, month: u32, body_type: &str) -> Option<&FixedCostRow> {
        self.fixed_index
            .get(&(vehicle_type.to_string(), month, body_type.to_string()))
            .map(|&i| &self.fixed_costs[i])
    }

    pub fn toll(&self, route_id: &str, axle_config: &str) -> Option<&TollRow> {
        self.toll_index
            .get(&(route_id.to_string(), axle_config.to_string()))
            .map(|&i| &self.tolls[i])
    }

    pub fn vehicle(&self, vehicle_type: &str) -> Option<&VehicleConfig> {
        self.vehicle_index
            .get(vehicle_type)
            .map(|&i| &self.vehicles[i])
    }

    /// Route rows for one directed code pair (no reversed fallback here)
    pub fn routes_between(&self, origin_code: &str, destination_code: &str) -> Vec<&RouteRow> {
        self.route_index
            .get(&(origin_code.to_string(), destination_code.to_string()))
            .map(|idx| idx.iter().map(|&i| &self.routes[i]).collect())
            .unwrap_or_default()
    }

    /// Distinct months present in the parameter table, ascending
    pub fn months(&self) -> Vec<u32> {
        let mut months: Vec<u32> = self.parameters.iter().map(|p| p.month).collect();
        months.sort_unstable();
        months.dedup();
        months
    }

    pub fn latest_month(&self) -> Option<u32> {
        self.months().last().copied()
    }

    /// Distinct vehicle types from the configuration table, in table order
    pub fn vehicle_types(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for v in &self.vehicles {
            if !seen.contains(&v.vehicle_type) {
                seen.push(v.vehicle_type.clone());
            }
        }
        seen
    }

    /// Names of required tables that are empty, if any
    pub fn empty_tables(&self) -> Vec<&'static str> {
        let mut empty = Vec::new();
        if self.municipalities.is_empty() {
            empty.push("municipios");
        }
        if self.vehicles.is_empty() {
            empty.push("configuracion_vehicular");
        }
        if self.parameters.is_empty() {
            empty.push("parametros");
        }
        if self.fixed_costs.is_empty() {
            empty.push("costos_fijos");
        }
        if self.tolls.is_empty() {
            empty.push("peajes");
        }
        if self.routes.is_empty() {
            empty.push("rutas");
        }
        empty
    }
}
