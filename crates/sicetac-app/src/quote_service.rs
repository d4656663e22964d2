//! Quote service - the compute use case
//!
//! Wires the table store, the resolvers, and the scenario orchestrator
//! into one `compute(request) -> response` operation. Travel mode is a
//! plain request field threaded through every call; nothing here mutates
//! shared state.

use sicetac_domain::model::{
    CostBreakdown, DistanceProfile, Quote, QuoteResponse, RouteRow, RouteVariantQuote,
    TableSnapshot,
};
use sicetac_domain::model::tables::normalize_vehicle_type;
use sicetac_domain::repository::{PlaceResolver, RouteResolver, TableStore};
use sicetac_domain::service::{model_for, run_scenarios, ModelInput, ScenarioOptions};
use sicetac_infra::{SnapshotPlaceResolver, SnapshotRouteResolver};
use sicetac_types::{Error, Result};

use crate::request::QuoteRequest;

pub struct QuoteService<S: TableStore> {
    store: S,
}

impl<S: TableStore> QuoteService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Compute a cost estimate for one request
    pub fn compute(&self, request: &QuoteRequest) -> Result<QuoteResponse> {
        let snapshot = self.store.snapshot()?;

        let empty = snapshot.empty_tables();
        if !empty.is_empty() {
            return Err(Error::TablesUnavailable(empty.join(", ")));
        }

        let month = match request.month {
            Some(month) => month,
            None => snapshot.latest_month().ok_or_else(|| {
                Error::TablesUnavailable("no months in the parameter table".to_string())
            })?,
        };

        let places = SnapshotPlaceResolver::new(snapshot.clone());
        let origin = places
            .resolve(&request.origin)
            .ok_or_else(|| Error::PlaceNotFound(request.origin.clone()))?;
        let destination = places
            .resolve(&request.destination)
            .ok_or_else(|| Error::PlaceNotFound(request.destination.clone()))?;

        let routes =
            SnapshotRouteResolver::new(snapshot.clone()).find_route(&origin.code, &destination.code);

        let manual = request.manual_distances();
        manual.validate().map_err(Error::InvalidRequest)?;
        let (primary_route, distances) = match routes.first() {
            Some(route) => (Some(route), route.distances),
            None => {
                if manual.is_empty() {
                    return Err(Error::RouteNotFound {
                        origin: request.origin.clone(),
                        destination: request.destination.clone(),
                    });
                }
                (None, manual)
            }
        };

        let vehicle_type = canonical_vehicle_type(&snapshot, &request.vehicle)?;
        let months = snapshot.months();
        if !months.contains(&month) {
            return Err(Error::UnknownMonth {
                month,
                valid: months,
            });
        }

        let model = model_for(request.travel_mode);
        let run = |hours: Option<f64>,
                   route: Option<&RouteRow>,
                   distances: &DistanceProfile|
         -> Result<CostBreakdown> {
            model.compute(
                &snapshot,
                &ModelInput {
                    origin: &request.origin,
                    destination: &request.destination,
                    vehicle_type: &vehicle_type,
                    month,
                    distances,
                    manual_toll: request.manual_toll,
                    body_type: request.body_type.as_deref(),
                    toll_route: route,
                    logistics_hours: hours,
                },
            )
        };

        let outcome = run_scenarios(
            |hours| run(hours, primary_route, &distances),
            &ScenarioOptions {
                custom_hours: request.custom_logistics_hours,
                legacy_hours: request.logistics_hours,
                standby_rate: request.standby_rate,
                scenario_mode: request.scenario_mode,
            },
        )?;

        // each variant of a multi-route pair is independently runnable;
        // a variant that fails is skipped, not fatal
        let variants = if routes.len() > 1 {
            let computed: Vec<RouteVariantQuote> = routes
                .iter()
                .filter_map(|route| {
                    run(request.logistics_hours, Some(route), &route.distances)
                        .ok()
                        .map(|breakdown| RouteVariantQuote {
                            route_name: route.route_name.clone(),
                            route_id: route.route_id.clone(),
                            result: Some(Quote::from(breakdown)),
                        })
                })
                .collect();
            (!computed.is_empty()).then_some(computed)
        } else {
            None
        };

        Ok(QuoteResponse {
            sicetac: outcome.primary,
            travel_mode: request.travel_mode,
            variants,
            scenario_mode: request.scenario_mode.then_some(true),
            scenarios: outcome.scenarios,
        })
    }
}

/// Resolve user input to the canonical vehicle spelling of the tables.
///
/// Comparison is lenient (case-insensitive, leading "C" optional) but the
/// returned spelling is the table's own, so later lookups use one key.
fn canonical_vehicle_type(snapshot: &TableSnapshot, input: &str) -> Result<String> {
    let needle = normalize_vehicle_type(input);
    snapshot
        .vehicles
        .iter()
        .find(|v| v.normalized_type() == needle)
        .map(|v| v.vehicle_type.clone())
        .ok_or_else(|| Error::UnknownVehicle {
            vehicle: input.trim().to_string(),
            valid: snapshot.vehicle_types(),
        })
}
