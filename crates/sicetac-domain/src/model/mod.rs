//! Domain model types

pub mod breakdown;
pub mod distance;
pub mod route;
pub mod snapshot;
pub mod tables;

pub use breakdown::{
    CostBreakdown, Quote, QuoteResponse, RouteVariantQuote, ScenarioSet, StandbyDetail,
    TerrainBreakdown, TerrainDetail,
};
pub use distance::{DistanceProfile, Terrain};
pub use route::{Municipality, RouteRow};
pub use snapshot::TableSnapshot;
pub use tables::{FixedCostRow, TerrainRateSet, TerrainRates, TollRow, VehicleConfig, VehicleParamRow};
