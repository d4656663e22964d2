//! Domain services

pub mod cost_model;
pub mod scenario;

pub use cost_model::{
    default_logistics_hours, model_for, round2, round4, CostModel, EmptyModel, LoadedModel,
    ModelInput, CONTINGENCY_RATE, OPERATING_HOURS_PER_MONTH, OVERHEAD_RATE,
};
pub use scenario::{run_scenarios, ScenarioOptions, ScenarioOutcome, STANDBY_BASELINE_HOURS};
