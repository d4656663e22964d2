//! Scenario orchestrator
//!
//! Runs the cost model one or more times for different logistics-hour
//! assumptions and prices stand-by time beyond the 8-hour baseline.

use sicetac_types::Result;

use crate::model::{CostBreakdown, Quote, ScenarioSet, StandbyDetail};

use super::cost_model::round2;

/// Logistics hours included in the base tariff; anything beyond is
/// billed as stand-by.
pub const STANDBY_BASELINE_HOURS: f64 = 8.0;

/// How the orchestrator should run the engine
#[derive(Clone, Copy, Debug)]
pub struct ScenarioOptions {
    /// User-requested total load/unload time
    pub custom_hours: Option<f64>,
    /// Legacy explicit hours, passed through untouched when no custom
    /// hours are given
    pub legacy_hours: Option<f64>,
    /// Stand-by rate per hour beyond the baseline
    pub standby_rate: f64,
    /// Run the three named scenarios instead of a single quote
    pub scenario_mode: bool,
}

/// Orchestrator result: the primary quote plus, in scenario mode, the
/// full scenario set.
#[derive(Clone, Debug, Default)]
pub struct ScenarioOutcome {
    pub primary: Option<Quote>,
    pub scenarios: Option<ScenarioSet>,
}

/// Run the engine via `run_model` according to `opts`.
///
/// `run_model` receives the logistics hours for one engine invocation
/// (`None` lets the engine apply its 4/8-hour policy). In scenario mode
/// each scenario fails independently; otherwise errors propagate.
pub fn run_scenarios<F>(run_model: F, opts: &ScenarioOptions) -> Result<ScenarioOutcome>
where
    F: Fn(Option<f64>) -> Result<CostBreakdown>,
{
    if opts.scenario_mode {
        let mobilization = run_model(Some(0.0)).ok().map(Quote::from);
        let sicetac_default = run_model(None).ok().map(Quote::from);

        // in scenario mode the stand-by annotation is attached even
        // without excess hours, so the user sees their input echoed back
        let custom = opts
            .custom_hours
            .and_then(|user_hours| run_custom(&run_model, user_hours, opts.standby_rate).ok());

        let primary = sicetac_default
            .clone()
            .or_else(|| mobilization.clone())
            .or_else(|| custom.clone());

        return Ok(ScenarioOutcome {
            primary,
            scenarios: Some(ScenarioSet {
                mobilization,
                sicetac_default,
                custom,
            }),
        });
    }

    let primary = match opts.custom_hours {
        Some(user_hours) => {
            let quote = run_custom(&run_model, user_hours, opts.standby_rate)?;
            let extra_hours = (user_hours - STANDBY_BASELINE_HOURS).max(0.0);
            if extra_hours > 0.0 {
                quote
            } else {
                // no capping needed, plain quote without annotation
                Quote::from(quote.breakdown)
            }
        }
        None => Quote::from(run_model(opts.legacy_hours)?),
    };

    Ok(ScenarioOutcome {
        primary: Some(primary),
        scenarios: None,
    })
}

/// Run with user hours capped at the baseline and annotate the stand-by
/// surcharge for the excess.
fn run_custom<F>(run_model: &F, user_hours: f64, standby_rate: f64) -> Result<Quote>
where
    F: Fn(Option<f64>) -> Result<CostBreakdown>,
{
    let base_hours = user_hours.min(STANDBY_BASELINE_HOURS);
    let extra_hours = (user_hours - STANDBY_BASELINE_HOURS).max(0.0);

    let breakdown = run_model(Some(base_hours))?;
    let standby_cost = round2(extra_hours * standby_rate);
    let adjusted_total = round2(breakdown.total + standby_cost);

    Ok(Quote {
        standby: Some(StandbyDetail {
            user_hours,
            base_hours,
            extra_hours,
            standby_rate,
            standby_cost,
            adjusted_total,
        }),
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TerrainBreakdown;
    use sicetac_types::Error;

    fn fake_breakdown(logistics_hours: f64) -> CostBreakdown {
        CostBreakdown {
            origin: "A".into(),
            destination: "B".into(),
            vehicle_type: "3S3".into(),
            body_type: "GENERAL".into(),
            month: 202601,
            travel_hours: 5.0,
            logistics_hours,
            trips_per_month: 24.0,
            fixed_cost: 100_000.0,
            fuel_cost: 200_000.0,
            tolls: 0.0,
            variable_cost: 300_000.0,
            contingency: 22_500.0,
            overhead: 124_389.94,
            total: 746_889.94,
            detail: TerrainBreakdown::default(),
        }
    }

    fn runner(hours: Option<f64>) -> Result<CostBreakdown> {
        Ok(fake_breakdown(hours.unwrap_or(4.0)))
    }

    #[test]
    fn test_standby_surcharge_above_baseline() {
        let opts = ScenarioOptions {
            custom_hours: Some(10.0),
            legacy_hours: None,
            standby_rate: 150_000.0,
            scenario_mode: false,
        };
        let outcome = run_scenarios(runner, &opts).unwrap();
        let quote = outcome.primary.unwrap();
        let standby = quote.standby.unwrap();
        assert!((standby.base_hours - 8.0).abs() < 1e-9);
        assert!((standby.extra_hours - 2.0).abs() < 1e-9);
        assert!((standby.standby_cost - 300_000.0).abs() < 1e-9);
        assert!((standby.adjusted_total - (746_889.94 + 300_000.0)).abs() < 1e-9);
        assert!((quote.breakdown.logistics_hours - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_hours_below_baseline_no_surcharge() {
        let opts = ScenarioOptions {
            custom_hours: Some(6.0),
            legacy_hours: None,
            standby_rate: 150_000.0,
            scenario_mode: false,
        };
        let outcome = run_scenarios(runner, &opts).unwrap();
        let quote = outcome.primary.unwrap();
        assert!(quote.standby.is_none());
        assert!((quote.breakdown.logistics_hours - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_legacy_hours_passthrough() {
        let opts = ScenarioOptions {
            custom_hours: None,
            legacy_hours: Some(3.0),
            standby_rate: 150_000.0,
            scenario_mode: false,
        };
        let outcome = run_scenarios(runner, &opts).unwrap();
        let quote = outcome.primary.unwrap();
        assert!((quote.breakdown.logistics_hours - 3.0).abs() < 1e-9);
        assert!(outcome.scenarios.is_none());
    }

    #[test]
    fn test_scenario_mode_without_custom_hours() {
        let opts = ScenarioOptions {
            custom_hours: None,
            legacy_hours: None,
            standby_rate: 150_000.0,
            scenario_mode: true,
        };
        let outcome = run_scenarios(runner, &opts).unwrap();
        let scenarios = outcome.scenarios.unwrap();
        assert!(scenarios.mobilization.is_some());
        assert!(scenarios.sicetac_default.is_some());
        assert!(scenarios.custom.is_none());
        // default-policy result is the primary
        let primary = outcome.primary.unwrap();
        assert!((primary.breakdown.logistics_hours - 4.0).abs() < 1e-9);
        assert!(
            (scenarios.mobilization.unwrap().breakdown.logistics_hours - 0.0).abs() < 1e-9
        );
    }

    #[test]
    fn test_scenario_mode_custom_always_annotated() {
        let opts = ScenarioOptions {
            custom_hours: Some(5.0),
            legacy_hours: None,
            standby_rate: 150_000.0,
            scenario_mode: true,
        };
        let outcome = run_scenarios(runner, &opts).unwrap();
        let custom = outcome.scenarios.unwrap().custom.unwrap();
        let standby = custom.standby.unwrap();
        assert!((standby.user_hours - 5.0).abs() < 1e-9);
        assert!((standby.extra_hours - 0.0).abs() < 1e-9);
        assert!((standby.standby_cost - 0.0).abs() < 1e-9);
        assert!((standby.adjusted_total - custom.breakdown.total).abs() < 1e-9);
    }

    #[test]
    fn test_scenario_failures_are_independent() {
        // engine that cannot run the zero-hour mobilization scenario
        let runner = |hours: Option<f64>| match hours {
            Some(h) if h == 0.0 => Err(Error::Computation("zero cycle".into())),
            _ => Ok(fake_breakdown(hours.unwrap_or(4.0))),
        };
        let opts = ScenarioOptions {
            custom_hours: None,
            legacy_hours: None,
            standby_rate: 150_000.0,
            scenario_mode: true,
        };
        let outcome = run_scenarios(runner, &opts).unwrap();
        let scenarios = outcome.scenarios.unwrap();
        assert!(scenarios.mobilization.is_none());
        assert!(scenarios.sicetac_default.is_some());
        assert!(outcome.primary.is_some());
    }

    #[test]
    fn test_non_scenario_errors_propagate() {
        let runner = |_: Option<f64>| -> Result<CostBreakdown> {
            Err(Error::Computation("boom".into()))
        };
        let opts = ScenarioOptions {
            custom_hours: None,
            legacy_hours: None,
            standby_rate: 150_000.0,
            scenario_mode: false,
        };
        assert!(run_scenarios(runner, &opts).is_err());
    }
}
