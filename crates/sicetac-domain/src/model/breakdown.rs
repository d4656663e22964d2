//! Cost breakdown and response types
//!
//! Serde renames reproduce the Spanish wire keys of the original SICETAC
//! API, so JSON output stays drop-in compatible.

use serde::{Deserialize, Serialize};
use sicetac_types::TravelMode;

use super::distance::Terrain;

/// Kilometers, hours and fuel gallons for one terrain type
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TerrainDetail {
    pub km: f64,
    #[serde(rename = "horas")]
    pub hours: f64,
    #[serde(rename = "gal")]
    pub gallons: f64,
}

/// Per-terrain detail block (`detalle_via`)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TerrainBreakdown {
    #[serde(rename = "plano")]
    pub flat: TerrainDetail,
    #[serde(rename = "ondulado")]
    pub rolling: TerrainDetail,
    #[serde(rename = "montaña")]
    pub mountain: TerrainDetail,
    #[serde(rename = "urbano")]
    pub urban: TerrainDetail,
    #[serde(rename = "despavimentado")]
    pub unpaved: TerrainDetail,
}

impl TerrainBreakdown {
    pub fn get(&self, terrain: Terrain) -> TerrainDetail {
        match terrain {
            Terrain::Flat => self.flat,
            Terrain::Rolling => self.rolling,
            Terrain::Mountain => self.mountain,
            Terrain::Urban => self.urban,
            Terrain::Unpaved => self.unpaved,
        }
    }

    pub fn set(&mut self, terrain: Terrain, detail: TerrainDetail) {
        match terrain {
            Terrain::Flat => self.flat = detail,
            Terrain::Rolling => self.rolling = detail,
            Terrain::Mountain => self.mountain = detail,
            Terrain::Urban => self.urban = detail,
            Terrain::Unpaved => self.unpaved = detail,
        }
    }
}

/// Output of one cost model run
///
/// The total field is `total_viaje` for both the loaded and the empty
/// variant; the historical `total_viaje_vacio` spelling is normalized away
/// inside the engine contract.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    #[serde(rename = "origen")]
    pub origin: String,
    #[serde(rename = "destino")]
    pub destination: String,
    #[serde(rename = "configuracion")]
    pub vehicle_type: String,
    #[serde(rename = "carroceria")]
    pub body_type: String,
    #[serde(rename = "mes")]
    pub month: u32,
    /// Travel hours over all terrains, rounded to 2 decimals
    #[serde(rename = "horas_recorrido")]
    pub travel_hours: f64,
    #[serde(rename = "horas_logisticas")]
    pub logistics_hours: f64,
    #[serde(rename = "recorridos_mes")]
    pub trips_per_month: f64,
    #[serde(rename = "costo_fijo")]
    pub fixed_cost: f64,
    #[serde(rename = "combustible")]
    pub fuel_cost: f64,
    #[serde(rename = "peajes")]
    pub tolls: f64,
    #[serde(rename = "mantenimiento")]
    pub variable_cost: f64,
    #[serde(rename = "imprevistos")]
    pub contingency: f64,
    #[serde(rename = "otros_costos")]
    pub overhead: f64,
    #[serde(rename = "total_viaje")]
    pub total: f64,
    #[serde(rename = "detalle_via")]
    pub detail: TerrainBreakdown,
}

/// Stand-by surcharge annotation for user-specified logistics hours
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandbyDetail {
    #[serde(rename = "horas_logisticas_usuario")]
    pub user_hours: f64,
    /// Hours actually fed to the engine, capped at 8
    #[serde(rename = "horas_logisticas_base")]
    pub base_hours: f64,
    #[serde(rename = "horas_standby_adicionales")]
    pub extra_hours: f64,
    #[serde(rename = "tarifa_standby")]
    pub standby_rate: f64,
    #[serde(rename = "costo_standby")]
    pub standby_cost: f64,
    #[serde(rename = "total_viaje_ajustado")]
    pub adjusted_total: f64,
}

/// A cost breakdown plus its optional stand-by annotation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(flatten)]
    pub breakdown: CostBreakdown,
    #[serde(flatten)]
    pub standby: Option<StandbyDetail>,
}

impl From<CostBreakdown> for Quote {
    fn from(breakdown: CostBreakdown) -> Self {
        Quote {
            breakdown,
            standby: None,
        }
    }
}

impl Quote {
    /// Total including the stand-by surcharge when present
    pub fn effective_total(&self) -> f64 {
        self.standby
            .map(|s| s.adjusted_total)
            .unwrap_or(self.breakdown.total)
    }
}

/// The three logistics-time scenarios, each independently fallible
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSet {
    #[serde(rename = "MOVILIZACION")]
    pub mobilization: Option<Quote>,
    #[serde(rename = "SICETAC_DEFECTO")]
    pub sicetac_default: Option<Quote>,
    #[serde(rename = "PERSONALIZADO")]
    pub custom: Option<Quote>,
}

/// Result for one route variant sharing the same code pair
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteVariantQuote {
    #[serde(rename = "NOMBRE_SICE")]
    pub route_name: Option<String>,
    #[serde(rename = "ID_SICE")]
    pub route_id: String,
    #[serde(rename = "RESULTADO")]
    pub result: Option<Quote>,
}

/// Full response of one compute call
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    #[serde(rename = "SICETAC")]
    pub sicetac: Option<Quote>,
    #[serde(rename = "MODO_VIAJE")]
    pub travel_mode: TravelMode,
    #[serde(rename = "SICETAC_VARIANTES", skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<RouteVariantQuote>>,
    #[serde(rename = "MODO_TIEMPOS_LOGISTICOS", skip_serializing_if = "Option::is_none")]
    pub scenario_mode: Option<bool>,
    #[serde(
        rename = "ESCENARIOS_TIEMPOS_LOGISTICOS",
        skip_serializing_if = "Option::is_none"
    )]
    pub scenarios: Option<ScenarioSet>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown() -> CostBreakdown {
        CostBreakdown {
            origin: "MEDELLIN".into(),
            destination: "BOGOTA".into(),
            vehicle_type: "3S3".into(),
            body_type: "GENERAL".into(),
            month: 202601,
            travel_hours: 4.0,
            logistics_hours: 4.0,
            trips_per_month: 36.0,
            fixed_cost: 100_000.0,
            fuel_cost: 220_000.0,
            tolls: 50_000.0,
            variable_cost: 370_000.0,
            contingency: 27_750.0,
            overhead: 153_414.88,
            total: 921_164.88,
            detail: TerrainBreakdown::default(),
        }
    }

    #[test]
    fn test_wire_keys() {
        let json = serde_json::to_value(breakdown()).unwrap();
        assert!(json.get("total_viaje").is_some());
        assert!(json.get("recorridos_mes").is_some());
        assert!(json.get("detalle_via").unwrap().get("montaña").is_some());
        assert!(json.get("total").is_none());
    }

    #[test]
    fn test_standby_flattened_only_when_present() {
        let quote = Quote::from(breakdown());
        let json = serde_json::to_value(&quote).unwrap();
        assert!(json.get("costo_standby").is_none());

        let with_standby = Quote {
            standby: Some(StandbyDetail {
                user_hours: 10.0,
                base_hours: 8.0,
                extra_hours: 2.0,
                standby_rate: 150_000.0,
                standby_cost: 300_000.0,
                adjusted_total: 1_221_164.88,
            }),
            ..quote
        };
        let json = serde_json::to_value(&with_standby).unwrap();
        assert_eq!(json["costo_standby"], 300_000.0);
        assert_eq!(json["total_viaje"], 921_164.88);
        assert!((with_standby.effective_total() - 1_221_164.88).abs() < 1e-9);
    }
}
