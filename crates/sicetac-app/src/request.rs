//! Quote request type

use serde::{Deserialize, Serialize};
use sicetac_domain::model::DistanceProfile;
use sicetac_types::TravelMode;

/// Default stand-by rate per extra logistics hour (COP)
pub const DEFAULT_STANDBY_RATE: f64 = 150_000.0;

pub fn default_vehicle() -> String {
    "C3S3".to_string()
}

fn default_standby_rate() -> f64 {
    DEFAULT_STANDBY_RATE
}

/// One cost estimation request
///
/// Serde names match the original consultation payload, so existing
/// clients can post the same JSON body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuoteRequest {
    #[serde(rename = "origen")]
    pub origin: String,
    #[serde(rename = "destino")]
    pub destination: String,
    #[serde(rename = "vehiculo", default = "default_vehicle")]
    pub vehicle: String,
    /// Month code (e.g. 202601); defaults to the latest month on file
    #[serde(rename = "mes", default)]
    pub month: Option<u32>,
    #[serde(rename = "carroceria", default)]
    pub body_type: Option<String>,
    #[serde(rename = "valor_peaje_manual", default)]
    pub manual_toll: f64,

    /// Legacy explicit logistics hours, passed straight to the engine
    #[serde(rename = "horas_logisticas", default)]
    pub logistics_hours: Option<f64>,
    /// User-requested load/unload time; hours beyond 8 become stand-by
    #[serde(rename = "horas_logisticas_personalizadas", default)]
    pub custom_logistics_hours: Option<f64>,
    #[serde(rename = "tarifa_standby", default = "default_standby_rate")]
    pub standby_rate: f64,

    // manual distances, used only when the route is not registered
    #[serde(rename = "km_plano", default)]
    pub flat_km: f64,
    #[serde(rename = "km_ondulado", default)]
    pub rolling_km: f64,
    #[serde(rename = "km_montañoso", default)]
    pub mountain_km: f64,
    #[serde(rename = "km_urbano", default)]
    pub urban_km: f64,
    #[serde(rename = "km_despavimentado", default)]
    pub unpaved_km: f64,

    #[serde(rename = "modo_viaje", default)]
    pub travel_mode: TravelMode,
    #[serde(rename = "modo_tiempos_logisticos", default)]
    pub scenario_mode: bool,
}

impl QuoteRequest {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            vehicle: default_vehicle(),
            month: None,
            body_type: None,
            manual_toll: 0.0,
            logistics_hours: None,
            custom_logistics_hours: None,
            standby_rate: default_standby_rate(),
            flat_km: 0.0,
            rolling_km: 0.0,
            mountain_km: 0.0,
            urban_km: 0.0,
            unpaved_km: 0.0,
            travel_mode: TravelMode::Loaded,
            scenario_mode: false,
        }
    }

    pub fn manual_distances(&self) -> DistanceProfile {
        DistanceProfile {
            flat_km: self.flat_km,
            rolling_km: self.rolling_km,
            mountain_km: self.mountain_km,
            urban_km: self.urban_km,
            unpaved_km: self.unpaved_km,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_original_payload() {
        let json = r#"{
            "origen": "Medellin",
            "destino": "Bogota",
            "vehiculo": "C3S3",
            "mes": 202601,
            "carroceria": "GENERAL",
            "horas_logisticas_personalizadas": 10,
            "modo_viaje": "VACIO",
            "modo_tiempos_logisticos": true
        }"#;
        let request: QuoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.month, Some(202601));
        assert_eq!(request.custom_logistics_hours, Some(10.0));
        assert_eq!(request.travel_mode, TravelMode::Empty);
        assert!(request.scenario_mode);
        assert!((request.standby_rate - 150_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_minimal_payload_defaults() {
        let json = r#"{"origen": "A", "destino": "B"}"#;
        let request: QuoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.vehicle, "C3S3");
        assert_eq!(request.month, None);
        assert_eq!(request.travel_mode, TravelMode::Loaded);
        assert!(request.manual_distances().is_empty());
    }
}
