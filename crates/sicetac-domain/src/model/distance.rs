//! Terrain types and route distance profiles

use serde::{Deserialize, Serialize};

/// The five terrain categories the SICETAC model distinguishes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    Flat,
    Rolling,
    Mountain,
    Urban,
    Unpaved,
}

impl Terrain {
    pub const ALL: [Terrain; 5] = [
        Terrain::Flat,
        Terrain::Rolling,
        Terrain::Mountain,
        Terrain::Urban,
        Terrain::Unpaved,
    ];

    /// Spanish name used in output keys ("plano", "ondulado", ...)
    pub fn label(&self) -> &'static str {
        match self {
            Terrain::Flat => "plano",
            Terrain::Rolling => "ondulado",
            Terrain::Mountain => "montaña",
            Terrain::Urban => "urbano",
            Terrain::Unpaved => "despavimentado",
        }
    }
}

/// Kilometers by terrain type for one direction of one route
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DistanceProfile {
    pub flat_km: f64,
    pub rolling_km: f64,
    pub mountain_km: f64,
    pub urban_km: f64,
    pub unpaved_km: f64,
}

impl DistanceProfile {
    pub fn km(&self, terrain: Terrain) -> f64 {
        match terrain {
            Terrain::Flat => self.flat_km,
            Terrain::Rolling => self.rolling_km,
            Terrain::Mountain => self.mountain_km,
            Terrain::Urban => self.urban_km,
            Terrain::Unpaved => self.unpaved_km,
        }
    }

    pub fn total_km(&self) -> f64 {
        Terrain::ALL.iter().map(|t| self.km(*t)).sum()
    }

    /// True when every distance is zero (no usable route geometry)
    pub fn is_empty(&self) -> bool {
        Terrain::ALL.iter().all(|t| self.km(*t) == 0.0)
    }

    /// All five distances must be non-negative
    pub fn validate(&self) -> Result<(), String> {
        for terrain in Terrain::ALL {
            let km = self.km(terrain);
            if km < 0.0 || !km.is_finite() {
                return Err(format!("distance for '{}' is invalid: {}", terrain.label(), km));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_km() {
        let d = DistanceProfile {
            flat_km: 100.0,
            rolling_km: 50.0,
            mountain_km: 25.0,
            urban_km: 10.0,
            unpaved_km: 5.0,
        };
        assert!((d.total_km() - 190.0).abs() < f64::EPSILON);
        assert!(!d.is_empty());
    }

    #[test]
    fn test_empty_profile() {
        let d = DistanceProfile::default();
        assert!(d.is_empty());
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_negative_distance_rejected() {
        let d = DistanceProfile {
            flat_km: -1.0,
            ..Default::default()
        };
        assert!(d.validate().is_err());
    }
}
