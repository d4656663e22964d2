//! Core types for SICETAC freight cost estimation

mod error;

pub use error::*;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Travel mode of a trip: loaded (CARGADO) or unladen return (VACIO)
///
/// Selected per request and threaded explicitly through every call; there
/// is no process-wide mode state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum TravelMode {
    #[default]
    #[serde(rename = "CARGADO")]
    #[value(name = "cargado")]
    Loaded,
    #[serde(rename = "VACIO")]
    #[value(name = "vacio")]
    Empty,
}

impl TravelMode {
    /// Parse the wire spelling ("CARGADO" / "VACIO"), case-insensitive
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "CARGADO" => Some(TravelMode::Loaded),
            "VACIO" | "VACÍO" => Some(TravelMode::Empty),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Loaded => "CARGADO",
            TravelMode::Empty => "VACIO",
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
