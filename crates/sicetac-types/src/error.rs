//! Error types for the SICETAC cost estimator

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Table '{table}' is missing required column '{column}'")]
    MissingColumn { table: String, column: String },

    #[error("Table '{table}', column '{column}': cannot parse '{value}' as a number")]
    InvalidNumber {
        table: String,
        column: String,
        value: String,
    },

    #[error("Place not found: {0}")]
    PlaceNotFound(String),

    #[error("Route not registered between '{origin}' and '{destination}' and no manual distances provided")]
    RouteNotFound { origin: String, destination: String },

    #[error("Vehicle '{vehicle}' not found. Valid options: {}", valid.join(", "))]
    UnknownVehicle { vehicle: String, valid: Vec<String> },

    #[error("Month '{month}' not valid. Must be one of: {valid:?}")]
    UnknownMonth { month: u32, valid: Vec<u32> },

    #[error("No parameter row for vehicle '{vehicle}' in month {month}")]
    ParameterNotFound { vehicle: String, month: u32 },

    #[error("No fixed cost for {vehicle} - {month} - {body_type}")]
    FixedCostNotFound {
        vehicle: String,
        month: u32,
        body_type: String,
    },

    #[error("Lookup tables unavailable or empty: {0}")]
    TablesUnavailable(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Computation error: {0}")]
    Computation(String),
}

impl Error {
    /// HTTP-equivalent status code for this error, for callers that sit
    /// behind a request boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::PlaceNotFound(_) | Error::RouteNotFound { .. } => 404,
            Error::UnknownVehicle { .. }
            | Error::UnknownMonth { .. }
            | Error::InvalidRequest(_) => 400,
            Error::ParameterNotFound { .. } | Error::FixedCostNotFound { .. } => 404,
            _ => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Error::PlaceNotFound("X".into()).status_code(), 404);
        assert_eq!(
            Error::UnknownVehicle {
                vehicle: "C9".into(),
                valid: vec!["3S3".into()],
            }
            .status_code(),
            400
        );
        assert_eq!(Error::TablesUnavailable("peajes".into()).status_code(), 500);
        assert_eq!(Error::Computation("div by zero".into()).status_code(), 500);
    }

    #[test]
    fn test_unknown_vehicle_lists_options() {
        let err = Error::UnknownVehicle {
            vehicle: "C9".into(),
            valid: vec!["2".into(), "3S3".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("C9"));
        assert!(msg.contains("2, 3S3"));
    }
}
