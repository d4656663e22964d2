//! Municipalities and official route rows

use serde::{Deserialize, Serialize};

use super::distance::DistanceProfile;

/// A municipality as listed in the DANE table
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Municipality {
    /// DANE code, cleaned of float artifacts at load time
    pub code: String,
    pub official_name: String,
    /// Alternate spellings accepted by the place resolver
    pub variations: Vec<String>,
    pub department: Option<String>,
}

/// One official SICE route for an origin/destination code pair
///
/// Several rows may share the same code pair, differing in toll route id
/// (e.g. alternate corridors); each is independently runnable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteRow {
    /// SICE route identifier, the toll lookup key
    pub route_id: String,
    pub route_name: Option<String>,
    pub origin_code: String,
    pub destination_code: String,
    pub distances: DistanceProfile,
}
