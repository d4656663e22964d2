//! Repository trait definitions for external collaborators

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sicetac_types::Result;

use crate::model::{RouteRow, TableSnapshot};

/// A resolved place name
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceMatch {
    /// DANE code
    pub code: String,
    pub display_name: String,
    pub department: Option<String>,
}

/// Resolves free-text location names to DANE codes
pub trait PlaceResolver {
    fn resolve(&self, name: &str) -> Option<PlaceMatch>;
}

/// Finds official route rows for a code pair
pub trait RouteResolver {
    /// All route variants for the pair; implementations try the reversed
    /// pair when the direct one has no rows.
    fn find_route(&self, origin_code: &str, destination_code: &str) -> Vec<RouteRow>;
}

/// Owns the cached lookup tables
pub trait TableStore {
    /// Current snapshot, loading it on first use
    fn snapshot(&self) -> Result<Arc<TableSnapshot>>;

    /// Rebuild the snapshot and swap it in atomically. With `force` false
    /// an already-loaded snapshot is kept as is.
    fn refresh(&self, force: bool) -> Result<Arc<TableSnapshot>>;
}
