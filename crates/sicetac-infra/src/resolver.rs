//! Snapshot-backed place and route resolvers

use std::sync::Arc;

use sicetac_domain::model::{RouteRow, TableSnapshot};
use sicetac_domain::repository::{PlaceMatch, PlaceResolver, RouteResolver};

/// Resolves place names against the municipality table.
///
/// Matching is exact after trimming and uppercasing, checked against the
/// official name first and then each variation column, whole table per
/// column. Approximate matching is a concern of external resolvers.
pub struct SnapshotPlaceResolver {
    snapshot: Arc<TableSnapshot>,
}

impl SnapshotPlaceResolver {
    pub fn new(snapshot: Arc<TableSnapshot>) -> Self {
        Self { snapshot }
    }
}

impl PlaceResolver for SnapshotPlaceResolver {
    fn resolve(&self, name: &str) -> Option<PlaceMatch> {
        let needle = name.trim().to_uppercase();
        if needle.is_empty() {
            return None;
        }

        let found = |m: &sicetac_domain::model::Municipality| PlaceMatch {
            code: m.code.clone(),
            display_name: m.official_name.clone(),
            department: m.department.clone(),
        };

        for m in &self.snapshot.municipalities {
            if m.official_name.trim().to_uppercase() == needle {
                return Some(found(m));
            }
        }
        for column in 0..3 {
            for m in &self.snapshot.municipalities {
                if let Some(variation) = m.variations.get(column) {
                    if variation.trim().to_uppercase() == needle {
                        return Some(found(m));
                    }
                }
            }
        }
        None
    }
}

/// Finds official route rows, trying the reversed code pair when the
/// direct pair has none.
pub struct SnapshotRouteResolver {
    snapshot: Arc<TableSnapshot>,
}

impl SnapshotRouteResolver {
    pub fn new(snapshot: Arc<TableSnapshot>) -> Self {
        Self { snapshot }
    }
}

impl RouteResolver for SnapshotRouteResolver {
    fn find_route(&self, origin_code: &str, destination_code: &str) -> Vec<RouteRow> {
        let direct = self.snapshot.routes_between(origin_code, destination_code);
        let rows = if direct.is_empty() {
            self.snapshot.routes_between(destination_code, origin_code)
        } else {
            direct
        };
        rows.into_iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sicetac_domain::model::{DistanceProfile, Municipality};

    fn snapshot() -> Arc<TableSnapshot> {
        Arc::new(TableSnapshot::new(
            vec![
                Municipality {
                    code: "5001000".into(),
                    official_name: "MEDELLIN".into(),
                    variations: vec!["MEDELLÍN".into(), "MEDE".into()],
                    department: Some("ANTIOQUIA".into()),
                },
                Municipality {
                    code: "11001000".into(),
                    official_name: "BOGOTA".into(),
                    variations: vec!["BOGOTÁ D.C.".into()],
                    department: None,
                },
            ],
            vec![],
            vec![],
            vec![],
            vec![],
            vec![RouteRow {
                route_id: "101".into(),
                route_name: Some("MEDELLIN-BOGOTA".into()),
                origin_code: "5001000".into(),
                destination_code: "11001000".into(),
                distances: DistanceProfile::default(),
            }],
        ))
    }

    #[test]
    fn test_resolve_official_name_case_insensitive() {
        let resolver = SnapshotPlaceResolver::new(snapshot());
        let m = resolver.resolve(" medellin ").unwrap();
        assert_eq!(m.code, "5001000");
        assert_eq!(m.display_name, "MEDELLIN");
        assert_eq!(m.department.as_deref(), Some("ANTIOQUIA"));
    }

    #[test]
    fn test_resolve_variation() {
        let resolver = SnapshotPlaceResolver::new(snapshot());
        let m = resolver.resolve("BOGOTÁ D.C.").unwrap();
        assert_eq!(m.code, "11001000");
        assert_eq!(m.display_name, "BOGOTA");
    }

    #[test]
    fn test_resolve_unknown() {
        let resolver = SnapshotPlaceResolver::new(snapshot());
        assert!(resolver.resolve("CALI").is_none());
        assert!(resolver.resolve("   ").is_none());
    }

    #[test]
    fn test_route_reversed_fallback() {
        let resolver = SnapshotRouteResolver::new(snapshot());
        assert_eq!(resolver.find_route("5001000", "11001000").len(), 1);
        let reversed = resolver.find_route("11001000", "5001000");
        assert_eq!(reversed.len(), 1);
        assert_eq!(reversed[0].route_id, "101");
        assert!(resolver.find_route("5001000", "76001000").is_empty());
    }
}
