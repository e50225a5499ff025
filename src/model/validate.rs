//! Input validation and canonicalization.

use super::types::{Catalog, MissionSet, EMPTY_ID};
use crate::error::SolverError;

/// Total number of available units across the catalog.
pub fn total_resource_capacity(catalog: &Catalog) -> i64 {
    catalog.values().map(|r| r.capacity).sum()
}

/// Rejects catalog shapes that default filling cannot cure: negative
/// capacities and ids clashing with the filler sentinel.
pub fn validate_catalog(catalog: &Catalog) -> Result<(), SolverError> {
    for (id, resource) in catalog {
        if *id <= EMPTY_ID {
            return Err(SolverError::Configuration(format!(
                "resource id {id} is reserved for filler units"
            )));
        }
        if resource.capacity < 0 {
            return Err(SolverError::Configuration(format!(
                "resource {id} has negative capacity {}",
                resource.capacity
            )));
        }
    }
    Ok(())
}

/// Drops resources with zero remaining capacity. They contribute no
/// candidates; the global allocator relies on this to exclude exhausted
/// resources from nested searches. Idempotent.
pub fn normalize_catalog(catalog: &mut Catalog) {
    catalog.retain(|_, resource| resource.capacity > 0);
}

impl MissionSet {
    /// Rejects mission shapes that default filling cannot cure.
    pub fn validate(&self) -> Result<(), SolverError> {
        for (id, mission) in &self.missions {
            if mission.capacity <= 0 {
                return Err(SolverError::Configuration(format!(
                    "mission {id} has non-positive capacity {}",
                    mission.capacity
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Mission, Resource};

    fn resource(capacity: i64) -> Resource {
        Resource {
            capacity,
            ..Resource::default()
        }
    }

    #[test]
    fn test_validate_ok() {
        let catalog: Catalog = [(1, resource(2)), (2, resource(0))].into();
        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn test_negative_capacity_rejected() {
        let catalog: Catalog = [(1, resource(-1))].into();
        assert!(matches!(
            validate_catalog(&catalog),
            Err(SolverError::Configuration(_))
        ));
    }

    #[test]
    fn test_sentinel_id_rejected() {
        let catalog: Catalog = [(EMPTY_ID, resource(1))].into();
        assert!(validate_catalog(&catalog).is_err());
    }

    #[test]
    fn test_mission_capacity_rejected() {
        let set = MissionSet {
            missions: [(
                1,
                Mission {
                    capacity: 0,
                    ..Mission::default()
                },
            )]
            .into(),
            ..MissionSet::default()
        };
        assert!(set.validate().is_err());
    }

    #[test]
    fn test_normalize_drops_exhausted() {
        let mut catalog: Catalog = [(1, resource(2)), (2, resource(0))].into();
        normalize_catalog(&mut catalog);
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains_key(&1));
    }

    #[test]
    fn test_normalize_idempotent() {
        let mut once: Catalog = [(1, resource(1)), (2, resource(0)), (3, resource(3))].into();
        normalize_catalog(&mut once);
        let mut twice = once.clone();
        normalize_catalog(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_total_capacity() {
        let catalog: Catalog = [(1, resource(2)), (2, resource(3))].into();
        assert_eq!(total_resource_capacity(&catalog), 5);
    }
}
