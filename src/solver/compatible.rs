//! Compatible-roster search across single-mission sets.
//!
//! Answers a different question than the global allocator: instead of
//! splitting one budget across stages, it finds the rosters that are
//! simultaneously a best (or best-containing) choice for *every* set,
//! so one group of units can serve all of them.

use super::config::SolverConfig;
use super::single::solve;
use crate::error::SolverError;
use crate::model::{BestResults, Catalog, MissionSet, ResourceId};
use std::collections::BTreeSet;
use tracing::debug;

/// An unordered roster: the distinct resource ids of one assignment.
/// Repeated units of a multi-capacity resource collapse into one id,
/// so all compatibility math is plain subset containment.
pub type Roster = BTreeSet<ResourceId>;

/// Finds the rosters compatible with every mission set in `sets`.
///
/// Each set must hold exactly one mission. Every set is solved
/// independently against the full catalog (no budget sharing), its
/// maximum-score ties are flattened to [`Roster`]s, and the results are
/// folded pairwise: when the accumulated rosters are larger than the
/// incoming mission's capacity, an accumulated roster survives if it
/// contains some incoming roster; otherwise an incoming roster survives
/// if it contains some accumulated one. The survivors of the last fold
/// are the compatible rosters, in ranked order.
///
/// When any set declares `allowed_resources`, the intersection of all
/// declared sets replaces every mission's filter before solving. An
/// empty intermediate result short-circuits: no roster can serve every
/// set, which is a regular outcome, not an error.
pub fn compatible_rosters(
    sets: &[MissionSet],
    catalog: &Catalog,
    config: &SolverConfig,
) -> Result<Vec<Roster>, SolverError> {
    for (i, set) in sets.iter().enumerate() {
        if set.missions.len() != 1 {
            return Err(SolverError::Configuration(format!(
                "compatible search needs exactly one mission per set, set {i} has {}",
                set.missions.len()
            )));
        }
    }
    let mut sets = sets.to_vec();
    intersect_allowed(&mut sets);

    let mut compatible: Option<Vec<Roster>> = None;
    for set in &sets {
        let results = solve(set, catalog, config)?;
        let rosters = to_rosters(&results);
        let capacity = match set.missions.values().next() {
            Some(mission) => mission.capacity.max(0) as usize,
            None => 0,
        };
        let merged = match compatible {
            None => rosters,
            Some(current) => merge(current, rosters, capacity),
        };
        if merged.is_empty() {
            debug!("no roster serves every set");
            return Ok(Vec::new());
        }
        compatible = Some(merged);
    }
    Ok(compatible.unwrap_or_default())
}

/// Replaces every mission's allowed-resource filter with the
/// intersection of all declared filters, when at least one set
/// declares one.
fn intersect_allowed(sets: &mut [MissionSet]) {
    let mut intersected: Option<BTreeSet<ResourceId>> = None;
    for set in sets.iter() {
        for mission in set.missions.values() {
            if let Some(allowed) = &mission.allowed_resources {
                intersected = Some(match intersected {
                    None => allowed.clone(),
                    Some(acc) => acc.intersection(allowed).copied().collect(),
                });
            }
        }
    }
    if let Some(intersected) = &intersected {
        for set in sets.iter_mut() {
            for mission in set.missions.values_mut() {
                mission.allowed_resources = Some(intersected.clone());
            }
        }
    }
}

fn to_rosters(results: &BestResults) -> Vec<Roster> {
    results
        .ranked
        .iter()
        .map(|entry| entry.assignment.values().flatten().copied().collect())
        .collect()
}

fn merge(current: Vec<Roster>, incoming: Vec<Roster>, incoming_capacity: usize) -> Vec<Roster> {
    let current_capacity = current.first().map(BTreeSet::len).unwrap_or(0);
    if current_capacity > incoming_capacity {
        current
            .into_iter()
            .filter(|roster| incoming.iter().any(|n| n.is_subset(roster)))
            .collect()
    } else {
        incoming
            .into_iter()
            .filter(|roster| current.iter().any(|c| c.is_subset(roster)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Mission, Requirement, Resource, StatMap};

    fn stats(entries: &[(&str, f64)]) -> StatMap {
        entries.iter().map(|&(n, v)| (n.to_owned(), v)).collect()
    }

    fn resource(st: &[(&str, f64)]) -> Resource {
        Resource {
            capacity: 1,
            stats: stats(st),
            ..Resource::default()
        }
    }

    fn single_mission_set(capacity: i64, requirement: Requirement) -> MissionSet {
        MissionSet {
            missions: [(
                1,
                Mission {
                    capacity,
                    requirements: [(1, requirement)].into(),
                    ..Mission::default()
                },
            )]
            .into(),
            rewards: stats(&[("gold", 1.0)]),
        }
    }

    fn sum_requirement(stat: &str, target: f64) -> Requirement {
        Requirement {
            reduce_stats: stats(&[(stat, target)]),
            rewards: stats(&[("gold", 1.0)]),
            ..Requirement::default()
        }
    }

    fn threshold_requirement(stat: &str, threshold: f64) -> Requirement {
        Requirement {
            stats: vec![stats(&[(stat, threshold)])],
            rewards: stats(&[("gold", 1.0)]),
            ..Requirement::default()
        }
    }

    fn roster(ids: &[ResourceId]) -> Roster {
        ids.iter().copied().collect()
    }

    fn catalog() -> Catalog {
        [
            (1, resource(&[("str", 10.0)])),
            (2, resource(&[("str", 10.0)])),
            (3, resource(&[("agi", 10.0)])),
            (4, resource(&[("agi", 10.0)])),
        ]
        .into()
    }

    fn config() -> SolverConfig {
        SolverConfig::default().with_pruning(false)
    }

    #[test]
    fn test_subset_containment_across_capacities() {
        // Stage ties: {1,2} / {1},{2} / {1,2,3},{1,2,4}. Only the
        // three-unit rosters containing both earlier survivors remain.
        let sets = vec![
            single_mission_set(2, sum_requirement("str", 20.0)),
            single_mission_set(1, threshold_requirement("str", 10.0)),
            single_mission_set(3, sum_requirement("str", 20.0)),
        ];
        let rosters = compatible_rosters(&sets, &catalog(), &config()).unwrap();
        assert_eq!(rosters, vec![roster(&[1, 2, 3]), roster(&[1, 2, 4])]);
    }

    #[test]
    fn test_incompatible_stages_short_circuit() {
        // The second stage's best rosters share no unit with {1,2}.
        let sets = vec![
            single_mission_set(2, sum_requirement("str", 20.0)),
            single_mission_set(1, threshold_requirement("agi", 10.0)),
        ];
        let rosters = compatible_rosters(&sets, &catalog(), &config()).unwrap();
        assert!(rosters.is_empty());
    }

    #[test]
    fn test_allowed_filters_are_intersected() {
        let mut first = single_mission_set(1, threshold_requirement("str", 1.0));
        let mut second = single_mission_set(1, threshold_requirement("str", 1.0));
        if let Some(mission) = first.missions.get_mut(&1) {
            mission.allowed_resources = Some([1, 2, 3].into());
        }
        if let Some(mission) = second.missions.get_mut(&1) {
            mission.allowed_resources = Some([2, 3, 4].into());
        }
        let catalog: Catalog = (1..=4).map(|id| (id, resource(&[("str", 10.0)]))).collect();
        let rosters = compatible_rosters(&[first, second], &catalog, &config()).unwrap();
        assert_eq!(rosters, vec![roster(&[2]), roster(&[3])]);
    }

    #[test]
    fn test_multi_mission_set_rejected() {
        let mut set = single_mission_set(1, threshold_requirement("str", 1.0));
        set.missions.insert(
            2,
            Mission {
                capacity: 1,
                ..Mission::default()
            },
        );
        assert!(matches!(
            compatible_rosters(&[set], &catalog(), &config()),
            Err(SolverError::Configuration(_))
        ));
    }

    #[test]
    fn test_single_set_returns_its_ties() {
        let sets = vec![single_mission_set(1, threshold_requirement("str", 10.0))];
        let rosters = compatible_rosters(&sets, &catalog(), &config()).unwrap();
        assert_eq!(rosters, vec![roster(&[1]), roster(&[2])]);
    }

    #[test]
    fn test_no_sets_no_rosters() {
        let rosters = compatible_rosters(&[], &catalog(), &config()).unwrap();
        assert!(rosters.is_empty());
    }
}
