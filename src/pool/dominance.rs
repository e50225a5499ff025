//! Dominance pruning of provably-replaceable resources.

use crate::eval::{augment, requirement_met};
use crate::model::{total_resource_capacity, Catalog, MissionSet, Resource, ResourceId};
use std::collections::BTreeMap;
use tracing::debug;

/// Per-requirement outcomes of fielding a resource alone, in mission
/// then requirement order.
type Signature = Vec<bool>;

fn signature(set: &MissionSet, resource: &Resource) -> Signature {
    set.missions
        .values()
        .flat_map(|mission| mission.requirements.values())
        .map(|requirement| {
            let roster = augment(requirement, &[resource]);
            requirement_met(requirement, &roster)
        })
        .collect()
}

/// Every requirement the weaker signature satisfies, the stronger one
/// satisfies too.
fn covers(stronger: &Signature, weaker: &Signature) -> bool {
    stronger
        .iter()
        .zip(weaker)
        .all(|(&s, &w)| s || !w)
}

/// Componentwise at-least over every stat the weaker resource declares.
fn stats_cover(stronger: &Resource, weaker: &Resource) -> bool {
    weaker.stats.iter().all(|(name, &value)| {
        stronger
            .stats
            .get(name)
            .is_some_and(|&other| other >= value)
    })
}

/// Removes resources provably replaceable by another, shrinking the
/// catalog before enumeration. Returns how many were removed.
///
/// A resource goes when some other resource's single-unit signature is
/// a superset of its own and its raw stats are covered componentwise.
/// At most one removal per full scan; scanning repeats while a pass
/// removed something and the total supply still exceeds the total
/// mission demand.
///
/// This is a best-effort reduction, not a score-preserving transform:
/// a removed resource can still matter through `reduce_stats` sums
/// alongside its dominator, which is why callers can switch pruning
/// off.
pub fn prune_dominated(set: &MissionSet, catalog: &mut Catalog) -> usize {
    let demand = set.total_capacity();
    let mut supply = total_resource_capacity(catalog);
    let mut removed = 0usize;

    while supply > demand {
        let signatures: BTreeMap<ResourceId, Signature> = catalog
            .iter()
            .map(|(&id, resource)| (id, signature(set, resource)))
            .collect();

        let mut victim = None;
        'scan: for (a_id, a) in catalog.iter() {
            for (b_id, b) in catalog.iter() {
                if a_id == b_id {
                    continue;
                }
                if covers(&signatures[b_id], &signatures[a_id]) && stats_cover(b, a) {
                    victim = Some(*a_id);
                    break 'scan;
                }
            }
        }

        match victim.and_then(|id| catalog.remove(&id).map(|r| (id, r))) {
            Some((id, resource)) => {
                supply -= resource.capacity;
                removed += 1;
                debug!(id, capacity = resource.capacity, "removed dominated resource");
            }
            None => break,
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Mission, Requirement, StatMap};

    fn resource(capacity: i64, stats: &[(&str, f64)]) -> Resource {
        Resource {
            capacity,
            stats: stats.iter().map(|&(n, v)| (n.to_owned(), v)).collect(),
            ..Resource::default()
        }
    }

    fn threshold_set(capacity: i64, thresholds: &[&[(&str, f64)]]) -> MissionSet {
        let requirements = thresholds
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                (
                    i as i64 + 1,
                    Requirement {
                        stats: vec![entry.iter().map(|&(n, v)| (n.to_owned(), v)).collect::<StatMap>()],
                        ..Requirement::default()
                    },
                )
            })
            .collect();
        MissionSet {
            missions: [(
                1,
                Mission {
                    capacity,
                    requirements,
                    ..Mission::default()
                },
            )]
            .into(),
            ..MissionSet::default()
        }
    }

    #[test]
    fn test_removes_dominated_resource() {
        let set = threshold_set(1, &[&[("str", 10.0)]]);
        let mut catalog: Catalog = [
            (1, resource(1, &[("str", 10.0)])),
            (2, resource(1, &[("str", 20.0)])),
        ]
        .into();
        assert_eq!(prune_dominated(&set, &mut catalog), 1);
        assert!(!catalog.contains_key(&1));
        assert!(catalog.contains_key(&2));
    }

    #[test]
    fn test_keeps_everything_at_exact_supply() {
        let set = threshold_set(2, &[&[("str", 10.0)]]);
        let mut catalog: Catalog = [
            (1, resource(1, &[("str", 10.0)])),
            (2, resource(1, &[("str", 20.0)])),
        ]
        .into();
        assert_eq!(prune_dominated(&set, &mut catalog), 0);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_signature_protects_specialists() {
        // The weaker-statted resource alone satisfies a requirement the
        // stronger one cannot, so neither dominates the other.
        let set = threshold_set(1, &[&[("str", 15.0)], &[("agi", 15.0)]]);
        let mut catalog: Catalog = [
            (1, resource(1, &[("str", 20.0)])),
            (2, resource(1, &[("agi", 20.0)])),
            (3, resource(1, &[("luck", 1.0)])),
        ]
        .into();
        // Only the resource with no satisfiable requirement at all is
        // dominated (empty signature, empty declared-stat coverage is
        // not given, so it survives too).
        prune_dominated(&set, &mut catalog);
        assert!(catalog.contains_key(&1));
        assert!(catalog.contains_key(&2));
    }

    #[test]
    fn test_removes_one_per_scan_until_supply_matches() {
        let set = threshold_set(1, &[&[("str", 5.0)]]);
        let mut catalog: Catalog = [
            (1, resource(1, &[("str", 5.0)])),
            (2, resource(1, &[("str", 6.0)])),
            (3, resource(1, &[("str", 7.0)])),
        ]
        .into();
        assert_eq!(prune_dominated(&set, &mut catalog), 2);
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains_key(&3));
    }
}
