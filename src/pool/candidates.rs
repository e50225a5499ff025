//! Expansion of the catalog into an ordered candidate multiset.

use crate::model::{total_resource_capacity, Catalog, ResourceId, EMPTY_ID};

/// One physical unit of a resource: the resource id plus an instance
/// index distinguishing units of the same multi-capacity resource.
///
/// The derived ordering is lexicographic on `(id, instance)`; the
/// filler sentinel id sorts before every real id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Candidate {
    /// Owning resource id, or [`EMPTY_ID`] for a filler unit.
    pub id: ResourceId,

    /// Index of this unit within its resource's capacity.
    pub instance: usize,
}

/// Builds the flat candidate sequence for one search: one candidate per
/// unit of each resource's capacity, in ascending `(id, instance)`
/// order, followed by `demand - supply` filler candidates when the
/// catalog cannot fill every slot.
///
/// Fillers are appended rather than merged in order; the partition
/// driver re-sorts the remaining pool at each nested level, where the
/// sentinel sorts first. Read-only with respect to the catalog.
pub fn build_candidates(catalog: &Catalog, demand: i64) -> Vec<Candidate> {
    let supply = total_resource_capacity(catalog);
    let mut candidates = Vec::with_capacity(supply.max(demand).max(0) as usize);
    for (&id, resource) in catalog {
        for instance in 0..resource.capacity.max(0) as usize {
            candidates.push(Candidate { id, instance });
        }
    }
    for instance in 0..(demand - supply).max(0) as usize {
        candidates.push(Candidate {
            id: EMPTY_ID,
            instance,
        });
    }
    candidates
}
