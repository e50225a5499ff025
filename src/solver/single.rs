//! Single mission-set pipeline.

use super::config::SolverConfig;
use crate::error::SolverError;
use crate::eval::aggregate_best;
use crate::model::{normalize_catalog, validate_catalog, BestResults, Catalog, MissionSet};
use crate::pool::{build_candidates, prune_dominated};
use crate::search::Partitions;
use tracing::debug;

/// Searches one mission set for its maximum-score assignments.
///
/// Validates the inputs, works on a private copy of the catalog
/// (pruning mutates it), enumerates every legal partition of the
/// candidate pool and ranks the ties for the maximum score. Finding no
/// feasible assignment is a regular outcome: zero max score and an
/// empty ranked list.
pub fn solve(
    set: &MissionSet,
    catalog: &Catalog,
    config: &SolverConfig,
) -> Result<BestResults, SolverError> {
    set.validate()?;
    validate_catalog(catalog)?;

    let mut private = catalog.clone();
    normalize_catalog(&mut private);
    if config.prune_dominated {
        let removed = prune_dominated(set, &mut private);
        if removed > 0 {
            debug!(removed, "pruned catalog before enumeration");
        }
    }

    let demand = set.total_capacity();
    let candidates = build_candidates(&private, demand);
    let partitions = Partitions::new(set, candidates);
    aggregate_best(
        set,
        &private,
        partitions,
        config.unknown_rewards,
        config.assignment_budget,
        config.max_results,
    )
}
