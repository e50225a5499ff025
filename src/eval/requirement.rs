//! Threshold and reduce-sum checks.

use super::augment::EvalUnit;
use crate::model::{Requirement, StatMap};

/// Which attribute category a threshold entry reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Stats,
    Skills,
}

fn attribute(unit: &EvalUnit<'_>, category: Category, name: &str) -> Option<f64> {
    match category {
        Category::Stats => unit.stat(name),
        Category::Skills => unit.skill(name),
    }
}

fn unit_matches(unit: &EvalUnit<'_>, category: Category, entry: &StatMap) -> bool {
    entry.iter().all(|(name, &threshold)| {
        attribute(unit, category, name).is_some_and(|value| value >= threshold)
    })
}

/// Searches for a roster permutation where entry `i` is satisfied by
/// the `i`-th member. Visits candidates in roster order with early
/// exit, matching the original lexicographic permutation scan.
fn permutation_exists(
    entries: &[StatMap],
    roster: &[EvalUnit<'_>],
    category: Category,
    used: &mut [bool],
    depth: usize,
) -> bool {
    if depth == entries.len() {
        return true;
    }
    for i in 0..roster.len() {
        if !used[i] && unit_matches(&roster[i], category, &entries[depth]) {
            used[i] = true;
            if permutation_exists(entries, roster, category, used, depth + 1) {
                return true;
            }
            used[i] = false;
        }
    }
    false
}

fn non_reduce_met(entries: &[StatMap], roster: &[EvalUnit<'_>], category: Category) -> bool {
    // More entries than roster members means no permutation exists at
    // all; historically that passes vacuously, and callers depend on it
    // (a requirement with no entries in one category must not fail it).
    if entries.len() > roster.len() {
        return true;
    }
    let mut used = vec![false; roster.len()];
    permutation_exists(entries, roster, category, &mut used, 0)
}

fn reduce_met(reduce_stats: &StatMap, roster: &[EvalUnit<'_>]) -> bool {
    reduce_stats.iter().all(|(name, &target)| {
        let sum: f64 = roster.iter().filter_map(|unit| unit.stat(name)).sum();
        sum >= target
    })
}

/// Whether an (already augmented) roster meets a requirement: the stat
/// thresholds, the skill thresholds and the reduce sums must all pass.
pub fn requirement_met(requirement: &Requirement, roster: &[EvalUnit<'_>]) -> bool {
    non_reduce_met(&requirement.stats, roster, Category::Stats)
        && non_reduce_met(&requirement.skills, roster, Category::Skills)
        && reduce_met(&requirement.reduce_stats, roster)
}
