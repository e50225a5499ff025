//! Conditional roster augmentation.

use crate::model::{BoostMap, Requirement, Resource, StatMap};
use std::borrow::Cow;

/// A roster member under evaluation: a borrowed resource whose stats
/// are cloned only when a boost actually applies. Skills are never
/// modified, and boost qualification always reads the resource's
/// original skills.
#[derive(Debug, Clone)]
pub struct EvalUnit<'a> {
    resource: &'a Resource,
    stats: Cow<'a, StatMap>,
}

impl<'a> EvalUnit<'a> {
    /// Wraps a resource with untouched stats.
    pub fn new(resource: &'a Resource) -> Self {
        Self {
            resource,
            stats: Cow::Borrowed(&resource.stats),
        }
    }

    /// Current (possibly augmented) value of a stat.
    pub fn stat(&self, name: &str) -> Option<f64> {
        self.stats.get(name).copied()
    }

    /// Original skill level; augmentation never changes skills.
    pub fn skill(&self, name: &str) -> Option<f64> {
        self.resource.skills.get(name).copied()
    }

    /// The full augmented stat map.
    pub fn stats(&self) -> &StatMap {
        &self.stats
    }

    fn add_stat(&mut self, name: &str, delta: f64) {
        // Absent stats are created from zero, consistent with
        // "absent = 0" in the reduce sums.
        *self.stats.to_mut().entry(name.to_owned()).or_insert(0.0) += delta;
    }

    fn qualifies(&self, entry: &BoostMap) -> bool {
        entry
            .keys()
            .all(|skill| self.skill(skill).is_some_and(|level| level > 0.0))
    }
}

/// Applies a requirement's augmentations to a roster: the `boosts` list
/// against the raw roster, then the `reduce_boosts` list against that
/// intermediate roster. The returned units feed every subsequent check.
///
/// Within a pass, each entry is atomic per unit: the unit must hold
/// every skill the entry names at a positive level, and then receives
/// all of the entry's stat deltas; entries stack cumulatively. A failed
/// entry contributes nothing and evaluation moves to the next entry —
/// except in the `reduce_boosts` pass, where any unit failing any entry
/// abandons the pass for the whole roster, which then keeps exactly the
/// stats it had after the `boosts` pass. That asymmetry is load-bearing
/// historical behavior; see `test_reduce_boost_abort_discards_whole_pass`.
pub fn augment<'a>(requirement: &Requirement, roster: &[&'a Resource]) -> Vec<EvalUnit<'a>> {
    let raw: Vec<EvalUnit<'a>> = roster.iter().map(|r| EvalUnit::new(r)).collect();
    let boosted = apply_pass(&requirement.boosts, raw, false);
    apply_pass(&requirement.reduce_boosts, boosted, true)
}

fn apply_pass<'a>(
    entries: &[BoostMap],
    roster: Vec<EvalUnit<'a>>,
    abort_on_failure: bool,
) -> Vec<EvalUnit<'a>> {
    if entries.is_empty() {
        return roster;
    }
    let mut augmented = Vec::with_capacity(roster.len());
    for i in 0..roster.len() {
        let mut unit = roster[i].clone();
        for entry in entries {
            if roster[i].qualifies(entry) {
                for deltas in entry.values() {
                    for (stat, delta) in deltas {
                        unit.add_stat(stat, *delta);
                    }
                }
            } else if abort_on_failure {
                return roster;
            }
        }
        augmented.push(unit);
    }
    augmented
}
