//! Assignment scoring and best-result aggregation.

use super::augment::augment;
use super::requirement::requirement_met;
use crate::error::SolverError;
use crate::model::{
    Assignment, BestResults, Catalog, MissionSet, RankedAssignment, Resource, RewardTable, StatMap,
    EMPTY_ID,
};
use tracing::debug;

/// How to treat a reward name that is absent from the reward table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownRewardPolicy {
    /// The name contributes zero to the score. Canonical behavior.
    #[default]
    Ignore,

    /// Scoring fails with [`SolverError::UnknownReward`]. Strict mode
    /// for catching misspelled fixture data.
    Error,
}

/// Score and success tallies of one assignment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AssignmentScore {
    /// Weighted reward total.
    pub score: f64,

    /// Number of met requirements.
    pub success_count: usize,

    /// Number of evaluated requirements. Missions failed by a filler
    /// unit are excluded entirely.
    pub requirement_count: usize,
}

impl AssignmentScore {
    /// Met requirements over evaluated requirements, as a percentage;
    /// zero when nothing was evaluated.
    pub fn success_rate(&self) -> f64 {
        if self.requirement_count > 0 {
            self.success_count as f64 / self.requirement_count as f64 * 100.0
        } else {
            0.0
        }
    }
}

fn weighted_score(
    table: &RewardTable,
    rewards: &StatMap,
    policy: UnknownRewardPolicy,
) -> Result<f64, SolverError> {
    let mut score = 0.0;
    for (name, &quantity) in rewards {
        match table.get(name) {
            Some(&weight) => score += weight * quantity,
            None => match policy {
                UnknownRewardPolicy::Ignore => {}
                UnknownRewardPolicy::Error => {
                    return Err(SolverError::UnknownReward(name.clone()));
                }
            },
        }
    }
    Ok(score)
}

/// Scores one assignment against a mission set.
///
/// A mission whose roster contains a filler unit scores zero and is
/// excluded from the success and requirement tallies. Otherwise each
/// requirement pays its weighted rewards when met, and a mission whose
/// requirements are all met additionally pays its perfect rewards
/// (vacuously so for a mission with no requirements).
pub fn score_assignment(
    set: &MissionSet,
    catalog: &Catalog,
    assignment: &Assignment,
    policy: UnknownRewardPolicy,
) -> Result<AssignmentScore, SolverError> {
    let mut tally = AssignmentScore::default();
    for (mission_id, roster_ids) in assignment {
        if roster_ids.contains(&EMPTY_ID) {
            continue;
        }
        let mission = set.missions.get(mission_id).ok_or_else(|| {
            SolverError::Configuration(format!("assignment references unknown mission {mission_id}"))
        })?;
        let roster: Vec<&Resource> = roster_ids
            .iter()
            .map(|id| catalog.get(id).ok_or(SolverError::UnknownResource(*id)))
            .collect::<Result<_, _>>()?;

        let mut all_met = true;
        for requirement in mission.requirements.values() {
            let units = augment(requirement, &roster);
            if requirement_met(requirement, &units) {
                tally.score += weighted_score(&set.rewards, &requirement.rewards, policy)?;
                tally.success_count += 1;
            } else {
                all_met = false;
            }
            tally.requirement_count += 1;
        }
        if all_met {
            tally.score += weighted_score(&set.rewards, &mission.perfect_rewards, policy)?;
        }
    }
    Ok(tally)
}

/// Scores every assignment in emission order and keeps the ties for the
/// maximum, ranked by success rate descending (stable on ties, so
/// generation order survives).
///
/// `budget` stops scoring after that many assignments; `max_results`
/// truncates the ranked list. Zero means unlimited for both. With no
/// assignments at all the result is empty with a max score of zero —
/// a regular outcome, not an error.
pub fn aggregate_best<I>(
    set: &MissionSet,
    catalog: &Catalog,
    assignments: I,
    policy: UnknownRewardPolicy,
    budget: usize,
    max_results: usize,
) -> Result<BestResults, SolverError>
where
    I: IntoIterator<Item = Assignment>,
{
    let mut max_score: Option<f64> = None;
    let mut retained: Vec<RankedAssignment> = Vec::new();
    let mut scored = 0usize;

    for assignment in assignments {
        if budget > 0 && scored >= budget {
            break;
        }
        scored += 1;
        let tally = score_assignment(set, catalog, &assignment, policy)?;
        let entry = RankedAssignment {
            success_rate: tally.success_rate(),
            assignment,
        };
        match max_score {
            None => {
                max_score = Some(tally.score);
                retained.push(entry);
            }
            Some(best) if tally.score > best => {
                max_score = Some(tally.score);
                retained.clear();
                retained.push(entry);
            }
            Some(best) if tally.score >= best => retained.push(entry),
            Some(_) => {}
        }
    }

    retained.sort_by(|a, b| {
        b.success_rate
            .partial_cmp(&a.success_rate)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    if max_results > 0 && retained.len() > max_results {
        retained.truncate(max_results);
    }

    let max_score = max_score.unwrap_or(0.0);
    debug!(scored, max_score, ties = retained.len(), "ranked assignments");
    Ok(BestResults {
        max_score,
        ranked: retained,
    })
}
