//! Backtracking partition driver.

use super::combinations::Combinations;
use crate::model::{Assignment, Mission, MissionId, MissionSet, EMPTY_ID};
use crate::pool::Candidate;

struct Frame {
    combos: Combinations,
    current: Option<Vec<usize>>,
}

/// Lazily yields every legal partition of a candidate pool across the
/// missions of a set, in a fixed depth-first order.
///
/// One frame per mission, in ascending mission-id order. Each frame
/// pulls size-`capacity` combinations from the pool left over by its
/// parent; combinations touching resources outside the mission's
/// allowed set are skipped without terminating the generator. When the
/// last mission is reached (or the pool runs dry), the stacked
/// selections collapse into one [`Assignment`] — instance indices
/// dropped, resource ids kept.
///
/// Emission order is deterministic and part of the observable contract:
/// consumers take the first N assignments and rely on it.
pub struct Partitions<'a> {
    missions: Vec<(MissionId, &'a Mission)>,
    stack: Vec<Frame>,
    exhausted: bool,
}

impl<'a> Partitions<'a> {
    /// Creates the driver over `candidates`, typically the output of
    /// [`build_candidates`](crate::pool::build_candidates).
    pub fn new(set: &'a MissionSet, candidates: Vec<Candidate>) -> Self {
        let missions: Vec<(MissionId, &'a Mission)> =
            set.missions.iter().map(|(&id, m)| (id, m)).collect();
        let mut stack = Vec::new();
        if let Some(&(_, first)) = missions.first() {
            let k = first.capacity.max(0) as usize;
            stack.push(Frame {
                combos: Combinations::new(candidates, k),
                current: None,
            });
        }
        Self {
            exhausted: missions.is_empty(),
            missions,
            stack,
        }
    }

    fn allowed(mission: &Mission, candidates: &[Candidate], selection: &[usize]) -> bool {
        match &mission.allowed_resources {
            None => true,
            Some(allowed) => selection.iter().all(|&i| {
                let id = candidates[i].id;
                id == EMPTY_ID || allowed.contains(&id)
            }),
        }
    }

    fn collapse(&self) -> Assignment {
        let mut assignment = Assignment::new();
        for (frame, (mission_id, _)) in self.stack.iter().zip(&self.missions) {
            if let Some(selection) = &frame.current {
                let ids = selection
                    .iter()
                    .map(|&i| frame.combos.candidates()[i].id)
                    .collect();
                assignment.insert(*mission_id, ids);
            }
        }
        assignment
    }
}

impl Iterator for Partitions<'_> {
    type Item = Assignment;

    fn next(&mut self) -> Option<Assignment> {
        if self.exhausted {
            return None;
        }
        while let Some(top) = self.stack.len().checked_sub(1) {
            let mission = self.missions[top].1;

            let selection = {
                let frame = &mut self.stack[top];
                let mut picked = None;
                while let Some(sel) = frame.combos.next() {
                    if Self::allowed(mission, frame.combos.candidates(), &sel) {
                        picked = Some(sel);
                        break;
                    }
                }
                picked
            };
            let Some(selection) = selection else {
                self.stack.pop();
                continue;
            };

            let frame = &mut self.stack[top];
            let pool = frame.combos.candidates();
            let mut remaining = Vec::with_capacity(pool.len() - selection.len());
            let mut picked = selection.iter().peekable();
            for (i, &candidate) in pool.iter().enumerate() {
                if picked.peek() == Some(&&i) {
                    picked.next();
                } else {
                    remaining.push(candidate);
                }
            }
            frame.current = Some(selection);

            if remaining.is_empty() || self.stack.len() == self.missions.len() {
                return Some(self.collapse());
            }

            // Deeper pools are re-sorted; this is where the filler
            // sentinel moves in front of every real id.
            remaining.sort();
            let k = self.missions[self.stack.len()].1.capacity.max(0) as usize;
            self.stack.push(Frame {
                combos: Combinations::new(remaining, k),
                current: None,
            });
        }
        self.exhausted = true;
        None
    }
}
