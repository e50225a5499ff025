//! Global allocation across a sequence of mission sets sharing one
//! resource budget.

use super::config::GlobalConfig;
use super::single::solve;
use crate::error::SolverError;
use crate::model::{Assignment, BestResults, Catalog, MissionSet, ResourceId, EMPTY_ID};
use std::collections::BTreeMap;
use tracing::debug;

/// One stage's contribution to a global solution.
#[derive(Debug, Clone, PartialEq)]
pub struct StageChoice {
    /// Maximum score the stage reached with the resources left to it.
    pub max_score: f64,

    /// Success rate of the chosen assignment.
    pub success_rate: f64,

    /// The chosen assignment.
    pub assignment: Assignment,
}

/// One assignment choice per stage, in stage order.
pub type GlobalSolution = Vec<StageChoice>;

struct Frame {
    results: BestResults,
    /// Index into `results.ranked` of the next choice to try.
    pointer: usize,
}

/// Depth-first iterator over global solutions.
///
/// Each stage is solved against the catalog left over after every
/// earlier stage's committed assignment, walking the per-stage ranked
/// ties in order. The last stage contributes only its top-ranked
/// assignment per upstream combination; upstream stages backtrack
/// through all of theirs. A stage whose ranked list comes back empty is
/// a dead end and forces backtracking.
///
/// Items are `Result` because any stage solve can fail the same way
/// [`solve`] does; the iterator finishes after the first error.
pub struct GlobalSolutions<'a> {
    sets: &'a [MissionSet],
    catalog: &'a Catalog,
    config: GlobalConfig,
    consumed: BTreeMap<ResourceId, i64>,
    frames: Vec<Frame>,
    idx: isize,
    yielded: usize,
    done: bool,
}

impl<'a> GlobalSolutions<'a> {
    /// Creates the iterator over `sets` in stage order, all drawing on
    /// `catalog` as the shared budget. Nothing is solved until the
    /// first `next` call.
    pub fn new(sets: &'a [MissionSet], catalog: &'a Catalog, config: GlobalConfig) -> Self {
        Self {
            sets,
            catalog,
            config,
            consumed: BTreeMap::new(),
            frames: Vec::new(),
            idx: 0,
            yielded: 0,
            done: sets.is_empty(),
        }
    }

    /// Catalog minus everything committed by the frames below, with
    /// fully-consumed resources dropped.
    fn remaining_catalog(&self) -> Catalog {
        let mut remaining = self.catalog.clone();
        for (&id, &used) in &self.consumed {
            if let Some(resource) = remaining.get_mut(&id) {
                resource.capacity -= used;
                if resource.capacity <= 0 {
                    remaining.remove(&id);
                }
            }
        }
        remaining
    }

    fn commit(&mut self, assignment: &Assignment) {
        for roster in assignment.values() {
            for &id in roster {
                if id != EMPTY_ID {
                    *self.consumed.entry(id).or_insert(0) += 1;
                }
            }
        }
    }

    fn uncommit(&mut self, assignment: &Assignment) {
        for roster in assignment.values() {
            for &id in roster {
                if id == EMPTY_ID {
                    continue;
                }
                let drop_key = match self.consumed.get_mut(&id) {
                    Some(count) => {
                        *count -= 1;
                        *count <= 0
                    }
                    None => false,
                };
                if drop_key {
                    self.consumed.remove(&id);
                }
            }
        }
    }

    /// Reads one choice per frame; `None` when the top frame came back
    /// with an empty ranked list (a dead end).
    fn snapshot(&self) -> Option<GlobalSolution> {
        let mut solution = Vec::with_capacity(self.frames.len());
        for (depth, frame) in self.frames.iter().enumerate() {
            // Frames below the top still sit at their committed choice;
            // their pointers advance only when the frame above pops.
            let choice = if depth + 1 < self.frames.len() {
                frame.results.ranked.get(frame.pointer)
            } else {
                frame.results.ranked.first()
            }?;
            solution.push(StageChoice {
                max_score: frame.results.max_score,
                success_rate: choice.success_rate,
                assignment: choice.assignment.clone(),
            });
        }
        Some(solution)
    }

    /// Drops the top frame and moves focus to its parent.
    fn retreat(&mut self) {
        self.frames.pop();
        self.idx -= 1;
    }
}

impl Iterator for GlobalSolutions<'_> {
    type Item = Result<GlobalSolution, SolverError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done
            || (self.config.max_solutions > 0 && self.yielded >= self.config.max_solutions)
        {
            return None;
        }

        while self.idx >= 0 {
            let depth = self.idx as usize;
            if depth >= self.frames.len() {
                let remaining = self.remaining_catalog();
                let results = match solve(&self.sets[depth], &remaining, &self.config.solver) {
                    Ok(results) => results,
                    Err(error) => {
                        self.done = true;
                        return Some(Err(error));
                    }
                };
                self.frames.push(Frame {
                    results,
                    pointer: 0,
                });
                if self.frames.len() == self.sets.len() {
                    // The last stage never backtracks on its own ties:
                    // only its best-ranked assignment matters here.
                    let solution = self.snapshot();
                    self.retreat();
                    if self.idx >= 0 {
                        let parent = self.idx as usize;
                        self.frames[parent].pointer += 1;
                    }
                    if let Some(solution) = solution {
                        self.yielded += 1;
                        debug!(
                            stages = solution.len(),
                            yielded = self.yielded,
                            "global solution"
                        );
                        return Some(Ok(solution));
                    }
                    continue;
                }
                // Fall through to commit this frame's first choice.
            }

            let frame = &self.frames[depth];
            if frame.pointer > 0 {
                let previous = frame.results.ranked[frame.pointer - 1].assignment.clone();
                self.uncommit(&previous);
            }
            if self.frames[depth].pointer >= self.frames[depth].results.ranked.len() {
                self.retreat();
                if self.idx >= 0 {
                    let parent = self.idx as usize;
                    self.frames[parent].pointer += 1;
                }
                continue;
            }
            let choice = self.frames[depth].results.ranked[self.frames[depth].pointer]
                .assignment
                .clone();
            self.commit(&choice);
            self.idx += 1;
        }

        self.done = true;
        None
    }
}
