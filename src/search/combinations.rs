//! Duplicate-avoiding combination primitive.

use crate::pool::Candidate;

/// Lazily enumerates size-`k` index selections from a candidate
/// sequence in lexicographic pointer order.
///
/// Units of a multi-capacity resource are interchangeable, so subsets
/// differing only in *which* instance of a repeated id was picked must
/// not be produced twice. The advance rule guarantees this: a pointer
/// only moves forward to the next candidate whose resource id differs
/// from the one it is leaving. Every pointer to its right is then reset
/// contiguously after its predecessor, which is what still allows one
/// combination to hold several instances of the same resource.
///
/// For candidates `{1,2,3}` (capacity 1 each) and `k = 2` this yields
/// `{1,2},{1,3},{2,3}`; for `{1,2,2,3}` (resource 2 has capacity 2) and
/// `k = 3` it yields `{1,2,2},{1,2,3},{2,2,3}`.
///
/// The candidate sequence must be grouped by resource id (sorted input
/// satisfies this).
#[derive(Debug, Clone)]
pub struct Combinations {
    candidates: Vec<Candidate>,
    pointers: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    /// Creates the generator over `candidates`, selecting `k` at a time.
    ///
    /// `k = 0` yields exactly one empty selection; `k` larger than the
    /// sequence yields nothing.
    pub fn new(candidates: Vec<Candidate>, k: usize) -> Self {
        let done = k > candidates.len();
        Self {
            done,
            pointers: (0..k).collect(),
            candidates,
            started: false,
        }
    }

    /// The candidate sequence this generator draws from.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Moves to the next selection; false when exhausted.
    fn advance(&mut self) -> bool {
        let k = self.pointers.len();
        let n = self.candidates.len();
        for i in (0..k).rev() {
            let leaving = self.candidates[self.pointers[i]].id;
            let mut next = self.pointers[i] + 1;
            while next < n && self.candidates[next].id == leaving {
                next += 1;
            }
            // The advanced pointer and everything reset after it must fit.
            if next < n && next + (k - 1 - i) < n {
                for (offset, pointer) in self.pointers[i..].iter_mut().enumerate() {
                    *pointer = next + offset;
                }
                return true;
            }
        }
        false
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.pointers.clone());
        }
        if self.advance() {
            Some(self.pointers.clone())
        } else {
            self.done = true;
            None
        }
    }
}
