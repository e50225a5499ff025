//! Candidate pool construction and dominance pruning.
//!
//! The pool expands the catalog into one [`Candidate`] per available
//! unit, padding with filler units when supply is short of demand. The
//! pruner shrinks the catalog before enumeration by removing resources
//! provably replaceable by another for every single-unit requirement
//! outcome.

mod candidates;
mod dominance;

pub use candidates::{build_candidates, Candidate};
pub use dominance::prune_dominated;
