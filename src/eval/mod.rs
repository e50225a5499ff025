//! Requirement evaluation and assignment scoring.
//!
//! [`augment`] applies a requirement's conditional stat boosts to a
//! roster (copy-on-write, stats only), [`requirement_met`] runs the
//! permutation and reduce-sum checks against the augmented roster, and
//! `score.rs` turns whole assignments into weighted scores and ranked
//! best results.

mod augment;
mod requirement;
mod score;

pub use augment::{augment, EvalUnit};
pub use requirement::requirement_met;
pub use score::{aggregate_best, score_assignment, AssignmentScore, UnknownRewardPolicy};
