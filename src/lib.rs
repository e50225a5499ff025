//! Exhaustive mission-assignment solver.
//!
//! Partitions a catalog of capacity-limited resources ("units") across
//! the fixed-capacity missions of a mission set, scores every legal
//! partition against structured requirements, and reports the
//! maximum-score assignments ranked by success rate:
//!
//! - **Model**: plain record types for resources, missions,
//!   requirements and assignments, plus input validation.
//! - **Pool**: candidate expansion (one candidate per unit of
//!   capacity, filler sentinels when supply falls short) and optional
//!   dominance pruning of provably-replaceable resources.
//! - **Search**: duplicate-aware combination enumeration and the
//!   backtracking partition driver, both lazy iterators with a
//!   deterministic emission order.
//! - **Eval**: conditional stat augmentation, permutation-based
//!   requirement checks, weighted scoring and best-result aggregation.
//! - **Solver**: the single mission-set pipeline, the global
//!   allocator (a depth-first walk over a sequence of mission sets
//!   drawing on one shared resource budget) and the compatible-roster
//!   search (rosters serving every one of several independent
//!   single-mission sets).
//!
//! The enumeration is exact and exponential. It is meant for the small
//! instances the domain actually produces; [`SolverConfig`] carries an
//! assignment budget for anything larger.
//!
//! [`SolverConfig`]: solver::SolverConfig

pub mod error;
pub mod eval;
pub mod model;
pub mod pool;
pub mod search;
pub mod solver;
