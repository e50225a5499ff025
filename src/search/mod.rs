//! Lazy enumeration of legal allocations.
//!
//! Two layers: [`Combinations`] yields duplicate-avoiding size-k
//! selections from a candidate sequence, and [`Partitions`] drives a
//! backtracking stack of those generators over the mission list,
//! yielding full [`Assignment`](crate::model::Assignment)s in a
//! deterministic order that downstream "first N" semantics rely on.

mod combinations;
mod partitions;

pub use combinations::Combinations;
pub use partitions::Partitions;
