//! Crate-wide error type.

use crate::model::ResourceId;
use thiserror::Error;

/// Errors surfaced by the solver.
///
/// Enumeration and scoring are total functions over validated input:
/// everything fallible is either rejected before the search starts
/// ([`SolverError::Configuration`]), opted into explicitly
/// ([`SolverError::UnknownReward`], strict reward mode only), or an
/// internal invariant violation that cannot occur with well-formed
/// input ([`SolverError::UnknownResource`]).
///
/// "No feasible assignment" is **not** an error; it is reported as an
/// empty result with a max score of zero.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// Malformed catalog or mission-set input that default filling
    /// cannot cure, e.g. a negative resource capacity.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A met requirement paid out a reward name that is missing from
    /// the reward table while the strict unknown-reward policy is
    /// active. Under the default policy the name contributes zero.
    #[error("unknown reward name: {0}")]
    UnknownReward(String),

    /// An assignment referenced a resource id absent from the catalog.
    /// This indicates a bug in the enumerator, not bad input.
    #[error("assignment references unknown resource {0}")]
    UnknownResource(ResourceId),
}
