//! Data model: resources, missions, requirements and assignments.
//!
//! All inputs are plain records. An external loader is expected to fill
//! optional collections with empty defaults (the types' [`Default`] /
//! `#[serde(default)]` behavior) before the core runs; the functions in
//! this module handle the remaining validation and canonicalization.

mod types;
mod validate;

pub use types::{
    Assignment, BestResults, BoostMap, Catalog, Mission, MissionId, MissionSet, RankedAssignment,
    Requirement, RequirementId, Resource, ResourceId, RewardTable, StatMap, EMPTY_ID,
};
pub use validate::{normalize_catalog, total_resource_capacity, validate_catalog};
