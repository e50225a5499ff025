//! Plain record types shared by every component.

use std::collections::{BTreeMap, BTreeSet};

/// Identifier of a resource in the catalog.
pub type ResourceId = i64;

/// Identifier of a mission within a mission set.
pub type MissionId = i64;

/// Identifier of a requirement within a mission.
pub type RequirementId = i64;

/// Sentinel id for a filler ("empty") unit, generated when the total
/// resource supply is smaller than the total mission demand. A mission
/// holding a filler unit fails automatically.
pub const EMPTY_ID: ResourceId = -1;

/// Attribute name to numeric value. A `BTreeMap` keeps iteration
/// deterministic, which the emission-order contract depends on.
pub type StatMap = BTreeMap<String, f64>;

/// Reward name to weight. Read-only during the search.
pub type RewardTable = BTreeMap<String, f64>;

/// One conditional augmentation entry: skill name to stat deltas. A
/// resource qualifies for the entry only if it holds every named skill
/// at a positive level.
pub type BoostMap = BTreeMap<String, StatMap>;

/// The resource catalog, keyed by resource id in ascending order.
pub type Catalog = BTreeMap<ResourceId, Resource>;

/// One full allocation: mission id to the ordered resource ids filling
/// its slots. Each list has length equal to the mission capacity and
/// may contain [`EMPTY_ID`]. Within one assignment, a real resource id
/// appears at most `capacity` times across all missions combined.
pub type Assignment = BTreeMap<MissionId, Vec<ResourceId>>;

/// A capacity-limited, attributed resource ("unit").
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resource {
    /// Number of available units. Must be non-negative.
    pub capacity: i64,

    /// Display name, used only by external reporting.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,

    /// Stat name to value.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: StatMap,

    /// Skill name to level.
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: StatMap,
}

/// One way to succeed in a mission: attribute thresholds, additive-sum
/// thresholds, conditional augmentations and a reward payout.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Requirement {
    /// Ordered stat-threshold entries. Entry `i` must be matched by the
    /// `i`-th member of some roster permutation.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: Vec<StatMap>,

    /// Ordered skill-threshold entries, matched like `stats`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: Vec<StatMap>,

    /// Stat name to target: the stat summed over the whole roster must
    /// reach the target (absent stats count as zero).
    #[cfg_attr(feature = "serde", serde(default))]
    pub reduce_stats: StatMap,

    /// Augmentations applied to the raw roster before any check.
    #[cfg_attr(feature = "serde", serde(default))]
    pub boosts: Vec<BoostMap>,

    /// Augmentations applied after `boosts`. A single roster member
    /// failing a single entry discards this whole pass.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reduce_boosts: Vec<BoostMap>,

    /// Reward name to quantity, paid when the requirement is met.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rewards: StatMap,
}

/// A slot group with a fixed capacity and ordered success criteria.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mission {
    /// Number of slots to fill. Must be positive.
    pub capacity: i64,

    /// Display name, used only by external reporting.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,

    /// Ordered requirements, keyed by requirement id.
    #[cfg_attr(feature = "serde", serde(default))]
    pub requirements: BTreeMap<RequirementId, Requirement>,

    /// Extra reward paid when every requirement is met.
    #[cfg_attr(feature = "serde", serde(default))]
    pub perfect_rewards: StatMap,

    /// When present, only these resource ids may fill this mission's
    /// slots. Filler units always pass the filter.
    #[cfg_attr(feature = "serde", serde(default))]
    pub allowed_resources: Option<BTreeSet<ResourceId>>,
}

/// An ordered group of missions evaluated together, with the reward
/// weight table used to score them.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MissionSet {
    /// Missions in ascending id order.
    pub missions: BTreeMap<MissionId, Mission>,

    /// Reward name to weight.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rewards: RewardTable,
}

impl MissionSet {
    /// Total number of slots across all missions.
    pub fn total_capacity(&self) -> i64 {
        self.missions.values().map(|m| m.capacity).sum()
    }
}

/// One maximum-score assignment paired with its success rate.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedAssignment {
    /// Met requirements over total requirements, as a percentage.
    /// Zero when the assignment evaluated no requirements at all.
    pub success_rate: f64,

    /// The assignment itself.
    pub assignment: Assignment,
}

/// Outcome of searching one mission set: the maximum score and every
/// assignment achieving it, ranked by success rate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BestResults {
    /// Maximum score over all enumerated assignments; zero when none
    /// was enumerated.
    pub max_score: f64,

    /// Maximum-score assignments, success rate descending, ties in
    /// generation order.
    pub ranked: Vec<RankedAssignment>,
}

impl BestResults {
    /// Whether the search found no feasible assignment. This is a
    /// regular outcome, not an error.
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}
