//! Solver configuration.

use crate::eval::UnknownRewardPolicy;

/// Configuration for solving one mission set.
///
/// # Examples
///
/// ```
/// use mission_alloc::solver::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_pruning(false)
///     .with_max_results(10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Run dominance pruning on the private catalog copy before
    /// enumeration. Best-effort: pruning can lose score through
    /// reduce-sum synergy, hence the switch.
    pub prune_dominated: bool,

    /// How to treat reward names missing from the reward table.
    pub unknown_rewards: UnknownRewardPolicy,

    /// Keep only the first N ranked results (0 = unlimited). A
    /// presentation knob, not a correctness concern.
    pub max_results: usize,

    /// Stop scoring after this many enumerated assignments
    /// (0 = unlimited). The enumeration is exponential; treat hitting
    /// this budget as resource exhaustion, not as a fault.
    pub assignment_budget: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            prune_dominated: true,
            unknown_rewards: UnknownRewardPolicy::Ignore,
            max_results: 0,
            assignment_budget: 0,
        }
    }
}

impl SolverConfig {
    pub fn with_pruning(mut self, enabled: bool) -> Self {
        self.prune_dominated = enabled;
        self
    }

    pub fn with_unknown_rewards(mut self, policy: UnknownRewardPolicy) -> Self {
        self.unknown_rewards = policy;
        self
    }

    pub fn with_max_results(mut self, n: usize) -> Self {
        self.max_results = n;
        self
    }

    pub fn with_assignment_budget(mut self, n: usize) -> Self {
        self.assignment_budget = n;
        self
    }
}

/// Configuration for the global allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalConfig {
    /// Per-mission-set solver settings.
    pub solver: SolverConfig,

    /// Stop after this many global solutions (0 = unlimited).
    pub max_solutions: usize,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            solver: SolverConfig::default(),
            max_solutions: 1,
        }
    }
}

impl GlobalConfig {
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    pub fn with_max_solutions(mut self, n: usize) -> Self {
        self.max_solutions = n;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::default();
        assert!(config.prune_dominated);
        assert_eq!(config.unknown_rewards, UnknownRewardPolicy::Ignore);
        assert_eq!(config.max_results, 0);
        assert_eq!(config.assignment_budget, 0);
        assert_eq!(GlobalConfig::default().max_solutions, 1);
    }

    #[test]
    fn test_builders() {
        let config = SolverConfig::default()
            .with_pruning(false)
            .with_unknown_rewards(UnknownRewardPolicy::Error)
            .with_max_results(5)
            .with_assignment_budget(100);
        assert!(!config.prune_dominated);
        assert_eq!(config.unknown_rewards, UnknownRewardPolicy::Error);
        assert_eq!(config.max_results, 5);
        assert_eq!(config.assignment_budget, 100);
    }
}
