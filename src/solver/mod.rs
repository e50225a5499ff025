//! Search orchestration: single mission-set solving, the global
//! allocator over a sequence of mission-sets sharing one resource
//! budget, and the compatible-roster search across independent sets.

mod compatible;
mod config;
mod global;
mod single;

pub use compatible::{compatible_rosters, Roster};
pub use config::{GlobalConfig, SolverConfig};
pub use global::{GlobalSolution, GlobalSolutions, StageChoice};
pub use single::solve;
