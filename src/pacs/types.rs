//! Evaluated worlds and run results.

use crate::scoring::ScoreBreakdown;

/// One group of a world with its score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredGroup {
    /// Candidate ids, in placement order.
    pub member_ids: Vec<String>,
    /// Score of the resolved members.
    pub score: ScoreBreakdown,
}

/// A scored world: a full partition of the population.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldEvaluation {
    /// Every group of the world.
    pub groups: Vec<ScoredGroup>,
    /// Mean of the groups' totals; 0 for an empty world.
    pub world_score: f64,
}

/// Summary of one executed cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleStats {
    /// Zero-based cycle index.
    pub cycle: usize,
    /// Best world score of this cycle.
    pub best_world_score: f64,
    /// Mean world score of this cycle.
    pub average_world_score: f64,
    /// Leads carried into the next cycle (0 on the final cycle).
    pub lead_count: usize,
}

/// Result of a PaCS run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PacsResult {
    /// Number of cycles evaluated.
    pub cycles_executed: usize,

    /// Score of [`best_world`](Self::best_world).
    pub best_world_score: f64,

    /// Mean world score of the last executed cycle.
    pub average_world_score: f64,

    /// Best world seen across all cycles, not necessarily from the last one.
    pub best_world: WorldEvaluation,

    /// Whether the run stopped on the plateau criterion.
    pub plateaued: bool,

    /// Per-cycle statistics, in execution order.
    pub cycle_history: Vec<CycleStats>,
}
