//! Partition-and-Cycle-Search (PaCS).
//!
//! A population-of-worlds evolutionary search for group partitions. Each
//! world is a complete partition of the candidates; every cycle the best
//! groups across all worlds are locked as leads, the rest of the population
//! is re-partitioned around them and mutated, and the run stops on a score
//! plateau or when the cycle budget is spent.
//!
//! # Key Types
//!
//! - [`PacsConfig`]: Run parameters (worlds, cycles, leads, mutation, plateau)
//! - [`PacsRunner`]: Executes the cycle loop
//! - [`PacsResult`]: Best world seen plus run statistics
//!
//! # Building Blocks
//!
//! - [`evaluate_world`]: Scores every group of a world
//! - [`select_leads`]: Picks the elite groups of a cycle
//! - [`evolve_world`]: Rebuilds a world around locked leads
//! - [`mutate_non_lead_groups`]: Member swaps outside the leads

mod config;
mod evaluate;
mod evolve;
mod leads;
mod runner;
mod types;

pub use config::{ConfigOverrides, PacsConfig, WeightOverrides};
pub use evaluate::{evaluate_world, index_candidates, CandidateIndex};
pub use evolve::{evolve_world, mutate_non_lead_groups};
pub use leads::{lead_target, select_leads};
pub use runner::{run_search, PacsRunner};
pub use types::{CycleStats, PacsResult, ScoredGroup, WorldEvaluation};
