//! PaCS cycle loop execution.
//!
//! [`PacsRunner`] orchestrates the complete search:
//! random worlds → evaluation → lead selection → reconstruction and
//! mutation → repeat until plateau or cycle budget.

use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use u_numflow::random::create_rng;

use super::config::PacsConfig;
use super::evaluate::{evaluate_world, index_candidates, CandidateIndex};
use super::evolve::evolve_world;
use super::leads::select_leads;
use super::types::{CycleStats, PacsResult, WorldEvaluation};
use crate::error::PacsError;
use crate::partition::{build_random_world, compute_group_sizes};
use crate::scoring::{Candidate, CompatibilityMap};

type World = Vec<Vec<String>>;

/// Executes the PaCS search loop.
///
/// # Usage
///
/// ```
/// use u_pacs::pacs::{PacsConfig, PacsRunner};
/// use u_pacs::random::Lcg;
/// use u_pacs::scoring::{Candidate, CompatibilityMap};
///
/// let candidates: Vec<Candidate> = (0..12)
///     .map(|i| Candidate::new(format!("u{i}"), ["CS", "Law"][i % 2], 1 + (i % 3) as i32, ["AI"], "Analytical"))
///     .collect();
/// let config = PacsConfig::default().with_num_worlds(5).with_num_cycles(3);
///
/// let result = PacsRunner::run(&candidates, &config, &CompatibilityMap::new(), &mut Lcg::new(42)).unwrap();
/// assert!(result.cycles_executed <= 3);
/// assert!((0.0..=1.0).contains(&result.best_world_score));
/// ```
pub struct PacsRunner;

impl PacsRunner {
    /// Runs the search over a closed candidate snapshot.
    ///
    /// `rng` is the only source of randomness; the same generator state and
    /// inputs reproduce the same result exactly.
    ///
    /// # Errors
    ///
    /// - [`PacsError::EmptyPopulation`] if `candidates` is empty
    /// - [`PacsError::PartitionInfeasible`] if the population size cannot be
    ///   split under the configured group size bounds
    pub fn run<R: Rng>(
        candidates: &[Candidate],
        config: &PacsConfig,
        compatibility: &CompatibilityMap,
        rng: &mut R,
    ) -> Result<PacsResult, PacsError> {
        if candidates.is_empty() {
            return Err(PacsError::EmptyPopulation);
        }

        let (min, max) = (config.min_group_size, config.max_group_size);
        let ids: Vec<String> = candidates.iter().map(|c| c.id.clone()).collect();
        compute_group_sizes(ids.len(), min, max)?;

        let by_id = index_candidates(candidates);
        let num_worlds = config.num_worlds.max(1);
        let num_cycles = config.num_cycles.max(1);

        // 1. Initial population
        let mut worlds: Vec<World> = (0..num_worlds)
            .map(|_| build_random_world(&ids, min, max, rng))
            .collect::<Result<_, _>>()?;

        let mut best: Option<WorldEvaluation> = None;
        let mut average_world_score = 0.0;
        let mut previous_cycle_best = f64::NEG_INFINITY;
        let mut plateau_counter = 0usize;
        let mut plateaued = false;
        let mut cycle_history = Vec::new();

        // 2. Cycle loop
        for cycle in 0..num_cycles {
            let evaluations = evaluate_population(&worlds, &by_id, config, compatibility);

            let cycle_best = find_best(&evaluations);
            let cycle_best_score = cycle_best.map_or(0.0, |w| w.world_score);
            let cycle_avg =
                evaluations.iter().map(|w| w.world_score).sum::<f64>() / evaluations.len() as f64;

            if let Some(world) = cycle_best {
                keep_best(&mut best, world);
            }
            average_world_score = cycle_avg;

            // no improvement at all counts even when epsilon is 0
            let improvement = cycle_best_score - previous_cycle_best;
            if improvement < config.plateau_epsilon || improvement <= 0.0 {
                plateau_counter += 1;
            } else {
                plateau_counter = 0;
            }
            previous_cycle_best = cycle_best_score;

            log::debug!(
                "cycle {}: best {:.6}, avg {:.6}, plateau {}/{}",
                cycle + 1,
                cycle_best_score,
                cycle_avg,
                plateau_counter,
                config.plateau_patience
            );

            let mut stats = CycleStats {
                cycle,
                best_world_score: cycle_best_score,
                average_world_score: cycle_avg,
                lead_count: 0,
            };

            if plateau_counter >= config.plateau_patience {
                plateaued = true;
                cycle_history.push(stats);
                break;
            }
            if cycle + 1 == num_cycles {
                cycle_history.push(stats);
                break;
            }

            // 3. Leads and next generation
            let leads = select_leads(&evaluations, config.lead_percent);
            stats.lead_count = leads.len();
            cycle_history.push(stats);

            worlds = next_generation(&ids, &leads, config, num_worlds, rng)?;
        }

        let best_world = best.unwrap_or_default();
        let cycles_executed = cycle_history.len();

        log::info!(
            "PaCS finished after {} cycle(s){}: best {:.6}, avg {:.6}, {} groups",
            cycles_executed,
            if plateaued { " on plateau" } else { "" },
            best_world.world_score,
            average_world_score,
            best_world.groups.len()
        );

        Ok(PacsResult {
            cycles_executed,
            best_world_score: best_world.world_score,
            average_world_score,
            best_world,
            plateaued,
            cycle_history,
        })
    }
}

/// Convenience wrapper around [`PacsRunner::run`].
pub fn run_search<R: Rng>(
    candidates: &[Candidate],
    config: &PacsConfig,
    compatibility: &CompatibilityMap,
    rng: &mut R,
) -> Result<PacsResult, PacsError> {
    PacsRunner::run(candidates, config, compatibility, rng)
}

/// Evaluate all worlds, preserving world order.
fn evaluate_population(
    worlds: &[World],
    by_id: &CandidateIndex<'_>,
    config: &PacsConfig,
    compatibility: &CompatibilityMap,
) -> Vec<WorldEvaluation> {
    #[cfg(feature = "parallel")]
    {
        if config.parallel {
            return worlds
                .par_iter()
                .map(|world| evaluate_world(world, by_id, config, compatibility))
                .collect();
        }
    }

    worlds
        .iter()
        .map(|world| evaluate_world(world, by_id, config, compatibility))
        .collect()
}

/// Build the next population around the selected leads.
///
/// In parallel mode every world gets its own generator seeded from `rng`
/// in world order, so the outcome does not depend on scheduling.
fn next_generation<R: Rng>(
    ids: &[String],
    leads: &[Vec<String>],
    config: &PacsConfig,
    num_worlds: usize,
    rng: &mut R,
) -> Result<Vec<World>, PacsError> {
    if !config.parallel {
        return (0..num_worlds)
            .map(|_| evolve_world(ids, leads, config, rng))
            .collect();
    }

    let seeds: Vec<u64> = (0..num_worlds).map(|_| rng.random::<u64>()).collect();
    let build = |seed: &u64| {
        let mut world_rng = create_rng(*seed);
        evolve_world(ids, leads, config, &mut world_rng)
    };

    #[cfg(feature = "parallel")]
    let worlds: Result<Vec<World>, PacsError> = seeds.par_iter().map(build).collect();
    #[cfg(not(feature = "parallel"))]
    let worlds: Result<Vec<World>, PacsError> = seeds.iter().map(build).collect();

    worlds
}

/// Replace the global best only on strict improvement, so an equal score
/// in a later cycle keeps the earlier world.
fn keep_best(best: &mut Option<WorldEvaluation>, world: &WorldEvaluation) {
    let improved = best
        .as_ref()
        .map_or(true, |b| world.world_score > b.world_score);
    if improved {
        *best = Some(world.clone());
    }
}

/// Find the world with the highest score; the first one wins ties.
fn find_best(evaluations: &[WorldEvaluation]) -> Option<&WorldEvaluation> {
    evaluations.iter().fold(None, |best, current| match best {
        Some(b) if current.world_score <= b.world_score => Some(b),
        _ => Some(current),
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pacs::ScoredGroup;
    use crate::random::Lcg;
    use crate::scoring::{GoalMode, Weights};
    use std::collections::HashSet;

    const PERSONALITIES: [&str; 4] = ["Analytical", "Collaborative", "Creative", "Practical"];

    fn make_candidates(count: usize) -> Vec<Candidate> {
        (0..count)
            .map(|i| {
                let major = ["Computer Science", "Business", "Economics"][i % 3];
                let interests: &[&str] = if i % 2 == 0 {
                    &["AI", "Web", "Data"]
                } else {
                    &["Finance", "Policy", "Data"]
                };
                Candidate::new(
                    format!("user-{}", i + 1),
                    major,
                    (i % 4) as i32 + 1,
                    interests.iter().copied(),
                    PERSONALITIES[i % 4],
                )
            })
            .collect()
    }

    fn scenario_config() -> PacsConfig {
        PacsConfig {
            goal_mode: GoalMode::Diverse,
            num_worlds: 10,
            num_cycles: 6,
            lead_percent: 0.1,
            mutation_rate: 0.2,
            plateau_epsilon: 0.0,
            plateau_patience: 10,
            min_group_size: 4,
            max_group_size: 5,
            weights: Weights::new(0.35, 0.25, 0.2, 0.2),
            parallel: false,
        }
    }

    fn assert_covers(result: &PacsResult, candidates: &[Candidate], min: usize, max: usize) {
        let mut seen = HashSet::new();
        for group in &result.best_world.groups {
            let n = group.member_ids.len();
            assert!(n >= min && n <= max, "group size {n} outside [{min}, {max}]");
            for id in &group.member_ids {
                assert!(seen.insert(id.clone()), "duplicate id {id}");
            }
        }
        let expected: HashSet<String> = candidates.iter().map(|c| c.id.clone()).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let candidates = make_candidates(20);
        let config = scenario_config();
        let result =
            PacsRunner::run(&candidates, &config, &CompatibilityMap::new(), &mut Lcg::new(42))
                .unwrap();

        let groups = result.best_world.groups.len();
        assert!((4..=5).contains(&groups), "expected 4-5 groups, got {groups}");
        assert!((0.0..=1.0).contains(&result.best_world_score));
        assert!((0.0..=1.0).contains(&result.average_world_score));
        assert!(result.cycles_executed >= 1 && result.cycles_executed <= 6);
        assert_covers(&result, &candidates, 4, 5);
    }

    #[test]
    fn test_empty_population() {
        let result = PacsRunner::run(
            &[],
            &scenario_config(),
            &CompatibilityMap::new(),
            &mut Lcg::new(1),
        );
        assert_eq!(result, Err(PacsError::EmptyPopulation));
    }

    #[test]
    fn test_infeasible_population() {
        let candidates = make_candidates(5);
        let config = scenario_config().with_group_size(4, 4);
        let mut rng = Lcg::new(1);
        let result = PacsRunner::run(&candidates, &config, &CompatibilityMap::new(), &mut rng);
        assert_eq!(
            result,
            Err(PacsError::PartitionInfeasible {
                total: 5,
                min: 4,
                max: 4
            })
        );
        assert_eq!(rng, Lcg::new(1), "fails before any randomness is consumed");
    }

    #[test]
    fn test_deterministic() {
        let candidates = make_candidates(37);
        let config = scenario_config().with_group_size(3, 5);
        let map = CompatibilityMap::from_rows([("Analytical", "Creative", 0.9), ("Practical", "Creative", 0.2)]);

        let a = PacsRunner::run(&candidates, &config, &map, &mut Lcg::new(7)).unwrap();
        let b = PacsRunner::run(&candidates, &config, &map, &mut Lcg::new(7)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.best_world_score.to_bits(), b.best_world_score.to_bits());
    }

    #[test]
    fn test_parallel_mode_deterministic() {
        let candidates = make_candidates(40);
        let config = scenario_config().with_parallel(true);
        let map = CompatibilityMap::new();

        let a = PacsRunner::run(&candidates, &config, &map, &mut Lcg::new(3)).unwrap();
        let b = PacsRunner::run(&candidates, &config, &map, &mut Lcg::new(3)).unwrap();
        assert_eq!(a, b);
        assert_covers(&a, &candidates, 4, 5);
    }

    #[test]
    fn test_plateau_termination_single_grouping() {
        // 4 candidates with sizes [4, 4]: only one grouping exists
        let candidates = make_candidates(4);
        let config = scenario_config()
            .with_group_size(4, 4)
            .with_num_cycles(50)
            .with_plateau_epsilon(0.0)
            .with_plateau_patience(3);

        let result =
            PacsRunner::run(&candidates, &config, &CompatibilityMap::new(), &mut Lcg::new(9))
                .unwrap();

        assert!(result.plateaued);
        assert!(result.cycles_executed <= config.plateau_patience + 1);
        assert_eq!(result.best_world.groups.len(), 1);
    }

    #[test]
    fn test_single_cycle() {
        let candidates = make_candidates(12);
        let config = scenario_config().with_num_cycles(1);
        let result =
            PacsRunner::run(&candidates, &config, &CompatibilityMap::new(), &mut Lcg::new(5))
                .unwrap();

        assert_eq!(result.cycles_executed, 1);
        assert!(!result.plateaued);
        assert_eq!(result.cycle_history.len(), 1);
        assert_eq!(result.cycle_history[0].lead_count, 0);
        assert_eq!(
            result.average_world_score.to_bits(),
            result.cycle_history[0].average_world_score.to_bits()
        );
    }

    #[test]
    fn test_single_world_zero_mutation() {
        let candidates = make_candidates(16);
        let config = scenario_config().with_num_worlds(1).with_mutation_rate(0.0);
        let result =
            PacsRunner::run(&candidates, &config, &CompatibilityMap::new(), &mut Lcg::new(8))
                .unwrap();
        assert_covers(&result, &candidates, 4, 5);
        // with one world, the cycle average is that world's score
        let last = result.cycle_history.last().unwrap();
        assert_eq!(last.best_world_score, last.average_world_score);
    }

    #[test]
    fn test_best_world_is_best_seen() {
        let candidates = make_candidates(30);
        let config = scenario_config().with_num_cycles(12).with_plateau_patience(50);
        let result =
            PacsRunner::run(&candidates, &config, &CompatibilityMap::new(), &mut Lcg::new(11))
                .unwrap();

        let max_cycle_best = result
            .cycle_history
            .iter()
            .map(|c| c.best_world_score)
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(result.best_world_score, max_cycle_best);
        assert_eq!(result.best_world_score, result.best_world.world_score);
        assert_eq!(
            result.average_world_score,
            result.cycle_history.last().unwrap().average_world_score
        );
    }

    #[test]
    fn test_history_lead_counts() {
        let candidates = make_candidates(20);
        let config = scenario_config().with_plateau_patience(50);
        let result =
            PacsRunner::run(&candidates, &config, &CompatibilityMap::new(), &mut Lcg::new(21))
                .unwrap();

        assert_eq!(result.cycles_executed, 6);
        // 10 worlds * 4-5 groups * 0.1 -> 4 or 5 leads requested, all but the last cycle
        for stats in &result.cycle_history[..5] {
            assert!(stats.lead_count >= 4, "lead_count {}", stats.lead_count);
        }
        assert_eq!(result.cycle_history[5].lead_count, 0);
    }

    #[test]
    fn test_find_best_first_wins_ties() {
        let worlds = vec![
            WorldEvaluation {
                groups: vec![],
                world_score: 0.5,
            },
            WorldEvaluation {
                groups: vec![],
                world_score: 0.7,
            },
            WorldEvaluation {
                groups: vec![],
                world_score: 0.7,
            },
        ];
        let best = find_best(&worlds).unwrap();
        assert!(std::ptr::eq(best, &worlds[1]));
        assert!(find_best(&[]).is_none());
    }

    #[test]
    fn test_keep_best_across_cycles() {
        let scored = |id: &str, score: f64| WorldEvaluation {
            groups: vec![ScoredGroup {
                member_ids: vec![id.to_string()],
                score: Default::default(),
            }],
            world_score: score,
        };

        let mut best = None;
        keep_best(&mut best, &scored("first", 0.6));
        keep_best(&mut best, &scored("tied", 0.6));
        assert_eq!(best.as_ref().unwrap().groups[0].member_ids, vec!["first"]);

        keep_best(&mut best, &scored("lower", 0.4));
        assert_eq!(best.as_ref().unwrap().groups[0].member_ids, vec!["first"]);

        keep_best(&mut best, &scored("higher", 0.61));
        assert_eq!(best.as_ref().unwrap().groups[0].member_ids, vec!["higher"]);
    }

    #[test]
    fn test_huge_cycle_budget_stops_on_plateau() {
        // a single possible grouping, so the second cycle cannot improve
        let candidates = make_candidates(4);
        let config = PacsConfig::default()
            .with_group_size(4, 4)
            .with_num_worlds(4)
            .with_num_cycles(usize::MAX / 4)
            .with_plateau_patience(1);

        let result =
            PacsRunner::run(&candidates, &config, &CompatibilityMap::new(), &mut Lcg::new(9))
                .unwrap();
        assert!(result.plateaued);
        assert!(result.cycles_executed <= 2, "cycles {}", result.cycles_executed);
    }

    #[test]
    fn test_focused_mode_runs() {
        let candidates = make_candidates(24);
        let config = scenario_config().with_goal_mode(GoalMode::Focused);
        let result =
            PacsRunner::run(&candidates, &config, &CompatibilityMap::new(), &mut Lcg::new(13))
                .unwrap();
        assert_covers(&result, &candidates, 4, 5);
    }
}
