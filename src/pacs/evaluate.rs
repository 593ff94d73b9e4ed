//! World evaluation.

use std::collections::HashMap;

use super::config::PacsConfig;
use super::types::{ScoredGroup, WorldEvaluation};
use crate::scoring::{score_group, Candidate, CompatibilityMap};

/// Candidate lookup by id.
pub type CandidateIndex<'a> = HashMap<&'a str, &'a Candidate>;

/// Indexes candidates by id. Later duplicates replace earlier ones.
pub fn index_candidates(candidates: &[Candidate]) -> CandidateIndex<'_> {
    candidates.iter().map(|c| (c.id.as_str(), c)).collect()
}

/// Scores every group of a world and averages the totals.
///
/// Ids missing from `by_id` are left out of scoring but kept in the
/// group's `member_ids`. An empty world scores 0.
pub fn evaluate_world(
    groups: &[Vec<String>],
    by_id: &CandidateIndex<'_>,
    config: &PacsConfig,
    compatibility: &CompatibilityMap,
) -> WorldEvaluation {
    let scored: Vec<ScoredGroup> = groups
        .iter()
        .map(|member_ids| {
            let members: Vec<&Candidate> = member_ids
                .iter()
                .filter_map(|id| by_id.get(id.as_str()).copied())
                .collect();
            ScoredGroup {
                member_ids: member_ids.clone(),
                score: score_group(&members, config.goal_mode, &config.weights, compatibility),
            }
        })
        .collect();

    let world_score = if scored.is_empty() {
        0.0
    } else {
        scored.iter().map(|g| g.score.total).sum::<f64>() / scored.len() as f64
    };

    WorldEvaluation {
        groups: scored,
        world_score,
    }
}
