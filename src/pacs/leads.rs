//! Lead group selection.
//!
//! Leads are the best-scoring groups of a cycle, carried unchanged into
//! every world of the next cycle.

use std::collections::HashSet;

use super::types::{ScoredGroup, WorldEvaluation};

// Absorbs products such as 30 * 0.1 = 3.0000000000000004 before ceil.
const LEAD_TARGET_TOLERANCE: f64 = 1e-9;

/// Number of leads requested for `group_count` groups.
///
/// `ceil(group_count * lead_percent)` with a `1e-9` tolerance, so
/// `lead_target(30, 0.1)` is 3 where a plain float `ceil` gives 4.
pub fn lead_target(group_count: usize, lead_percent: f64) -> usize {
    let raw = (group_count as f64 * lead_percent - LEAD_TARGET_TOLERANCE).ceil();
    if raw.is_nan() || raw <= 0.0 {
        return 0;
    }
    (raw as usize).min(group_count)
}

/// Selects lead groups from every group of every world.
///
/// Groups are ranked by total score, descending (stable, so earlier worlds
/// win ties). The first pass takes groups sharing no id with an already
/// selected lead. If that leaves fewer than [`lead_target`] leads, a second
/// pass fills the remaining slots in rank order regardless of overlap,
/// skipping only exact repeats of a selected member list.
pub fn select_leads(evaluations: &[WorldEvaluation], lead_percent: f64) -> Vec<Vec<String>> {
    let mut ranked: Vec<&ScoredGroup> = evaluations.iter().flat_map(|w| w.groups.iter()).collect();
    ranked.sort_by(|a, b| {
        b.score
            .total
            .partial_cmp(&a.score.total)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let target = lead_target(ranked.len(), lead_percent);
    if target == 0 {
        return Vec::new();
    }

    let mut selected: Vec<Vec<String>> = Vec::with_capacity(target);
    let mut used: HashSet<&str> = HashSet::new();

    for group in &ranked {
        if group.member_ids.iter().any(|id| used.contains(id.as_str())) {
            continue;
        }
        used.extend(group.member_ids.iter().map(String::as_str));
        selected.push(group.member_ids.clone());
        if selected.len() >= target {
            return selected;
        }
    }

    for group in &ranked {
        if selected.iter().any(|lead| *lead == group.member_ids) {
            continue;
        }
        selected.push(group.member_ids.clone());
        if selected.len() >= target {
            break;
        }
    }

    selected
}
