//! Next-generation world construction.
//!
//! A new world keeps the lead groups intact, partitions everyone else at
//! random, then perturbs the non-lead groups with member swaps.

use std::collections::HashSet;

use rand::Rng;

use super::config::PacsConfig;
use crate::error::PacsError;
use crate::partition::{build_random_world, can_partition};

/// Builds one world around `leads`.
///
/// Leads are locked in order. A lead sharing an id with an earlier locked
/// lead, or whose size is outside the configured bounds, is not placed, so
/// every id lands in exactly one size-valid group. While the
/// unlocked remainder cannot be partitioned under the configured size
/// bounds, locked leads are dropped from the end. The remainder is then
/// split at random and the non-lead groups are mutated with
/// [`mutate_non_lead_groups`].
///
/// # Errors
///
/// [`PacsError::PartitionInfeasible`] only if `all_ids` itself cannot be
/// partitioned, which the runner rules out before the first cycle.
pub fn evolve_world<R: Rng>(
    all_ids: &[String],
    leads: &[Vec<String>],
    config: &PacsConfig,
    rng: &mut R,
) -> Result<Vec<Vec<String>>, PacsError> {
    let (min, max) = (config.min_group_size, config.max_group_size);

    let mut locked: Vec<&Vec<String>> = Vec::with_capacity(leads.len());
    let mut used: HashSet<&str> = HashSet::new();
    for lead in leads {
        if lead.len() < min || lead.len() > max {
            continue;
        }
        if lead.iter().any(|id| used.contains(id.as_str())) {
            continue;
        }
        used.extend(lead.iter().map(String::as_str));
        locked.push(lead);
    }

    let mut remaining = unlocked_ids(all_ids, &locked);
    while !locked.is_empty() && !can_partition(remaining.len(), min, max) {
        locked.pop();
        log::trace!(
            "{} unlocked ids not partitionable, dropped last lead ({} left)",
            remaining.len(),
            locked.len()
        );
        remaining = unlocked_ids(all_ids, &locked);
    }

    let lead_count = locked.len();
    let mut groups: Vec<Vec<String>> = locked.into_iter().cloned().collect();
    if !remaining.is_empty() {
        groups.extend(build_random_world(&remaining, min, max, rng)?);
    }

    mutate_non_lead_groups(&mut groups, lead_count, config.mutation_rate, rng);
    Ok(groups)
}

fn unlocked_ids(all_ids: &[String], locked: &[&Vec<String>]) -> Vec<String> {
    let used: HashSet<&str> = locked
        .iter()
        .flat_map(|lead| lead.iter().map(String::as_str))
        .collect();
    all_ids
        .iter()
        .filter(|id| !used.contains(id.as_str()))
        .cloned()
        .collect()
}

/// Swaps members between random pairs of non-lead groups.
///
/// Groups `[0, locked_count)` are leads and never touched. Performs
/// `floor(mutable_members · mutation_rate)` swaps; when both picks land on
/// the same group, the second moves to the next mutable group. Group sizes
/// are preserved. Does nothing with fewer than two non-empty mutable groups
/// or a non-positive rate.
pub fn mutate_non_lead_groups<T, R: Rng>(
    groups: &mut [Vec<T>],
    locked_count: usize,
    mutation_rate: f64,
    rng: &mut R,
) {
    let mutable: Vec<usize> = (locked_count..groups.len())
        .filter(|&i| !groups[i].is_empty())
        .collect();

    if mutable.len() < 2 || !(mutation_rate > 0.0) {
        return;
    }

    let mutable_members: usize = mutable.iter().map(|&i| groups[i].len()).sum();
    let swap_count = (mutable_members as f64 * mutation_rate).floor() as usize;

    for _ in 0..swap_count {
        let first = rng.random_range(0..mutable.len());
        let mut second = rng.random_range(0..mutable.len());
        if second == first {
            second = (first + 1) % mutable.len();
        }
        let (ga, gb) = (mutable[first], mutable[second]);

        let i1 = rng.random_range(0..groups[ga].len());
        let i2 = rng.random_range(0..groups[gb].len());

        // ga != gb, so split the slice to borrow both groups mutably
        let (lo, hi) = (ga.min(gb), ga.max(gb));
        let (left, right) = groups.split_at_mut(hi);
        let (a, b) = if ga < gb {
            (&mut left[lo][i1], &mut right[0][i2])
        } else {
            (&mut right[0][i1], &mut left[lo][i2])
        };
        std::mem::swap(a, b);
    }
}
