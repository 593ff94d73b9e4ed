//! Feasible group-size sequences.

use crate::error::PacsError;

/// Finds a sequence of group sizes in `[min_size, max_size]` summing to
/// `total`.
///
/// Depth-first search that tries the largest size first and backtracks when
/// the remainder cannot be completed. Feasibility depends only on the
/// remaining count, so each count is solved at most once; the memo table
/// lives for this call only.
///
/// `total == 0` yields an empty sequence.
///
/// # Errors
///
/// [`PacsError::PartitionInfeasible`] when no sequence exists, including
/// `min_size == 0` and `max_size < min_size`.
///
/// ```
/// use u_pacs::partition::compute_group_sizes;
///
/// assert_eq!(compute_group_sizes(13, 4, 5).unwrap(), vec![5, 4, 4]);
/// assert!(compute_group_sizes(5, 4, 4).is_err());
/// ```
pub fn compute_group_sizes(
    total: usize,
    min_size: usize,
    max_size: usize,
) -> Result<Vec<usize>, PacsError> {
    let infeasible = PacsError::PartitionInfeasible {
        total,
        min: min_size,
        max: max_size,
    };

    if total == 0 {
        return Ok(Vec::new());
    }
    if min_size == 0 || max_size < min_size {
        return Err(infeasible);
    }

    // memo[r]: None = unvisited, Some(None) = dead end, Some(Some(s)) = take s next
    let mut memo: Vec<Option<Option<usize>>> = vec![None; total + 1];
    if !solve(total, min_size, max_size, &mut memo) {
        return Err(infeasible);
    }

    let mut sizes = Vec::with_capacity(total / min_size + 1);
    let mut remaining = total;
    while remaining > 0 {
        match memo[remaining] {
            Some(Some(size)) => {
                sizes.push(size);
                remaining -= size;
            }
            _ => return Err(infeasible),
        }
    }
    Ok(sizes)
}

/// Returns `true` if `total` admits a size sequence in `[min_size, max_size]`.
pub fn can_partition(total: usize, min_size: usize, max_size: usize) -> bool {
    compute_group_sizes(total, min_size, max_size).is_ok()
}

fn solve(
    remaining: usize,
    min_size: usize,
    max_size: usize,
    memo: &mut [Option<Option<usize>>],
) -> bool {
    if remaining == 0 {
        return true;
    }
    if remaining < min_size {
        return false;
    }
    if let Some(choice) = memo[remaining] {
        return choice.is_some();
    }

    for size in (min_size..=max_size.min(remaining)).rev() {
        if solve(remaining - size, min_size, max_size, memo) {
            memo[remaining] = Some(Some(size));
            return true;
        }
    }

    memo[remaining] = Some(None);
    false
}
