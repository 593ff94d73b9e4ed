//! Random size-valid partitions of an id list.

use rand::Rng;

use super::sizes::compute_group_sizes;
use crate::error::PacsError;

/// Fisher–Yates shuffle driven by the supplied generator.
///
/// Walks from the back, swapping position `i` with a uniform `j ∈ [0, i]`.
/// Given the same generator state and input, the result is reproducible.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Splits `ids` into random groups whose sizes lie in `[min_size, max_size]`.
///
/// Sizes are computed first, so an infeasible request consumes no
/// randomness. Every id appears in exactly one group.
///
/// # Errors
///
/// [`PacsError::PartitionInfeasible`] if `ids.len()` cannot be split.
///
/// ```
/// use u_pacs::partition::build_random_world;
/// use u_pacs::random::Lcg;
///
/// let ids: Vec<u32> = (0..9).collect();
/// let groups = build_random_world(&ids, 4, 5, &mut Lcg::new(1)).unwrap();
/// assert_eq!(groups.iter().map(Vec::len).collect::<Vec<_>>(), vec![5, 4]);
/// ```
pub fn build_random_world<T: Clone, R: Rng>(
    ids: &[T],
    min_size: usize,
    max_size: usize,
    rng: &mut R,
) -> Result<Vec<Vec<T>>, PacsError> {
    let sizes = compute_group_sizes(ids.len(), min_size, max_size)?;

    let mut shuffled = ids.to_vec();
    shuffle(&mut shuffled, rng);

    let mut groups = Vec::with_capacity(sizes.len());
    let mut cursor = 0;
    for size in sizes {
        groups.push(shuffled[cursor..cursor + size].to_vec());
        cursor += size;
    }
    Ok(groups)
}
