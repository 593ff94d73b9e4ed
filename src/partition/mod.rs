//! Partition builder.
//!
//! Splits a population into groups whose sizes satisfy a `[min, max]`
//! constraint: [`compute_group_sizes`] finds a feasible size sequence and
//! [`build_random_world`] fills it from a shuffled id list.

mod sizes;
mod world;

pub use sizes::{can_partition, compute_group_sizes};
pub use world::{build_random_world, shuffle};
