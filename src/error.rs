//! Error type shared by the partition builder and the search loop.

/// Failures surfaced by PaCS.
///
/// Scoring never fails; only partitioning and run setup do.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PacsError {
    /// No candidates were supplied.
    #[error("no eligible candidates were supplied")]
    EmptyPopulation,

    /// No sequence of group sizes in `[min, max]` sums to `total`.
    #[error("cannot partition {total} candidates into group sizes between {min} and {max}")]
    PartitionInfeasible {
        /// Population size that had to be split.
        total: usize,
        /// Minimum group size.
        min: usize,
        /// Maximum group size.
        max: usize,
    },

    /// A configuration value is outside its valid range.
    ///
    /// Only produced by [`PacsConfig::validate`](crate::pacs::PacsConfig::validate);
    /// the runner does not re-validate ranges.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
