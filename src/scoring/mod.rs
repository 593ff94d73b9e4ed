//! Group scoring engine.
//!
//! Computes a bounded `[0, 1]` compatibility score for one candidate group
//! from four independent factors:
//!
//! - **Interest overlap**: mean pairwise Jaccard similarity of interests
//! - **Major factor**: variety or homogeneity of majors, per [`GoalMode`]
//! - **Year proximity**: exponential decay of the years' standard deviation
//! - **Personality balance**: mean pairwise [`CompatibilityMap`] coefficient
//!
//! The factors are combined with normalized [`Weights`] by [`score_group`].

mod compat;
mod factors;
mod types;

pub use compat::{CompatibilityMap, NEUTRAL_COMPATIBILITY};
pub use factors::{
    interest_overlap, jaccard_similarity, major_factor, personality_balance, score_group,
    year_proximity, YEAR_DECAY,
};
pub use types::{Candidate, GoalMode, ScoreBreakdown, Weights};
