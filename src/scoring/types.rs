//! Value types consumed and produced by the scoring engine.

/// An individual eligible for grouping.
///
/// Immutable for the duration of a run. `interests` is treated as a set:
/// duplicates and order are ignored by the scoring functions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// Unique identifier.
    pub id: String,
    /// Field of study.
    pub major: String,
    /// Year of study (1 = first year).
    pub year_of_study: i32,
    /// Interest tags.
    pub interests: Vec<String>,
    /// Personality label, looked up in the [`CompatibilityMap`](super::CompatibilityMap).
    pub personality: String,
}

impl Candidate {
    /// Creates a candidate.
    pub fn new<I, S>(
        id: impl Into<String>,
        major: impl Into<String>,
        year_of_study: i32,
        interests: I,
        personality: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            major: major.into(),
            year_of_study,
            interests: interests.into_iter().map(Into::into).collect(),
            personality: personality.into(),
        }
    }
}

/// How the major factor rewards a group's composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GoalMode {
    /// Reward variety of majors within a group.
    #[default]
    Diverse,
    /// Reward groups drawn from the same major.
    Focused,
}

/// Relative importance of the four scoring factors.
///
/// Weights need not sum to one; [`normalized`](Weights::normalized) is
/// applied before every weighted sum.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weights {
    /// Weight of the interest overlap factor.
    pub interest: f64,
    /// Weight of the major factor.
    pub major: f64,
    /// Weight of the year proximity factor.
    pub year: f64,
    /// Weight of the personality balance factor.
    pub personality: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            interest: 0.35,
            major: 0.25,
            year: 0.2,
            personality: 0.2,
        }
    }
}

impl Weights {
    /// Creates a weight set.
    pub fn new(interest: f64, major: f64, year: f64, personality: f64) -> Self {
        Self {
            interest,
            major,
            year,
            personality,
        }
    }

    /// Equal quarters; the fallback for degenerate weight sets.
    pub fn equal() -> Self {
        Self::new(0.25, 0.25, 0.25, 0.25)
    }

    /// Returns the weights scaled to sum to one.
    ///
    /// Negative and non-finite components count as zero. If nothing
    /// positive remains, returns [`Weights::equal`].
    ///
    /// ```
    /// use u_pacs::scoring::Weights;
    ///
    /// let w = Weights::new(6.0, 3.0, 2.0, 1.0).normalized();
    /// assert!((w.interest - 0.5).abs() < 1e-12);
    ///
    /// let fallback = Weights::new(0.0, 0.0, 0.0, 0.0).normalized();
    /// assert_eq!(fallback, Weights::equal());
    /// ```
    pub fn normalized(&self) -> Self {
        let safe = |w: f64| if w.is_finite() { w.max(0.0) } else { 0.0 };
        let interest = safe(self.interest);
        let major = safe(self.major);
        let year = safe(self.year);
        let personality = safe(self.personality);

        let total = interest + major + year + personality;
        if !(total > 0.0) || !total.is_finite() {
            return Self::equal();
        }

        Self {
            interest: interest / total,
            major: major / total,
            year: year / total,
            personality: personality / total,
        }
    }
}

/// Per-factor and combined score of one group. Every field lies in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBreakdown {
    /// Mean pairwise Jaccard similarity of interests.
    pub interest_overlap: f64,
    /// Major variety (diverse) or homogeneity (focused).
    pub major_factor: f64,
    /// `exp(-0.75 · σ)` of the years of study.
    pub year_proximity: f64,
    /// Mean pairwise personality compatibility.
    pub personality_balance: f64,
    /// Weighted combination of the four factors.
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_sums_to_one() {
        let w = Weights::new(6.0, 3.0, 2.0, 1.0).normalized();
        let sum = w.interest + w.major + w.year + w.personality;
        assert!((sum - 1.0).abs() < 1e-12);
        assert!((w.major - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_normalized_zero_falls_back() {
        assert_eq!(Weights::new(0.0, 0.0, 0.0, 0.0).normalized(), Weights::equal());
    }

    #[test]
    fn test_normalized_negative_counts_as_zero() {
        let w = Weights::new(-1.0, 1.0, 0.0, 0.0).normalized();
        assert_eq!(w.interest, 0.0);
        assert!((w.major - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalized_non_finite() {
        assert_eq!(
            Weights::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN).normalized(),
            Weights::equal()
        );
        let w = Weights::new(f64::INFINITY, 1.0, 1.0, 0.0).normalized();
        assert_eq!(w.interest, 0.0);
        assert!((w.major - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_candidate_new() {
        let c = Candidate::new("u1", "Computer Science", 2, ["AI", "Web"], "Analytical");
        assert_eq!(c.id, "u1");
        assert_eq!(c.interests, vec!["AI".to_string(), "Web".to_string()]);
    }

    #[test]
    fn test_goal_mode_default() {
        assert_eq!(GoalMode::default(), GoalMode::Diverse);
    }
}
