//! The four group factors and their weighted combination.
//!
//! Every function here is total: degenerate inputs (empty groups, single
//! members, empty interest sets) map to 0 or to the neutral coefficient
//! instead of failing.

use std::collections::{HashMap, HashSet};

use super::compat::{CompatibilityMap, NEUTRAL_COMPATIBILITY};
use super::types::{Candidate, GoalMode, ScoreBreakdown, Weights};

/// Decay rate applied to the standard deviation of years of study.
pub const YEAR_DECAY: f64 = 0.75;

fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Jaccard similarity `|A ∩ B| / |A ∪ B|` of two tag lists taken as sets.
///
/// Returns 0 when both sets are empty.
///
/// ```
/// use u_pacs::scoring::jaccard_similarity;
///
/// let s = jaccard_similarity(&["A", "B"], &["B", "C"]);
/// assert!((s - 1.0 / 3.0).abs() < 1e-12);
/// ```
pub fn jaccard_similarity<S: AsRef<str>>(a: &[S], b: &[S]) -> f64 {
    let set_a: HashSet<&str> = a.iter().map(AsRef::as_ref).collect();
    let set_b: HashSet<&str> = b.iter().map(AsRef::as_ref).collect();
    jaccard_sets(&set_a, &set_b)
}

fn jaccard_sets(a: &HashSet<&str>, b: &HashSet<&str>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Mean pairwise Jaccard similarity of interests over all unordered pairs.
///
/// 0 for fewer than two members.
pub fn interest_overlap(members: &[&Candidate]) -> f64 {
    if members.len() < 2 {
        return 0.0;
    }

    let sets: Vec<HashSet<&str>> = members
        .iter()
        .map(|m| m.interests.iter().map(String::as_str).collect())
        .collect();

    let mut total = 0.0;
    let mut pairs = 0usize;
    for i in 0..sets.len() {
        for j in (i + 1)..sets.len() {
            total += jaccard_sets(&sets[i], &sets[j]);
            pairs += 1;
        }
    }
    total / pairs as f64
}

/// Major variety (`Diverse`) or homogeneity (`Focused`) of a group.
///
/// - `Diverse`: distinct majors / group size
/// - `Focused`: largest same-major count / group size
///
/// 0 for an empty group.
pub fn major_factor(members: &[&Candidate], goal_mode: GoalMode) -> f64 {
    if members.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<&str, usize> = HashMap::new();
    for m in members {
        *freq.entry(m.major.as_str()).or_insert(0) += 1;
    }

    let n = members.len() as f64;
    match goal_mode {
        GoalMode::Diverse => freq.len() as f64 / n,
        GoalMode::Focused => freq.values().copied().max().unwrap_or(0) as f64 / n,
    }
}

/// `exp(-0.75 · σ)` where σ is the population standard deviation of the
/// members' years of study. 0 for an empty group.
pub fn year_proximity(members: &[&Candidate]) -> f64 {
    if members.is_empty() {
        return 0.0;
    }

    let n = members.len() as f64;
    let mean = members.iter().map(|m| f64::from(m.year_of_study)).sum::<f64>() / n;
    let variance = members
        .iter()
        .map(|m| {
            let d = f64::from(m.year_of_study) - mean;
            d * d
        })
        .sum::<f64>()
        / n;

    (-YEAR_DECAY * variance.sqrt()).exp()
}

/// Mean pairwise personality compatibility over all unordered pairs.
///
/// Returns the neutral coefficient directly for fewer than two members.
pub fn personality_balance(members: &[&Candidate], compatibility: &CompatibilityMap) -> f64 {
    if members.len() < 2 {
        return NEUTRAL_COMPATIBILITY;
    }

    let mut total = 0.0;
    let mut pairs = 0usize;
    for i in 0..members.len() {
        for j in (i + 1)..members.len() {
            total += compatibility.coefficient(&members[i].personality, &members[j].personality);
            pairs += 1;
        }
    }
    total / pairs as f64
}

/// Scores one candidate group.
///
/// Each factor is clamped to `[0, 1]`, combined with the normalized
/// weights, and the total is clamped again to absorb rounding drift.
///
/// ```
/// use u_pacs::scoring::{score_group, Candidate, CompatibilityMap, GoalMode, Weights};
///
/// let a = Candidate::new("a", "CS", 2, ["AI"], "Analytical");
/// let b = Candidate::new("b", "Business", 2, ["AI"], "Creative");
/// let score = score_group(&[&a, &b], GoalMode::Diverse, &Weights::equal(), &CompatibilityMap::new());
///
/// assert_eq!(score.interest_overlap, 1.0);
/// assert_eq!(score.major_factor, 1.0);
/// assert_eq!(score.year_proximity, 1.0);
/// assert_eq!(score.personality_balance, 0.5);
/// assert!((score.total - 0.875).abs() < 1e-12);
/// ```
pub fn score_group(
    members: &[&Candidate],
    goal_mode: GoalMode,
    weights: &Weights,
    compatibility: &CompatibilityMap,
) -> ScoreBreakdown {
    let w = weights.normalized();

    let interest_overlap = clamp01(interest_overlap(members));
    let major_factor = clamp01(major_factor(members, goal_mode));
    let year_proximity = clamp01(year_proximity(members));
    let personality_balance = clamp01(personality_balance(members, compatibility));

    let total = w.interest * interest_overlap
        + w.major * major_factor
        + w.year * year_proximity
        + w.personality * personality_balance;

    ScoreBreakdown {
        interest_overlap,
        major_factor,
        year_proximity,
        personality_balance,
        total: clamp01(total),
    }
}
