//! Pairwise personality compatibility lookup.

use std::collections::HashMap;

/// Coefficient used when a personality pair has no entry.
pub const NEUTRAL_COMPATIBILITY: f64 = 0.5;

/// Lookup from an ordered pair of personality labels to a coefficient.
///
/// Lookups are symmetric: `(a, b)` is tried first, then `(b, a)`.
///
/// ```
/// use u_pacs::scoring::CompatibilityMap;
///
/// let map = CompatibilityMap::from_rows([("Analytical", "Creative", 0.8)]);
/// assert_eq!(map.coefficient("Creative", "Analytical"), 0.8);
/// assert_eq!(map.coefficient("Creative", "Practical"), 0.5);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompatibilityMap {
    entries: HashMap<String, HashMap<String, f64>>,
}

impl CompatibilityMap {
    /// Creates an empty map. Every lookup yields the neutral coefficient.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from `(p1, p2, score)` rows.
    ///
    /// Later rows overwrite earlier rows for the same ordered pair.
    pub fn from_rows<I, A, B>(rows: I) -> Self
    where
        I: IntoIterator<Item = (A, B, f64)>,
        A: Into<String>,
        B: Into<String>,
    {
        let mut map = Self::new();
        for (p1, p2, score) in rows {
            map.insert(p1, p2, score);
        }
        map
    }

    /// Sets the coefficient for the ordered pair `(p1, p2)`.
    pub fn insert(&mut self, p1: impl Into<String>, p2: impl Into<String>, score: f64) {
        self.entries
            .entry(p1.into())
            .or_default()
            .insert(p2.into(), score);
    }

    /// Raw symmetric lookup, without default or clamping.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        self.get_ordered(a, b).or_else(|| self.get_ordered(b, a))
    }

    /// Symmetric lookup clamped to `[0, 1]`, defaulting to
    /// [`NEUTRAL_COMPATIBILITY`].
    pub fn coefficient(&self, a: &str, b: &str) -> f64 {
        let value = self.get(a, b).unwrap_or(NEUTRAL_COMPATIBILITY);
        if value.is_nan() {
            return NEUTRAL_COMPATIBILITY;
        }
        value.clamp(0.0, 1.0)
    }

    /// Number of stored ordered pairs.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    /// Returns `true` if no pair is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get_ordered(&self, a: &str, b: &str) -> Option<f64> {
        self.entries.get(a).and_then(|row| row.get(b)).copied()
    }
}

impl<A, B> FromIterator<(A, B, f64)> for CompatibilityMap
where
    A: Into<String>,
    B: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (A, B, f64)>>(iter: T) -> Self {
        Self::from_rows(iter)
    }
}
