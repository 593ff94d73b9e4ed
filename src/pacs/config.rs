//! PaCS configuration.
//!
//! [`PacsConfig`] holds every parameter of one search run.
//! [`ConfigOverrides`] carries caller-supplied partial overrides and the
//! clamping policy applied to them before a run starts.

use crate::error::PacsError;
use crate::scoring::{GoalMode, Weights};

/// Configuration for a PaCS run.
///
/// The runner does not re-validate ranges; callers that accept untrusted
/// values should go through [`PacsConfig::with_overrides`] or
/// [`PacsConfig::validate`] first.
///
/// # Defaults
///
/// ```
/// use u_pacs::pacs::PacsConfig;
///
/// let config = PacsConfig::default();
/// assert_eq!(config.num_worlds, 30);
/// assert_eq!(config.num_cycles, 20);
/// assert_eq!((config.min_group_size, config.max_group_size), (4, 5));
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_pacs::pacs::PacsConfig;
/// use u_pacs::scoring::GoalMode;
///
/// let config = PacsConfig::default()
///     .with_goal_mode(GoalMode::Focused)
///     .with_num_worlds(10)
///     .with_group_size(3, 4)
///     .with_lead_percent(0.1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PacsConfig {
    /// Whether the major factor rewards variety or homogeneity.
    pub goal_mode: GoalMode,

    /// Number of candidate worlds kept per cycle.
    pub num_worlds: usize,

    /// Maximum number of cycles.
    pub num_cycles: usize,

    /// Fraction of all groups across all worlds preserved as leads, in `(0, 1]`.
    ///
    /// Typical range: 0.05–0.2.
    pub lead_percent: f64,

    /// Swaps per cycle as a fraction of non-lead members, in `[0, 1]`.
    pub mutation_rate: f64,

    /// Minimum improvement of the cycle-best score that resets the plateau
    /// counter.
    pub plateau_epsilon: f64,

    /// Consecutive plateau cycles that stop the run.
    pub plateau_patience: usize,

    /// Smallest allowed group.
    pub min_group_size: usize,

    /// Largest allowed group.
    pub max_group_size: usize,

    /// Factor weights; normalized before use.
    pub weights: Weights,

    /// Build each next-generation world from its own generator stream.
    ///
    /// With the `parallel` cargo feature, evaluation and world construction
    /// also run on rayon's thread pool. Output is identical with and
    /// without the feature.
    pub parallel: bool,
}

impl Default for PacsConfig {
    fn default() -> Self {
        Self {
            goal_mode: GoalMode::Diverse,
            num_worlds: 30,
            num_cycles: 20,
            lead_percent: 0.05,
            mutation_rate: 0.2,
            plateau_epsilon: 1e-4,
            plateau_patience: 4,
            min_group_size: 4,
            max_group_size: 5,
            weights: Weights::default(),
            parallel: false,
        }
    }
}

impl PacsConfig {
    /// Sets the goal mode.
    pub fn with_goal_mode(mut self, mode: GoalMode) -> Self {
        self.goal_mode = mode;
        self
    }

    /// Sets the number of worlds per cycle.
    pub fn with_num_worlds(mut self, n: usize) -> Self {
        self.num_worlds = n;
        self
    }

    /// Sets the cycle budget.
    pub fn with_num_cycles(mut self, n: usize) -> Self {
        self.num_cycles = n;
        self
    }

    /// Sets the lead fraction, clamped to `[0, 1]`.
    pub fn with_lead_percent(mut self, ratio: f64) -> Self {
        self.lead_percent = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the plateau threshold, floored at 0.
    pub fn with_plateau_epsilon(mut self, epsilon: f64) -> Self {
        self.plateau_epsilon = epsilon.max(0.0);
        self
    }

    /// Sets the plateau patience.
    pub fn with_plateau_patience(mut self, patience: usize) -> Self {
        self.plateau_patience = patience;
        self
    }

    /// Sets the allowed group size range.
    pub fn with_group_size(mut self, min: usize, max: usize) -> Self {
        self.min_group_size = min;
        self.max_group_size = max;
        self
    }

    /// Sets the factor weights.
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    /// Enables or disables per-world generator streams and parallel work.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Preset for quick runs: few worlds, short patience.
    ///
    /// - Worlds: 15, Cycles: 10, Patience: 3
    pub fn fast() -> Self {
        Self {
            num_worlds: 15,
            num_cycles: 10,
            plateau_patience: 3,
            ..Self::default()
        }
    }

    /// Preset matching the defaults.
    ///
    /// - Worlds: 30, Cycles: 20, Patience: 4
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Preset for thorough runs on larger populations.
    ///
    /// - Worlds: 60, Cycles: 60, Patience: 8, Epsilon: 1e-5
    pub fn quality() -> Self {
        Self {
            num_worlds: 60,
            num_cycles: 60,
            plateau_patience: 8,
            plateau_epsilon: 1e-5,
            ..Self::default()
        }
    }

    /// Picks a preset from the population size.
    ///
    /// - `population < 50` → [`fast()`](Self::fast)
    /// - `50 ≤ population < 200` → [`balanced()`](Self::balanced)
    /// - `population ≥ 200` → [`quality()`](Self::quality)
    pub fn auto_select(population: usize) -> Self {
        if population < 50 {
            Self::fast()
        } else if population < 200 {
            Self::balanced()
        } else {
            Self::quality()
        }
    }

    /// Applies caller overrides, then clamps every field to the service
    /// ranges (see [`ConfigOverrides`]).
    pub fn with_overrides(self, overrides: &ConfigOverrides) -> Self {
        let finite = |v: Option<f64>| v.filter(|x| x.is_finite());

        let weights = match &overrides.weights {
            Some(w) => {
                let pick = |over: Option<f64>, base: f64| match finite(over) {
                    Some(x) => x.max(0.0),
                    None => base,
                };
                Weights {
                    interest: pick(w.interest, self.weights.interest),
                    major: pick(w.major, self.weights.major),
                    year: pick(w.year, self.weights.year),
                    personality: pick(w.personality, self.weights.personality),
                }
            }
            None => self.weights,
        };

        Self {
            goal_mode: overrides.goal_mode.unwrap_or(self.goal_mode),
            num_worlds: overrides.num_worlds.unwrap_or(self.num_worlds).clamp(1, 500),
            num_cycles: overrides.num_cycles.unwrap_or(self.num_cycles).clamp(1, 500),
            lead_percent: finite(overrides.lead_percent)
                .unwrap_or(self.lead_percent)
                .clamp(0.01, 0.5),
            mutation_rate: finite(overrides.mutation_rate)
                .unwrap_or(self.mutation_rate)
                .clamp(0.0, 1.0),
            plateau_epsilon: finite(overrides.plateau_epsilon)
                .unwrap_or(self.plateau_epsilon)
                .clamp(0.0, 1.0),
            plateau_patience: overrides
                .plateau_patience
                .unwrap_or(self.plateau_patience)
                .clamp(1, 50),
            min_group_size: overrides
                .min_group_size
                .unwrap_or(self.min_group_size)
                .clamp(2, 10),
            max_group_size: overrides
                .max_group_size
                .unwrap_or(self.max_group_size)
                .clamp(2, 10),
            weights,
            parallel: overrides.parallel.unwrap_or(self.parallel),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`PacsError::InvalidConfig`] describing the first offending field.
    pub fn validate(&self) -> Result<(), PacsError> {
        let invalid = |msg: &str| Err(PacsError::InvalidConfig(msg.into()));

        if self.num_worlds == 0 {
            return invalid("num_worlds must be at least 1");
        }
        if self.num_cycles == 0 {
            return invalid("num_cycles must be at least 1");
        }
        if !(self.lead_percent > 0.0 && self.lead_percent <= 1.0) {
            return invalid("lead_percent must be in (0, 1]");
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return invalid("mutation_rate must be in [0, 1]");
        }
        if !(self.plateau_epsilon >= 0.0) {
            return invalid("plateau_epsilon must be non-negative");
        }
        if self.plateau_patience == 0 {
            return invalid("plateau_patience must be at least 1");
        }
        if self.min_group_size < 2 {
            return invalid("min_group_size must be at least 2");
        }
        if self.max_group_size < self.min_group_size {
            return invalid("max_group_size must be at least min_group_size");
        }
        Ok(())
    }
}

/// Partial, caller-supplied configuration overrides.
///
/// Applied with [`PacsConfig::with_overrides`], which clamps the merged
/// result to:
///
/// | field | range |
/// |---|---|
/// | `num_worlds`, `num_cycles` | `[1, 500]` |
/// | `lead_percent` | `[0.01, 0.5]` |
/// | `mutation_rate`, `plateau_epsilon` | `[0, 1]` |
/// | `plateau_patience` | `[1, 50]` |
/// | `min_group_size`, `max_group_size` | `[2, 10]` |
///
/// Non-finite numeric overrides are ignored. Weight overrides replace the
/// base weight component-wise and are floored at 0.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConfigOverrides {
    /// Goal mode override.
    pub goal_mode: Option<GoalMode>,
    /// World count override.
    pub num_worlds: Option<usize>,
    /// Cycle budget override.
    pub num_cycles: Option<usize>,
    /// Lead fraction override.
    pub lead_percent: Option<f64>,
    /// Mutation rate override.
    pub mutation_rate: Option<f64>,
    /// Plateau threshold override.
    pub plateau_epsilon: Option<f64>,
    /// Plateau patience override.
    pub plateau_patience: Option<usize>,
    /// Minimum group size override.
    pub min_group_size: Option<usize>,
    /// Maximum group size override.
    pub max_group_size: Option<usize>,
    /// Per-component weight overrides.
    pub weights: Option<WeightOverrides>,
    /// Parallel flag override.
    pub parallel: Option<bool>,
}

/// Per-component weight overrides.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeightOverrides {
    /// Interest weight.
    pub interest: Option<f64>,
    /// Major weight.
    pub major: Option<f64>,
    /// Year weight.
    pub year: Option<f64>,
    /// Personality weight.
    pub personality: Option<f64>,
}
