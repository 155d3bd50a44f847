//! Evolution loop configuration.
//!
//! [`EvolutionConfig`] exposes the empirically tuned constants of the
//! engine — acceptance-threshold derivation, convergence ratio, tournament
//! bias, fallback insertion rate — as parameters rather than hard-coded
//! behavior. The defaults reproduce the reference tuning.

use crate::chromosome::Chromosome;
use std::time::Duration;

/// Configuration for [`EvolutionRunner`](crate::runner::EvolutionRunner).
///
/// # Defaults
///
/// ```
/// use maxcut_evo::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.time_limit.as_secs(), 10);
/// assert!((config.convergence_ratio - 0.5).abs() < 1e-10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use maxcut_evo::EvolutionConfig;
/// use std::time::Duration;
///
/// let config = EvolutionConfig::default()
///     .with_time_limit(Duration::from_secs(30))
///     .with_seed(42)
///     .with_tournament_bias(0.7);
/// ```
#[derive(Debug, Clone)]
pub struct EvolutionConfig {
    /// Wall-clock budget for the whole run, checked cooperatively at
    /// seeding and generation boundaries.
    pub time_limit: Duration,

    /// Random seed for reproducibility.
    ///
    /// A single generator drives every stochastic operator, so a fixed
    /// seed makes a run deterministic. `None` seeds from the OS.
    pub seed: Option<u64>,

    /// Number of valid chromosomes to seed the pool with.
    ///
    /// `None` derives `min(1000, 50 · vertex_count)`.
    pub seed_target: Option<usize>,

    /// Fixed acceptance threshold for replacement.
    ///
    /// `None` derives `max(threshold_ratio · (max_cost − min_cost),
    /// threshold_floor)` from the seeded pool; the derived value is held
    /// for the remainder of the run.
    pub acceptance_threshold: Option<i64>,

    /// Fraction of the seeded pool's cost spread used for the derived
    /// acceptance threshold.
    pub threshold_ratio: f64,

    /// Lower bound of the derived acceptance threshold.
    pub threshold_floor: i64,

    /// Probability that the larger cost wins a tournament pairing.
    ///
    /// Must be in `[0.5, 1.0]`; 0.5 is a fair coin, 1.0 is strictly
    /// elitist.
    pub tournament_bias: f64,

    /// Probability of unconditionally inserting a child whose replacement
    /// was rejected.
    pub fallback_insert_rate: f64,

    /// A generation converges the run when more than this fraction of its
    /// children fail to displace anything.
    pub convergence_ratio: f64,

    /// Warm-start chromosomes inserted (if valid) before random seeding.
    ///
    /// Feeding a previous run's best back in makes repeated runs
    /// monotonically non-decreasing in returned cost.
    pub initial_chromosomes: Vec<Chromosome>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(10),
            seed: None,
            seed_target: None,
            acceptance_threshold: None,
            threshold_ratio: 0.1,
            threshold_floor: 2,
            tournament_bias: 0.6,
            fallback_insert_rate: 0.02,
            convergence_ratio: 0.5,
            initial_chromosomes: Vec::new(),
        }
    }
}

impl EvolutionConfig {
    /// Sets the wall-clock budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets an explicit seed pool size.
    pub fn with_seed_target(mut self, target: usize) -> Self {
        self.seed_target = Some(target);
        self
    }

    /// Sets an explicit acceptance threshold, bypassing derivation.
    pub fn with_acceptance_threshold(mut self, threshold: i64) -> Self {
        self.acceptance_threshold = Some(threshold);
        self
    }

    /// Sets the derived-threshold spread fraction.
    pub fn with_threshold_ratio(mut self, ratio: f64) -> Self {
        self.threshold_ratio = ratio;
        self
    }

    /// Sets the derived-threshold floor.
    pub fn with_threshold_floor(mut self, floor: i64) -> Self {
        self.threshold_floor = floor;
        self
    }

    /// Sets the tournament pairing bias.
    pub fn with_tournament_bias(mut self, bias: f64) -> Self {
        self.tournament_bias = bias;
        self
    }

    /// Sets the unconditional-insertion fallback probability.
    pub fn with_fallback_insert_rate(mut self, rate: f64) -> Self {
        self.fallback_insert_rate = rate;
        self
    }

    /// Sets the convergence rejection ratio.
    pub fn with_convergence_ratio(mut self, ratio: f64) -> Self {
        self.convergence_ratio = ratio;
        self
    }

    /// Adds a warm-start chromosome.
    pub fn with_initial_chromosome(mut self, chromosome: Chromosome) -> Self {
        self.initial_chromosomes.push(chromosome);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.time_limit.is_zero() {
            return Err("time_limit must be positive".into());
        }
        if self.seed_target == Some(0) {
            return Err("seed_target must be at least 1".into());
        }
        if !(0.5..=1.0).contains(&self.tournament_bias) {
            return Err("tournament_bias must be in [0.5, 1.0]".into());
        }
        if !(0.0..=1.0).contains(&self.fallback_insert_rate) {
            return Err("fallback_insert_rate must be in [0.0, 1.0]".into());
        }
        if !(0.0..=1.0).contains(&self.convergence_ratio) {
            return Err("convergence_ratio must be in [0.0, 1.0]".into());
        }
        if self.threshold_ratio < 0.0 {
            return Err("threshold_ratio must be non-negative".into());
        }
        if self.threshold_floor < 0 {
            return Err("threshold_floor must be non-negative".into());
        }
        if self.acceptance_threshold.is_some_and(|t| t < 0) {
            return Err("acceptance_threshold must be non-negative".into());
        }
        Ok(())
    }
}
