//! Deadline-aware evolution loop.
//!
//! [`EvolutionRunner`] drives the `Seeding → Evolving → Converged|TimedOut`
//! state machine: it seeds the pool with validity-filtered random
//! chromosomes, then per generation runs `k` selection → crossover →
//! mutation → validation cycles, buffers the valid children, and attempts
//! steady-state replacement for each. The incumbent best is tracked
//! incrementally and returned on exit; the loop never scans the pool for it.
//!
//! The engine is single-threaded and cooperative: the only suspension
//! points are explicit deadline checks at seeding and generation
//! boundaries. One `StdRng` is threaded through every stochastic operator,
//! so a fixed seed reproduces a run exactly.

use crate::chromosome::Chromosome;
use crate::config::EvolutionConfig;
use crate::graph::Graph;
use crate::operators::{mutate, uniform_crossover};
use crate::pool::PopulationPool;
use crate::replacement::replace;
use crate::selection::select_parents;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::time::Instant;

/// Each generation runs this fraction of the seed target as
/// selection → crossover → mutation cycles.
const GENERATION_FRACTION: f64 = 0.1;

/// Seed pool size cap and per-vertex factor for the derived default.
const SEED_CAP: usize = 1000;
const SEEDS_PER_VERTEX: usize = 50;

/// The best valid partition found by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Cut weight of the chromosome.
    pub cost: i64,
    /// The partition itself.
    pub chromosome: Chromosome,
}

/// Why the evolution loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// Most children of a generation failed to displace anything.
    Converged,
    /// The wall-clock budget expired.
    TimedOut,
}

/// Result of an evolution run.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Best solution observed across the run.
    pub best: Solution,
    /// Number of completed generations (seeding excluded).
    pub generations: usize,
    /// Why the run stopped.
    pub termination: Termination,
    /// Incumbent best cost after seeding and after each generation.
    pub cost_history: Vec<i64>,
}

/// Errors surfaced by [`EvolutionRunner::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The configuration failed validation.
    InvalidConfig(String),
    /// The graph admits no valid 2-partition (fewer than two vertices, no
    /// edges, or no valid chromosome was produced before the deadline).
    NoValidPartition,
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::InvalidConfig(reason) => write!(f, "invalid configuration: {reason}"),
            RunError::NoValidPartition => {
                write!(f, "graph admits no valid two-way partition")
            }
        }
    }
}

impl std::error::Error for RunError {}

/// Executes the evolutionary search.
///
/// # Usage
///
/// ```
/// use maxcut_evo::{EvolutionConfig, EvolutionRunner, Graph};
/// use std::time::Duration;
///
/// let graph = Graph::from_edges(2, &[(1, 2, 5)]).unwrap();
/// let config = EvolutionConfig::default()
///     .with_time_limit(Duration::from_millis(200))
///     .with_seed(42);
/// let result = EvolutionRunner::run(&graph, &config).unwrap();
/// assert_eq!(result.best.cost, 5);
/// ```
pub struct EvolutionRunner;

impl EvolutionRunner {
    /// Runs the evolution loop against `graph` under `config`.
    ///
    /// Returns the best `(cost, chromosome)` pair observed. Deadline expiry
    /// is a normal termination, not an error: as soon as one valid
    /// chromosome exists, the run always produces a result.
    pub fn run(graph: &Graph, config: &EvolutionConfig) -> Result<RunResult, RunError> {
        config.validate().map_err(RunError::InvalidConfig)?;

        // A valid partition needs both sides non-empty and a crossing edge,
        // so these graphs can never produce a valid chromosome.
        if graph.vertex_count() < 2 || graph.edge_count() == 0 {
            return Err(RunError::NoValidPartition);
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let start = Instant::now();
        let deadline = config.time_limit;

        let seed_target = config
            .seed_target
            .unwrap_or_else(|| SEED_CAP.min(SEEDS_PER_VERTEX * graph.vertex_count()));

        let mut pool = PopulationPool::new();
        let mut best: Option<Solution> = None;

        // --- Seeding ---

        for chromosome in &config.initial_chromosomes {
            if let Some(cost) = chromosome.cut_weight(graph) {
                update_best(&mut best, cost, chromosome);
                pool.insert(cost, chromosome.clone());
            }
        }

        while pool.len() < seed_target {
            let chromosome = Chromosome::random(graph.vertex_count(), &mut rng);
            if let Some(cost) = chromosome.cut_weight(graph) {
                update_best(&mut best, cost, &chromosome);
                pool.insert(cost, chromosome);
            }
            if start.elapsed() >= deadline {
                return finish(best, 0, Termination::TimedOut, Vec::new());
            }
        }

        let best = best.ok_or(RunError::NoValidPartition)?;

        let threshold = match config.acceptance_threshold {
            Some(threshold) => threshold,
            None => {
                let spread = match (pool.min_cost(), pool.max_cost()) {
                    (Some(min), Some(max)) => max - min,
                    _ => return Err(RunError::NoValidPartition),
                };
                ((spread as f64 * config.threshold_ratio) as i64).max(config.threshold_floor)
            }
        };

        Self::evolve(graph, config, pool, best, threshold, start, &mut rng)
    }

    /// The `Evolving` state: generations of child creation and replacement
    /// until the deadline expires or the run converges.
    fn evolve<R: Rng>(
        graph: &Graph,
        config: &EvolutionConfig,
        mut pool: PopulationPool,
        mut best: Solution,
        threshold: i64,
        start: Instant,
        rng: &mut R,
    ) -> Result<RunResult, RunError> {
        let deadline = config.time_limit;
        let seed_target = config
            .seed_target
            .unwrap_or_else(|| SEED_CAP.min(SEEDS_PER_VERTEX * graph.vertex_count()));
        let k = ((seed_target as f64 * GENERATION_FRACTION).round() as usize).max(1);

        let mut generations = 0usize;
        let mut cost_history = vec![best.cost];

        let termination = loop {
            if start.elapsed() >= deadline {
                break Termination::TimedOut;
            }

            // Child creation: invalid children are dropped, not buffered.
            let mut brood: Vec<(i64, Chromosome)> = Vec::with_capacity(k);
            for _ in 0..k {
                let Some(parents) = select_parents(&pool, config.tournament_bias, rng) else {
                    break;
                };
                let child = uniform_crossover(&parents.female, &parents.male, rng);
                let child = mutate(&child, rng);
                if let Some(cost) = child.cut_weight(graph) {
                    brood.push((cost, child));
                }
            }

            if start.elapsed() >= deadline {
                break Termination::TimedOut;
            }

            // Replacement; rejected children still enter occasionally so
            // far-ahead genetic material is not starved out.
            let mut rejected = 0usize;
            for (cost, child) in brood {
                if replace(&mut pool, cost, &child, threshold, rng) {
                    update_solution(&mut best, cost, child);
                } else if rng.random_bool(config.fallback_insert_rate) {
                    pool.insert(cost, child.clone());
                    update_solution(&mut best, cost, child);
                } else {
                    rejected += 1;
                }
            }

            generations += 1;
            cost_history.push(best.cost);

            if start.elapsed() >= deadline {
                break Termination::TimedOut;
            }
            if rejected as f64 > config.convergence_ratio * k as f64 {
                break Termination::Converged;
            }
        };

        Ok(RunResult {
            best,
            generations,
            termination,
            cost_history,
        })
    }
}

/// Runs the engine with the default configuration and the given budget,
/// returning just the best solution.
pub fn run(graph: &Graph, deadline: std::time::Duration) -> Result<Solution, RunError> {
    let config = EvolutionConfig::default().with_time_limit(deadline);
    EvolutionRunner::run(graph, &config).map(|result| result.best)
}

fn update_best(best: &mut Option<Solution>, cost: i64, chromosome: &Chromosome) {
    let improved = best.as_ref().map_or(true, |b| cost > b.cost);
    if improved {
        *best = Some(Solution {
            cost,
            chromosome: chromosome.clone(),
        });
    }
}

fn update_solution(best: &mut Solution, cost: i64, chromosome: Chromosome) {
    if cost > best.cost {
        best.cost = cost;
        best.chromosome = chromosome;
    }
}

fn finish(
    best: Option<Solution>,
    generations: usize,
    termination: Termination,
    cost_history: Vec<i64>,
) -> Result<RunResult, RunError> {
    let best = best.ok_or(RunError::NoValidPartition)?;
    let mut cost_history = cost_history;
    if cost_history.is_empty() {
        cost_history.push(best.cost);
    }
    Ok(RunResult {
        best,
        generations,
        termination,
        cost_history,
    })
}
