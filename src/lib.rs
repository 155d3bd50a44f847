//! Time-bounded evolutionary heuristic for the Maximum Cut problem.
//!
//! Given a weighted undirected [`Graph`] and a wall-clock budget, the engine
//! searches for a high-weight two-way partition and returns the best
//! `(cost, chromosome)` pair found. The search is a steady-state genetic
//! algorithm over a cost-indexed population:
//!
//! - **Chromosomes** encode a partition as one [`Label`] per vertex;
//!   validity and cut weight come from [`Chromosome::cut_weight`].
//! - **[`PopulationPool`]** maps cut weight → bucket of chromosomes, so
//!   bucket sizes double as a cheap fitness-proportionate weighting.
//! - **Selection** runs biased single-elimination brackets over sampled
//!   costs ([`select_parents`]).
//! - **Crossover and mutation** are uniform gene-wise mixing plus rare
//!   per-gene flips ([`uniform_crossover`], [`mutate`]).
//! - **Replacement** is a strict swap inside a cost-distance window
//!   ([`replace`]), with a small unconditional-insertion fallback.
//! - **[`EvolutionRunner`]** drives generations under a deadline and stops
//!   on convergence (most children rejected) or timeout.
//!
//! # Example
//!
//! ```
//! use maxcut_evo::{EvolutionConfig, EvolutionRunner, Graph};
//! use std::time::Duration;
//!
//! let graph = Graph::from_edges(4, &[(1, 2, 1), (2, 3, 1), (3, 4, 1), (4, 1, 1)]).unwrap();
//! let config = EvolutionConfig::default()
//!     .with_time_limit(Duration::from_millis(500))
//!     .with_seed(42);
//!
//! let result = EvolutionRunner::run(&graph, &config).unwrap();
//! assert_eq!(result.best.cost, 4);
//! println!("answer set: {:?}", result.best.chromosome.decode_partition());
//! ```
//!
//! The engine is single-threaded; reproducibility comes from threading one
//! seeded random generator through every stochastic operator. The crate is
//! a pure library: graph file parsing, entry points, and run statistics
//! belong to callers.

pub mod chromosome;
pub mod config;
pub mod graph;
pub mod operators;
pub mod pool;
pub mod replacement;
pub mod runner;
pub mod selection;

pub use chromosome::{Chromosome, Label};
pub use config::EvolutionConfig;
pub use graph::{Edge, Graph, GraphError};
pub use operators::{mutate, mutate_with_odds, uniform_crossover};
pub use pool::PopulationPool;
pub use replacement::replace;
pub use runner::{run, EvolutionRunner, RunError, RunResult, Solution, Termination};
pub use selection::{select_parents, Parents};
