//! Cost-indexed population pool.
//!
//! The population is organized as a map from cut weight (cost) to the bucket
//! of chromosomes achieving that cost. Bucket sizes encode how common each
//! fitness level is, which is what makes cost-level sampling a cheap
//! approximation of fitness-proportionate pressure (see
//! [`selection`](crate::selection)).
//!
//! # Invariants
//!
//! - No stored bucket is empty: removal drops a bucket as soon as its last
//!   chromosome leaves, so `BTreeMap` key queries always see live costs.
//! - Every chromosome stored under cost `c` evaluates to `c`; the pool
//!   trusts its callers on this and never re-evaluates.

use crate::chromosome::Chromosome;
use rand::Rng;
use std::collections::BTreeMap;

/// A mapping from cost to the set of valid chromosomes achieving that cost.
///
/// Buckets are `Vec`s: insertion order is irrelevant and `swap_remove`
/// gives O(1) uniform removal.
#[derive(Debug, Clone, Default)]
pub struct PopulationPool {
    buckets: BTreeMap<i64, Vec<Chromosome>>,
    len: usize,
}

impl PopulationPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of chromosomes across all buckets.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the pool holds no chromosomes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of chromosomes stored under `cost`.
    pub fn bucket_len(&self, cost: i64) -> usize {
        self.buckets.get(&cost).map_or(0, Vec::len)
    }

    /// Appends `chromosome` to the bucket for `cost`, creating it if absent.
    pub fn insert(&mut self, cost: i64, chromosome: Chromosome) {
        self.buckets.entry(cost).or_default().push(chromosome);
        self.len += 1;
    }

    /// Removes and returns a uniformly random chromosome from the bucket
    /// for `cost`, or `None` if no such bucket exists.
    pub fn remove_random<R: Rng>(&mut self, cost: i64, rng: &mut R) -> Option<Chromosome> {
        let bucket = self.buckets.get_mut(&cost)?;
        let index = rng.random_range(0..bucket.len());
        let chromosome = bucket.swap_remove(index);
        if bucket.is_empty() {
            self.buckets.remove(&cost);
        }
        self.len -= 1;
        Some(chromosome)
    }

    /// Returns a uniformly random chromosome from the bucket for `cost`
    /// without removing it, or `None` if no such bucket exists.
    pub fn peek_random<R: Rng>(&self, cost: i64, rng: &mut R) -> Option<&Chromosome> {
        let bucket = self.buckets.get(&cost)?;
        Some(&bucket[rng.random_range(0..bucket.len())])
    }

    /// Samples a cost uniformly from `[min_cost, max_cost]` until a live
    /// bucket is hit, giving up after `max_attempts` misses.
    ///
    /// Returns `None` on an empty pool or on exhaustion. A miss is not an
    /// error; callers recover locally with their own fallbacks.
    pub fn sample_nonempty_cost<R: Rng>(&self, rng: &mut R, max_attempts: usize) -> Option<i64> {
        let min = self.min_cost()?;
        let max = self.max_cost()?;
        if min == max {
            return Some(min);
        }
        for _ in 0..max_attempts {
            let cost = rng.random_range(min..=max);
            if self.buckets.contains_key(&cost) {
                return Some(cost);
            }
        }
        None
    }

    /// Lowest cost with a live bucket, `None` on an empty pool.
    pub fn min_cost(&self) -> Option<i64> {
        self.buckets.first_key_value().map(|(&cost, _)| cost)
    }

    /// Highest cost with a live bucket, `None` on an empty pool.
    pub fn max_cost(&self) -> Option<i64> {
        self.buckets.last_key_value().map(|(&cost, _)| cost)
    }

    /// The current best: a chromosome from the highest-cost live bucket.
    pub fn best(&self) -> Option<(i64, &Chromosome)> {
        self.buckets
            .last_key_value()
            .map(|(&cost, bucket)| (cost, &bucket[0]))
    }
}
