//! Bracket-tournament parent selection.
//!
//! Parents are selected by running a single-elimination bracket over costs
//! sampled from the pool, not over individual chromosomes. Because bucket
//! sizes already encode how common each fitness level is, sampling at the
//! cost level approximates fitness-proportionate pressure without scanning
//! the population.
//!
//! Each pairing is decided by a biased coin: the larger cost wins with
//! probability `bias` (≥ 0.5). This injects selection pressure without
//! being strictly elitist — low costs survive brackets often enough to
//! permit "distant" pairings.

use crate::chromosome::Chromosome;
use crate::pool::PopulationPool;
use rand::Rng;

/// Bracket sizes are `2^u` with `u` drawn uniformly from this range.
pub const BRACKET_EXP_MIN: u32 = 3;
/// Upper bound of the bracket size exponent (inclusive).
pub const BRACKET_EXP_MAX: u32 = 5;

/// Attempts per bracket slot when hunting for a live bucket.
pub const SAMPLE_ATTEMPTS: usize = 64;

/// A selected parent pair with the costs of the buckets they came from.
#[derive(Debug, Clone)]
pub struct Parents {
    /// First parent.
    pub female: Chromosome,
    /// Cost of the bucket the female was drawn from.
    pub female_cost: i64,
    /// Second parent.
    pub male: Chromosome,
    /// Cost of the bucket the male was drawn from.
    pub male_cost: i64,
}

/// Selects two parents from the pool.
///
/// Runs one bracket tournament per parent role. If the male tournament
/// fails outright (which requires an empty pool mid-call and cannot happen
/// under the engine's single-threaded use), the female is self-paired
/// rather than propagating an error.
///
/// Returns `None` only when the pool is empty.
pub fn select_parents<R: Rng>(
    pool: &PopulationPool,
    bias: f64,
    rng: &mut R,
) -> Option<Parents> {
    let (female_cost, female) = select_one(pool, bias, rng)?;
    let (male_cost, male) = match select_one(pool, bias, rng) {
        Some(winner) => winner,
        None => (female_cost, female.clone()),
    };
    Some(Parents {
        female,
        female_cost,
        male,
        male_cost,
    })
}

/// Selects a single parent: sample `2^u` costs, run the bracket, then draw
/// one chromosome uniformly from the winning bucket (without removal).
fn select_one<R: Rng>(
    pool: &PopulationPool,
    bias: f64,
    rng: &mut R,
) -> Option<(i64, Chromosome)> {
    if pool.is_empty() {
        return None;
    }

    let exponent = rng.random_range(BRACKET_EXP_MIN..=BRACKET_EXP_MAX);
    let size = 1usize << exponent;

    let mut bracket = Vec::with_capacity(size);
    for _ in 0..size {
        // A sampling miss degrades to a cost we already hold (or the pool
        // maximum for the first slot) instead of looping unbounded.
        let cost = pool
            .sample_nonempty_cost(rng, SAMPLE_ATTEMPTS)
            .or_else(|| bracket.last().copied())
            .or_else(|| pool.max_cost())?;
        bracket.push(cost);
    }

    // Single elimination, winners stored left; the champion ends at slot 0.
    let mut stride = 1;
    while stride < size {
        let mut slot = 0;
        while slot + stride < size {
            let (high, low) = if bracket[slot] >= bracket[slot + stride] {
                (bracket[slot], bracket[slot + stride])
            } else {
                (bracket[slot + stride], bracket[slot])
            };
            bracket[slot] = if rng.random_bool(bias) { high } else { low };
            slot += 2 * stride;
        }
        stride *= 2;
    }

    let winner = bracket[0];
    let chromosome = pool.peek_random(winner, rng)?.clone();
    Some((winner, chromosome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::str::FromStr;

    fn chrom(s: &str) -> Chromosome {
        Chromosome::from_str(s).unwrap()
    }

    fn pool_with(costs: &[(i64, &str)]) -> PopulationPool {
        let mut pool = PopulationPool::new();
        for &(cost, s) in costs {
            pool.insert(cost, chrom(s));
        }
        pool
    }

    #[test]
    fn test_empty_pool_selects_nothing() {
        let mut rng = StdRng::seed_from_u64(0);
        let pool = PopulationPool::new();
        assert!(select_parents(&pool, 0.6, &mut rng).is_none());
    }

    #[test]
    fn test_parents_come_from_their_buckets() {
        let mut rng = StdRng::seed_from_u64(3);
        let pool = pool_with(&[(2, "AABB"), (5, "ABAB"), (9, "ABBA")]);
        for _ in 0..20 {
            let parents = select_parents(&pool, 0.6, &mut rng).unwrap();
            assert!(
                pool.peek_random(parents.female_cost, &mut rng).is_some(),
                "female cost {} has no bucket",
                parents.female_cost
            );
            let expected = match parents.male_cost {
                2 => "AABB",
                5 => "ABAB",
                9 => "ABBA",
                other => panic!("male cost {other} not in pool"),
            };
            assert_eq!(parents.male, chrom(expected));
        }
    }

    #[test]
    fn test_full_bias_always_picks_maximum() {
        // With bias 1.0 the larger cost wins every pairing, so every bracket
        // containing the maximum returns it. The maximum is drawn into each
        // bracket with overwhelming probability over 30 rounds.
        let mut rng = StdRng::seed_from_u64(11);
        let pool = pool_with(&[(1, "AABB"), (2, "ABAB"), (3, "ABBA")]);
        let mut saw_max = false;
        for _ in 0..30 {
            let parents = select_parents(&pool, 1.0, &mut rng).unwrap();
            assert!(parents.female_cost >= 1 && parents.female_cost <= 3);
            if parents.female_cost == 3 {
                saw_max = true;
            }
        }
        assert!(saw_max, "bias 1.0 never surfaced the maximum cost");
    }

    #[test]
    fn test_selection_does_not_remove() {
        let mut rng = StdRng::seed_from_u64(5);
        let pool = pool_with(&[(4, "AB"), (6, "BA")]);
        let before = pool.len();
        for _ in 0..10 {
            select_parents(&pool, 0.6, &mut rng).unwrap();
        }
        assert_eq!(pool.len(), before);
    }

    #[test]
    fn test_single_bucket_self_pairs_naturally() {
        let mut rng = StdRng::seed_from_u64(9);
        let pool = pool_with(&[(7, "ABBB")]);
        let parents = select_parents(&pool, 0.6, &mut rng).unwrap();
        assert_eq!(parents.female_cost, 7);
        assert_eq!(parents.male_cost, 7);
        assert_eq!(parents.female, parents.male);
    }
}
