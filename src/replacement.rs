//! Steady-state replacement with a cost-distance acceptance window.
//!
//! A child enters the pool by evicting one existing chromosome whose cost
//! lies within a window below the child's own cost. Children whose
//! neighborhood is empty are rejected; the evolution loop compensates with
//! a small unconditional-insertion fallback so that far-ahead children do
//! not starve the pool of their genetic material.

use crate::chromosome::Chromosome;
use crate::pool::PopulationPool;
use rand::Rng;

/// Number of eviction-target draws before a child is rejected.
pub const REPLACE_ATTEMPTS: usize = 20;

/// Attempts to insert `child` (evaluating to `child_cost`) into the pool.
///
/// Up to [`REPLACE_ATTEMPTS`] times, draws an eviction target cost
/// `r = max(child_cost − U[0, threshold + 3], 0)` — the offset is re-drawn
/// each attempt — and looks for a live bucket at `r`. On a hit, one
/// uniformly random chromosome is removed from that bucket and the child is
/// inserted at `child_cost`: a strict swap, so the pool size is unchanged.
///
/// Returns `true` on acceptance; `false` after exhausting all attempts, in
/// which case the pool is untouched.
pub fn replace<R: Rng>(
    pool: &mut PopulationPool,
    child_cost: i64,
    child: &Chromosome,
    threshold: i64,
    rng: &mut R,
) -> bool {
    for _ in 0..REPLACE_ATTEMPTS {
        let offset = rng.random_range(0..=threshold + 3);
        let target = (child_cost - offset).max(0);
        if pool.remove_random(target, rng).is_some() {
            pool.insert(child_cost, child.clone());
            return true;
        }
    }
    false
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

    #[test]
    fn test_accept_is_strict_swap() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut pool = PopulationPool::new();
        pool.insert(10, chrom("AABB"));
        pool.insert(10, chrom("ABAB"));

        // threshold 2 → offsets in [0, 5]; cost 12 can evict from [7, 12].
        let accepted = replace(&mut pool, 12, &chrom("ABBA"), 2, &mut rng);
        assert!(accepted);
        assert_eq!(pool.len(), 2, "replacement must swap, not grow");
        assert_eq!(pool.bucket_len(12), 1);
        assert_eq!(pool.bucket_len(10), 1);
    }

    #[test]
    fn test_reject_leaves_pool_untouched() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut pool = PopulationPool::new();
        pool.insert(3, chrom("AABB"));

        // Cost 100 with threshold 2 can only evict from [95, 100]; the sole
        // bucket at 3 is out of range on every attempt.
        let accepted = replace(&mut pool, 100, &chrom("ABBA"), 2, &mut rng);
        assert!(!accepted);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.bucket_len(3), 1);
        assert_eq!(pool.bucket_len(100), 0);
    }

    #[test]
    fn test_target_clamped_at_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool = PopulationPool::new();
        pool.insert(0, chrom("AABB"));

        // Offsets can exceed the child cost; the target clamps to 0 and the
        // bucket there is evictable.
        let accepted = replace(&mut pool, 1, &chrom("ABBB"), 5, &mut rng);
        assert!(accepted);
        assert_eq!(pool.bucket_len(1), 1);
        assert_eq!(pool.bucket_len(0), 0);
    }

    #[test]
    fn test_child_may_evict_own_cost_level() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut pool = PopulationPool::new();
        pool.insert(5, chrom("AABB"));

        // Offset 0 targets the child's own cost level.
        let accepted = replace(&mut pool, 5, &chrom("ABBA"), 0, &mut rng);
        assert!(accepted);
        assert_eq!(pool.bucket_len(5), 1);
        assert_eq!(pool.len(), 1);
    }
}
