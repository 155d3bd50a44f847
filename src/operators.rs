//! Genetic operators: uniform crossover and per-gene mutation.
//!
//! Both operators take parents by reference and return fresh owned
//! chromosomes; pool-held chromosomes are never modified in place.

use crate::chromosome::{Chromosome, Label};
use rand::Rng;

/// A gene mutates when a draw from `[1, MUTATION_SCALE · len]` lands at or
/// below this many hits, i.e. with probability `3 / (200 · len)`.
pub const MUTATION_HITS: u64 = 3;
/// Denominator scale of the per-gene mutation probability.
pub const MUTATION_SCALE: u64 = 200;

/// Produces a child by gene-wise mixing: each position takes the female's
/// or the male's label with probability 0.5.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn uniform_crossover<R: Rng>(
    female: &Chromosome,
    male: &Chromosome,
    rng: &mut R,
) -> Chromosome {
    assert_eq!(
        female.len(),
        male.len(),
        "parents must have equal length"
    );
    let labels = (0..female.len())
        .map(|i| {
            if rng.random_bool(0.5) {
                female.label(i)
            } else {
                male.label(i)
            }
        })
        .collect();
    Chromosome::from_labels(labels)
}

/// Mutates each position independently with probability
/// `3 / (200 · len)`, keeping the expected number of mutated positions per
/// chromosome small and roughly constant regardless of graph size.
///
/// A mutated position redraws its label uniformly, so mutation may
/// reproduce the original value.
pub fn mutate<R: Rng>(chromosome: &Chromosome, rng: &mut R) -> Chromosome {
    let range = MUTATION_SCALE * chromosome.len() as u64;
    mutate_with_odds(chromosome, MUTATION_HITS, range, rng)
}

/// Parameterized mutation: each position mutates when a draw from
/// `[1, range]` is at most `hits`. `hits == 0` is the identity.
pub fn mutate_with_odds<R: Rng>(
    chromosome: &Chromosome,
    hits: u64,
    range: u64,
    rng: &mut R,
) -> Chromosome {
    if hits == 0 || range == 0 {
        return chromosome.clone();
    }
    let labels = chromosome
        .labels()
        .iter()
        .map(|&label| {
            if rng.random_range(1..=range) <= hits {
                Label::random(rng)
            } else {
                label
            }
        })
        .collect();
    Chromosome::from_labels(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::str::FromStr;

    fn chrom(s: &str) -> Chromosome {
        Chromosome::from_str(s).unwrap()
    }

    #[test]
    fn test_crossover_preserves_length() {
        let mut rng = StdRng::seed_from_u64(1);
        let child = uniform_crossover(&chrom("AABB"), &chrom("BBAA"), &mut rng);
        assert_eq!(child.len(), 4);
    }

    #[test]
    fn test_crossover_identical_parents() {
        let mut rng = StdRng::seed_from_u64(1);
        let parent = chrom("ABAB");
        let child = uniform_crossover(&parent, &parent, &mut rng);
        assert_eq!(child, parent);
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn test_crossover_length_mismatch_panics() {
        let mut rng = StdRng::seed_from_u64(1);
        uniform_crossover(&chrom("AB"), &chrom("ABA"), &mut rng);
    }

    #[test]
    fn test_zero_hits_mutation_is_identity() {
        let mut rng = StdRng::seed_from_u64(1);
        let original = chrom("ABBABA");
        let mutated = mutate_with_odds(&original, 0, 1200, &mut rng);
        assert_eq!(mutated, original);
    }

    #[test]
    fn test_mutation_preserves_length() {
        let mut rng = StdRng::seed_from_u64(1);
        let original = Chromosome::random(50, &mut rng);
        let mutated = mutate(&original, &mut rng);
        assert_eq!(mutated.len(), original.len());
    }

    #[test]
    fn test_certain_mutation_redraws_every_gene() {
        // hits == range makes every draw a hit; over 64 positions at least
        // one redraw differing from the original is overwhelmingly likely,
        // and equal positions are legal (redraw may reproduce the value).
        let mut rng = StdRng::seed_from_u64(2);
        let original = Chromosome::from_labels(vec![Label::A; 64]);
        let mutated = mutate_with_odds(&original, 10, 10, &mut rng);
        assert_eq!(mutated.len(), 64);
        assert_ne!(mutated, original, "64 uniform redraws all came up A");
    }

    proptest! {
        /// Every child position comes from one of its parents.
        #[test]
        fn prop_crossover_gene_provenance(seed in 0u64..300) {
            let mut rng = StdRng::seed_from_u64(seed);
            let female = Chromosome::random(12, &mut rng);
            let male = Chromosome::random(12, &mut rng);
            let child = uniform_crossover(&female, &male, &mut rng);
            prop_assert_eq!(child.len(), 12);
            for i in 0..child.len() {
                prop_assert!(
                    child.label(i) == female.label(i) || child.label(i) == male.label(i),
                    "position {} not inherited from either parent",
                    i
                );
            }
        }
    }
}
