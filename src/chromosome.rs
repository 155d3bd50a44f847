//! Chromosome representation and cut-weight evaluation.
//!
//! A chromosome encodes a candidate 2-partition as one [`Label`] per vertex.
//! Using a two-valued enum instead of a character string makes invalid
//! symbols unrepresentable; the remaining validity conditions (both sides
//! non-empty, at least one crossing edge) are checked by
//! [`Chromosome::cut_weight`].

use crate::graph::Graph;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Partition side of a single vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Label {
    /// Side `A`.
    A,
    /// Side `B`.
    B,
}

impl Label {
    /// The opposite side.
    pub fn other(self) -> Label {
        match self {
            Label::A => Label::B,
            Label::B => Label::A,
        }
    }

    /// Draws a label uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Label {
        if rng.random_bool(0.5) {
            Label::A
        } else {
            Label::B
        }
    }

    /// Character form, `'A'` or `'B'`.
    pub fn as_char(self) -> char {
        match self {
            Label::A => 'A',
            Label::B => 'B',
        }
    }
}

/// A candidate 2-partition: position `i` holds the label of vertex `i + 1`.
///
/// Chromosomes are owned values. Every operator that "uses" one produces a
/// fresh owned chromosome; nothing in the engine aliases them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    labels: Vec<Label>,
}

impl Chromosome {
    /// Wraps an explicit label sequence.
    pub fn from_labels(labels: Vec<Label>) -> Self {
        Self { labels }
    }

    /// Generates a chromosome of length `len` with independent uniform labels.
    ///
    /// Validity (non-triviality, connectivity across the cut) is checked
    /// downstream by [`cut_weight`](Chromosome::cut_weight), not here.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        let labels = (0..len).map(|_| Label::random(rng)).collect();
        Self { labels }
    }

    /// Number of positions (= vertex count of the intended graph).
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the chromosome has zero positions.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The label at 0-based position `index`.
    pub fn label(&self, index: usize) -> Label {
        self.labels[index]
    }

    /// All labels, 0-based by vertex index minus one.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Validates the chromosome against `graph` and computes its cut weight.
    ///
    /// Returns `None` (invalid) when:
    /// - the length differs from `graph.vertex_count()`,
    /// - either side of the partition is empty,
    /// - the smaller side has no edge crossing to the other side.
    ///
    /// Otherwise returns the total weight of crossing edges. Only the
    /// smaller side's adjacency is iterated, so each undirected edge is
    /// visited from at most one crossing endpoint and never double-counted;
    /// work is bounded by `O(min(|A|, |B|) · avg_degree)`.
    pub fn cut_weight(&self, graph: &Graph) -> Option<i64> {
        if self.labels.len() != graph.vertex_count() {
            return None;
        }

        let a_count = self.labels.iter().filter(|&&l| l == Label::A).count();
        let b_count = self.labels.len() - a_count;
        if a_count == 0 || b_count == 0 {
            return None;
        }

        let smaller = if a_count <= b_count { Label::A } else { Label::B };

        let mut cut = 0i64;
        let mut crossing = false;
        for (index, &label) in self.labels.iter().enumerate() {
            if label != smaller {
                continue;
            }
            for &(to, weight) in graph.neighbors(index + 1) {
                if self.labels[to - 1] != smaller {
                    cut += weight;
                    crossing = true;
                }
            }
        }

        // Two sides with no edge between them have no cut boundary at all.
        if crossing {
            Some(cut)
        } else {
            None
        }
    }

    /// Decodes the human-readable answer set: the 1-based vertex indices
    /// carrying the smaller side's label (ties go to `A`), ascending.
    pub fn decode_partition(&self) -> Vec<usize> {
        let a_count = self.labels.iter().filter(|&&l| l == Label::A).count();
        let smaller = if 2 * a_count <= self.labels.len() {
            Label::A
        } else {
            Label::B
        };
        self.labels
            .iter()
            .enumerate()
            .filter(|&(_, &l)| l == smaller)
            .map(|(i, _)| i + 1)
            .collect()
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &label in &self.labels {
            write!(f, "{}", label.as_char())?;
        }
        Ok(())
    }
}

impl FromStr for Chromosome {
    type Err = String;

    /// Parses a string of `'A'`/`'B'` characters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let labels = s
            .chars()
            .map(|c| match c {
                'A' => Ok(Label::A),
                'B' => Ok(Label::B),
                other => Err(format!("invalid label character {other:?}")),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { labels })
    }
}
