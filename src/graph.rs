//! Weighted undirected graph for Max-Cut instances.
//!
//! [`Graph`] is immutable once handed to the engine: callers build it with
//! [`Graph::new`] + [`Graph::add_undirected_edge`] (or [`Graph::from_edges`])
//! and then only read from it. Vertices are 1-based, matching the usual
//! Max-Cut benchmark file convention.

use std::fmt;

/// A directed edge record.
///
/// Undirected edges are stored as two directed records, one per direction,
/// so "edges incident to `v`" is a single adjacency lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// Source vertex (1-based).
    pub from: usize,
    /// Target vertex (1-based).
    pub to: usize,
    /// Edge weight.
    pub weight: i64,
}

/// Fatal graph construction errors.
///
/// Construction errors are surfaced immediately; the engine never receives
/// a malformed graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The graph was created with zero vertices.
    NoVertices,
    /// An edge endpoint lies outside `[1, vertex_count]`.
    VertexOutOfRange {
        /// The offending vertex index.
        vertex: usize,
        /// The graph's vertex count.
        vertex_count: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::NoVertices => write!(f, "graph must have at least one vertex"),
            GraphError::VertexOutOfRange {
                vertex,
                vertex_count,
            } => write!(
                f,
                "vertex {vertex} out of range (graph has {vertex_count} vertices)"
            ),
        }
    }
}

impl std::error::Error for GraphError {}

/// An undirected weighted graph.
///
/// Stores both directed records per undirected edge and keeps a per-vertex
/// adjacency index so that [`neighbors`](Graph::neighbors) is O(degree).
#[derive(Debug, Clone)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<(usize, i64)>>,
    total_weight: i64,
}

impl Graph {
    /// Creates an empty graph with `vertex_count` vertices.
    ///
    /// Returns [`GraphError::NoVertices`] when `vertex_count` is zero.
    pub fn new(vertex_count: usize) -> Result<Self, GraphError> {
        if vertex_count == 0 {
            return Err(GraphError::NoVertices);
        }
        Ok(Self {
            vertex_count,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertex_count],
            total_weight: 0,
        })
    }

    /// Builds a graph from `(from, to, weight)` triples.
    pub fn from_edges(
        vertex_count: usize,
        edges: &[(usize, usize, i64)],
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(vertex_count)?;
        for &(from, to, weight) in edges {
            graph.add_undirected_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Adds an undirected edge, stored as two directed records.
    ///
    /// Fails with [`GraphError::VertexOutOfRange`] if either endpoint is
    /// outside `[1, vertex_count]`.
    pub fn add_undirected_edge(
        &mut self,
        from: usize,
        to: usize,
        weight: i64,
    ) -> Result<(), GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.edges.push(Edge { from, to, weight });
        self.edges.push(Edge {
            from: to,
            to: from,
            weight,
        });
        self.adjacency[from - 1].push((to, weight));
        self.adjacency[to - 1].push((from, weight));
        self.total_weight += weight;
        Ok(())
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex == 0 || vertex > self.vertex_count {
            return Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count,
            });
        }
        Ok(())
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }

    /// All directed edge records (two per undirected edge).
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges incident to `vertex` as `(other_endpoint, weight)` pairs.
    ///
    /// # Panics
    /// Panics if `vertex` is outside `[1, vertex_count]`.
    pub fn neighbors(&self, vertex: usize) -> &[(usize, i64)] {
        assert!(
            vertex >= 1 && vertex <= self.vertex_count,
            "vertex {vertex} out of range"
        );
        &self.adjacency[vertex - 1]
    }

    /// Sum of all undirected edge weights.
    ///
    /// This is an upper bound on any cut weight.
    pub fn total_weight(&self) -> i64 {
        self.total_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_vertices() {
        assert_eq!(Graph::new(0).err(), Some(GraphError::NoVertices));
    }

    #[test]
    fn test_add_edge_both_directions() {
        let mut graph = Graph::new(3).unwrap();
        graph.add_undirected_edge(1, 2, 5).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors(1), &[(2, 5)]);
        assert_eq!(graph.neighbors(2), &[(1, 5)]);
        assert!(graph.neighbors(3).is_empty());
    }

    #[test]
    fn test_endpoint_out_of_range() {
        let mut graph = Graph::new(2).unwrap();
        assert_eq!(
            graph.add_undirected_edge(1, 3, 1),
            Err(GraphError::VertexOutOfRange {
                vertex: 3,
                vertex_count: 2
            })
        );
        assert_eq!(
            graph.add_undirected_edge(0, 1, 1),
            Err(GraphError::VertexOutOfRange {
                vertex: 0,
                vertex_count: 2
            })
        );
        // A failed add must not leave a partial record behind.
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_from_edges() {
        let graph = Graph::from_edges(4, &[(1, 2, 1), (2, 3, 1), (3, 4, 1), (4, 1, 1)]).unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.total_weight(), 4);
        assert_eq!(graph.neighbors(2), &[(1, 1), (3, 1)]);
    }

    #[test]
    fn test_total_weight_sums_undirected_once() {
        let graph = Graph::from_edges(3, &[(1, 2, 10), (2, 3, -4)]).unwrap();
        assert_eq!(graph.total_weight(), 6);
    }
}
