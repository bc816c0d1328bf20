//! Hamiltonian path validity checks.

use crate::graph::{Graph, VertexId};
use std::collections::HashSet;
use thiserror::Error;

/// Why a candidate path was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PathError {
    /// The candidate covers the wrong number of distinct vertices.
    #[error("path visits {distinct} distinct vertices, expected {expected}")]
    WrongVertexCount {
        /// Distinct vertices in the candidate.
        distinct: usize,
        /// The vertex count the path was checked against.
        expected: usize,
    },
    /// Two consecutive vertices are not adjacent.
    #[error("no edge {from} -> {to} at position {position}")]
    MissingEdge {
        /// Index of `from` in the candidate.
        position: usize,
        /// Source vertex.
        from: VertexId,
        /// Target vertex.
        to: VertexId,
    },
}

// ============================================================================
// Public API
// ============================================================================

/// Returns `true` iff `path` is a Hamiltonian path of `graph` with `vertex_count` vertices.
///
/// The path must contain exactly `vertex_count` distinct values, and each `path[i + 1]` must
/// be listed among the neighbors of `path[i]`. Only that one direction is checked, which is
/// enough for symmetric graphs. An empty path is valid when `vertex_count == 0`.
///
/// Allocates a fresh scratch set; use [`PathValidator`] when checking many candidates.
pub fn is_hamiltonian_path(graph: &Graph, path: &[VertexId], vertex_count: usize) -> bool {
    PathValidator::new().is_valid(graph, path, vertex_count)
}

/// Same verdict as [`is_hamiltonian_path`], with the reason for rejection.
///
/// # Errors
/// Returns the first violated condition: the distinct-vertex count is checked before edges.
pub fn check_path(graph: &Graph, path: &[VertexId], vertex_count: usize) -> Result<(), PathError> {
    let distinct = PathValidator::new().distinct_count(path);
    if distinct != vertex_count {
        return Err(PathError::WrongVertexCount {
            distinct,
            expected: vertex_count,
        });
    }
    for (position, w) in path.windows(2).enumerate() {
        if !graph.has_edge(w[0], w[1]) {
            return Err(PathError::MissingEdge {
                position,
                from: w[0],
                to: w[1],
            });
        }
    }
    Ok(())
}

// ============================================================================
// PathValidator
// ============================================================================

/// Path checker that keeps its distinct-vertex scratch set between calls.
///
/// After the first candidate of a given length, checking further candidates does not
/// allocate.
#[derive(Clone, Debug, Default)]
pub struct PathValidator {
    seen: HashSet<VertexId>,
}

impl PathValidator {
    /// Creates a validator with an empty scratch set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator sized for paths of `n` vertices.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            seen: HashSet::with_capacity(n),
        }
    }

    /// Same rule as [`is_hamiltonian_path`].
    pub fn is_valid(&mut self, graph: &Graph, path: &[VertexId], vertex_count: usize) -> bool {
        if self.distinct_count(path) != vertex_count {
            return false;
        }
        path.windows(2).all(|w| graph.has_edge(w[0], w[1]))
    }

    fn distinct_count(&mut self, path: &[VertexId]) -> usize {
        self.seen.clear();
        self.seen.extend(path.iter().copied());
        self.seen.len()
    }
}

// ============================================================================
// Tests
// ============================================================================
