//! Undirected adjacency-list graph keyed by positive vertex identifiers.
//!
//! Keys keep their first-insertion order. The solver enumerates permutations of that order,
//! so two graphs with the same edges but different insertion histories may produce different
//! (equally valid) witnesses.

use indexmap::{IndexMap, IndexSet};
use rand::Rng;
use std::fmt;

/// Vertex identifier. Inputs use 1-based labels; `0` is reserved as the clause terminator.
pub type VertexId = u64;

// ============================================================================
// Graph
// ============================================================================

/// A graph as a mapping from vertex to its ordered, duplicate-free neighbor list.
///
/// Representation:
/// - `adj` keys are the vertex set, in first-insertion order.
/// - `adj[v]` is an `IndexSet`, so neighbor order is preserved and membership is O(1).
///
/// Graphs built through [`Graph::add_edge`] are always symmetric. Graphs built through
/// [`Graph::from_adjacency`] keep the caller's lists as given; use [`Graph::is_symmetric`]
/// to check.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    adj: IndexMap<VertexId, IndexSet<VertexId>>,
}

impl Graph {
    /// Creates a graph with no vertices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from `(vertex, neighbors)` entries, in the given order.
    ///
    /// Neighbor lists are recorded as given (duplicates dropped). Neighbors that never appear
    /// as an entry do not become vertices.
    pub fn from_adjacency<I, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (VertexId, N)>,
        N: IntoIterator<Item = VertexId>,
    {
        let mut adj: IndexMap<VertexId, IndexSet<VertexId>> = IndexMap::new();
        for (v, neighbors) in entries {
            adj.entry(v).or_default().extend(neighbors);
        }
        Self { adj }
    }

    /// Adds `v` as an isolated vertex if it is not already present.
    pub fn add_vertex(&mut self, v: VertexId) {
        self.adj.entry(v).or_default();
    }

    /// Adds the undirected edge `u -- v`, inserting either endpoint as needed.
    ///
    /// Endpoints are inserted `u` first, then `v`. Repeated edges and self loops are ignored.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) {
        if u == v {
            return;
        }
        self.adj.entry(u).or_default().insert(v);
        self.adj.entry(v).or_default().insert(u);
    }

    /// Returns `true` iff `v` is listed as a neighbor of `u`.
    #[inline]
    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.adj.get(&u).is_some_and(|n| n.contains(&v))
    }

    /// Returns `true` iff `v` is a key of the graph.
    #[inline]
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.adj.contains_key(&v)
    }

    /// Neighbors of `v` in insertion order. Empty for unknown vertices.
    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.adj.get(&v).into_iter().flatten().copied()
    }

    /// Number of neighbors recorded for `v`.
    pub fn degree(&self, v: VertexId) -> usize {
        self.adj.get(&v).map_or(0, IndexSet::len)
    }

    /// Vertices in first-insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adj.keys().copied()
    }

    /// Vertices in first-insertion order, collected.
    pub fn vertex_list(&self) -> Vec<VertexId> {
        self.vertices().collect()
    }

    /// Number of keys.
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Returns `true` iff the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Number of undirected edges, counting each `{u, v}` once.
    ///
    /// Only meaningful for symmetric graphs.
    pub fn edge_count(&self) -> usize {
        self.adj.values().map(IndexSet::len).sum::<usize>() / 2
    }

    /// Edges as `(min, max)` pairs, each undirected edge once, in neighbor-insertion order.
    pub fn edges(&self) -> Vec<(VertexId, VertexId)> {
        let mut out = Vec::with_capacity(self.edge_count());
        for (&u, neighbors) in &self.adj {
            for &v in neighbors {
                if u < v || !self.has_edge(v, u) {
                    out.push((u.min(v), u.max(v)));
                }
            }
        }
        out
    }

    /// Returns `true` iff every recorded `u -> v` has a matching `v -> u`.
    pub fn is_symmetric(&self) -> bool {
        self.adj
            .iter()
            .all(|(&u, neighbors)| neighbors.iter().all(|&v| self.has_edge(v, u)))
    }

    // ------------------------------------------------------------------------
    // Generators
    // ------------------------------------------------------------------------

    /// Cycle `1 - 2 - ... - n - 1`. For `n <= 2` this is a path.
    pub fn cycle(n: usize) -> Self {
        let mut g = Self::path(n);
        if n > 2 {
            g.add_edge(n as VertexId, 1);
        }
        g
    }

    /// Path `1 - 2 - ... - n`. A single vertex for `n == 1`.
    pub fn path(n: usize) -> Self {
        let mut g = Self::new();
        for v in 1..=n as VertexId {
            g.add_vertex(v);
        }
        for v in 1..n as VertexId {
            g.add_edge(v, v + 1);
        }
        g
    }

    /// `k` disjoint edges `1-2, 3-4, ..., (2k-1)-2k`.
    pub fn disjoint_edges(k: usize) -> Self {
        let mut g = Self::new();
        for i in 0..k as VertexId {
            g.add_edge(2 * i + 1, 2 * i + 2);
        }
        g
    }

    /// Erdős–Rényi `G(n, p)` on vertices `1..=n`.
    pub fn random_gnp<R: Rng>(rng: &mut R, n: usize, p: f64) -> Self {
        let p = p.clamp(0.0, 1.0);
        let mut g = Self::new();
        for v in 1..=n as VertexId {
            g.add_vertex(v);
        }
        for u in 1..=n as VertexId {
            for v in (u + 1)..=n as VertexId {
                if rng.random_bool(p) {
                    g.add_edge(u, v);
                }
            }
        }
        g
    }
}

impl fmt::Display for Graph {
    /// Formats as `{1: [2, 4], 2: [1, 3], ...}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (v, neighbors)) in self.adj.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}: [")?;
            for (j, n) in neighbors.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{n}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "}}")
    }
}

// ============================================================================
// Tests
// ============================================================================
