//! Exhaustive Hamiltonian path search.
//!
//! Every ordering of the vertex keys is tried in turn and the first one that passes
//! [`PathValidator::is_valid`] is returned. There is no pruning: a rejected ordering is only
//! discovered after it has been checked in full, so the worst case is `O(n! * n)`. That
//! growth is exactly what the benchmark runner measures.

use crate::graph::{Graph, VertexId};
use crate::path::PathValidator;
use crate::permutation::Permutations;
use std::time::{Duration, Instant};

// ============================================================================
// Solution
// ============================================================================

/// Outcome of one solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Whether a Hamiltonian path was found.
    pub found: bool,
    /// The first valid ordering, or empty when none was found.
    pub witness: Vec<VertexId>,
    /// Wall-clock time spent in the enumerate-and-validate loop.
    pub elapsed: Duration,
    /// Number of orderings checked, including the successful one.
    pub candidates_checked: usize,
}

impl Solution {
    /// Elapsed time in microseconds.
    pub fn elapsed_micros(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e6
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Searches `graph` for a Hamiltonian path over `vertex_count` vertices.
///
/// Candidates are the permutations of [`Graph::vertex_list`], in the order produced by
/// [`Permutations`]. For a fixed graph the verdict and the witness are deterministic.
///
/// `vertex_count` is compared against each candidate's distinct-vertex count, so passing a
/// value that differs from `graph.vertex_count()` makes every candidate invalid.
pub fn solve(graph: &Graph, vertex_count: usize) -> Solution {
    let vertices = graph.vertex_list();
    let mut perms = Permutations::new(&vertices);
    let mut validator = PathValidator::with_capacity(vertices.len());
    log::trace!(
        "solve: up to {} candidates",
        perms.total().map_or_else(|| "overflow".to_owned(), |t| t.to_string())
    );

    let start = Instant::now();
    let mut witness = None;
    while let Some(candidate) = perms.next_slice() {
        if validator.is_valid(graph, candidate, vertex_count) {
            witness = Some(candidate.to_vec());
            break;
        }
    }
    let elapsed = start.elapsed();

    let candidates_checked = perms.yielded();
    let found = witness.is_some();
    log::debug!(
        "solve: {} keys, vertex_count={vertex_count}, found={found}, candidates={candidates_checked}, {:.1}us",
        vertices.len(),
        elapsed.as_secs_f64() * 1e6,
    );

    Solution {
        found,
        witness: witness.unwrap_or_default(),
        elapsed,
        candidates_checked,
    }
}

/// Solves with `vertex_count` taken as the number of keys.
pub fn solve_graph(graph: &Graph) -> Solution {
    solve(graph, graph.vertex_count())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{check_path, is_hamiltonian_path};
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_xorshift::XorShiftRng;

    /// Scans every ordering without early exit; true iff any is valid.
    fn reference_has_path(graph: &Graph, vertex_count: usize) -> bool {
        let vertices = graph.vertex_list();
        let n = vertices.len();
        vertices
            .into_iter()
            .permutations(n)
            .any(|p| is_hamiltonian_path(graph, &p, vertex_count))
    }

    // -------------------------------------------------------------------------
    // Concrete scenarios
    // -------------------------------------------------------------------------

    #[test]
    fn four_cycle_has_path() {
        let g = Graph::from_adjacency([(1, vec![2]), (2, vec![1, 3]), (3, vec![2, 4]), (4, vec![3, 1])]);
        let s = solve(&g, 4);
        assert!(s.found);
        assert_eq!(s.witness, vec![1, 2, 3, 4]);
        assert_eq!(s.candidates_checked, 1);
    }

    #[test]
    fn two_disjoint_edges_have_no_path() {
        let g = Graph::from_adjacency([(1, vec![2]), (2, vec![1]), (3, vec![4]), (4, vec![3])]);
        let s = solve(&g, 4);
        assert!(!s.found);
        assert!(s.witness.is_empty());
        assert_eq!(s.candidates_checked, 24);
    }

    #[test]
    fn ten_cycle_has_path() {
        let g = Graph::cycle(10);
        let s = solve_graph(&g);
        assert!(s.found);
        assert_eq!(check_path(&g, &s.witness, 10), Ok(()));
    }

    #[test]
    fn three_disjoint_edges_have_no_path() {
        let g = Graph::disjoint_edges(3);
        let s = solve_graph(&g);
        assert!(!s.found);
        assert_eq!(s.candidates_checked, 720);
    }

    #[test]
    #[cfg_attr(debug_assertions, ignore = "enumerates all 12! orderings; runs under --release")]
    fn twelve_vertices_in_disjoint_edges_have_no_path() {
        let g = Graph::disjoint_edges(6);
        let s = solve_graph(&g);
        assert!(!s.found);
        assert!(s.witness.is_empty());
        assert_eq!(s.candidates_checked, 479_001_600);
    }

    #[test]
    fn single_vertex_is_its_own_path() {
        let g = Graph::from_adjacency([(1, Vec::<VertexId>::new())]);
        let s = solve(&g, 1);
        assert!(s.found);
        assert_eq!(s.witness, vec![1]);
    }

    #[test]
    fn empty_graph_is_trivially_satisfied() {
        let s = solve(&Graph::new(), 0);
        assert!(s.found);
        assert!(s.witness.is_empty());
        assert_eq!(s.candidates_checked, 1);
    }

    #[test]
    fn mismatched_vertex_count_never_succeeds() {
        let mut g = Graph::new();
        g.add_edge(1, 2);
        g.add_edge(2, 100);
        assert!(!solve(&g, 100).found);
        assert!(solve(&g, 3).found);
    }

    #[test]
    fn path_graph_first_witness_follows_insertion_order() {
        let g = Graph::path(5);
        let s = solve_graph(&g);
        assert_eq!(s.witness, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn witness_depends_on_key_order() {
        // Path 1-2-3 inserted middle-first: keys are [2, 1, 3].
        let mut g = Graph::new();
        g.add_edge(2, 1);
        g.add_edge(2, 3);
        let s = solve_graph(&g);
        assert_eq!(s.witness, vec![1, 2, 3]);
        assert_eq!(g.vertex_list(), vec![2, 1, 3]);
    }

    #[test]
    fn elapsed_micros_matches_duration() {
        let s = Solution {
            found: false,
            witness: Vec::new(),
            elapsed: Duration::from_micros(1_500),
            candidates_checked: 0,
        };
        assert!((s.elapsed_micros() - 1_500.0).abs() < 1e-6);
    }

    // -------------------------------------------------------------------------
    // Properties over random graphs
    // -------------------------------------------------------------------------

    #[test]
    fn sound_complete_and_deterministic_on_random_graphs() {
        let mut rng = XorShiftRng::seed_from_u64(0x5EED_1234);
        for _ in 0..200 {
            let n = rng.random_range(0..=6);
            let p = rng.random_range(0.1..0.8);
            let g = Graph::random_gnp(&mut rng, n, p);

            let s = solve_graph(&g);
            assert_eq!(s.found, reference_has_path(&g, n), "graph {g}");

            if s.found {
                let mut sorted = s.witness.clone();
                sorted.sort_unstable();
                assert_eq!(sorted, g.vertex_list(), "witness must be a permutation of {g}");
                assert!(s.witness.windows(2).all(|w| g.has_edge(w[0], w[1]) && g.has_edge(w[1], w[0])));
            } else {
                assert!(s.witness.is_empty());
            }

            let again = solve_graph(&g);
            assert_eq!(again.found, s.found);
            assert_eq!(again.witness, s.witness);
        }
    }

    #[test]
    fn disconnected_graphs_never_have_paths() {
        let mut rng = XorShiftRng::seed_from_u64(0xD15C);
        for _ in 0..50 {
            let left = rng.random_range(1..=3u64);
            let right = rng.random_range(1..=3u64);
            let mut g = Graph::new();
            for v in 1..=left + right {
                g.add_vertex(v);
            }
            for u in 1..=left {
                for v in (u + 1)..=left {
                    if rng.random_bool(0.7) {
                        g.add_edge(u, v);
                    }
                }
            }
            for u in (left + 1)..=left + right {
                for v in (u + 1)..=left + right {
                    if rng.random_bool(0.7) {
                        g.add_edge(u, v);
                    }
                }
            }
            assert!(!solve_graph(&g).found, "graph {g}");
        }
    }

    #[test]
    fn complete_graph_succeeds_on_first_candidate() {
        let mut rng = XorShiftRng::seed_from_u64(1);
        let g = Graph::random_gnp(&mut rng, 7, 1.0);
        let s = solve_graph(&g);
        assert!(s.found);
        assert_eq!(s.candidates_checked, 1);
        assert_eq!(s.witness, g.vertex_list());
    }
}
