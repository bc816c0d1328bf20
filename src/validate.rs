//! Fast deterministic checks of the solver against known small graphs.

use crate::graph::{Graph, VertexId};
use crate::path::check_path;
use crate::solver::solve;

// ============================================================================
// Known cases
// ============================================================================

/// A compiled-in graph with a known verdict.
#[derive(Clone, Debug)]
pub struct KnownCase {
    /// Human-readable label.
    pub name: &'static str,
    /// Adjacency lists, 1-indexed.
    pub adjacency: &'static [(VertexId, &'static [VertexId])],
    /// Whether a Hamiltonian path exists.
    pub expected: bool,
}

impl KnownCase {
    /// Builds the case's graph with keys in listed order.
    pub fn graph(&self) -> Graph {
        Graph::from_adjacency(self.adjacency.iter().map(|&(v, n)| (v, n.iter().copied())))
    }
}

/// Connected graphs of 4, 6, 8 and 10 vertices and disconnected graphs of 4, 6, 8 and 12.
pub const KNOWN_CASES: &[KnownCase] = &[
    KnownCase {
        name: "connected, 4 vertices",
        adjacency: &[(1, &[2]), (2, &[1, 3]), (3, &[2, 4]), (4, &[3, 1])],
        expected: true,
    },
    KnownCase {
        name: "connected, 6 vertices",
        adjacency: &[
            (1, &[2, 3]),
            (2, &[1, 4]),
            (3, &[1, 4]),
            (4, &[2, 3, 5]),
            (5, &[4, 6]),
            (6, &[5, 1]),
        ],
        expected: true,
    },
    KnownCase {
        name: "connected, 8 vertices",
        adjacency: &[
            (1, &[2, 8]),
            (2, &[1, 3]),
            (3, &[2, 4]),
            (4, &[3, 5]),
            (5, &[4, 6]),
            (6, &[5, 7]),
            (7, &[6, 8]),
            (8, &[1, 7]),
        ],
        expected: true,
    },
    KnownCase {
        name: "connected, 10 vertices",
        adjacency: &[
            (1, &[2, 10]),
            (2, &[1, 3]),
            (3, &[2, 4]),
            (4, &[3, 5]),
            (5, &[4, 6]),
            (6, &[5, 7]),
            (7, &[6, 8]),
            (8, &[7, 9]),
            (9, &[8, 10]),
            (10, &[9, 1]),
        ],
        expected: true,
    },
    KnownCase {
        name: "disconnected, 4 vertices",
        adjacency: &[(1, &[2]), (2, &[1]), (3, &[4]), (4, &[3])],
        expected: false,
    },
    KnownCase {
        name: "disconnected, 6 vertices",
        adjacency: &[(1, &[2]), (2, &[1]), (3, &[4, 5]), (4, &[3]), (5, &[3]), (6, &[])],
        expected: false,
    },
    KnownCase {
        name: "disconnected, 8 vertices",
        adjacency: &[
            (1, &[2, 3]),
            (2, &[1]),
            (3, &[1]),
            (4, &[5]),
            (5, &[4, 6]),
            (6, &[5]),
            (7, &[8]),
            (8, &[7]),
        ],
        expected: false,
    },
    KnownCase {
        name: "disconnected, 12 vertices",
        adjacency: &[
            (1, &[2]),
            (2, &[1]),
            (3, &[4]),
            (4, &[3]),
            (5, &[6]),
            (6, &[5]),
            (7, &[8]),
            (8, &[7]),
            (9, &[10]),
            (10, &[9]),
            (11, &[12]),
            (12, &[11]),
        ],
        expected: false,
    },
];

// ============================================================================
// Public API
// ============================================================================

/// Runs every case in [`KNOWN_CASES`].
///
/// The 12-vertex case enumerates all `12!` orderings and takes a while in debug builds.
///
/// # Errors
/// Returns an error message naming the first case whose verdict or witness is wrong.
pub fn check_known_graphs() -> Result<(), String> {
    KNOWN_CASES.iter().try_for_each(check_case)
}

/// Solves one case with vertex count equal to its key count and checks the outcome.
///
/// # Errors
/// Returns an error message if the verdict differs from `case.expected` or the witness
/// does not pass [`check_path`].
pub fn check_case(case: &KnownCase) -> Result<(), String> {
    let graph = case.graph();
    let n = graph.vertex_count();
    let solution = solve(&graph, n);
    log::info!(
        "{}: {} in {:.2} us",
        case.name,
        if solution.found { "found" } else { "not found" },
        solution.elapsed_micros()
    );

    if solution.found != case.expected {
        return Err(format!(
            "{}: expected path {}, but solver reported {}",
            case.name,
            verdict(case.expected),
            verdict(solution.found)
        ));
    }
    if solution.found {
        check_path(&graph, &solution.witness, n).map_err(|e| format!("{}: bad witness: {e}", case.name))?;
    } else if !solution.witness.is_empty() {
        return Err(format!("{}: witness returned without a path", case.name));
    }
    Ok(())
}

fn verdict(found: bool) -> &'static str {
    if found {
        "found"
    } else {
        "not found"
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_known_cases_pass() {
        for case in KNOWN_CASES.iter().filter(|c| c.adjacency.len() <= 10) {
            check_case(case).unwrap();
        }
    }

    #[test]
    #[cfg_attr(debug_assertions, ignore = "includes the 12-vertex case (12! orderings); runs under --release")]
    fn all_known_cases_pass() {
        check_known_graphs().unwrap();
    }

    #[test]
    fn known_cases_have_expected_sizes() {
        let sizes: Vec<usize> = KNOWN_CASES.iter().map(|c| c.graph().vertex_count()).collect();
        assert_eq!(sizes, vec![4, 6, 8, 10, 4, 6, 8, 12]);
    }

    #[test]
    fn check_case_reports_wrong_verdict() {
        let wrong = KnownCase {
            name: "lying case",
            adjacency: &[(1, &[2]), (2, &[1]), (3, &[4]), (4, &[3])],
            expected: true,
        };
        let err = check_case(&wrong).unwrap_err();
        assert!(err.contains("lying case"));
        assert!(err.contains("not found"));
    }

    #[test]
    fn first_known_case_witness_is_identity() {
        let graph = KNOWN_CASES[0].graph();
        assert_eq!(solve(&graph, 4).witness, vec![1, 2, 3, 4]);
    }
}
