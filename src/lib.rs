//! # Hamiltonian Path Search
//!
//! An exhaustive, deliberately unoptimised Hamiltonian path solver, meant as a benchmarking
//! subject: feed it graphs of increasing size and watch solve time grow factorially.
//!
//! This crate provides:
//! - An insertion-ordered adjacency-list [`graph::Graph`].
//! - A lenient parser for clause-structured graph files (`c` comments split graphs,
//!   `p` headers are ignored, each clause row connects all its literals pairwise).
//! - A lazy permutation enumerator and a path validator.
//! - A solver that tries every ordering and stops at the first valid one.
//! - A benchmark runner with an exponential growth fit.
//!
//! ## Quick Start
//!
//! ```
//! use hampath::graph::Graph;
//! use hampath::solver::solve;
//!
//! let square = Graph::cycle(4);
//! let solution = solve(&square, 4);
//! assert!(solution.found);
//! assert_eq!(solution.witness, vec![1, 2, 3, 4]);
//!
//! let split = Graph::disjoint_edges(2);
//! assert!(!solve(&split, 4).found);
//! ```
//!
//! ## Reading Graph Files
//!
//! ```
//! use hampath::builder::build_graphs;
//! use hampath::solver::solve;
//!
//! let rows = ["c first graph", "p cnf 3 1", "1,-2,3,0", "c second graph", "4,5,0"];
//! let segments = build_graphs(rows);
//! assert_eq!(segments.len(), 2);
//!
//! let first = &segments[0];
//! assert_eq!(first.vertex_count, 3);
//! assert!(solve(&first.graph, first.vertex_count).found);
//! ```
//!
//! ## Modules
//!
//! - [`graph`]: Graph type and simple generators.
//! - [`builder`]: Clause-row parsing into graph segments.
//! - [`permutation`]: Lazy lexicographic permutations.
//! - [`path`]: Hamiltonian path validity.
//! - [`solver`]: Exhaustive search.
//! - [`bench`]: Batch solving, CSV/JSON output, growth fit.
//! - [`validate`]: Known-graph regression checks.
//!
//! ## Performance Notes
//!
//! - The search is `O(n! * n)` with no pruning. 12 vertices means up to 479,001,600 candidates.
//! - Permutations are produced one at a time into a reused buffer; memory stays `O(n)`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]

pub mod bench;
pub mod builder;
pub mod graph;
pub mod path;
pub mod permutation;
pub mod solver;
pub mod validate;

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::bench::{run_benchmark, BenchConfig, BenchRecord, ExponentialFit};
    pub use crate::builder::{build_graphs, read_graphs_from_path, Segment};
    pub use crate::graph::{Graph, VertexId};
    pub use crate::path::is_hamiltonian_path;
    pub use crate::solver::{solve, Solution};
    pub use crate::validate::check_known_graphs;
}
