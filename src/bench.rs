//! Benchmark runner: solves a batch of graph segments and fits the growth curve.

use crate::builder::Segment;
use crate::graph::VertexId;
use crate::path::check_path;
use crate::solver::solve;
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};

// ============================================================================
// Configuration
// ============================================================================

/// Benchmark configuration parameters.
#[derive(Clone, Debug)]
pub struct BenchConfig {
    /// Solve segments on the rayon pool instead of one after another.
    /// Each worker owns its segment's graph; results keep input order.
    pub parallel: bool,
    /// Segments with more keys than this are recorded as skipped rather than solved.
    pub max_vertices: Option<usize>,
    /// Re-check every witness with [`check_path`] and log a warning on failure.
    pub verify_witness: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            max_vertices: None,
            verify_witness: true,
        }
    }
}

// ============================================================================
// Records
// ============================================================================

/// Result of solving one segment.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BenchRecord {
    /// Position of the segment in the input.
    pub index: usize,
    /// Vertex count the solver was given.
    pub vertex_count: usize,
    /// Number of keys in the graph.
    pub key_count: usize,
    /// Whether a path was found.
    pub found: bool,
    /// The witness, empty when not found.
    pub witness: Vec<VertexId>,
    /// Solve time in microseconds.
    pub elapsed_micros: f64,
    /// Orderings checked before stopping.
    pub candidates_checked: usize,
    /// `true` if the segment exceeded [`BenchConfig::max_vertices`] and was not solved.
    pub skipped: bool,
}

// ============================================================================
// Public API
// ============================================================================

/// Solves every segment and returns one record per segment, in input order.
pub fn run_benchmark(segments: &[Segment], cfg: &BenchConfig) -> Vec<BenchRecord> {
    log::info!(
        "benchmark: {} segment(s), parallel={}, max_vertices={:?}",
        segments.len(),
        cfg.parallel,
        cfg.max_vertices
    );
    if cfg.parallel {
        segments
            .par_iter()
            .enumerate()
            .map(|(index, seg)| run_one(index, seg.clone(), cfg))
            .collect()
    } else {
        segments
            .iter()
            .enumerate()
            .map(|(index, seg)| run_one(index, seg.clone(), cfg))
            .collect()
    }
}

fn run_one(index: usize, seg: Segment, cfg: &BenchConfig) -> BenchRecord {
    let key_count = seg.graph.vertex_count();
    if cfg.max_vertices.is_some_and(|max| key_count > max) {
        log::warn!("[Segment {index}] skipped: {key_count} keys exceeds the limit");
        return BenchRecord {
            index,
            vertex_count: seg.vertex_count,
            key_count,
            found: false,
            witness: Vec::new(),
            elapsed_micros: 0.0,
            candidates_checked: 0,
            skipped: true,
        };
    }
    if seg.vertex_count != key_count {
        log::warn!(
            "[Segment {index}] vertex_count={} but graph has {key_count} keys; no path can match",
            seg.vertex_count
        );
    }

    let solution = solve(&seg.graph, seg.vertex_count);
    if cfg.verify_witness && solution.found {
        if let Err(e) = check_path(&seg.graph, &solution.witness, seg.vertex_count) {
            log::warn!("[Segment {index}] witness failed re-check: {e}");
        }
    }
    log::info!(
        "[Segment {index}] n={} found={} in {:.2} us",
        seg.vertex_count,
        solution.found,
        solution.elapsed_micros()
    );

    BenchRecord {
        index,
        vertex_count: seg.vertex_count,
        key_count,
        found: solution.found,
        elapsed_micros: solution.elapsed_micros(),
        candidates_checked: solution.candidates_checked,
        witness: solution.witness,
        skipped: false,
    }
}

/// Writes records as CSV with a header row.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_csv<W: Write>(records: &[BenchRecord], mut w: W) -> io::Result<()> {
    writeln!(w, "index,vertex_count,found,elapsed_us,candidates")?;
    for r in records.iter().filter(|r| !r.skipped) {
        writeln!(
            w,
            "{},{},{},{:.3},{}",
            r.index, r.vertex_count, r.found, r.elapsed_micros, r.candidates_checked
        )?;
    }
    Ok(())
}

/// Writes records as JSON lines.
///
/// # Errors
/// Returns an error if serialisation or writing fails.
pub fn write_json_lines<W: Write>(records: &[BenchRecord], mut w: W) -> io::Result<()> {
    for r in records {
        serde_json::to_writer(&mut w, r)?;
        writeln!(w)?;
    }
    Ok(())
}

// ============================================================================
// Exponential fit
// ============================================================================

/// Least-squares fit of `ln(time) = a * size + b`, i.e. `time = exp(a * size + b)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ExponentialFit {
    /// Growth rate per vertex.
    pub a: f64,
    /// Log-scale intercept.
    pub b: f64,
}

impl ExponentialFit {
    /// Minimum number of points before a fit is attempted.
    pub const MIN_POINTS: usize = 3;

    /// Fits `(size, time)` points. Points with non-positive time are ignored.
    ///
    /// Returns `None` with fewer than [`Self::MIN_POINTS`] usable points, or when every
    /// point has the same size.
    pub fn fit(points: &[(f64, f64)]) -> Option<Self> {
        let usable: Vec<(f64, f64)> = points
            .iter()
            .filter(|(_, t)| *t > 0.0 && t.is_finite())
            .map(|&(x, t)| (x, t.ln()))
            .collect();
        if usable.len() < Self::MIN_POINTS {
            return None;
        }

        let n = usable.len() as f64;
        let mean_x = usable.iter().map(|p| p.0).sum::<f64>() / n;
        let mean_y = usable.iter().map(|p| p.1).sum::<f64>() / n;
        let sxx: f64 = usable.iter().map(|p| (p.0 - mean_x).powi(2)).sum();
        if sxx == 0.0 {
            return None;
        }
        let sxy: f64 = usable.iter().map(|p| (p.0 - mean_x) * (p.1 - mean_y)).sum();

        let a = sxy / sxx;
        Some(Self { a, b: mean_y - a * mean_x })
    }

    /// Fits solved (non-skipped) records by vertex count and elapsed time.
    pub fn from_records(records: &[BenchRecord]) -> Option<Self> {
        let points: Vec<(f64, f64)> = records
            .iter()
            .filter(|r| !r.skipped)
            .map(|r| (r.vertex_count as f64, r.elapsed_micros))
            .collect();
        Self::fit(&points)
    }

    /// Predicted time for a graph of `size` vertices.
    pub fn predict(&self, size: f64) -> f64 {
        (self.a * size + self.b).exp()
    }
}

impl fmt::Display for ExponentialFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y = exp({:.2e} * x + {:.2e})", self.a, self.b)
    }
}

// ============================================================================
// Tests
// ============================================================================
