//! Builds graphs from clause-structured rows.
//!
//! Input is row oriented. Each row is one of:
//! - a comment (first comma field starts with `c`) or an empty line, which closes the
//!   current graph segment;
//! - a problem header (first comma field starts with `p`), which is ignored;
//! - a clause: signed integers separated by commas and/or whitespace, with `0` as a
//!   terminator. Every pair of literals in a clause becomes an undirected edge between
//!   their absolute values. Both endpoints become vertices even when they share a label.
//!
//! Malformed clause rows are skipped and parsing carries on.

use crate::graph::{Graph, VertexId};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Errors surfaced while reading a row source. Row-level problems never appear here.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The source could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

// ============================================================================
// Segment
// ============================================================================

/// One graph read from the input, paired with its vertex count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Segment {
    /// The graph built from the segment's clauses.
    pub graph: Graph,
    /// Largest absolute literal seen in the segment.
    ///
    /// This is a label, not a key count: sparse labels such as `{1, 2, 100}` give `100`.
    pub vertex_count: usize,
}

// ============================================================================
// Row classification
// ============================================================================

/// How a single input row is interpreted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Row {
    /// Comment or empty line: closes the current segment.
    Delimiter,
    /// Problem header, ignored.
    Header,
    /// Non-zero literals of a clause, in input order.
    Clause(Vec<i64>),
    /// A row that contributes nothing.
    Skipped(SkipReason),
}

/// Why a row was skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// A token was not a signed integer.
    InvalidToken(String),
    /// No non-zero literals remained after dropping terminators.
    EmptyClause,
}

/// Classifies one row of input text.
///
/// Comment and header markers are matched against the raw first comma field, untrimmed:
/// `" c"` and `",c"` are malformed clauses, not comments. Only a line with no characters
/// at all counts as blank.
pub fn classify_row(line: &str) -> Row {
    if line.is_empty() {
        return Row::Delimiter;
    }
    let first_field = line.split(',').next().unwrap_or_default();
    if first_field.starts_with('c') {
        return Row::Delimiter;
    }
    if first_field.starts_with('p') {
        return Row::Header;
    }

    let mut literals = Vec::new();
    for token in tokenize(line) {
        match token.parse::<i64>() {
            Ok(0) => {}
            Ok(lit) => literals.push(lit),
            Err(_) => return Row::Skipped(SkipReason::InvalidToken(token.to_owned())),
        }
    }
    if literals.is_empty() {
        Row::Skipped(SkipReason::EmptyClause)
    } else {
        Row::Clause(literals)
    }
}

/// Splits a row into non-empty tokens on commas and whitespace.
fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
}

// ============================================================================
// GraphBuilder
// ============================================================================

/// Accumulator folded over input rows.
///
/// Feed rows with [`GraphBuilder::push_row`] and collect with [`GraphBuilder::finish`].
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    current: Segment,
    done: Vec<Segment>,
    rows_seen: usize,
    rows_skipped: usize,
}

impl GraphBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one row of text.
    pub fn push_row(&mut self, line: &str) {
        self.rows_seen += 1;
        match classify_row(line) {
            Row::Delimiter => self.flush(),
            Row::Header => {}
            Row::Clause(literals) => self.add_clause(&literals),
            Row::Skipped(reason) => {
                self.rows_skipped += 1;
                log::debug!("row {}: skipped ({reason:?})", self.rows_seen);
            }
        }
    }

    /// Adds a clause's edges to the current segment.
    ///
    /// Every pair of literals at distinct positions connects `|a|` and `|b|`, and both
    /// become vertices. A pair like `3, -3` adds vertex `3` with no self loop; loops never
    /// change a path verdict since candidates do not repeat vertices.
    /// Literals are expected to be non-zero.
    pub fn add_clause(&mut self, literals: &[i64]) {
        let seg = &mut self.current;
        if let Some(max) = literals.iter().map(|l| label(*l)).max() {
            seg.vertex_count = seg.vertex_count.max(max as usize);
        }
        for (i, &a) in literals.iter().enumerate() {
            for &b in &literals[i + 1..] {
                let (u, v) = (label(a), label(b));
                seg.graph.add_vertex(u);
                seg.graph.add_vertex(v);
                seg.graph.add_edge(u, v);
            }
        }
    }

    /// Number of rows discarded so far as malformed or empty.
    pub fn rows_skipped(&self) -> usize {
        self.rows_skipped
    }

    /// Closes the input, returning every non-empty segment in order.
    pub fn finish(mut self) -> Vec<Segment> {
        self.flush();
        log::debug!(
            "built {} graph(s) from {} row(s), {} skipped",
            self.done.len(),
            self.rows_seen,
            self.rows_skipped
        );
        self.done
    }

    fn flush(&mut self) {
        let seg = std::mem::take(&mut self.current);
        if !seg.graph.is_empty() {
            log::debug!(
                "segment {}: {} keys, vertex_count={}, {} edges",
                self.done.len(),
                seg.graph.vertex_count(),
                seg.vertex_count,
                seg.graph.edge_count()
            );
            self.done.push(seg);
        }
    }
}

#[inline]
fn label(literal: i64) -> VertexId {
    literal.unsigned_abs()
}

// ============================================================================
// Public API
// ============================================================================

/// Builds all graph segments from an iterator of rows.
pub fn build_graphs<I, S>(rows: I) -> Vec<Segment>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = GraphBuilder::new();
    for (i, row) in rows.into_iter().enumerate() {
        let row = row.as_ref();
        builder.push_row(if i == 0 { strip_bom(row) } else { row });
    }
    builder.finish()
}

/// Reads all graph segments from a buffered reader.
///
/// # Errors
/// Returns an error if reading a line fails.
pub fn read_graphs<R: BufRead>(reader: R) -> Result<Vec<Segment>, BuildError> {
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    Ok(build_graphs(lines))
}

/// Reads all graph segments from a file.
///
/// # Errors
/// Returns an error if the file cannot be opened or read.
pub fn read_graphs_from_path(path: impl AsRef<Path>) -> Result<Vec<Segment>, BuildError> {
    let file = File::open(path)?;
    read_graphs(BufReader::new(file))
}

fn strip_bom(line: &str) -> &str {
    line.strip_prefix('\u{feff}').unwrap_or(line)
}

// ============================================================================
// Tests
// ============================================================================
