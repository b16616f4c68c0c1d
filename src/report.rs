//! Reporter - renders simulation results for people and for tools.
//!
//! Tables are transposed: one row per frame, one column per reference,
//! with the referenced page above each column and its fault mark below.
//!
//! ```text
//! Algorithm: FIFO
//!   1   2   1
//! ╒═══╤═══╤═══╕
//! │ 1 │ 1 │ 1 │
//! ├───┼───┼───┤
//! │ - │ 2 │ 2 │
//! ╘═══╧═══╧═══╛
//!   F   F   /
//! Page faults: 2
//! Efficiency: 33.33%
//! ```

use std::fmt::Write;

use serde::Serialize;

use crate::common::{ReferenceStream, Result};
use crate::sim::{RunResult, SimulationReport};

/// A set of runs over one input, as emitted in JSON mode.
#[derive(Debug, Serialize)]
pub struct RunSet<'a> {
    pub frames: usize,
    pub references: &'a ReferenceStream,
    pub runs: &'a [RunResult],
    pub optimal_faults: usize,
}

/// Render one run as a heading, a box grid and its totals.
pub fn render_run(stream: &ReferenceStream, result: &RunResult) -> String {
    let labels: Vec<String> = stream.iter().map(|p| p.to_string()).collect();
    let marks: Vec<String> = result.marks().iter().map(|m| m.to_string()).collect();
    let rows: Vec<Vec<String>> = (0..result.frames())
        .map(|frame| {
            result
                .traces()
                .iter()
                .map(|trace| trace.slots()[frame].to_string())
                .collect()
        })
        .collect();

    let width = labels
        .iter()
        .chain(marks.iter())
        .chain(rows.iter().flatten())
        .map(|cell| cell.chars().count())
        .max()
        .unwrap_or(1);
    let columns = labels.len();

    let mut out = String::new();
    let _ = writeln!(out, "Algorithm: {}", result.policy());
    out.push_str(&caption_line(&labels, width));
    out.push_str(&border('╒', '═', '╤', '╕', columns, width));
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push_str(&border('├', '─', '┼', '┤', columns, width));
        }
        out.push('│');
        for cell in row {
            let _ = write!(out, " {:^width$} │", cell, width = width);
        }
        out.push('\n');
    }
    out.push_str(&border('╘', '═', '╧', '╛', columns, width));
    out.push_str(&caption_line(&marks, width));
    let _ = writeln!(out, "Page faults: {}", result.faults());
    let _ = writeln!(out, "Efficiency: {:.2}%", result.efficiency());
    out
}

/// Render each run followed by the Optimal baseline and efficiencies.
pub fn render_runs(stream: &ReferenceStream, runs: &[RunResult], optimal_faults: usize) -> String {
    let mut out = String::new();
    for run in runs {
        out.push('\n');
        out.push_str(&render_run(stream, run));
    }
    out.push('\n');
    let _ = writeln!(out, "Total faults (Optimal): {}", optimal_faults);
    for run in runs {
        let _ = writeln!(out, "Efficiency ({}): {:.2}%", run.policy(), run.efficiency());
    }
    out
}

/// Render the FIFO and LRU tables of a report plus its summary.
pub fn render_report(report: &SimulationReport) -> String {
    render_runs(
        report.references(),
        &[report.fifo().clone(), report.lru().clone()],
        report.optimal_faults(),
    )
}

/// Pretty-printed JSON for any result type.
///
/// # Errors
/// - `Error::Config` if serialization fails
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn caption_line(cells: &[String], width: usize) -> String {
    let mut line = String::from(" ");
    for cell in cells {
        let _ = write!(line, " {:^width$}  ", cell, width = width);
    }
    let mut line = line.trim_end().to_string();
    line.push('\n');
    line
}

fn border(left: char, fill: char, join: char, right: char, columns: usize, width: usize) -> String {
    let segment: String = std::iter::repeat(fill).take(width + 2).collect();
    let mut line = String::new();
    line.push(left);
    line.push_str(&vec![segment; columns].join(&join.to_string()));
    line.push(right);
    line.push('\n');
    line
}
