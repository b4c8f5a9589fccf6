use crate::usecase::analyze::AnalysisReport;
use anyhow::Result;
use std::fmt::Write as _;

/// Renders the labelled text layout: DFS discovery and path, the closure's
/// new edges, and the cycle verdict.
pub fn render_text(report: &AnalysisReport) -> String {
    let mut out = String::new();

    match (report.discovered.first(), report.discovered.last()) {
        (Some(first), Some(last)) if !report.path.is_empty() => {
            let _ = write!(out, "\n[DFS Discovered Vertices: {first}, {last}] ");
            out.push_str(&join_vertices(&report.discovered, ", "));

            let (head, tail) = (report.path[0], report.path[report.path.len() - 1]);
            let _ = write!(out, "\n\n[DFS Path: {head}, {tail}] ");
            out.push_str(&join_vertices(&report.path, " -> "));
            out.push('\n');
        }
        _ => out.push_str("\n[DFS Not Found]\n"),
    }

    for (i, (row, col)) in report.new_edges.iter().enumerate() {
        if i == 0 {
            let _ = writeln!(out, "\n[TC: New Edges] {row} \t {col}");
        } else {
            let _ = writeln!(out, "{row:>17} \t {col}");
        }
    }

    if report.has_cycle {
        out.push_str("\n[Cycle]: Cycle detected\n");
    } else {
        out.push_str("\n[Cycle]: No Cycle detected\n");
    }

    out
}

pub fn render_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn join_vertices(ids: &[usize], sep: &str) -> String {
    ids.iter()
        .map(|id| format!("Vertex {id}"))
        .collect::<Vec<_>>()
        .join(sep)
}
