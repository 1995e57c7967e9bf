//! BFS vs DFS comparison command
use std::time::Instant;

use graphwalk_core::bail_usage;
use graphwalk_core::error::Result;
use graphwalk_core::format::join_nodes;
use graphwalk_core::graph::{compare, ComparisonRow, NodeId, PathSummary};
use graphwalk_core::trace_time;
use serde_json::json;

use super::{resolve_graph, Context, GraphSource};
use crate::cli::parse::NodePair;
use crate::cli::GraphArgs;

/// Execute the compare command
pub fn execute(
    ctx: &Context,
    args: &GraphArgs,
    pairs: &[NodePair],
    start: Instant,
) -> Result<()> {
    let (graph, source) = resolve_graph(ctx, args)?;

    let pairs: Vec<(&str, &str)> = if !pairs.is_empty() {
        pairs
            .iter()
            .map(|p| (p.start.as_str(), p.goal.as_str()))
            .collect()
    } else if let GraphSource::Preset(preset) = &source {
        preset.comparison_pairs().to_vec()
    } else {
        bail_usage!("--pair is required when comparing on a graph file");
    };

    let rows = compare(&graph, &pairs)?;
    trace_time!(start, "compare_command", rows = rows.len());

    crate::output_by_format_result!(ctx.format,
        json => output_json(&rows, &source),
        human => { output_human(ctx, &rows) },
        records => { output_records(&rows, &source) }
    )
}

fn path_text(summary: &PathSummary, separator: &str) -> String {
    match &summary.path {
        Some(path) => join_nodes(path, separator),
        None => "No path".to_string(),
    }
}

fn cost_text(summary: &PathSummary) -> String {
    summary
        .cost
        .map(|c| c.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn output_human(ctx: &Context, rows: &[ComparisonRow]) {
    if rows.is_empty() {
        if !ctx.quiet {
            println!("No pairs to compare");
        }
        return;
    }

    let bfs_paths: Vec<String> = rows
        .iter()
        .map(|r| path_text(&r.bfs, &ctx.separator))
        .collect();
    let dfs_paths: Vec<String> = rows
        .iter()
        .map(|r| path_text(&r.dfs, &ctx.separator))
        .collect();
    let bfs_width = bfs_paths.iter().map(String::len).max().unwrap_or(0).max(8);
    let dfs_width = dfs_paths.iter().map(String::len).max().unwrap_or(0).max(8);

    if !ctx.quiet {
        println!(
            "{:<6} {:<6} {:<bw$} {:>5} {:>9}  {:<dw$} {:>5} {:>9}",
            "Start",
            "Goal",
            "BFS path",
            "Cost",
            "Time(us)",
            "DFS path",
            "Cost",
            "Time(us)",
            bw = bfs_width,
            dw = dfs_width,
        );
    }

    for ((row, bfs_path), dfs_path) in rows.iter().zip(&bfs_paths).zip(&dfs_paths) {
        println!(
            "{:<6} {:<6} {:<bw$} {:>5} {:>9}  {:<dw$} {:>5} {:>9}",
            row.start,
            row.goal,
            bfs_path,
            cost_text(&row.bfs),
            row.bfs.micros,
            dfs_path,
            cost_text(&row.dfs),
            row.dfs.micros,
            bw = bfs_width,
            dw = dfs_width,
        );
    }
}

fn output_json(rows: &[ComparisonRow], source: &GraphSource) -> Result<()> {
    let output = json!({
        "graph": source.label(),
        "rows": rows,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn records_path(path: Option<&[NodeId]>) -> String {
    path.map(|p| join_nodes(p, ","))
        .unwrap_or_else(|| "-".to_string())
}

fn output_records(rows: &[ComparisonRow], source: &GraphSource) {
    println!(
        "H graphwalk=1 records=1 mode=compare graph=\"{}\" rows={}",
        graphwalk_core::format::escape_quotes(&source.label()),
        rows.len()
    );
    for row in rows {
        println!(
            "R {} {} bfs_cost={} bfs_path={} dfs_cost={} dfs_path={}",
            row.start,
            row.goal,
            cost_text(&row.bfs),
            records_path(row.bfs.path.as_deref()),
            cost_text(&row.dfs),
            records_path(row.dfs.path.as_deref()),
        );
    }
}
