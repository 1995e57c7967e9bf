//! BFS / DFS traversal commands
pub mod human;
pub mod json;
pub mod records;

use std::time::Instant;

use graphwalk_core::error::Result;
use graphwalk_core::graph::{run, Algorithm, TraversalResult};
use graphwalk_core::trace_time;

use super::{resolve_graph, Context};
use crate::cli::TraverseArgs;

/// Execute `bfs`, `dfs` (one algorithm) or `run` (both)
pub fn execute(
    ctx: &Context,
    args: &TraverseArgs,
    algorithm: Option<Algorithm>,
    start: Instant,
) -> Result<()> {
    let (graph, source) = resolve_graph(ctx, &args.graph)?;
    trace_time!(start, "load_graph");

    let algorithms: &[Algorithm] = match &algorithm {
        Some(algorithm) => std::slice::from_ref(algorithm),
        None => &[Algorithm::Bfs, Algorithm::Dfs],
    };

    let results = algorithms
        .iter()
        .map(|algorithm| run(&graph, *algorithm, &args.start, args.goal.as_deref()))
        .collect::<Result<Vec<TraversalResult>>>()?;
    trace_time!(start, "traverse", runs = results.len());

    crate::output_by_format_result!(ctx.format,
        json => json::output_json(&results, &source, args.trace),
        human => { human::output_human(ctx, &results, &source, args.trace) },
        records => { records::output_records(&results, &source, args.trace) }
    )
}
