//! Side-by-side BFS/DFS runs over start/goal pairs

use crate::error::Result;
use crate::graph::types::{Graph, NodeId, TraversalResult};
use crate::graph::{run_bfs, run_dfs};
use crate::trace_time;
use serde::Serialize;
use std::time::Instant;

/// One algorithm's outcome for a start/goal pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathSummary {
    pub path: Option<Vec<NodeId>>,
    pub cost: Option<usize>,
    pub expanded: usize,
    pub micros: u128,
}

impl PathSummary {
    fn from_result(result: &TraversalResult, started: Instant) -> Self {
        Self {
            path: result.path.clone(),
            cost: result.path_cost(),
            expanded: result.order.len(),
            micros: started.elapsed().as_micros(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub start: NodeId,
    pub goal: NodeId,
    pub bfs: PathSummary,
    pub dfs: PathSummary,
}

/// Run BFS and DFS for every `(start, goal)` pair.
///
/// Fails on the first pair naming a node the graph does not contain.
pub fn compare(graph: &Graph, pairs: &[(&str, &str)]) -> Result<Vec<ComparisonRow>> {
    let started = Instant::now();
    let mut rows = Vec::with_capacity(pairs.len());

    for (start, goal) in pairs {
        let bfs_started = Instant::now();
        let bfs = run_bfs(graph, start, Some(*goal))?;
        let bfs = PathSummary::from_result(&bfs, bfs_started);

        let dfs_started = Instant::now();
        let dfs = run_dfs(graph, start, Some(*goal))?;
        let dfs = PathSummary::from_result(&dfs, dfs_started);

        rows.push(ComparisonRow {
            start: NodeId::from(*start),
            goal: NodeId::from(*goal),
            bfs,
            dfs,
        });
    }

    trace_time!(started, "compare", pairs = pairs.len());
    Ok(rows)
}
