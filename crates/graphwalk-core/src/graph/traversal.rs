use crate::error::Result;
use crate::graph::types::{Algorithm, Graph, TraversalResult};
use crate::graph::{run_bfs, run_dfs};

/// Run the selected algorithm
pub fn run(
    graph: &Graph,
    algorithm: Algorithm,
    start: &str,
    goal: Option<&str>,
) -> Result<TraversalResult> {
    match algorithm {
        Algorithm::Bfs => run_bfs(graph, start, goal),
        Algorithm::Dfs => run_dfs(graph, start, goal),
    }
}
